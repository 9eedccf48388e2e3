use crate::parsing::host::BlockHost;
use crate::parsing::span::Span;

use super::classify::{Fold, LineClass, MarkerLine, classify};
use super::icons::default_title;

/// Host facts that veto a match regardless of the text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchContext {
    /// The text being parsed is the content of a plain blockquote.
    pub inside_blockquote: bool,
    /// One more level of nesting would hit the host's depth cap.
    pub near_recursion_limit: bool,
}

impl MatchContext {
    pub fn from_host(host: &dyn BlockHost) -> Self {
        Self {
            inside_blockquote: host.is_inside_blockquote(),
            near_recursion_limit: host.is_near_recursion_limit(),
        }
    }
}

/// The first callout found in a block, split into its parts.
///
/// All slices borrow from the block, and
/// `leading + matched + trailing` is exactly the original block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalloutMatch<'a> {
    /// Lines before the marker line. May be empty.
    pub leading: &'a str,
    /// Marker line plus body lines, terminators included.
    pub matched: &'a str,
    /// Everything after the last body line. May be empty.
    pub trailing: &'a str,
    /// Byte range of `matched` within the block.
    pub span: Span,
    /// Kind as written, case preserved.
    pub kind: &'a str,
    pub fold: Fold,
    /// Trimmed title text. May be empty.
    pub title: &'a str,
    /// Raw body lines, each still carrying its `>` marker.
    pub body: &'a str,
}

impl CalloutMatch<'_> {
    /// The kind lowercased, as used for the `data-callout` attribute and icon lookup.
    pub fn kind_key(&self) -> String {
        self.kind.to_lowercase()
    }

    /// The explicit title, or the title-cased kind when there is none.
    pub fn display_title(&self) -> String {
        if self.title.is_empty() {
            default_title(self.kind)
        } else {
            self.title.to_string()
        }
    }
}

enum Scan<'a> {
    SeekingMarker,
    InBody {
        start: usize,
        body_start: usize,
        end: usize,
        marker: MarkerLine<'a>,
    },
}

/// Finds the first callout in `block`.
///
/// Scans line by line: everything before the first marker line is leading
/// text; the marker line and the quoted lines directly after it are the
/// callout; the first unquoted or blank line ends it. Returns `None` when no
/// marker line exists or when `ctx` vetoes matching.
pub fn try_match(block: &str, ctx: MatchContext) -> Option<CalloutMatch<'_>> {
    if ctx.inside_blockquote {
        return None;
    }
    if ctx.near_recursion_limit {
        log::debug!("callout matching suppressed near the nesting limit");
        return None;
    }

    let mut scan = Scan::SeekingMarker;
    let mut offset = 0;
    for line in block.split_inclusive('\n') {
        let line_end = offset + line.len();
        let class = classify(line);
        match scan {
            Scan::SeekingMarker => {
                if let LineClass::Marker(marker) = class {
                    scan = Scan::InBody {
                        start: offset,
                        body_start: line_end,
                        end: line_end,
                        marker,
                    };
                }
            }
            Scan::InBody { ref mut end, .. } => match class {
                LineClass::Marker(_) | LineClass::Quote => *end = line_end,
                LineClass::Blank | LineClass::Other => break,
            },
        }
        offset = line_end;
    }

    let Scan::InBody {
        start,
        body_start,
        end,
        marker,
    } = scan
    else {
        return None;
    };

    Some(CalloutMatch {
        leading: &block[..start],
        matched: &block[start..end],
        trailing: &block[end..],
        span: Span { start, end },
        kind: marker.kind,
        fold: marker.fold,
        title: marker.title,
        body: &block[body_start..end],
    })
}

use std::collections::VecDeque;

use crate::error::ParseError;
use crate::parsing::blocks::processor::BlockProcessor;
use crate::parsing::host::{BlockHost, ParserState, StateGuard};
use crate::parsing::tree::Element;

/// Blockquote block type with owned delimiter constant.
///
/// All blockquote-related syntax knowledge lives here, including the
/// de-quote transform shared with callout bodies.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Spaces allowed before the prefix.
    pub const MAX_INDENT: usize = 3;

    /// Returns the text after a line's `>` marker, or `None` if the line is not quoted.
    ///
    /// Accepts up to [`Self::MAX_INDENT`] leading spaces: `> a`, `   >a`.
    pub fn strip_marker(line: &str) -> Option<&str> {
        let indent = line.len() - line.trim_start_matches(' ').len();
        if indent > Self::MAX_INDENT {
            return None;
        }
        line[indent..].strip_prefix(Self::PREFIX)
    }

    /// Strips a line's marker and at most one following space.
    ///
    /// Lines without a marker are returned unchanged (lazy continuation);
    /// a lone `>` becomes an empty line.
    pub fn dequote(line: &str) -> &str {
        if line.trim() == ">" {
            return "";
        }
        match Self::strip_marker(line) {
            Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
            None => line,
        }
    }

    /// De-quotes every line of `text`, keeping blank lines and line count.
    pub fn dequote_lines(text: &str) -> String {
        text.split('\n')
            .map(Self::dequote)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Byte offset of the first quoted line in `block`, if any.
    pub fn first_quoted_line(block: &str) -> Option<usize> {
        let mut offset = 0;
        for line in block.split_inclusive('\n') {
            if Self::strip_marker(line).is_some() {
                return Some(offset);
            }
            offset += line.len();
        }
        None
    }
}

/// Renders `>` blocks as `<blockquote>` with recursively parsed content.
pub struct BlockQuoteProcessor;

impl BlockQuoteProcessor {
    pub const NAME: &'static str = "quote";
    pub const PRIORITY: f32 = 20.0;
}

impl BlockProcessor for BlockQuoteProcessor {
    fn test(&self, host: &dyn BlockHost, _parent: &Element, block: &str) -> bool {
        BlockQuote::first_quoted_line(block).is_some() && !host.is_near_recursion_limit()
    }

    fn run(
        &self,
        host: &mut dyn BlockHost,
        parent: &mut Element,
        blocks: &mut VecDeque<String>,
    ) -> Result<bool, ParseError> {
        let Some(block) = blocks.pop_front() else {
            return Ok(false);
        };
        let Some(start) = BlockQuote::first_quoted_line(&block) else {
            blocks.push_front(block);
            return Ok(false);
        };

        let (before, quoted) = block.split_at(start);
        if !before.trim().is_empty() {
            host.parse_blocks(parent, VecDeque::from([before.to_string()]))?;
        }

        let text = BlockQuote::dequote_lines(quoted);
        let quote = parent.reuse_last_or_append("blockquote");
        let mut host = StateGuard::enter(host, ParserState::BlockQuote);
        host.parse_chunk(quote, &text)?;
        Ok(true)
    }
}

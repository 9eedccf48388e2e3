use crate::parsing::blocks::kinds::BlockQuote;

/// Presentation hint carried by the character after the closing bracket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Fold {
    /// No marker: always expanded, not collapsible.
    #[default]
    Static,
    /// `+`: collapsible, expanded by default.
    Expanded,
    /// `-`: collapsible, collapsed by default.
    Collapsed,
}

impl Fold {
    pub fn from_marker(c: char) -> Option<Self> {
        match c {
            '+' => Some(Fold::Expanded),
            '-' => Some(Fold::Collapsed),
            _ => None,
        }
    }

    pub fn marker(self) -> Option<char> {
        match self {
            Fold::Static => None,
            Fold::Expanded => Some('+'),
            Fold::Collapsed => Some('-'),
        }
    }
}

/// The parts of a `> [!kind]± title` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerLine<'a> {
    /// Kind as written, case preserved.
    pub kind: &'a str,
    pub fold: Fold,
    /// Rest of the line, trimmed. May be empty.
    pub title: &'a str,
}

/// Local facts about a single line, independent of its neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// A quoted line opening a callout.
    Marker(MarkerLine<'a>),
    /// Any other quoted line.
    Quote,
    Blank,
    Other,
}

/// Classifies one line (without its line terminator).
pub fn classify(line: &str) -> LineClass<'_> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return LineClass::Blank;
    }
    match BlockQuote::strip_marker(line) {
        Some(rest) => parse_marker(rest).map_or(LineClass::Quote, LineClass::Marker),
        None => LineClass::Other,
    }
}

fn is_kind_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Parses `[!kind]±  title` after the `>` of a quoted line.
fn parse_marker(rest: &str) -> Option<MarkerLine<'_>> {
    let rest = rest.trim_start_matches(' ').strip_prefix("[!")?;

    let kind_len = rest.find(|c: char| !is_kind_char(c)).unwrap_or(rest.len());
    if kind_len == 0 {
        return None;
    }
    let (kind, rest) = rest.split_at(kind_len);
    let rest = rest.strip_prefix(']')?;

    let (fold, rest) = match rest.chars().next().and_then(Fold::from_marker) {
        Some(fold) => (fold, &rest[1..]),
        None => (Fold::Static, rest),
    };

    Some(MarkerLine {
        kind,
        fold,
        title: rest.trim(),
    })
}

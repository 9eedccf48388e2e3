/// A byte range `[start, end)` into a block of text.
///
/// Matches report spans rather than only copied text, so the consumed part
/// of a block can always be sliced back out of the original.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Slices `text` with this span.
    #[must_use]
    pub fn slice(self, text: &str) -> &str {
        &text[self.start..self.end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_and_empty() {
        let sp = Span { start: 2, end: 5 };
        assert_eq!(sp.len(), 3);
        assert!(!sp.is_empty());
        assert!(Span { start: 5, end: 2 }.is_empty());
    }

    #[test]
    fn slice_extracts_range() {
        let sp = Span { start: 6, end: 11 };
        assert_eq!(sp.slice("hello world"), "world");
    }
}

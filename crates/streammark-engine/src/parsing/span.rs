/// A byte range `[start, end)` into the input buffer.
///
/// Scanned lines keep their span so that any line handed to the classifier
/// can be sliced back to the exact source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    /// Slices `text` with this span.
    ///
    /// Returns an empty string if the span does not fall on valid
    /// boundaries of `text`.
    pub fn slice(self, text: &str) -> &str {
        text.get(self.start..self.end).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverted_span_slices_to_empty() {
        let sp = Span { start: 9, end: 2 };
        assert_eq!(sp.slice("hello world"), "");
    }

    #[test]
    fn slice_returns_source_text() {
        let sp = Span { start: 6, end: 11 };
        assert_eq!(sp.slice("hello world"), "world");
    }

    #[test]
    fn slice_out_of_bounds_is_empty() {
        let sp = Span { start: 4, end: 40 };
        assert_eq!(sp.slice("short"), "");
    }
}

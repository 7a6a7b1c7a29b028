/// A character range `[start, end)` into the parsed source.
///
/// Offsets count Unicode scalar values, not bytes, so a span can be applied to
/// any [`Source`](crate::source::Source) built from the same text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    /// Inclusive start offset.
    pub start: usize,
    /// Exclusive end offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in characters. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// The span running from the start of `self` to the end of `other`.
    #[must_use]
    pub fn cover(self, other: Span) -> Span {
        Span::new(self.start, other.end)
    }
}

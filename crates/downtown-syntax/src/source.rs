//! Character-indexed view over the parsed text.
//!
//! Every position in this crate is a character offset: one offset is one
//! Unicode scalar value. [`Source`] precomputes the byte boundary of each
//! character so that slicing by a [`Span`] stays O(1) and never splits a
//! multi-byte character.

use crate::span::Span;

/// The input text plus a char-offset index into it.
#[derive(Debug, Clone)]
pub struct Source<'a> {
    text: &'a str,
    chars: Vec<char>,
    /// Byte offset of every character, followed by `text.len()`.
    boundaries: Vec<usize>,
}

impl<'a> Source<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut chars = Vec::with_capacity(text.len());
        let mut boundaries = Vec::with_capacity(text.len() + 1);
        for (byte, ch) in text.char_indices() {
            chars.push(ch);
            boundaries.push(byte);
        }
        boundaries.push(text.len());

        Self {
            text,
            chars,
            boundaries,
        }
    }

    /// The original text.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Character at `offset`, or `None` past the end.
    pub fn char_at(&self, offset: usize) -> Option<char> {
        self.chars.get(offset).copied()
    }

    /// True at offset 0 and directly after a `\n`.
    pub fn is_start_of_line(&self, offset: usize) -> bool {
        offset == 0 || self.char_at(offset - 1) == Some('\n')
    }

    /// The text covered by `span`. Out of range bounds are clamped to the end
    /// of the input and an inverted span yields `""`.
    pub fn slice(&self, span: Span) -> &'a str {
        let start = self.byte_offset(span.start);
        let end = self.byte_offset(span.end);
        self.text.get(start..end).unwrap_or("")
    }

    fn byte_offset(&self, offset: usize) -> usize {
        self.boundaries
            .get(offset)
            .copied()
            .unwrap_or(self.text.len())
    }
}

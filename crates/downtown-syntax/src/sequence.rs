//! # Delimiter Sequences
//!
//! A [`DelimiterSequence`] is the semantic identity of a confirmed delimiter
//! run: what a `**` or `###` *means* once the lexer has matched it. Two lookup
//! tables live here and drive every emphasis decision the reducer makes:
//!
//! - [`DelimiterSequence::emphasis_kind`] - can this opener be closed by that
//!   closer, and if so what emphasis does the pair produce?
//! - [`DelimiterSequence::breakdown`] - after a combined `***`/`___` run has
//!   been partially consumed, which half is still open?
//!
//! ## Combined delimiters
//!
//! Only the three-character runs decompose. Closing `***` with `**` leaves a
//! `*` open, closing it with `*` leaves `**` open:
//!
//! ```text
//! ***a** b*   →   *( **(a) b )*
//! ***a* b**   →   **( *(a) b )**
//! ```
//!
//! The `*` and `_` families are kept apart: no `*` sequence ever pairs with a
//! `_` sequence.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::pattern::{Pattern, PatternKind};
use crate::syntax::EmphasisKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DelimiterSequence {
    /// `*`
    Italic,
    /// `_`
    ItalicAlt,
    /// `**`
    Bold,
    /// `__`
    BoldAlt,
    /// `***`
    BoldAndItalic,
    /// `___`
    BoldAndItalicAlt,
    /// `~~`
    Strikethrough,
    /// `` ` ``
    CodeSpan,
    /// ```` ``` ````
    CodeBlock,
    /// `#` repeated `level` times at the start of a line
    Heading { level: usize },
}

impl DelimiterSequence {
    /// The catalog pattern this sequence is matched by.
    pub fn pattern(self) -> Pattern {
        match self {
            Self::Italic => Pattern::Italic,
            Self::ItalicAlt => Pattern::ItalicAlt,
            Self::Bold => Pattern::Bold,
            Self::BoldAlt => Pattern::BoldAlt,
            Self::BoldAndItalic => Pattern::BoldAndItalic,
            Self::BoldAndItalicAlt => Pattern::BoldAndItalicAlt,
            Self::Strikethrough => Pattern::Strikethrough,
            Self::CodeSpan => Pattern::CodeSpan,
            Self::CodeBlock => Pattern::CodeBlock,
            Self::Heading { .. } => Pattern::Heading,
        }
    }

    /// Width of the delimiter in characters.
    pub fn width(self) -> usize {
        match (self, self.pattern().kind()) {
            (Self::Heading { level }, _) => level,
            (_, PatternKind::Fixed { len, .. }) => len,
            (_, PatternKind::Repeating { .. }) => 1,
        }
    }

    /// The delimiter exactly as it appears in source, e.g. `**` or `###`.
    pub fn literal(self) -> Cow<'static, str> {
        match self {
            Self::Italic => "*".into(),
            Self::ItalicAlt => "_".into(),
            Self::Bold => "**".into(),
            Self::BoldAlt => "__".into(),
            Self::BoldAndItalic => "***".into(),
            Self::BoldAndItalicAlt => "___".into(),
            Self::Strikethrough => "~~".into(),
            Self::CodeSpan => "`".into(),
            Self::CodeBlock => "```".into(),
            Self::Heading { level } => "#".repeat(level).into(),
        }
    }

    /// True for the code delimiters whose interior is never interpreted.
    pub fn is_verbatim(self) -> bool {
        matches!(self, Self::CodeSpan | Self::CodeBlock)
    }

    /// The sequence left open after `self` has been closed using `closer`.
    ///
    /// Only combined runs (`***`, `___`) leave a residual.
    pub fn breakdown(self, closer: DelimiterSequence) -> Option<DelimiterSequence> {
        match (self, closer) {
            (Self::BoldAndItalic, Self::BoldAndItalic) => Some(Self::Bold),
            (Self::BoldAndItalic, Self::Bold) => Some(Self::Italic),
            (Self::BoldAndItalic, Self::Italic) => Some(Self::Bold),
            (Self::BoldAndItalicAlt, Self::BoldAndItalicAlt) => Some(Self::BoldAlt),
            (Self::BoldAndItalicAlt, Self::BoldAlt) => Some(Self::ItalicAlt),
            (Self::BoldAndItalicAlt, Self::ItalicAlt) => Some(Self::BoldAlt),
            _ => None,
        }
    }

    /// The emphasis produced when `self` is the opener and `closer` closes it,
    /// or `None` if the two cannot pair.
    pub fn emphasis_kind(self, closer: DelimiterSequence) -> Option<EmphasisKind> {
        use EmphasisKind::{Bold, Italic, Strikethrough};

        match (self, closer) {
            (Self::Bold, Self::Bold | Self::BoldAndItalic) => Some(Bold),
            (Self::BoldAlt, Self::BoldAlt | Self::BoldAndItalicAlt) => Some(Bold),
            (Self::Italic, Self::Italic | Self::BoldAndItalic) => Some(Italic),
            (Self::ItalicAlt, Self::ItalicAlt | Self::BoldAndItalicAlt) => Some(Italic),
            (Self::Strikethrough, Self::Strikethrough) => Some(Strikethrough),
            (Self::BoldAndItalic, Self::BoldAndItalic | Self::Italic) => Some(Italic),
            (Self::BoldAndItalic, Self::Bold) => Some(Bold),
            (Self::BoldAndItalicAlt, Self::BoldAndItalicAlt | Self::ItalicAlt) => Some(Italic),
            (Self::BoldAndItalicAlt, Self::BoldAlt) => Some(Bold),
            _ => None,
        }
    }
}

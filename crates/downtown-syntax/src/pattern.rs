//! # Pattern Catalog
//!
//! The fixed vocabulary of lexical delimiters. Each [`Pattern`] says which
//! character it is made of, how many times the character repeats, and whether
//! it may only appear at the start of a line.
//!
//! | Pattern | Run | Start of line |
//! |---------|-----|---------------|
//! | `Italic` / `ItalicAlt` | `*` / `_` ×1 | no |
//! | `Bold` / `BoldAlt` | `*` / `_` ×2 | no |
//! | `BoldAndItalic` / `BoldAndItalicAlt` | `*` / `_` ×3 | no |
//! | `Strikethrough` | `~` ×2 | no |
//! | `CodeSpan` | `` ` `` ×1 | no |
//! | `CodeBlock` | `` ` `` ×3 | no |
//! | `Newline` | `\n` ×1 | no |
//! | `Heading` | `#` ×1.. | yes |
//!
//! The table is a `const` and is checked at compile time, so the lexer never
//! validates it per parse.

use crate::sequence::DelimiterSequence;
use crate::syntax::SyntaxNode;

/// How a pattern's character run is matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    /// Exactly `len` repetitions of `ch`.
    Fixed { ch: char, len: usize },
    /// One or more repetitions of `ch`, length decided by the input.
    Repeating { ch: char },
}

impl PatternKind {
    pub const fn ch(self) -> char {
        match self {
            PatternKind::Fixed { ch, .. } | PatternKind::Repeating { ch } => ch,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    Italic,
    ItalicAlt,
    Bold,
    BoldAlt,
    BoldAndItalic,
    BoldAndItalicAlt,
    Strikethrough,
    CodeSpan,
    CodeBlock,
    Newline,
    Heading,
}

impl Pattern {
    /// Every pattern, in catalog order.
    pub const ALL: [Pattern; 11] = [
        Pattern::Italic,
        Pattern::ItalicAlt,
        Pattern::Bold,
        Pattern::BoldAlt,
        Pattern::BoldAndItalic,
        Pattern::BoldAndItalicAlt,
        Pattern::Strikethrough,
        Pattern::CodeSpan,
        Pattern::CodeBlock,
        Pattern::Newline,
        Pattern::Heading,
    ];

    pub const fn kind(self) -> PatternKind {
        match self {
            Pattern::Italic => PatternKind::Fixed { ch: '*', len: 1 },
            Pattern::ItalicAlt => PatternKind::Fixed { ch: '_', len: 1 },
            Pattern::Bold => PatternKind::Fixed { ch: '*', len: 2 },
            Pattern::BoldAlt => PatternKind::Fixed { ch: '_', len: 2 },
            Pattern::BoldAndItalic => PatternKind::Fixed { ch: '*', len: 3 },
            Pattern::BoldAndItalicAlt => PatternKind::Fixed { ch: '_', len: 3 },
            Pattern::Strikethrough => PatternKind::Fixed { ch: '~', len: 2 },
            Pattern::CodeSpan => PatternKind::Fixed { ch: '`', len: 1 },
            Pattern::CodeBlock => PatternKind::Fixed { ch: '`', len: 3 },
            Pattern::Newline => PatternKind::Fixed { ch: '\n', len: 1 },
            Pattern::Heading => PatternKind::Repeating { ch: '#' },
        }
    }

    /// The character every match of this pattern starts with.
    pub const fn first_char(self) -> char {
        self.kind().ch()
    }

    pub const fn must_be_start_of_line(self) -> bool {
        matches!(self, Pattern::Heading)
    }

    /// Heading markers swallow the single space separating them from the title.
    pub const fn absorbs_trailing_space(self) -> bool {
        matches!(self, Pattern::Heading)
    }

    /// The token node for a confirmed match of `count` characters.
    pub fn token_node(self, count: usize) -> SyntaxNode {
        let sequence = match self {
            Pattern::Italic => DelimiterSequence::Italic,
            Pattern::ItalicAlt => DelimiterSequence::ItalicAlt,
            Pattern::Bold => DelimiterSequence::Bold,
            Pattern::BoldAlt => DelimiterSequence::BoldAlt,
            Pattern::BoldAndItalic => DelimiterSequence::BoldAndItalic,
            Pattern::BoldAndItalicAlt => DelimiterSequence::BoldAndItalicAlt,
            Pattern::Strikethrough => DelimiterSequence::Strikethrough,
            Pattern::CodeSpan => DelimiterSequence::CodeSpan,
            Pattern::CodeBlock => DelimiterSequence::CodeBlock,
            Pattern::Heading => DelimiterSequence::Heading { level: count },
            Pattern::Newline => return SyntaxNode::Newline,
        };
        SyntaxNode::UnclosedDelimiter(sequence)
    }
}

/// Every pattern that may start with `ch` at a position whose start-of-line
/// status is `is_start_of_line`.
pub fn candidate_set(ch: char, is_start_of_line: bool) -> impl Iterator<Item = Pattern> {
    Pattern::ALL.into_iter().filter(move |pattern| {
        pattern.first_char() == ch && (is_start_of_line || !pattern.must_be_start_of_line())
    })
}

/// Fixed lengths are non-zero and no two patterns share a character and length.
const fn catalog_is_consistent() -> bool {
    let mut i = 0;
    while i < Pattern::ALL.len() {
        let a = Pattern::ALL[i].kind();
        if let PatternKind::Fixed { len: 0, .. } = a {
            return false;
        }
        let mut j = i + 1;
        while j < Pattern::ALL.len() {
            let b = Pattern::ALL[j].kind();
            let same_run = match (a, b) {
                (PatternKind::Fixed { ch: x, len: n }, PatternKind::Fixed { ch: y, len: m }) => {
                    x == y && n == m
                }
                (PatternKind::Repeating { ch: x }, PatternKind::Repeating { ch: y }) => x == y,
                (PatternKind::Repeating { ch: x }, PatternKind::Fixed { ch: y, .. })
                | (PatternKind::Fixed { ch: x, .. }, PatternKind::Repeating { ch: y }) => x == y,
            };
            if same_run {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const _: () = assert!(catalog_is_consistent(), "delimiter catalog has ambiguous entries");

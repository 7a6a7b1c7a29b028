//! # Lexer - Tokenizing Inline Markdown
//!
//! This module provides the first stage of parsing: turning a character offset
//! into the next [`Token`], either a run of literal text or one confirmed
//! delimiter from the [pattern catalog](crate::pattern).
//!
//! ## The Lossless Guarantee
//!
//! Successive tokens partition the input: every character belongs to exactly
//! one token, spans are strictly increasing and never overlap.
//!
//! ```
//! use downtown_syntax::{lex, Span};
//!
//! let tokens = lex("some *text*");
//! let spans: Vec<Span> = tokens.iter().map(|t| t.span).collect();
//! assert_eq!(
//!     spans,
//!     vec![Span::new(0, 5), Span::new(5, 6), Span::new(6, 10), Span::new(10, 11)]
//! );
//! ```
//!
//! ## Longest Match
//!
//! A delimiter is confirmed by walking forward from its first character while
//! narrowing the set of candidate patterns. `***` is offered `*`, `**` and
//! `***`; each is confirmed as its length is reached and a later confirmation
//! replaces an earlier one, so the longest run wins:
//!
//! ```text
//! "**x**" → [**] [x] [**]      not [*][*] [x] [*][*]
//! ```
//!
//! Plain text is never interrupted: the text before a delimiter is always
//! emitted as its own token first.
//!
//! ## Public API
//!
//! - [`next_token`] - The token starting at a given offset
//! - [`Lexer`] - Iterator over all tokens of a [`Source`]
//! - [`lex`] - Tokenize a string, returning `Vec<Token>`

use log::trace;

use crate::pattern::{Pattern, PatternKind, candidate_set};
use crate::source::Source;
use crate::span::Span;
use crate::syntax::SyntaxNode;

/// A lexed token: a text run, a newline, or an unclosed delimiter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub node: SyntaxNode,
    pub span: Span,
}

impl Token {
    pub fn new(node: SyntaxNode, span: Span) -> Self {
        Self { node, span }
    }

    pub(crate) fn text(source: &Source<'_>, span: Span) -> Self {
        Self::new(SyntaxNode::Text(source.slice(span).to_string()), span)
    }
}

/// The token starting at `from`, or `None` once `from` reaches the end of input.
pub fn next_token(source: &Source<'_>, from: usize) -> Option<Token> {
    if from >= source.len() {
        return None;
    }

    let mut search_from = from;
    let delimiter = loop {
        let Some(start) = find_candidate_start(source, search_from) else {
            break None;
        };
        match confirm_delimiter(source, start) {
            Some(token) => break Some(token),
            // A lone `~` starts a candidate but forms no delimiter.
            None => search_from = start + 1,
        }
    };

    let token = match delimiter {
        Some(token) if token.span.start == from => token,
        Some(token) => Token::text(source, Span::new(from, token.span.start)),
        None => Token::text(source, Span::new(from, source.len())),
    };
    Some(token)
}

/// First offset at or after `from` where some pattern may begin.
fn find_candidate_start(source: &Source<'_>, from: usize) -> Option<usize> {
    (from..source.len()).find(|&offset| {
        source.char_at(offset).is_some_and(|ch| {
            candidate_set(ch, source.is_start_of_line(offset))
                .next()
                .is_some()
        })
    })
}

/// Longest delimiter match starting exactly at `start`.
fn confirm_delimiter(source: &Source<'_>, start: usize) -> Option<Token> {
    let first = source.char_at(start)?;

    // (pattern, characters matched so far)
    let mut candidates: Vec<(Pattern, usize)> = candidate_set(first, source.is_start_of_line(start))
        .map(|pattern| (pattern, 0))
        .collect();
    let mut confirmed: Option<(Pattern, Span, usize)> = None;
    let mut offset = start;

    while !candidates.is_empty() {
        let current = source.char_at(offset);
        let mut found = None;

        candidates.retain_mut(|(pattern, matched)| match pattern.kind() {
            PatternKind::Fixed { ch, len } => {
                if current != Some(ch) || *matched >= len {
                    return false;
                }
                *matched += 1;
                if *matched == len {
                    found = Some((*pattern, Span::new(start, offset + 1), len));
                    return false;
                }
                true
            }
            PatternKind::Repeating { ch } => {
                if current == Some(ch) {
                    *matched += 1;
                    return true;
                }
                if *matched > 0 {
                    found = Some((*pattern, Span::new(start, offset), *matched));
                }
                false
            }
        });

        if found.is_some() {
            confirmed = found;
        }
        if current.is_none() {
            break;
        }
        offset += 1;
    }

    let (pattern, mut span, count) = confirmed?;
    if pattern.absorbs_trailing_space() && source.char_at(span.end) == Some(' ') {
        span.end += 1;
    }
    trace!("confirmed {pattern:?} x{count} at {span:?}");
    Some(Token::new(pattern.token_node(count), span))
}

/// Iterator over the tokens of a [`Source`].
pub struct Lexer<'s, 'a> {
    source: &'s Source<'a>,
    pos: usize,
}

impl<'s, 'a> Lexer<'s, 'a> {
    pub fn new(source: &'s Source<'a>) -> Self {
        Self { source, pos: 0 }
    }

    /// Offset the next token will start at.
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl Iterator for Lexer<'_, '_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = next_token(self.source, self.pos)?;
        self.pos = token.span.end;
        Some(token)
    }
}

/// Lex the input into a sequence of tokens.
///
/// Guarantees that the token spans partition the whole input.
pub fn lex(input: &str) -> Vec<Token> {
    let source = Source::new(input);
    Lexer::new(&source).collect()
}

//! # Parser - Stack-Based Tree Construction
//!
//! This module turns the token stream from the [lexer](crate::lexer) into a
//! sequence of [`SyntaxNode`]s using a single stack of frames. Each frame is a
//! [`Token`]: a node together with the range of input it covers.
//!
//! ## The Main Loop
//!
//! Tokens are consumed one at a time:
//!
//! - **Verbatim mode.** While the top frame is an open code span or code
//!   block, incoming tokens are dropped until the same delimiter arrives. The
//!   pair then becomes a [`SyntaxNode::CodeSpan`] or [`SyntaxNode::CodeBlock`]
//!   holding the exact source text between the two delimiters.
//! - **Normal mode.** The token is pushed and the stack is reduced.
//!
//! After the last token the stack is reduced once more in finalize mode,
//! which closes headings that never saw a trailing newline.
//!
//! ## Reduction
//!
//! Reduction scans the stack from the top down, looking for the nearest open
//! delimiter that the top frame closes:
//!
//! ```text
//! push `**`        [ "a " ][ ** ][ "b" ][ ** ]
//!                          ^ opener      ^ closer
//! reduce           [ "a " ][ Emphasis(Bold)["b"] ]
//! ```
//!
//! Combined runs (`***`, `___`) are closed one half at a time; the unused half
//! stays on the stack as a fresh open delimiter and may close later.
//!
//! ## Module Structure
//!
//! - [`stack`] - The frame stack
//! - [`options`] - Caller switches, see [`ParseOptions`]
//! - `reduce` - Heading and emphasis closing
//!
//! ## Public API
//!
//! ```
//! use downtown_syntax::{parse, EmphasisKind, SyntaxNode};
//!
//! let nodes = parse("*hi*");
//! assert_eq!(
//!     nodes,
//!     vec![SyntaxNode::Emphasis {
//!         kind: EmphasisKind::Italic,
//!         body: vec![SyntaxNode::Text("hi".to_string())],
//!     }]
//! );
//! ```

pub mod options;
pub mod stack;

mod reduce;

use log::{debug, trace};

use crate::lexer::{Lexer, Token};
use crate::sequence::DelimiterSequence;
use crate::source::Source;
use crate::span::Span;
use crate::syntax::SyntaxNode;
pub use options::{ParseOptions, UnclosedDelimiters};
use reduce::Pass;
use stack::Stack;

/// The parser state: the source being read and the frames built so far.
pub struct Parser<'s, 'a> {
    source: &'s Source<'a>,
    stack: Stack<Token>,
    options: ParseOptions,
}

impl<'s, 'a> Parser<'s, 'a> {
    pub fn new(source: &'s Source<'a>) -> Self {
        Self::with_options(source, ParseOptions::default())
    }

    pub fn with_options(source: &'s Source<'a>, options: ParseOptions) -> Self {
        Self {
            source,
            stack: Stack::new(),
            options,
        }
    }

    /// Parse the whole source into nodes in document order.
    pub fn parse(self) -> Vec<SyntaxNode> {
        self.parse_frames()
            .into_iter()
            .map(|frame| frame.node)
            .collect()
    }

    /// Like [`parse`](Self::parse), but keeps the range each top-level node
    /// covers. The ranges partition the input.
    pub fn parse_frames(mut self) -> Vec<Token> {
        for token in Lexer::new(self.source) {
            self.accept(token);
        }
        self.close_unterminated_verbatim();
        self.reduce(Pass::Finalize);

        let frames = self.options.finish_frames(self.stack.into_vec());
        debug!(
            "parsed {} chars into {} top-level nodes",
            self.source.len(),
            frames.len()
        );
        frames
    }

    fn accept(&mut self, token: Token) {
        if let Some(opener) = self.open_verbatim() {
            if token.node.as_unclosed() == Some(opener) {
                self.close_verbatim(token);
            }
            return;
        }

        self.stack.push(token);
        self.reduce(Pass::Incremental);
    }

    /// The code delimiter on top of the stack, if any.
    fn open_verbatim(&self) -> Option<DelimiterSequence> {
        self.stack
            .peek()?
            .node
            .as_unclosed()
            .filter(|sequence| sequence.is_verbatim())
    }

    fn close_verbatim(&mut self, closer: Token) {
        let Some(opener) = self.stack.pop() else {
            return;
        };
        let raw = self
            .source
            .slice(Span::new(opener.span.end, closer.span.start))
            .to_string();
        let node = match closer.node.as_unclosed() {
            Some(DelimiterSequence::CodeBlock) => SyntaxNode::CodeBlock(raw),
            _ => SyntaxNode::CodeSpan(raw),
        };
        let span = opener.span.cover(closer.span);
        trace!("closed verbatim {node:?} at {span:?}");
        self.stack.push(Token::new(node, span));
    }

    /// An opener that never met its closer keeps the rest of the input as
    /// plain text after it.
    fn close_unterminated_verbatim(&mut self) {
        let Some(opener) = self.stack.peek() else {
            return;
        };
        if !opener.node.as_unclosed().is_some_and(|s| s.is_verbatim()) {
            return;
        }
        let rest = Span::new(opener.span.end, self.source.len());
        if !rest.is_empty() {
            self.stack.push(Token::text(self.source, rest));
        }
    }
}

/// Parse inline markdown with the default options.
pub fn parse(input: &str) -> Vec<SyntaxNode> {
    parse_with_options(input, ParseOptions::default())
}

pub fn parse_with_options(input: &str, options: ParseOptions) -> Vec<SyntaxNode> {
    let source = Source::new(input);
    Parser::with_options(&source, options).parse()
}

/// Top-level frames of `input` with the default options.
pub fn parse_frames(input: &str) -> Vec<Token> {
    let source = Source::new(input);
    Parser::new(&source).parse_frames()
}

//! # downtown-syntax
//!
//! An inline Markdown parser: emphasis, strikethrough, code spans and blocks,
//! and ATX headings, turned into a small owned syntax tree.
//!
//! ## Architecture Overview
//!
//! The parsing pipeline has two stages:
//!
//! ```text
//! Source Text → Lexer → Tokens → Parser (stack reduction) → Vec<SyntaxNode>
//!               (pattern catalog)        (sequence tables)
//! ```
//!
//! ### 1. Lexer ([`lexer`] module)
//!
//! The lexer walks the input with the [pattern catalog](pattern) and emits
//! either a run of plain text or the longest delimiter found at the current
//! position. Every character belongs to exactly one token.
//!
//! ```text
//! "# Hi *x*" → [Heading(1), TEXT("Hi "), Italic, TEXT("x"), Italic]
//! ```
//!
//! ### 2. Parser ([`parser`] module)
//!
//! The parser pushes tokens onto a stack and reduces it whenever the top can
//! close something below it. Which delimiters pair, and what is left over when
//! a combined `***` run is only partly consumed, is decided by the
//! [sequence tables](sequence). Code spans and blocks switch the parser into a
//! verbatim mode where nothing is interpreted until the closing fence.
//!
//! ## Module Structure
//!
//! ```text
//! downtown-syntax/
//! ├── lib.rs        # This file - public API and tree-level tests
//! ├── span.rs       # Half-open character ranges
//! ├── source.rs     # Char-indexed view of the input
//! ├── pattern.rs    # Delimiter catalog, candidate lookup
//! ├── sequence.rs   # Pairing and breakdown tables
//! ├── syntax.rs     # SyntaxNode tree, Display, outline rendering
//! ├── lexer.rs      # Longest-match tokenizer
//! └── parser/
//!     ├── mod.rs    # Parser struct, main loop, verbatim mode
//!     ├── reduce.rs # Heading and emphasis closing
//!     ├── stack.rs  # Frame stack
//!     └── options.rs# ParseOptions
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use downtown_syntax::{parse, EmphasisKind, SyntaxNode};
//!
//! let nodes = parse("# Hello **world**");
//!
//! let SyntaxNode::Heading { level, body } = &nodes[0] else {
//!     panic!("expected a heading");
//! };
//! assert_eq!(*level, 1);
//! assert_eq!(body[0], SyntaxNode::Text("Hello ".to_string()));
//! assert!(matches!(
//!     body[1],
//!     SyntaxNode::Emphasis { kind: EmphasisKind::Bold, .. }
//! ));
//! ```
//!
//! ## Error Tolerance
//!
//! Parsing never fails. A delimiter without a partner stays in the tree as
//! [`SyntaxNode::UnclosedDelimiter`], or is folded into the surrounding text
//! with [`UnclosedDelimiters::AsText`].

pub mod lexer;
pub mod parser;
pub mod pattern;
pub mod sequence;
pub mod source;
pub mod span;
pub mod syntax;

pub use lexer::{Lexer, Token, lex, next_token};
pub use parser::{ParseOptions, Parser, UnclosedDelimiters, parse, parse_frames, parse_with_options};
pub use pattern::{Pattern, PatternKind, candidate_set};
pub use sequence::DelimiterSequence;
pub use source::Source;
pub use span::Span;
pub use syntax::{EmphasisKind, SyntaxNode, format_outline};

//! Caller-facing switches for [`Parser`](super::Parser).

use serde::{Deserialize, Serialize};

use crate::lexer::Token;
use crate::syntax::SyntaxNode;

/// What happens to delimiters that are still unpaired when the tree is built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnclosedDelimiters {
    /// Keep them as [`SyntaxNode::UnclosedDelimiter`] so the caller decides how
    /// to render them.
    #[default]
    Preserve,
    /// Turn them into [`SyntaxNode::Text`] of their literal source and merge
    /// them with neighbouring text.
    AsText,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub unclosed_delimiters: UnclosedDelimiters,
}

impl ParseOptions {
    pub fn with_unclosed_delimiters(mut self, policy: UnclosedDelimiters) -> Self {
        self.unclosed_delimiters = policy;
        self
    }

    /// Applies the unclosed-delimiter policy to one finished run of sibling
    /// frames. Merged text frames take the union of their spans.
    pub(crate) fn finish_frames(self, frames: impl IntoIterator<Item = Token>) -> Vec<Token> {
        let frames = frames.into_iter();
        if self.unclosed_delimiters == UnclosedDelimiters::Preserve {
            return frames.collect();
        }

        let mut out: Vec<Token> = Vec::new();
        for mut frame in frames {
            if let Some(sequence) = frame.node.as_unclosed() {
                frame.node = SyntaxNode::Text(sequence.literal().into_owned());
            }
            if let (
                Some(Token {
                    node: SyntaxNode::Text(previous),
                    span,
                }),
                SyntaxNode::Text(next),
            ) = (out.last_mut(), &frame.node)
            {
                previous.push_str(next);
                span.end = frame.span.end;
                continue;
            }
            out.push(frame);
        }
        out
    }
}

//! Syntax tree produced by the parser.
//!
//! [`SyntaxNode`] is an owned recursive enum: every heading and emphasis node
//! owns its body. The tree is built bottom-up by the reducer and handed to
//! the caller as a `Vec<SyntaxNode>` in document order.
//!
//! Walking helpers in this module ([`fmt::Display`] and [`format_outline`]) use
//! an explicit work list rather than recursion, so deeply nested emphasis
//! cannot exhaust the call stack. The same holds for dropping, cloning and
//! comparing nodes. `Debug` and the serde impls are derived and do recurse.

use std::fmt::{self, Write as _};

use serde::{Deserialize, Serialize};

use crate::sequence::DelimiterSequence;

/// The semantic emphasis attached to a closed delimiter pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmphasisKind {
    Bold,
    Italic,
    Strikethrough,
}

impl EmphasisKind {
    /// The `*`-family delimiter written around this emphasis when displayed.
    pub fn marker(self) -> &'static str {
        match self {
            EmphasisKind::Bold => "**",
            EmphasisKind::Italic => "*",
            EmphasisKind::Strikethrough => "~~",
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyntaxNode {
    /// Literal run, exactly as it appears in the source.
    Text(String),
    Heading {
        level: usize,
        body: Vec<SyntaxNode>,
    },
    Emphasis {
        kind: EmphasisKind,
        body: Vec<SyntaxNode>,
    },
    /// Raw text between ```` ``` ```` fences.
    CodeBlock(String),
    /// Raw text between single backticks.
    CodeSpan(String),
    /// A delimiter that never found its partner.
    ///
    /// Consumers should treat it as the literal text of the delimiter, see
    /// [`DelimiterSequence::literal`].
    UnclosedDelimiter(DelimiterSequence),
    Newline,
}

impl SyntaxNode {
    /// The sequence of an unclosed delimiter node.
    pub fn as_unclosed(&self) -> Option<DelimiterSequence> {
        match self {
            SyntaxNode::UnclosedDelimiter(sequence) => Some(*sequence),
            _ => None,
        }
    }

    pub fn is_newline(&self) -> bool {
        matches!(self, SyntaxNode::Newline)
    }

    /// Child nodes of a heading or emphasis, empty for leaves.
    pub fn body(&self) -> &[SyntaxNode] {
        match self {
            SyntaxNode::Heading { body, .. } | SyntaxNode::Emphasis { body, .. } => body,
            _ => &[],
        }
    }

    /// Number of nodes on the longest path from this node down to a leaf.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 1)];
        while let Some((node, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            pending.extend(node.body().iter().map(|child| (child, depth + 1)));
        }
        deepest
    }

    /// A copy of this node without its children, holding `body` instead.
    fn with_body(&self, body: Vec<SyntaxNode>) -> SyntaxNode {
        match self {
            SyntaxNode::Text(text) => SyntaxNode::Text(text.clone()),
            SyntaxNode::Heading { level, .. } => SyntaxNode::Heading {
                level: *level,
                body,
            },
            SyntaxNode::Emphasis { kind, .. } => SyntaxNode::Emphasis { kind: *kind, body },
            SyntaxNode::CodeBlock(raw) => SyntaxNode::CodeBlock(raw.clone()),
            SyntaxNode::CodeSpan(raw) => SyntaxNode::CodeSpan(raw.clone()),
            SyntaxNode::UnclosedDelimiter(sequence) => SyntaxNode::UnclosedDelimiter(*sequence),
            SyntaxNode::Newline => SyntaxNode::Newline,
        }
    }
}

impl Drop for SyntaxNode {
    fn drop(&mut self) {
        let mut pending = match self {
            SyntaxNode::Heading { body, .. } | SyntaxNode::Emphasis { body, .. } => {
                std::mem::take(body)
            }
            _ => return,
        };
        // Each node is emptied before it goes out of scope, so its own drop
        // never descends.
        while let Some(mut node) = pending.pop() {
            if let SyntaxNode::Heading { body, .. } | SyntaxNode::Emphasis { body, .. } = &mut node {
                pending.append(body);
            }
        }
    }
}

impl Clone for SyntaxNode {
    fn clone(&self) -> Self {
        // (original, clones of its children finished so far)
        let mut pending: Vec<(&SyntaxNode, Vec<SyntaxNode>)> = vec![(self, Vec::new())];
        let mut finished = None;

        while let Some((node, built)) = pending.last_mut() {
            let node: &SyntaxNode = *node;
            if let Some(child) = node.body().get(built.len()) {
                pending.push((child, Vec::new()));
                continue;
            }
            let Some((node, built)) = pending.pop() else {
                break;
            };
            let copy = node.with_body(built);
            match pending.last_mut() {
                Some((_, parent)) => parent.push(copy),
                None => finished = Some(copy),
            }
        }

        finished.unwrap_or_else(|| self.with_body(Vec::new()))
    }
}

impl PartialEq for SyntaxNode {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((a, b)) = pending.pop() {
            let same = match (a, b) {
                (SyntaxNode::Text(x), SyntaxNode::Text(y))
                | (SyntaxNode::CodeBlock(x), SyntaxNode::CodeBlock(y))
                | (SyntaxNode::CodeSpan(x), SyntaxNode::CodeSpan(y)) => x == y,
                (
                    SyntaxNode::Heading { level: x, body: p },
                    SyntaxNode::Heading { level: y, body: q },
                ) => x == y && p.len() == q.len(),
                (
                    SyntaxNode::Emphasis { kind: x, body: p },
                    SyntaxNode::Emphasis { kind: y, body: q },
                ) => x == y && p.len() == q.len(),
                (SyntaxNode::UnclosedDelimiter(x), SyntaxNode::UnclosedDelimiter(y)) => x == y,
                (SyntaxNode::Newline, SyntaxNode::Newline) => true,
                _ => false,
            };
            if !same {
                return false;
            }
            pending.extend(a.body().iter().zip(b.body()));
        }
        true
    }
}

impl Eq for SyntaxNode {}

enum Piece<'a> {
    Node(&'a SyntaxNode),
    Literal(&'static str),
}

impl fmt::Display for SyntaxNode {
    /// Writes the node back as markdown-like text. Headings are written as
    /// `#… title`, emphasis always uses the `*` family.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending = vec![Piece::Node(self)];

        while let Some(piece) = pending.pop() {
            let node = match piece {
                Piece::Literal(text) => {
                    f.write_str(text)?;
                    continue;
                }
                Piece::Node(node) => node,
            };

            match node {
                SyntaxNode::Text(text) => f.write_str(text)?,
                SyntaxNode::Heading { level, body } => {
                    write!(f, "{} ", "#".repeat(*level))?;
                    pending.extend(body.iter().rev().map(Piece::Node));
                }
                SyntaxNode::Emphasis { kind, body } => {
                    f.write_str(kind.marker())?;
                    pending.push(Piece::Literal(kind.marker()));
                    pending.extend(body.iter().rev().map(Piece::Node));
                }
                SyntaxNode::CodeBlock(raw) => write!(f, "```{raw}```")?,
                SyntaxNode::CodeSpan(raw) => write!(f, "`{raw}`")?,
                SyntaxNode::UnclosedDelimiter(sequence) => f.write_str(&sequence.literal())?,
                SyntaxNode::Newline => f.write_char('\n')?,
            }
        }

        Ok(())
    }
}

/// Renders nodes as an indented outline, one node per line.
///
/// ```
/// use downtown_syntax::{format_outline, parse};
///
/// let outline = format_outline(&parse("a **b**"));
/// assert_eq!(outline, "Text \"a \"\nEmphasis(Bold)\n  Text \"b\"\n");
/// ```
pub fn format_outline(nodes: &[SyntaxNode]) -> String {
    let mut out = String::new();
    let mut pending: Vec<(&SyntaxNode, usize)> = nodes.iter().rev().map(|n| (n, 0)).collect();

    while let Some((node, depth)) = pending.pop() {
        let indent = "  ".repeat(depth);
        let _ = match node {
            SyntaxNode::Text(text) => writeln!(out, "{indent}Text {text:?}"),
            SyntaxNode::Heading { level, .. } => writeln!(out, "{indent}Heading({level})"),
            SyntaxNode::Emphasis { kind, .. } => writeln!(out, "{indent}Emphasis({kind:?})"),
            SyntaxNode::CodeBlock(raw) => writeln!(out, "{indent}CodeBlock {raw:?}"),
            SyntaxNode::CodeSpan(raw) => writeln!(out, "{indent}CodeSpan {raw:?}"),
            SyntaxNode::UnclosedDelimiter(sequence) => {
                writeln!(out, "{indent}UnclosedDelimiter {:?}", sequence.literal())
            }
            SyntaxNode::Newline => writeln!(out, "{indent}Newline"),
        };
        pending.extend(node.body().iter().rev().map(|child| (child, depth + 1)));
    }

    out
}

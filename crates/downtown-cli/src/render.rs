//! Output formatting for parsed documents and token streams.

use std::fmt::Write as _;

use anyhow::{Result, bail};
use downtown_config::OutputFormat;
use downtown_syntax::{SyntaxNode, Token, format_outline};

/// Deepest tree the JSON writer accepts. serde serialization recurses once
/// per nesting level.
pub const MAX_JSON_DEPTH: usize = 512;

pub fn render_nodes(nodes: &[SyntaxNode], format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Outline => format_outline(nodes),
        OutputFormat::Json => {
            let depth = nodes.iter().map(SyntaxNode::depth).max().unwrap_or(0);
            if depth > MAX_JSON_DEPTH {
                bail!(
                    "document nests {depth} levels deep, JSON output supports at most {MAX_JSON_DEPTH}; use --format outline or markdown"
                );
            }
            let mut json = serde_json::to_string_pretty(nodes)?;
            json.push('\n');
            json
        }
        OutputFormat::Markdown => nodes.iter().map(ToString::to_string).collect(),
    };
    Ok(rendered)
}

/// One line per token: its character range, then the node.
pub fn render_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        let node = format_outline(std::slice::from_ref(&token.node));
        let _ = write!(out, "{}..{} {node}", token.span.start, token.span.end);
    }
    out
}

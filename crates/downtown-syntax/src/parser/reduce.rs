//! Stack reduction: closing headings and emphasis once their closer is on top.

use log::trace;

use super::Parser;
use crate::lexer::Token;
use crate::sequence::DelimiterSequence;
use crate::span::Span;
use crate::syntax::{EmphasisKind, SyntaxNode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Pass {
    /// After a token has been pushed.
    Incremental,
    /// Once, after the last token.
    Finalize,
}

impl Parser<'_, '_> {
    /// Closes every construct the current top of the stack completes.
    ///
    /// The stack is scanned from the top down. A heading closes on a newline
    /// (or at end of input when finalizing). Any other unclosed delimiter
    /// closes when the top is a delimiter it pairs with and at least one frame
    /// lies between them. After each closure the scan starts over from the new
    /// top, so residuals of combined runs can close in turn.
    ///
    /// The first opener that cannot pair with the top normally ends the scan.
    /// The finalize pass departs from that on purpose: it only stops emphasis
    /// closing and keeps scanning, so a heading further down is still closed
    /// at end of input (`# a *b **` becomes a heading holding both unpaired
    /// delimiters instead of staying open).
    pub(super) fn reduce(&mut self, pass: Pass) {
        let finalize = pass == Pass::Finalize;
        // An unpairable opener hides everything below it from emphasis
        // closing. When finalizing, headings below it may still close.
        let mut emphasis_blocked = false;

        'restart: loop {
            let Some(top) = self.stack.len().checked_sub(1) else {
                return;
            };
            let closer = self.stack[top].node.as_unclosed();
            let top_is_newline = self.stack[top].node.is_newline();

            if !finalize && closer.is_none() && !top_is_newline {
                return;
            }

            for index in (0..=top).rev() {
                let node = &self.stack[index].node;
                if top_is_newline && index < top && node.is_newline() {
                    // Anything open above the previous line break is closed by now.
                    return;
                }
                let Some(opener) = node.as_unclosed() else {
                    continue;
                };

                if let DelimiterSequence::Heading { level } = opener {
                    if top_is_newline && index < top {
                        self.close_heading(index, level, true);
                        continue 'restart;
                    }
                    if finalize {
                        self.close_heading(index, level, false);
                        continue 'restart;
                    }
                    return;
                }

                if index == top || emphasis_blocked {
                    continue;
                }
                let Some(closer) = closer else {
                    continue;
                };

                let kind = if index + 1 < top {
                    opener.emphasis_kind(closer)
                } else {
                    None
                };
                match kind {
                    Some(kind) => {
                        self.close_emphasis(index, opener, closer, kind);
                        continue 'restart;
                    }
                    None if finalize => emphasis_blocked = true,
                    None => return,
                }
            }

            return;
        }
    }

    /// Replaces the heading opener at `index` and everything above it with a
    /// heading node. With `at_newline` the top frame is the terminating newline,
    /// which stays on the stack after the heading.
    fn close_heading(&mut self, index: usize, level: usize, at_newline: bool) {
        let newline = if at_newline { self.stack.pop() } else { None };
        let mut frames = self.stack.pop_from(index).into_iter();
        let Some(opener) = frames.next() else {
            return;
        };
        let body: Vec<Token> = frames.collect();

        let end = match (&newline, body.last()) {
            (Some(newline), _) => newline.span.start,
            (None, Some(last)) => last.span.end,
            (None, None) => opener.span.end,
        };
        let span = Span::new(opener.span.start, end);
        trace!("closed heading level {level} at {span:?}");

        let body = self.body(body);
        self.stack.push(Token::new(SyntaxNode::Heading { level, body }, span));
        if let Some(newline) = newline {
            self.stack.push(newline);
        }
    }

    /// Replaces the opener at `index` through the closer on top with an
    /// emphasis node, flanked by whatever is left of combined runs.
    fn close_emphasis(
        &mut self,
        index: usize,
        opener: DelimiterSequence,
        closer: DelimiterSequence,
        kind: EmphasisKind,
    ) {
        let mut frames = self.stack.pop_from(index).into_iter();
        let (Some(open), Some(close)) = (frames.next(), frames.next_back()) else {
            return;
        };
        let body = self.body(frames.collect());

        let opener_rest = opener.breakdown(closer);
        let closer_rest = closer.breakdown(opener);
        let start = open.span.start + opener_rest.map_or(0, DelimiterSequence::width);
        let end = close.span.end - closer_rest.map_or(0, DelimiterSequence::width);
        trace!("closed {kind:?} {opener:?}..{closer:?} at {start}..{end}");

        if let Some(rest) = opener_rest {
            self.stack.push(Token::new(
                SyntaxNode::UnclosedDelimiter(rest),
                Span::new(open.span.start, start),
            ));
        }
        self.stack.push(Token::new(
            SyntaxNode::Emphasis { kind, body },
            Span::new(start, end),
        ));
        if let Some(rest) = closer_rest {
            self.stack.push(Token::new(
                SyntaxNode::UnclosedDelimiter(rest),
                Span::new(end, close.span.end),
            ));
        }
    }

    fn body(&self, frames: Vec<Token>) -> Vec<SyntaxNode> {
        self.options
            .finish_frames(frames)
            .into_iter()
            .map(|frame| frame.node)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::parse_frames;
    use crate::span::Span;
    use pretty_assertions::assert_eq;

    fn spans(input: &str) -> Vec<Span> {
        parse_frames(input).iter().map(|frame| frame.span).collect()
    }

    #[test]
    fn emphasis_covers_its_delimiters() {
        assert_eq!(
            spans("a *b* c"),
            vec![Span::new(0, 2), Span::new(2, 5), Span::new(5, 7)]
        );
    }

    #[test]
    fn residuals_split_the_combined_run() {
        // `*` left from `***`, then bold over `**a**`
        let frames = parse_frames("***a**");
        let spans: Vec<Span> = frames.iter().map(|frame| frame.span).collect();
        assert_eq!(spans, vec![Span::new(0, 1), Span::new(1, 6)]);
    }

    #[test]
    fn cascading_residuals_cover_the_input() {
        assert_eq!(spans("***a***"), vec![Span::new(0, 7)]);
        assert_eq!(spans("***a** b*"), vec![Span::new(0, 9)]);
    }

    #[test]
    fn heading_stops_before_its_newline() {
        assert_eq!(
            spans("# T\nx"),
            vec![Span::new(0, 3), Span::new(3, 4), Span::new(4, 5)]
        );
    }

    #[test]
    fn forced_heading_ends_with_its_body() {
        assert_eq!(spans("## ab"), vec![Span::new(0, 5)]);
        assert_eq!(spans("x\n#"), vec![Span::new(0, 1), Span::new(1, 2), Span::new(2, 3)]);
    }
}

//! Whole-document parsing tests.

use downtown_syntax::{EmphasisKind, SyntaxNode, parse};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn t(s: &str) -> SyntaxNode {
    SyntaxNode::Text(s.to_string())
}

fn bold(body: Vec<SyntaxNode>) -> SyntaxNode {
    SyntaxNode::Emphasis {
        kind: EmphasisKind::Bold,
        body,
    }
}

fn italic(body: Vec<SyntaxNode>) -> SyntaxNode {
    SyntaxNode::Emphasis {
        kind: EmphasisKind::Italic,
        body,
    }
}

fn strike(body: Vec<SyntaxNode>) -> SyntaxNode {
    SyntaxNode::Emphasis {
        kind: EmphasisKind::Strikethrough,
        body,
    }
}

#[rstest]
#[case::italic("*text*", vec![italic(vec![t("text")])])]
#[case::italic_with_prefix_and_suffix(
    "some prefix *text* some suffix",
    vec![t("some prefix "), italic(vec![t("text")]), t(" some suffix")]
)]
#[case::italic_alt("_text_", vec![italic(vec![t("text")])])]
#[case::bold("**text**", vec![bold(vec![t("text")])])]
#[case::bold_alt("__text__", vec![bold(vec![t("text")])])]
#[case::strikethrough("~~text~~", vec![strike(vec![t("text")])])]
#[case::code_span("`\n**text**\n`", vec![SyntaxNode::CodeSpan("\n**text**\n".to_string())])]
#[case::code_block("```\n**text**\n```", vec![SyntaxNode::CodeBlock("\n**text**\n".to_string())])]
#[case::bold_and_italic("***bold and italic***", vec![bold(vec![italic(vec![t("bold and italic")])])])]
#[case::heading(
    "### Some heading",
    vec![SyntaxNode::Heading { level: 3, body: vec![t("Some heading")] }]
)]
#[case::heading_with_body(
    "### Some heading\nwith body",
    vec![
        SyntaxNode::Heading { level: 3, body: vec![t("Some heading")] },
        SyntaxNode::Newline,
        t("with body"),
    ]
)]
fn parses_document(#[case] input: &str, #[case] expected: Vec<SyntaxNode>) {
    assert_eq!(parse(input), expected);
}

#[test]
fn flat_document() {
    assert_eq!(
        parse("*italic* **bold** `code`, ~~strikethrough~~"),
        vec![
            italic(vec![t("italic")]),
            t(" "),
            bold(vec![t("bold")]),
            t(" "),
            SyntaxNode::CodeSpan("code".to_string()),
            t(", "),
            strike(vec![t("strikethrough")]),
        ]
    );
}

#[test]
fn nested_document() {
    let input = "*italic **bold and \nitalic*** and then \nwe have ***bold and italic** italic* \
                 and then we have ***bold and italic* bold** and then we have **bold and *bold and italic*** \
                 and finally we have ***bold and italic***";

    assert_eq!(
        parse(input),
        vec![
            italic(vec![
                t("italic "),
                bold(vec![t("bold and "), SyntaxNode::Newline, t("italic")]),
            ]),
            t(" and then "),
            SyntaxNode::Newline,
            t("we have "),
            italic(vec![bold(vec![t("bold and italic")]), t(" italic")]),
            t(" and then we have "),
            bold(vec![italic(vec![t("bold and italic")]), t(" bold")]),
            t(" and then we have "),
            bold(vec![t("bold and "), italic(vec![t("bold and italic")])]),
            t(" and finally we have "),
            bold(vec![italic(vec![t("bold and italic")])]),
        ]
    );
}

#[test]
fn multi_line_note() {
    let input = "# Groceries\n~~milk~~ and *eggs*\n## Later\n`a*b`";
    assert_eq!(
        parse(input),
        vec![
            SyntaxNode::Heading {
                level: 1,
                body: vec![t("Groceries")]
            },
            SyntaxNode::Newline,
            strike(vec![t("milk")]),
            t(" and "),
            italic(vec![t("eggs")]),
            SyntaxNode::Newline,
            SyntaxNode::Heading {
                level: 2,
                body: vec![t("Later")]
            },
            SyntaxNode::Newline,
            SyntaxNode::CodeSpan("a*b".to_string()),
        ]
    );
}

#[test]
fn deep_nesting_parses_without_recursion() {
    let pairs = 50_000;
    let input = format!("{}x{}", "~~*".repeat(pairs), "*~~".repeat(pairs));
    let nodes = parse(&input);

    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].depth(), pairs * 2 + 1);

    let copy = nodes.clone();
    assert!(copy == nodes);
    assert_eq!(copy[0].to_string(), input);
    // both trees are dropped here, level by level
}

#[rstest]
#[case("*a_")]
#[case("_a*")]
#[case("**a__")]
#[case("__a**")]
#[case("***a___")]
#[case("___a***")]
#[case("**a_")]
#[case("_a***")]
fn star_and_underscore_never_pair(#[case] input: &str) {
    let nodes = parse(input);
    assert_eq!(nodes.len(), 3, "{nodes:?}");
    assert!(nodes[0].as_unclosed().is_some(), "{nodes:?}");
    assert_eq!(nodes[1], t("a"));
    assert!(nodes[2].as_unclosed().is_some(), "{nodes:?}");
}

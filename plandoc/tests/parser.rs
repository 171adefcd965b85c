use plandoc::parser::AnomalyKind;
use plandoc::{Block, HeadingLevel, Parser};

fn parse(source: &str) -> Vec<Block> {
    Parser::new(source, 0).blocks().collect()
}

fn heading(level: HeadingLevel, text: &str) -> Block {
    Block::Heading {
        level,
        text: text.to_string(),
    }
}

#[test]
fn empty_source_yields_nothing() {
    assert!(parse("").is_empty());
    let parsed = Parser::new("", 0).parse();
    assert!(parsed.blocks.is_empty());
    assert!(parsed.anomalies.is_empty());
}

#[test]
fn heading_paragraph_and_list() {
    let blocks = parse("# Title\n\nSome text\n\n- a\n- b");
    assert_eq!(
        blocks,
        vec![
            heading(HeadingLevel::H1, "Title"),
            Block::Paragraph("Some text".to_string()),
            Block::List(vec!["a".to_string(), "b".to_string()]),
        ]
    );
}

#[test]
fn heading_levels_one_to_three() {
    let blocks = parse("# One\n## Two\n### Three");
    assert_eq!(
        blocks,
        vec![
            heading(HeadingLevel::H1, "One"),
            heading(HeadingLevel::H2, "Two"),
            heading(HeadingLevel::H3, "Three"),
        ]
    );
}

#[test]
fn deep_headings_are_dropped_with_anomaly() {
    let parsed = Parser::new("#### Four\n\nbody", 3).parse();
    assert_eq!(parsed.blocks, vec![Block::Paragraph("body".to_string())]);
    assert_eq!(parsed.anomalies.len(), 1);
    assert_eq!(parsed.anomalies[0].kind, AnomalyKind::DeepHeading(4));
    assert_eq!(parsed.anomalies[0].file_id, 3);
    assert_eq!(parsed.anomalies[0].span.start, 0);
}

#[test]
fn inline_markup_is_flattened() {
    let blocks = parse("**Vision**: a *bold* plan with `code` and [link](http://x)");
    assert_eq!(
        blocks,
        vec![Block::Paragraph(
            "Vision: a bold plan with code and link".to_string()
        )]
    );
}

#[test]
fn soft_and_hard_breaks() {
    let blocks = parse("first\nsecond  \nthird");
    assert_eq!(
        blocks,
        vec![Block::Paragraph("first second\nthird".to_string())]
    );
}

#[test]
fn code_block_is_verbatim() {
    let blocks = parse("```rust\nfn main() {\n    **not bold**\n}\n```");
    assert_eq!(
        blocks,
        vec![Block::CodeBlock(
            "fn main() {\n    **not bold**\n}".to_string()
        )]
    );
}

#[test]
fn indented_code_block() {
    let blocks = parse("intro\n\n    let x = 1;\n");
    assert_eq!(
        blocks,
        vec![
            Block::Paragraph("intro".to_string()),
            Block::CodeBlock("let x = 1;".to_string()),
        ]
    );
}

#[test]
fn nested_items_follow_their_parent() {
    let blocks = parse("- Frontend\n  - Angular\n  - React\n- Backend");
    assert_eq!(
        blocks,
        vec![Block::List(vec![
            "Frontend".to_string(),
            "Angular".to_string(),
            "React".to_string(),
            "Backend".to_string(),
        ])]
    );
}

#[test]
fn loose_list_items() {
    let blocks = parse("- one\n\n- two\n\n  more\n");
    assert_eq!(
        blocks,
        vec![Block::List(vec!["one".to_string(), "two more".to_string()])]
    );
}

#[test]
fn unsupported_elements_are_dropped() {
    let source = "# Plan\n\n1. first\n2. second\n\n> quote\n\n---\n\n| a | b |\n|---|---|\n| 1 | 2 |\n\n<div>raw</div>\n\nend";
    let parsed = Parser::new(source, 0).parse();
    assert_eq!(
        parsed.blocks,
        vec![
            heading(HeadingLevel::H1, "Plan"),
            Block::Paragraph("end".to_string()),
        ]
    );
    let kinds: Vec<AnomalyKind> = parsed.anomalies.iter().map(|a| a.kind).collect();
    assert_eq!(
        kinds,
        vec![
            AnomalyKind::OrderedList,
            AnomalyKind::BlockQuote,
            AnomalyKind::Rule,
            AnomalyKind::Table,
            AnomalyKind::Html,
        ]
    );
}

#[test]
fn blocks_is_restartable() {
    let parser = Parser::new("# A\n\ntext\n\n- x", 0);
    let first: Vec<Block> = parser.blocks().collect();
    let second: Vec<Block> = parser.blocks().collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
}

#[test]
fn blocks_is_lazy() {
    let parser = Parser::new("# A\n\n#### dropped\n\nB", 0);
    let mut blocks = parser.blocks();
    assert_eq!(blocks.next(), Some(heading(HeadingLevel::H1, "A")));
    assert!(blocks.anomalies().is_empty());
    assert_eq!(blocks.next(), Some(Block::Paragraph("B".to_string())));
    assert_eq!(blocks.anomalies().len(), 1);
    assert_eq!(blocks.next(), None);
}

#[test]
fn parsing_is_total_over_odd_input() {
    let inputs = [
        "```\nunterminated",
        "- \n-\n- ",
        "#",
        "\n\n\n",
        "* * *",
        "<!-- comment -->",
        "[dangling]: ",
        "# ünïcödé — “quotes”",
    ];
    for input in inputs {
        let parsed = Parser::new(input, 0).parse();
        // Never more blocks than non-empty source lines.
        let lines = input.lines().filter(|l| !l.trim().is_empty()).count();
        assert!(parsed.blocks.len() <= lines.max(1), "input {:?}", input);
    }
}

#[test]
fn anomaly_converts_to_warning_diagnostic() {
    use codespan_reporting::diagnostic::Severity;

    let parsed = Parser::new("> quoted", 7).parse();
    let diagnostic = parsed.anomalies[0].to_diagnostic();
    assert_eq!(diagnostic.severity, Severity::Warning);
    assert_eq!(diagnostic.labels[0].file_id, 7);
    assert!(diagnostic.message.contains("block quote"));
}

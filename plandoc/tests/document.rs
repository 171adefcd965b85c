use plandoc::document::{self, DEFAULT_STYLE, FontFamily, StyleName};
use plandoc::{Block, DocumentModel, ElementContent, HeadingLevel, Parser};

fn build(source: &str) -> DocumentModel {
    document::build(Parser::new(source, 0).blocks())
}

#[test]
fn empty_blocks_build_empty_model() {
    let model = build("");
    assert!(model.is_empty());
    assert!(model.styles.is_empty());
    assert_eq!(model.default_style, DEFAULT_STYLE);
    assert_eq!(model.default_style.font_size, 11.0);
}

#[test]
fn styles_follow_block_order() {
    let model = build("# Title\n\nSome text\n\n- a\n- b");
    assert_eq!(model.style_names(), vec!["header1", "paragraph", "list"]);
    assert_eq!(
        model.elements[2].content,
        ElementContent::Items(vec!["a".to_string(), "b".to_string()])
    );
}

#[test]
fn every_block_kind_maps_to_its_style() {
    let blocks = vec![
        Block::Heading {
            level: HeadingLevel::H1,
            text: "a".into(),
        },
        Block::Heading {
            level: HeadingLevel::H2,
            text: "b".into(),
        },
        Block::Heading {
            level: HeadingLevel::H3,
            text: "c".into(),
        },
        Block::Paragraph("d".into()),
        Block::CodeBlock("e".into()),
        Block::List(vec!["f".into()]),
    ];
    let model = document::build(blocks);
    assert_eq!(
        model.style_names(),
        vec!["header1", "header2", "header3", "paragraph", "codeBlock", "list"]
    );
    assert_eq!(model.elements[4].font, Some(FontFamily::Courier));
    assert!(model.elements.iter().take(4).all(|e| e.font.is_none()));
}

#[test]
fn every_element_style_is_in_the_dictionary() {
    let model = build("## Scope\n\n```\ncode\n```\n\ntext");
    for element in &model.elements {
        assert!(model.styles.contains_key(&element.style));
    }
    assert_eq!(model.styles.len(), 3);
}

#[test]
fn build_is_deterministic() {
    let source = "# Plan\n\n## Goals\n\n- speed\n- safety\n\n```\nx\n```\n\nclosing words";
    assert_eq!(build(source), build(source));
}

#[test]
fn stylesheet_values() {
    let h1 = StyleName::Header1.style();
    assert_eq!(h1.font_size, 20.0);
    assert!(h1.bold);
    assert_eq!((h1.margin.top, h1.margin.bottom), (20.0, 10.0));

    assert_eq!(StyleName::Header2.style().font_size, 16.0);
    assert_eq!(StyleName::Header3.style().font_size, 14.0);

    let paragraph = StyleName::Paragraph.style();
    assert_eq!(paragraph.font_size, 11.0);
    assert_eq!(paragraph.line_height, 1.7);

    let list = StyleName::List.style();
    assert_eq!((list.font_size, list.margin.left), (11.0, 10.0));

    let code = StyleName::CodeBlock.style();
    assert_eq!(code.font_size, 10.0);
    assert!(code.fill.is_some());
}

#[test]
fn element_font_override_wins() {
    let model = build("```\nlet x = 1;\n```");
    let style = model.style_of(&model.elements[0]);
    assert_eq!(style.font, Some(FontFamily::Courier));
    assert_eq!(style.font_size, 10.0);
}

#[test]
fn document_from_markdown_matches_two_step_build() {
    let source = "# A\n\nb";
    assert_eq!(plandoc::document_from_markdown(source), build(source));
}

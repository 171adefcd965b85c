use crate::block::{Block, HeadingLevel};
use crate::document::style::{FontFamily, StyleName};
use crate::document::{DocumentModel, ElementContent, StyledElement};

/// Map parsed blocks, in order, onto styled elements.
pub fn build<I>(blocks: I) -> DocumentModel
where
    I: IntoIterator<Item = Block>,
{
    let mut model = DocumentModel::empty();
    for block in blocks {
        model.push(style_block(block));
    }
    model
}

fn style_block(block: Block) -> StyledElement {
    match block {
        Block::Heading { level, text } => StyledElement {
            style: match level {
                HeadingLevel::H1 => StyleName::Header1,
                HeadingLevel::H2 => StyleName::Header2,
                HeadingLevel::H3 => StyleName::Header3,
            },
            content: ElementContent::Text(text),
            font: None,
        },
        Block::Paragraph(text) => StyledElement {
            style: StyleName::Paragraph,
            content: ElementContent::Text(text),
            font: None,
        },
        Block::CodeBlock(text) => StyledElement {
            style: StyleName::CodeBlock,
            content: ElementContent::Text(text),
            font: Some(FontFamily::Courier),
        },
        Block::List(items) => StyledElement {
            style: StyleName::List,
            content: ElementContent::Items(items),
            font: None,
        },
    }
}

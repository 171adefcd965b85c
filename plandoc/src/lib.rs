pub mod block;
pub mod document;
pub mod parser;

pub use block::{Block, HeadingLevel};
pub use document::{DocumentModel, ElementContent, StyledElement};
pub use parser::{ParseAnomaly, ParsedPlan, Parser};

/// Parse plan markdown and build its document model in one step.
/// Anomalies are discarded; use [`Parser::parse`] to inspect them.
pub fn document_from_markdown(source: &str) -> DocumentModel {
    let parser = Parser::new(source, 0);
    document::build(parser.blocks())
}

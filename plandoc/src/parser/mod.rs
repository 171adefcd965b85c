pub mod anomaly;
mod structural;

pub use anomaly::{AnomalyKind, ParseAnomaly};
pub use structural::Blocks;

use crate::block::Block;

/// Result of an eager parse.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedPlan {
    pub blocks: Vec<Block>,
    pub anomalies: Vec<ParseAnomaly>,
}

/// Parser entry point.
pub struct Parser<'a> {
    source: &'a str,
    file_id: usize,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str, file_id: usize) -> Self {
        Parser { source, file_id }
    }

    /// A fresh lazy pass over the source. Calling this again restarts from the top.
    pub fn blocks(&self) -> Blocks<'a> {
        Blocks::new(self.source, self.file_id)
    }

    /// Parse the whole source, keeping the dropped elements.
    pub fn parse(&self) -> ParsedPlan {
        let mut blocks = self.blocks();
        let collected: Vec<Block> = blocks.by_ref().collect();
        ParsedPlan {
            blocks: collected,
            anomalies: blocks.into_anomalies(),
        }
    }
}

use std::fmt;
use std::ops::Range;

use codespan_reporting::diagnostic::{Diagnostic, Label};

/// Kind of markup element the parser saw but does not export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnomalyKind {
    /// Heading deeper than level 3.
    DeepHeading(u8),
    OrderedList,
    BlockQuote,
    Table,
    Rule,
    Html,
    Other,
}

/// A top-level element that was dropped while parsing.
///
/// Anomalies never stop a parse; they are surfaced as warnings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAnomaly {
    pub kind: AnomalyKind,
    pub span: Range<usize>,
    pub file_id: usize,
}

impl ParseAnomaly {
    pub fn new(kind: AnomalyKind, span: Range<usize>, file_id: usize) -> Self {
        ParseAnomaly {
            kind,
            span,
            file_id,
        }
    }

    /// Convert to a codespan-reporting warning for display.
    pub fn to_diagnostic(&self) -> Diagnostic<usize> {
        Diagnostic::warning()
            .with_message(self.to_string())
            .with_labels(vec![
                Label::primary(self.file_id, self.span.clone()).with_message("dropped from export"),
            ])
            .with_notes(vec![
                "only headings 1-3, paragraphs, unordered lists and code blocks are exported"
                    .to_string(),
            ])
    }
}

impl fmt::Display for ParseAnomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            AnomalyKind::DeepHeading(level) => write!(f, "level {} heading is not exported", level),
            AnomalyKind::OrderedList => write!(f, "ordered list is not exported"),
            AnomalyKind::BlockQuote => write!(f, "block quote is not exported"),
            AnomalyKind::Table => write!(f, "table is not exported"),
            AnomalyKind::Rule => write!(f, "horizontal rule is not exported"),
            AnomalyKind::Html => write!(f, "raw HTML is not exported"),
            AnomalyKind::Other => write!(f, "unsupported element is not exported"),
        }
    }
}

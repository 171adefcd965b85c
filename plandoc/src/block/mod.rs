pub mod anchor;

/// Heading depth recognised in a plan. Deeper headings are dropped by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    pub fn from_u8(level: u8) -> Option<Self> {
        match level {
            1 => Some(HeadingLevel::H1),
            2 => Some(HeadingLevel::H2),
            3 => Some(HeadingLevel::H3),
            _ => None,
        }
    }

    pub fn as_u8(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }
}

/// One top-level structural unit of a plan.
///
/// Text is already flattened: inline emphasis, links and code spans have been
/// reduced to their visible characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: HeadingLevel, text: String },
    Paragraph(String),
    /// Preformatted text, kept verbatim.
    CodeBlock(String),
    /// Unordered list items in source order, nested items flattened in after
    /// their parent.
    List(Vec<String>),
}

impl Block {
    /// Short label for summaries, e.g. `export --check`.
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Heading { .. } => "heading",
            Block::Paragraph(_) => "paragraph",
            Block::CodeBlock(_) => "code",
            Block::List(_) => "list",
        }
    }
}

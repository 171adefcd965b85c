mod builder;
pub mod style;

use std::collections::BTreeMap;

pub use builder::build;
pub use style::{Color, DEFAULT_STYLE, FontFamily, Margin, Style, StyleName};

/// What an element draws: one run of text, or one line per list item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementContent {
    Text(String),
    Items(Vec<String>),
}

/// A block paired with the style it is rendered in.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledElement {
    pub style: StyleName,
    pub content: ElementContent,
    /// Overrides the style's font family for this element only.
    pub font: Option<FontFamily>,
}

/// The styled document handed to the renderer.
///
/// `styles` holds exactly the styles the elements refer to, so every
/// element's style name resolves.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentModel {
    pub elements: Vec<StyledElement>,
    pub styles: BTreeMap<StyleName, Style>,
    pub default_style: Style,
}

impl DocumentModel {
    pub fn empty() -> Self {
        DocumentModel {
            elements: Vec::new(),
            styles: BTreeMap::new(),
            default_style: DEFAULT_STYLE,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn push(&mut self, element: StyledElement) {
        self.styles
            .entry(element.style)
            .or_insert_with(|| element.style.style());
        self.elements.push(element);
    }

    /// Resolve the style an element is drawn with, falling back to the
    /// default style.
    pub fn style_of(&self, element: &StyledElement) -> Style {
        let mut style = self
            .styles
            .get(&element.style)
            .copied()
            .unwrap_or(self.default_style);
        if element.font.is_some() {
            style.font = element.font;
        }
        style
    }

    /// Style names of the elements, in order.
    pub fn style_names(&self) -> Vec<&'static str> {
        self.elements.iter().map(|e| e.style.as_str()).collect()
    }
}

impl Default for DocumentModel {
    fn default() -> Self {
        DocumentModel::empty()
    }
}

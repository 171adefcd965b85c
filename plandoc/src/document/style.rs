use std::fmt;

/// Names of the styles a plan document uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleName {
    Header1,
    Header2,
    Header3,
    Paragraph,
    CodeBlock,
    List,
}

impl StyleName {
    pub fn as_str(self) -> &'static str {
        match self {
            StyleName::Header1 => "header1",
            StyleName::Header2 => "header2",
            StyleName::Header3 => "header3",
            StyleName::Paragraph => "paragraph",
            StyleName::CodeBlock => "codeBlock",
            StyleName::List => "list",
        }
    }

    /// The fixed visual attributes for this style.
    pub fn style(self) -> Style {
        match self {
            StyleName::Header1 => HEADER1,
            StyleName::Header2 => HEADER2,
            StyleName::Header3 => HEADER3,
            StyleName::Paragraph => PARAGRAPH,
            StyleName::CodeBlock => CODE_BLOCK,
            StyleName::List => LIST,
        }
    }
}

impl fmt::Display for StyleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFamily {
    Helvetica,
    Courier,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }
}

/// Outer spacing in points, in left, top, right, bottom order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Margin {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Margin {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const ZERO: Margin = Margin::new(0.0, 0.0, 0.0, 0.0);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub font_size: f32,
    /// Multiplier applied to the font's natural line height.
    pub line_height: f32,
    pub margin: Margin,
    pub bold: bool,
    pub font: Option<FontFamily>,
    /// Background fill behind the element.
    pub fill: Option<Color>,
    pub color: Option<Color>,
}

impl Style {
    pub const fn plain(font_size: f32) -> Self {
        Style {
            font_size,
            line_height: 1.0,
            margin: Margin::ZERO,
            bold: false,
            font: None,
            fill: None,
            color: None,
        }
    }
}

pub const DEFAULT_STYLE: Style = Style::plain(11.0);

const HEADER1: Style = Style {
    bold: true,
    margin: Margin::new(0.0, 20.0, 0.0, 10.0),
    ..Style::plain(20.0)
};

const HEADER2: Style = Style {
    bold: true,
    margin: Margin::new(0.0, 18.0, 0.0, 8.0),
    ..Style::plain(16.0)
};

const HEADER3: Style = Style {
    bold: true,
    margin: Margin::new(0.0, 16.0, 0.0, 6.0),
    ..Style::plain(14.0)
};

const PARAGRAPH: Style = Style {
    line_height: 1.7,
    margin: Margin::new(0.0, 4.0, 0.0, 4.0),
    ..Style::plain(11.0)
};

const LIST: Style = Style {
    margin: Margin::new(10.0, 4.0, 0.0, 4.0),
    ..Style::plain(11.0)
};

const CODE_BLOCK: Style = Style {
    margin: Margin::new(0.0, 10.0, 0.0, 10.0),
    fill: Some(Color::rgb(0xf6, 0xf8, 0xfa)),
    color: Some(Color::rgb(0x33, 0x33, 0x33)),
    ..Style::plain(10.0)
};

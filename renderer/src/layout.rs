use plandoc::document::{Color, ElementContent, Style};
use plandoc::{DocumentModel, StyledElement};

use crate::font::PdfFont;
use crate::pdf::encoding::encode_win_ansi;

/// Page size and printable area, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl PageGeometry {
    pub const A4: PageGeometry = PageGeometry {
        width: 595.28,
        height: 841.89,
        margin: 40.0,
    };

    fn content_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }

    fn top(&self) -> f32 {
        self.height - self.margin
    }

    fn bottom(&self) -> f32 {
        self.margin
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        PageGeometry::A4
    }
}

/// One drawing instruction on a page. Coordinates use the PDF origin
/// (bottom-left).
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Fill {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
    Text {
        x: f32,
        y: f32,
        font: PdfFont,
        size: f32,
        color: Option<Color>,
        /// WinAnsi-encoded glyphs.
        text: Vec<u8>,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub ops: Vec<DrawOp>,
}

/// Space between a list bullet and its item text.
const BULLET_INDENT: f32 = 12.0;
const BULLET: u8 = 0x95;

/// Lay the document out onto pages. Always yields at least one page.
pub fn layout(model: &DocumentModel, geometry: PageGeometry) -> Vec<Page> {
    let mut cursor = Cursor::new(geometry);
    for element in &model.elements {
        cursor.place_element(model, element);
    }
    cursor.finish()
}

struct Cursor {
    geometry: PageGeometry,
    pages: Vec<Page>,
    current: Page,
    /// Top of the next line box.
    y: f32,
}

impl Cursor {
    fn new(geometry: PageGeometry) -> Self {
        Cursor {
            geometry,
            pages: Vec::new(),
            current: Page::default(),
            y: geometry.top(),
        }
    }

    fn at_page_top(&self) -> bool {
        self.y >= self.geometry.top()
    }

    fn new_page(&mut self) {
        let page = std::mem::take(&mut self.current);
        self.pages.push(page);
        self.y = self.geometry.top();
    }

    fn place_element(&mut self, model: &DocumentModel, element: &StyledElement) {
        let style = model.style_of(element);
        let font = PdfFont::for_style(&style);

        if !self.at_page_top() {
            self.y -= style.margin.top;
        }

        let left = self.geometry.margin + style.margin.left;
        let width = self.geometry.content_width() - style.margin.left - style.margin.right;

        match &element.content {
            ElementContent::Text(text) => {
                let verbatim = style.font.is_some();
                for line in wrap(text, font, style.font_size, width, verbatim) {
                    self.place_line(&style, font, left, width, None, line);
                }
            }
            ElementContent::Items(items) => {
                let text_width = width - BULLET_INDENT;
                for item in items {
                    let lines = wrap(item, font, style.font_size, text_width, false);
                    for (i, line) in lines.into_iter().enumerate() {
                        let bullet = (i == 0).then_some(left);
                        self.place_line(
                            &style,
                            font,
                            left + BULLET_INDENT,
                            text_width,
                            bullet,
                            line,
                        );
                    }
                }
            }
        }

        self.y -= style.margin.bottom;
        if self.y < self.geometry.bottom() {
            self.new_page();
        }
    }

    fn place_line(
        &mut self,
        style: &Style,
        font: PdfFont,
        x: f32,
        width: f32,
        bullet_x: Option<f32>,
        line: Vec<u8>,
    ) {
        let size = style.font_size;
        let natural = size * font.line_gap();
        let height = natural * style.line_height;

        if self.y - height < self.geometry.bottom() && !self.at_page_top() {
            self.new_page();
        }

        if let Some(color) = style.fill {
            self.current.ops.push(DrawOp::Fill {
                x,
                y: self.y - height,
                width,
                height,
                color,
            });
        }

        let baseline = self.y - (height - natural) / 2.0 - size * font.ascent();
        if let Some(bx) = bullet_x {
            self.current.ops.push(DrawOp::Text {
                x: bx,
                y: baseline,
                font,
                size,
                color: style.color,
                text: vec![BULLET],
            });
        }
        if !line.is_empty() {
            self.current.ops.push(DrawOp::Text {
                x,
                y: baseline,
                font,
                size,
                color: style.color,
                text: line,
            });
        }

        self.y -= height;
    }

    fn finish(mut self) -> Vec<Page> {
        if !self.current.ops.is_empty() || self.pages.is_empty() {
            self.pages.push(self.current);
        }
        self.pages
    }
}

/// Break text into encoded lines that fit `width`.
///
/// Explicit newlines always break. Prose wraps at spaces; `verbatim` text
/// keeps its spacing and breaks mid-line only when a line is too wide.
fn wrap(text: &str, font: PdfFont, size: f32, width: f32, verbatim: bool) -> Vec<Vec<u8>> {
    let mut lines = Vec::new();
    for raw in text.split('\n') {
        let encoded = encode_win_ansi(raw);
        if verbatim {
            lines.extend(break_glyphs(&encoded, font, size, width));
        } else {
            lines.extend(wrap_words(&encoded, font, size, width));
        }
    }
    lines
}

fn wrap_words(encoded: &[u8], font: PdfFont, size: f32, width: f32) -> Vec<Vec<u8>> {
    let mut lines = Vec::new();
    let mut line: Vec<u8> = Vec::new();

    for word in encoded.split(|&b| b == b' ').filter(|w| !w.is_empty()) {
        let candidate_width = if line.is_empty() {
            font.text_width(word, size)
        } else {
            font.text_width(&line, size) + font.text_width(b" ", size) + font.text_width(word, size)
        };

        if candidate_width <= width {
            if !line.is_empty() {
                line.push(b' ');
            }
            line.extend_from_slice(word);
            continue;
        }

        if !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if font.text_width(word, size) <= width {
            line.extend_from_slice(word);
        } else {
            let mut pieces = break_glyphs(word, font, size, width);
            line = pieces.pop().unwrap_or_default();
            lines.extend(pieces);
        }
    }

    lines.push(line);
    lines
}

/// Hard-break a run of glyphs wherever it reaches `width`.
fn break_glyphs(encoded: &[u8], font: PdfFont, size: f32, width: f32) -> Vec<Vec<u8>> {
    let mut lines = Vec::new();
    let mut line = Vec::new();
    let mut line_width = 0.0;

    for &b in encoded {
        let glyph = font.glyph_width(b) as f32 * size / 1000.0;
        if line_width + glyph > width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
            line_width = 0.0;
        }
        line.push(b);
        line_width += glyph;
    }

    lines.push(line);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_one_line() {
        let lines = wrap("hello world", PdfFont::Helvetica, 11.0, 500.0, false);
        assert_eq!(lines, vec![b"hello world".to_vec()]);
    }

    #[test]
    fn prose_wraps_at_spaces() {
        let lines = wrap("aaa bbb ccc", PdfFont::Courier, 10.0, 45.0, false);
        // Each word is 18pt wide; two words plus a space are 42pt.
        assert_eq!(lines, vec![b"aaa bbb".to_vec(), b"ccc".to_vec()]);
    }

    #[test]
    fn long_word_is_broken() {
        let lines = wrap("abcdefghij", PdfFont::Courier, 10.0, 30.0, false);
        assert_eq!(lines, vec![b"abcde".to_vec(), b"fghij".to_vec()]);
    }

    #[test]
    fn verbatim_keeps_indentation() {
        let lines = wrap("fn x() {\n    y\n}", PdfFont::Courier, 10.0, 500.0, true);
        assert_eq!(lines, vec![b"fn x() {".to_vec(), b"    y".to_vec(), b"}".to_vec()]);
    }

    #[test]
    fn empty_model_has_one_blank_page() {
        let pages = layout(&DocumentModel::empty(), PageGeometry::A4);
        assert_eq!(pages.len(), 1);
        assert!(pages[0].ops.is_empty());
    }

    #[test]
    fn list_items_get_bullets() {
        let model = plandoc::document_from_markdown("- one\n- two");
        let pages = layout(&model, PageGeometry::A4);
        let bullets = pages[0]
            .ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Text { text, .. } if text == &vec![BULLET]))
            .count();
        assert_eq!(bullets, 2);
    }

    #[test]
    fn code_lines_get_a_fill() {
        let model = plandoc::document_from_markdown("```\na\nb\n```");
        let pages = layout(&model, PageGeometry::A4);
        let fills = pages[0]
            .ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Fill { .. }))
            .count();
        assert_eq!(fills, 2);
    }

    #[test]
    fn long_documents_paginate() {
        let source = (0..200)
            .map(|i| format!("Paragraph number {}", i))
            .collect::<Vec<_>>()
            .join("\n\n");
        let model = plandoc::document_from_markdown(&source);
        let pages = layout(&model, PageGeometry::A4);
        assert!(pages.len() > 1);
        for page in &pages {
            for op in &page.ops {
                if let DrawOp::Text { y, .. } = op {
                    assert!(*y > 0.0 && *y < PageGeometry::A4.height);
                }
            }
        }
    }
}

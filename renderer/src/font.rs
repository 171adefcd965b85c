use plandoc::document::{FontFamily, Style};

/// The standard Type 1 fonts a rendered plan uses. None are embedded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PdfFont {
    Helvetica,
    HelveticaBold,
    Courier,
}

impl PdfFont {
    pub const ALL: [PdfFont; 3] = [PdfFont::Helvetica, PdfFont::HelveticaBold, PdfFont::Courier];

    pub fn for_style(style: &Style) -> Self {
        match (style.font, style.bold) {
            (Some(FontFamily::Courier), _) => PdfFont::Courier,
            (_, true) => PdfFont::HelveticaBold,
            (_, false) => PdfFont::Helvetica,
        }
    }

    pub fn base_name(self) -> &'static str {
        match self {
            PdfFont::Helvetica => "Helvetica",
            PdfFont::HelveticaBold => "Helvetica-Bold",
            PdfFont::Courier => "Courier",
        }
    }

    /// Name of the font in each page's resource dictionary.
    pub fn resource_name(self) -> &'static str {
        match self {
            PdfFont::Helvetica => "F1",
            PdfFont::HelveticaBold => "F2",
            PdfFont::Courier => "F3",
        }
    }

    /// Ascender height as a fraction of the font size.
    pub fn ascent(self) -> f32 {
        match self {
            PdfFont::Helvetica | PdfFont::HelveticaBold => 0.718,
            PdfFont::Courier => 0.629,
        }
    }

    /// Natural line height (bounding box height) as a fraction of the font size.
    pub fn line_gap(self) -> f32 {
        match self {
            PdfFont::Helvetica | PdfFont::HelveticaBold => 1.156,
            PdfFont::Courier => 1.055,
        }
    }

    /// Advance width of one WinAnsi-encoded byte, in thousandths of an em.
    pub fn glyph_width(self, byte: u8) -> u16 {
        match self {
            PdfFont::Courier => 600,
            PdfFont::Helvetica => match byte {
                0x20..=0x7e => HELVETICA[(byte - 0x20) as usize],
                _ => extended_width(byte, 556),
            },
            PdfFont::HelveticaBold => match byte {
                0x20..=0x7e => HELVETICA_BOLD[(byte - 0x20) as usize],
                _ => extended_width(byte, 611),
            },
        }
    }

    /// Width in points of already-encoded text at the given size.
    pub fn text_width(self, encoded: &[u8], size: f32) -> f32 {
        let units: u32 = encoded.iter().map(|&b| self.glyph_width(b) as u32).sum();
        units as f32 * size / 1000.0
    }
}

fn extended_width(byte: u8, fallback: u16) -> u16 {
    match byte {
        0x85 | 0x89 | 0x97 => 1000,
        0x91 | 0x92 | 0x82 => 222,
        0x93 | 0x94 | 0x84 => 333,
        0x95 => 350,
        0x96 => 556,
        0xa0 => 278,
        _ => fallback,
    }
}

// Widths for 0x20..=0x7e from the Adobe core font metrics.
#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

#[cfg(test)]
mod tests {
    use super::PdfFont;

    #[test]
    fn courier_is_monospaced() {
        assert_eq!(PdfFont::Courier.text_width(b"iiii", 10.0), 24.0);
        assert_eq!(PdfFont::Courier.text_width(b"WWWW", 10.0), 24.0);
    }

    #[test]
    fn helvetica_widths() {
        assert_eq!(PdfFont::Helvetica.glyph_width(b' '), 278);
        assert_eq!(PdfFont::Helvetica.glyph_width(b'W'), 944);
        assert_eq!(PdfFont::Helvetica.glyph_width(b'i'), 222);
        assert_eq!(PdfFont::HelveticaBold.glyph_width(b'i'), 278);
        let narrow = PdfFont::Helvetica.text_width(b"iii", 11.0);
        let wide = PdfFont::Helvetica.text_width(b"mmm", 11.0);
        assert!(narrow < wide);
    }
}

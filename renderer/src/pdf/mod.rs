pub mod encoding;

use std::io::{self, Write};

use plandoc::document::Color;

use crate::font::PdfFont;
use crate::layout::{DrawOp, Page, PageGeometry};
use encoding::write_literal;

const CATALOG_ID: usize = 1;
const PAGES_ID: usize = 2;
const INFO_ID: usize = 3;
const FIRST_FONT_ID: usize = 4;

/// Serialises laid-out pages as a PDF 1.4 file.
///
/// Object layout: catalog, page tree, info, one object per font, then a page
/// object and a content stream per page.
pub struct PdfWriter<W: Write> {
    out: CountingWriter<W>,
    offsets: Vec<usize>,
}

impl<W: Write> PdfWriter<W> {
    pub fn new(out: W) -> Self {
        PdfWriter {
            out: CountingWriter { inner: out, written: 0 },
            offsets: Vec::new(),
        }
    }

    pub fn write_document(
        mut self,
        pages: &[Page],
        geometry: PageGeometry,
        title: &str,
    ) -> io::Result<W> {
        self.out.write_all(b"%PDF-1.4\n%\xe2\xe3\xcf\xd3\n")?;

        let first_page_id = FIRST_FONT_ID + PdfFont::ALL.len();
        let page_ids: Vec<usize> = (0..pages.len()).map(|i| first_page_id + 2 * i).collect();

        self.begin_object(CATALOG_ID)?;
        write!(self.out, "<< /Type /Catalog /Pages {} 0 R >>", PAGES_ID)?;
        self.end_object()?;

        self.begin_object(PAGES_ID)?;
        let kids: Vec<String> = page_ids.iter().map(|id| format!("{} 0 R", id)).collect();
        write!(
            self.out,
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids.join(" "),
            pages.len()
        )?;
        self.end_object()?;

        self.begin_object(INFO_ID)?;
        let mut info = b"<< /Producer (plandoc) /Title ".to_vec();
        write_literal(&mut info, &encoding::encode_win_ansi(title));
        info.extend_from_slice(b" >>");
        self.out.write_all(&info)?;
        self.end_object()?;

        for (i, font) in PdfFont::ALL.iter().enumerate() {
            self.begin_object(FIRST_FONT_ID + i)?;
            write!(
                self.out,
                "<< /Type /Font /Subtype /Type1 /BaseFont /{} /Encoding /WinAnsiEncoding >>",
                font.base_name()
            )?;
            self.end_object()?;
        }

        let font_resources: Vec<String> = PdfFont::ALL
            .iter()
            .enumerate()
            .map(|(i, font)| format!("/{} {} 0 R", font.resource_name(), FIRST_FONT_ID + i))
            .collect();
        let font_resources = font_resources.join(" ");

        for (page, &page_id) in pages.iter().zip(&page_ids) {
            let content_id = page_id + 1;

            self.begin_object(page_id)?;
            write!(
                self.out,
                "<< /Type /Page /Parent {} 0 R /MediaBox [0 0 {} {}] /Resources << /Font << {} >> >> /Contents {} 0 R >>",
                PAGES_ID,
                number(geometry.width),
                number(geometry.height),
                font_resources,
                content_id
            )?;
            self.end_object()?;

            let stream = content_stream(page);
            self.begin_object(content_id)?;
            write!(self.out, "<< /Length {} >>\nstream\n", stream.len())?;
            self.out.write_all(&stream)?;
            self.out.write_all(b"\nendstream")?;
            self.end_object()?;
        }

        self.finish()
    }

    fn begin_object(&mut self, id: usize) -> io::Result<()> {
        if self.offsets.len() < id {
            self.offsets.resize(id, 0);
        }
        self.offsets[id - 1] = self.out.written;
        writeln!(self.out, "{} 0 obj", id)
    }

    fn end_object(&mut self) -> io::Result<()> {
        self.out.write_all(b"\nendobj\n")
    }

    fn finish(mut self) -> io::Result<W> {
        let xref_offset = self.out.written;
        let count = self.offsets.len() + 1;
        write!(self.out, "xref\n0 {}\n0000000000 65535 f \n", count)?;
        for offset in &self.offsets {
            write!(self.out, "{:010} 00000 n \n", offset)?;
        }
        write!(
            self.out,
            "trailer\n<< /Size {} /Root {} 0 R /Info {} 0 R >>\nstartxref\n{}\n%%EOF\n",
            count, CATALOG_ID, INFO_ID, xref_offset
        )?;
        self.out.flush()?;
        Ok(self.out.inner)
    }
}

/// Build the content stream operators for one page.
fn content_stream(page: &Page) -> Vec<u8> {
    let mut stream = Vec::new();
    for op in &page.ops {
        match op {
            DrawOp::Fill {
                x,
                y,
                width,
                height,
                color,
            } => {
                stream.extend_from_slice(
                    format!(
                        "{} rg\n{} {} {} {} re\nf\n",
                        rgb(*color),
                        number(*x),
                        number(*y),
                        number(*width),
                        number(*height)
                    )
                    .as_bytes(),
                );
            }
            DrawOp::Text {
                x,
                y,
                font,
                size,
                color,
                text,
            } => {
                let fill = color.map(rgb).unwrap_or_else(|| "0 0 0".to_string());
                stream.extend_from_slice(
                    format!(
                        "BT\n/{} {} Tf\n{} rg\n{} {} Td\n",
                        font.resource_name(),
                        number(*size),
                        fill,
                        number(*x),
                        number(*y)
                    )
                    .as_bytes(),
                );
                write_literal(&mut stream, text);
                stream.extend_from_slice(b" Tj\nET\n");
            }
        }
    }
    stream
}

fn rgb(color: Color) -> String {
    format!(
        "{} {} {}",
        number(color.r as f32 / 255.0),
        number(color.g as f32 / 255.0),
        number(color.b as f32 / 255.0)
    )
}

/// Format a number the way PDF expects: no exponent, at most three decimals.
fn number(value: f32) -> String {
    let formatted = format!("{:.3}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "" | "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

struct CountingWriter<W> {
    inner: W,
    written: usize,
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.written += n;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

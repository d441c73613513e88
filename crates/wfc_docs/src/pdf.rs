//! PDF rendering of an experience record.
//!
//! Generates minimal but valid PDF 1.4 files using raw PDF format
//! construction, with the built-in Helvetica fonts — no external font files
//! required. Every page carries the fixed running header, margins are 10% of
//! the page width on each side, and body text wraps to the content width and
//! flows onto new pages as a page fills.
//!
//! Text is limited to the Latin-1 repertoire of the built-in fonts. Anything
//! outside it fails the whole render with [`ExportError::Encoding`] rather
//! than silently corrupting the output.

use serde::{Deserialize, Serialize};
use wfc_core::{FieldValue, Record};

use crate::error::ExportError;

/// Approximate average glyph width for Helvetica, as a fraction of the font
/// size. Used for wrapping and centering; a rough metric is acceptable since
/// lines only need to stay inside the margins.
const CHAR_WIDTH_FACTOR: f64 = 0.5;

/// Page geometry and typography.
///
/// `Default` matches the experience document: A4, 10% side margins, 12pt
/// Helvetica. Serde-friendly so a hosting app can load overrides from its
/// own configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSetup {
    pub page_width: f64,
    pub page_height: f64,
    /// Left/right margin as a fraction of the page width.
    pub margin_ratio: f64,
    /// Header line repeated at the top of every page.
    pub header_text: String,
    pub title_size: f64,
    pub body_size: f64,
    pub line_height: f64,
}

impl Default for PageSetup {
    fn default() -> Self {
        Self {
            page_width: 595.0,
            page_height: 842.0,
            margin_ratio: 0.10,
            header_text: "Blue Earth County Career Workforce Center Experience".into(),
            title_size: 12.0,
            body_size: 12.0,
            line_height: 16.0,
        }
    }
}

impl PageSetup {
    fn margin(&self) -> f64 {
        self.page_width * self.margin_ratio
    }

    fn content_width(&self) -> f64 {
        self.page_width - 2.0 * self.margin()
    }

    fn max_line_chars(&self) -> usize {
        (self.content_width() / (CHAR_WIDTH_FACTOR * self.body_size)).max(1.0) as usize
    }
}

#[derive(Clone, Copy)]
enum Font {
    Bold,
    Regular,
}

impl Font {
    fn resource(self) -> &'static str {
        match self {
            Self::Bold => "F1",
            Self::Regular => "F2",
        }
    }
}

/// Section-oriented PDF writer.
///
/// Configured with a [`PageSetup`] and driven through `add_section` calls;
/// the writer owns the running header, word wrapping, and page breaks. The
/// caller never positions anything.
pub struct PdfDocument {
    setup: PageSetup,
    /// Finished page content streams; the current page is in `content`.
    pages: Vec<String>,
    content: String,
    /// Baseline y of the next line to write.
    cursor: f64,
}

impl PdfDocument {
    /// Fails if the configured header text falls outside the font encoding.
    pub fn new(setup: PageSetup) -> Result<Self, ExportError> {
        check_encodable(&setup.header_text, "page header")?;
        let mut doc = Self {
            setup,
            pages: Vec::new(),
            content: String::new(),
            cursor: 0.0,
        };
        doc.start_page();
        Ok(doc)
    }

    /// Explicit page break. The new page begins with the running header.
    pub fn new_page(&mut self) {
        let finished = std::mem::take(&mut self.content);
        self.pages.push(finished);
        self.start_page();
    }

    /// Bold title line, wrapped body paragraph, blank-line gap.
    pub fn add_section(&mut self, title: &str, body: &str) -> Result<(), ExportError> {
        check_encodable(title, "section title")?;
        check_encodable(body, title)?;

        self.begin_section(title);
        self.paragraph(body);
        self.blank_line();
        Ok(())
    }

    /// Section whose body is a list of independently wrapped paragraphs,
    /// with a blank line after each. An empty list renders the title alone.
    pub fn add_section_with_paragraphs(
        &mut self,
        title: &str,
        paragraphs: &[String],
    ) -> Result<(), ExportError> {
        check_encodable(title, "section title")?;
        for p in paragraphs {
            check_encodable(p, title)?;
        }

        self.begin_section(title);
        if paragraphs.is_empty() {
            self.blank_line();
        }
        for p in paragraphs {
            self.paragraph(p);
            self.blank_line();
        }
        Ok(())
    }

    /// Section whose body is one line per entry, with no gaps between lines.
    pub fn add_section_with_lines(
        &mut self,
        title: &str,
        lines: &[String],
    ) -> Result<(), ExportError> {
        check_encodable(title, "section title")?;
        for line in lines {
            check_encodable(line, title)?;
        }

        self.begin_section(title);
        for line in lines {
            self.paragraph(line);
        }
        self.blank_line();
        Ok(())
    }

    /// Serialize the accumulated pages into a complete PDF file.
    pub fn finish(mut self) -> Vec<u8> {
        let last = std::mem::take(&mut self.content);
        self.pages.push(last);
        build_pdf(&self.setup, &self.pages)
    }

    // -- Layout internals ---------------------------------------------------

    fn start_page(&mut self) {
        self.cursor = self.setup.page_height - self.setup.margin();

        let header = self.setup.header_text.clone();
        let est_width = header.chars().count() as f64 * CHAR_WIDTH_FACTOR * self.setup.title_size;
        let x = ((self.setup.page_width - est_width) / 2.0).max(self.setup.margin());
        self.put_line(Font::Bold, self.setup.title_size, x, &header);

        self.cursor -= 2.0 * self.setup.line_height;
    }

    fn begin_section(&mut self, title: &str) {
        // Keep the title together with at least one body line.
        if self.cursor - 2.0 * self.setup.line_height < self.setup.margin() {
            self.new_page();
        }
        let x = self.setup.margin();
        self.put_line(Font::Bold, self.setup.title_size, x, title);
        self.cursor -= self.setup.line_height;
    }

    fn paragraph(&mut self, text: &str) {
        let max_chars = self.setup.max_line_chars();
        for line in wrap_text(text, max_chars) {
            if self.cursor < self.setup.margin() {
                self.new_page();
            }
            let x = self.setup.margin();
            self.put_line(Font::Regular, self.setup.body_size, x, &line);
            self.cursor -= self.setup.line_height;
        }
    }

    fn blank_line(&mut self) {
        self.cursor -= self.setup.line_height;
    }

    fn put_line(&mut self, font: Font, size: f64, x: f64, text: &str) {
        self.content.push_str("BT\n");
        self.content
            .push_str(&format!("/{} {size:.0} Tf\n", font.resource()));
        self.content.push_str(&format!("{x:.2} {:.2} Td\n", self.cursor));
        self.content
            .push_str(&format!("({}) Tj\n", pdf_escape(text)));
        self.content.push_str("ET\n");
    }
}

/// Render `record` as a complete PDF document using the default [`PageSetup`].
pub fn generate_pdf(record: &Record) -> Result<Vec<u8>, ExportError> {
    generate_pdf_with(record, &PageSetup::default())
}

/// Render `record` with explicit page geometry.
///
/// One section per field, in insertion order. Conduct selections render one
/// paragraph per selected item; criterion ratings render one line per
/// criterion as `"<criterion>: <rating>/10"`.
pub fn generate_pdf_with(record: &Record, setup: &PageSetup) -> Result<Vec<u8>, ExportError> {
    let mut doc = PdfDocument::new(setup.clone())?;

    for (name, value) in record.iter() {
        match value {
            FieldValue::ConductSelection(items) => {
                doc.add_section_with_paragraphs(name, items)?;
            }
            FieldValue::CriterionRatings(ratings) => {
                doc.add_section_with_lines(name, &ratings.lines())?;
            }
            other => {
                doc.add_section(name, &other.display_text())?;
            }
        }
    }

    Ok(doc.finish())
}

// ---------------------------------------------------------------------------
// Text handling
// ---------------------------------------------------------------------------

/// Reject any character the single-byte font encoding cannot carry.
fn check_encodable(text: &str, context: &str) -> Result<(), ExportError> {
    match text.chars().find(|c| *c as u32 > 0xFF) {
        Some(ch) => Err(ExportError::Encoding {
            ch,
            context: context.to_string(),
        }),
        None => Ok(()),
    }
}

/// Escape special characters for PDF string literals.
fn pdf_escape(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('(', "\\(")
        .replace(')', "\\)")
}

/// Greedy word wrap to `max_chars` columns. Explicit newlines in `text` are
/// honored; words longer than a full line are hard-split.
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();

    for raw in text.lines() {
        if raw.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        let mut current_len = 0usize;
        for word in raw.split_whitespace() {
            for piece in split_long_word(word, max_chars) {
                let piece_len = piece.chars().count();
                let needed = if current.is_empty() {
                    piece_len
                } else {
                    current_len + 1 + piece_len
                };
                if needed > max_chars && !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                if !current.is_empty() {
                    current.push(' ');
                    current_len += 1;
                }
                current.push_str(&piece);
                current_len += piece_len;
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }

    lines
}

fn split_long_word(word: &str, max_chars: usize) -> Vec<String> {
    if word.chars().count() <= max_chars {
        return vec![word.to_string()];
    }
    let chars: Vec<char> = word.chars().collect();
    chars
        .chunks(max_chars)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

// ---------------------------------------------------------------------------
// File construction
// ---------------------------------------------------------------------------

/// Append `s` to `buf` one byte per character. Callers have already checked
/// that every character is within Latin-1.
fn push_latin1(buf: &mut Vec<u8>, s: &str) {
    buf.extend(s.chars().map(|c| c as u8));
}

/// Assemble the PDF 1.4 file: catalog, page tree, one page and content
/// stream per entry in `pages`, the two font objects, info, xref, trailer.
fn build_pdf(setup: &PageSetup, pages: &[String]) -> Vec<u8> {
    let mut buf: Vec<u8> = Vec::new();
    let mut offsets: Vec<usize> = Vec::new();

    push_latin1(&mut buf, "%PDF-1.4\n");

    let n = pages.len();
    let font_bold_obj = 3 + 2 * n;
    let font_regular_obj = font_bold_obj + 1;
    let info_obj = font_regular_obj + 1;

    // Obj 1: Catalog
    offsets.push(buf.len());
    push_latin1(&mut buf, "1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n");

    // Obj 2: Pages
    offsets.push(buf.len());
    let kids: Vec<String> = (0..n).map(|i| format!("{} 0 R", 3 + 2 * i)).collect();
    push_latin1(
        &mut buf,
        &format!(
            "2 0 obj\n<< /Type /Pages /Kids [{}] /Count {n} >>\nendobj\n",
            kids.join(" ")
        ),
    );

    // One page object + one content stream per page.
    for (i, page) in pages.iter().enumerate() {
        let page_obj = 3 + 2 * i;
        let content_obj = page_obj + 1;

        offsets.push(buf.len());
        push_latin1(
            &mut buf,
            &format!(
                "{page_obj} 0 obj\n<< /Type /Page /Parent 2 0 R \
                 /MediaBox [0 0 {:.0} {:.0}] \
                 /Contents {content_obj} 0 R /Resources << /Font << \
                 /F1 {font_bold_obj} 0 R /F2 {font_regular_obj} 0 R >> >> >>\nendobj\n",
                setup.page_width, setup.page_height
            ),
        );

        let stream: Vec<u8> = page.chars().map(|c| c as u8).collect();
        offsets.push(buf.len());
        push_latin1(
            &mut buf,
            &format!("{content_obj} 0 obj\n<< /Length {} >>\nstream\n", stream.len()),
        );
        buf.extend_from_slice(&stream);
        push_latin1(&mut buf, "\nendstream\nendobj\n");
    }

    // Font objects (WinAnsi so accented Latin-1 text renders correctly).
    offsets.push(buf.len());
    push_latin1(
        &mut buf,
        &format!(
            "{font_bold_obj} 0 obj\n<< /Type /Font /Subtype /Type1 \
             /BaseFont /Helvetica-Bold /Encoding /WinAnsiEncoding >>\nendobj\n"
        ),
    );
    offsets.push(buf.len());
    push_latin1(
        &mut buf,
        &format!(
            "{font_regular_obj} 0 obj\n<< /Type /Font /Subtype /Type1 \
             /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>\nendobj\n"
        ),
    );

    // Info
    offsets.push(buf.len());
    push_latin1(
        &mut buf,
        &format!(
            "{info_obj} 0 obj\n<< /Title ({}) /Producer (wfc_docs) >>\nendobj\n",
            pdf_escape(&setup.header_text)
        ),
    );

    // Cross-reference table
    let xref_offset = buf.len();
    let num_objects = offsets.len() + 1; // +1 for free entry
    push_latin1(&mut buf, &format!("xref\n0 {num_objects}\n"));
    push_latin1(&mut buf, "0000000000 65535 f \n");
    for offset in &offsets {
        push_latin1(&mut buf, &format!("{offset:010} 00000 n \n"));
    }

    // Trailer
    push_latin1(
        &mut buf,
        &format!("trailer\n<< /Size {num_objects} /Root 1 0 R /Info {info_obj} 0 R >>\n"),
    );
    push_latin1(&mut buf, &format!("startxref\n{xref_offset}\n%%EOF\n"));

    buf
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

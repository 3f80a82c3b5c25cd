//! The standard fonts used for text.
//!
//! All text is set in the base-14 Helvetica family, which every PDF viewer
//! provides, so no font program has to be embedded. Text is encoded with
//! `WinAnsiEncoding`; the advance widths below are the ones from the Adobe
//! font metrics of the respective fonts.

use pdf_writer::Name;

/// The ratio between the line height and the font size.
pub const LEADING: f32 = 1.2;

const ASCENDER: f32 = 0.718;
const DESCENDER: f32 = -0.207;

// Used for everything outside of printable ASCII.
const AVERAGE_ADVANCE: u16 = 556;

#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// A standard Type1 font.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum StandardFont {
    /// Helvetica.
    Helvetica,
    /// Helvetica-Bold.
    HelveticaBold,
}

impl StandardFont {
    /// The PostScript name of the font.
    pub(crate) fn base_font(self) -> Name<'static> {
        match self {
            StandardFont::Helvetica => Name(b"Helvetica"),
            StandardFont::HelveticaBold => Name(b"Helvetica-Bold"),
        }
    }

    /// The name under which the font is registered in a page's resources.
    pub(crate) fn resource_name(self) -> Name<'static> {
        match self {
            StandardFont::Helvetica => Name(b"F1"),
            StandardFont::HelveticaBold => Name(b"F2"),
        }
    }

    fn widths(self) -> &'static [u16; 95] {
        match self {
            StandardFont::Helvetica => &HELVETICA_WIDTHS,
            StandardFont::HelveticaBold => &HELVETICA_BOLD_WIDTHS,
        }
    }

    /// The advance of an encoded byte, in thousandths of the font size.
    fn advance(self, byte: u8) -> u16 {
        match byte {
            0x20..=0x7e => self.widths()[(byte - 0x20) as usize],
            _ => AVERAGE_ADVANCE,
        }
    }

    /// The width of `text` when set at `size`.
    pub fn text_width(self, text: &str, size: f32) -> f32 {
        let units: u32 = encode_win_ansi(text)
            .into_iter()
            .map(|b| self.advance(b) as u32)
            .sum();
        units as f32 / 1000.0 * size
    }

    /// The distance from the top of a line box to the baseline.
    pub fn baseline_offset(self, size: f32) -> f32 {
        let glyph_height = (ASCENDER - DESCENDER) * size;
        (line_height(size) - glyph_height) / 2.0 + ASCENDER * size
    }
}

/// The height of a single line of text set at `size`.
pub fn line_height(size: f32) -> f32 {
    size * LEADING
}

/// Encode `text` with `WinAnsiEncoding`.
///
/// Tabs become spaces and characters without a representation become `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars().map(win_ansi_byte).collect()
}

fn win_ansi_byte(c: char) -> u8 {
    match c {
        '\t' => b' ',
        ' '..='~' => c as u8,
        '\u{a0}'..='\u{ff}' => c as u32 as u8,
        '\u{20ac}' => 0x80,
        '\u{201a}' => 0x82,
        '\u{0192}' => 0x83,
        '\u{201e}' => 0x84,
        '\u{2026}' => 0x85,
        '\u{2020}' => 0x86,
        '\u{2021}' => 0x87,
        '\u{02c6}' => 0x88,
        '\u{2030}' => 0x89,
        '\u{0160}' => 0x8a,
        '\u{2039}' => 0x8b,
        '\u{0152}' => 0x8c,
        '\u{017d}' => 0x8e,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201c}' => 0x93,
        '\u{201d}' => 0x94,
        '\u{2022}' => 0x95,
        '\u{2013}' => 0x96,
        '\u{2014}' => 0x97,
        '\u{02dc}' => 0x98,
        '\u{2122}' => 0x99,
        '\u{0161}' => 0x9a,
        '\u{203a}' => 0x9b,
        '\u{0153}' => 0x9c,
        '\u{017e}' => 0x9e,
        '\u{0178}' => 0x9f,
        _ => b'?',
    }
}

/// Break `text` into lines no wider than `max_width`.
///
/// Newlines always start a new line. Words are separated by single spaces;
/// a word that is wider than `max_width` on its own is split between
/// characters. The result always contains at least one line.
pub fn wrap_lines(text: &str, font: StandardFont, size: f32, max_width: f32) -> Vec<String> {
    let fits = |s: &str| font.text_width(s, size) <= max_width;
    let mut lines = vec![];

    for paragraph in text.split('\n') {
        let paragraph = paragraph.strip_suffix('\r').unwrap_or(paragraph);
        let mut current = String::new();

        for word in paragraph.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", current, word)
            };

            if fits(&candidate) {
                current = candidate;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }

            if fits(word) {
                current = word.to_string();
                continue;
            }

            for c in word.chars() {
                current.push(c);

                if !fits(&current) && current.chars().count() > 1 {
                    current.pop();
                    lines.push(std::mem::replace(&mut current, c.to_string()));
                }
            }
        }

        lines.push(current);
    }

    lines
}

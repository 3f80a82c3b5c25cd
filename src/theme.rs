//! The fixed visual theme of the document.
//!
//! All styling decisions live in this module as plain data. The composer walks
//! the ordered [`Theme::sections`] table with a single routine, so changing the
//! look of a section never requires touching control flow.
//!
//! The defaults are part of the document contract: the 3:6:3:3:3 profile
//! columns, the gray palette, the font sizes and, in particular, the separator
//! that closes each section (dashed after Skills and Education, solid after
//! Experience and Summary).

use crate::record::Field;

/// An RGB color.
#[derive(Debug, Hash, Eq, PartialEq, Clone, Copy)]
pub struct Color(u8, u8, u8);

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl Color {
    /// Black.
    pub const BLACK: Color = Color::new(0, 0, 0);
    /// White.
    pub const WHITE: Color = Color::new(255, 255, 255);
    /// The dark gray used behind the profile strip.
    pub const DARK_GRAY: Color = Color::new(64, 64, 64);
    /// The light gray used behind section headings.
    pub const LIGHT_GRAY: Color = Color::new(192, 192, 192);

    /// Create a new RGB color.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Color(red, green, blue)
    }

    pub(crate) fn to_pdf_color(self) -> [f32; 3] {
        [
            self.0 as f32 / 255.0,
            self.1 as f32 / 255.0,
            self.2 as f32 / 255.0,
        ]
    }
}

/// How a separator line is drawn.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum SeparatorKind {
    /// A dashed line.
    Dashed,
    /// A continuous line.
    Solid,
}

/// One of the four labeled resume sections.
#[allow(missing_docs)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum SectionKind {
    Skills,
    Experience,
    Summary,
    Education,
}

impl SectionKind {
    /// The record field holding the section's body.
    pub fn field(self) -> Field {
        match self {
            SectionKind::Skills => Field::Skills,
            SectionKind::Experience => Field::Experience,
            SectionKind::Summary => Field::Summary,
            SectionKind::Education => Field::Education,
        }
    }
}

/// The styling of one section: heading bar, body and closing separator.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionStyle {
    /// Which section this is.
    pub kind: SectionKind,
    /// The heading title.
    pub title: &'static str,
    /// The background of the heading bar.
    pub background: Color,
    /// The color of the heading title.
    pub foreground: Color,
    /// The font size of the heading title.
    pub title_size: f32,
    /// The padding inside the heading bar.
    pub padding: f32,
    /// The font size of the body paragraph.
    pub body_size: f32,
    /// The separator drawn after the body.
    pub separator: SeparatorKind,
}

impl SectionStyle {
    const fn new(kind: SectionKind, title: &'static str, separator: SeparatorKind) -> Self {
        Self {
            kind,
            title,
            background: Color::LIGHT_GRAY,
            foreground: Color::WHITE,
            title_size: 16.0,
            padding: 5.0,
            body_size: 12.0,
            separator,
        }
    }
}

/// The sections in the order they appear in the document.
pub const SECTIONS: [SectionStyle; 4] = [
    SectionStyle::new(SectionKind::Skills, "Skills", SeparatorKind::Dashed),
    SectionStyle::new(SectionKind::Experience, "Experience", SeparatorKind::Solid),
    SectionStyle::new(SectionKind::Summary, "Summary", SeparatorKind::Solid),
    SectionStyle::new(SectionKind::Education, "Education", SeparatorKind::Dashed),
];

/// The styling of the profile strip.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileStyle {
    /// Relative widths of the name, email, phone, LinkedIn and GitHub columns.
    pub column_widths: [f32; 5],
    /// The padding inside each cell.
    pub padding: f32,
    /// The background of each cell.
    pub background: Color,
    /// The text color of each cell.
    pub foreground: Color,
    /// The font size of the cell text.
    pub font_size: f32,
    /// The space below the strip.
    pub margin_bottom: f32,
    /// The anchor text of the LinkedIn cell.
    pub linkedin_label: &'static str,
    /// The anchor text of the GitHub cell.
    pub github_label: &'static str,
}

impl Default for ProfileStyle {
    fn default() -> Self {
        Self {
            column_widths: [3.0, 6.0, 3.0, 3.0, 3.0],
            padding: 5.0,
            background: Color::DARK_GRAY,
            foreground: Color::WHITE,
            font_size: 12.0,
            margin_bottom: 10.0,
            linkedin_label: "LinkedIn",
            github_label: "GitHub",
        }
    }
}

/// The styling of separator lines.
#[derive(Debug, Clone, PartialEq)]
pub struct SeparatorStyle {
    /// The stroke width of the line.
    pub line_width: f32,
    /// The stroke color of the line.
    pub color: Color,
    /// The space above the line.
    pub margin_top: f32,
    /// The space below the line.
    pub margin_bottom: f32,
    /// The on/off lengths of a dashed line.
    pub dash: [f32; 2],
}

impl Default for SeparatorStyle {
    fn default() -> Self {
        Self {
            line_width: 1.0,
            color: Color::BLACK,
            margin_top: 10.0,
            margin_bottom: 10.0,
            dash: [2.0, 2.0],
        }
    }
}

/// The styling of section body paragraphs, apart from their font size.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyStyle {
    /// The text color.
    pub color: Color,
    /// The space above and below a paragraph.
    pub spacing: f32,
}

impl Default for BodyStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            spacing: 4.0,
        }
    }
}

/// The complete styling table.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// The profile strip.
    pub profile: ProfileStyle,
    /// The sections, in document order.
    pub sections: [SectionStyle; 4],
    /// Body paragraphs.
    pub body: BodyStyle,
    /// Separator lines.
    pub separator: SeparatorStyle,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            profile: ProfileStyle::default(),
            sections: SECTIONS,
            body: BodyStyle::default(),
            separator: SeparatorStyle::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::record::Field;
    use crate::theme::{Color, SectionKind, SeparatorKind, Theme};

    #[test]
    fn section_order_and_separators() {
        let theme = Theme::default();
        let table: Vec<_> = theme
            .sections
            .iter()
            .map(|s| (s.title, s.separator))
            .collect();

        assert_eq!(
            table,
            vec![
                ("Skills", SeparatorKind::Dashed),
                ("Experience", SeparatorKind::Solid),
                ("Summary", SeparatorKind::Solid),
                ("Education", SeparatorKind::Dashed),
            ]
        );
    }

    #[test]
    fn headings_share_styling() {
        for section in Theme::default().sections {
            assert_eq!(section.background, Color::LIGHT_GRAY);
            assert_eq!(section.foreground, Color::WHITE);
            assert_eq!(section.title_size, 16.0);
            assert_eq!(section.body_size, 12.0);
        }
    }

    #[test]
    fn sections_map_to_fields() {
        assert_eq!(SectionKind::Skills.field(), Field::Skills);
        assert_eq!(SectionKind::Summary.field(), Field::Summary);
    }

    #[test]
    fn color_to_pdf() {
        assert_eq!(Color::WHITE.to_pdf_color(), [1.0, 1.0, 1.0]);
        assert_eq!(Color::BLACK.to_pdf_color(), [0.0, 0.0, 0.0]);
    }
}

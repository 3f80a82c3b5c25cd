//! Composing a resume record into layout blocks.
//!
//! The composer emits exactly thirteen blocks, always in the same order:
//!
//! 1. the profile strip (name, email, phone, LinkedIn, GitHub),
//! 2. for Skills, Experience, Summary and Education, in that order:
//!    a heading bar, the body paragraph and a separator.
//!
//! Emission stops at the first block the surface fails to draw.

use log::debug;

use crate::block::{
    CellContent, LayoutBlock, ProfileCell, ProfileStrip, RenderSurface, SectionBody,
    SectionHeading, Separator,
};
use crate::error::RenderResult;
use crate::record::ResumeRecord;
use crate::theme::{SectionStyle, Theme};

/// The number of blocks a composition emits.
pub const BLOCK_COUNT: usize = 1 + 3 * 4;

/// Translates a [`ResumeRecord`] into layout blocks drawn onto a surface.
#[derive(Debug, Clone, Default)]
pub struct DocumentComposer {
    theme: Theme,
}

impl DocumentComposer {
    /// Create a composer with the default theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a composer with a specific theme.
    pub fn with_theme(theme: Theme) -> Self {
        Self { theme }
    }

    /// The theme of the composer.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Draw the whole document onto `surface`.
    pub fn compose<S>(&self, record: &ResumeRecord, surface: &mut S) -> RenderResult<()>
    where
        S: RenderSurface + ?Sized,
    {
        emit(
            surface,
            &LayoutBlock::ProfileStrip(self.profile_strip(record)),
        )?;

        for section in &self.theme.sections {
            self.render_section(record, section, surface)?;
        }

        Ok(())
    }

    fn profile_strip<'a>(&'a self, record: &'a ResumeRecord) -> ProfileStrip<'a> {
        let style = &self.theme.profile;
        let [name_w, email_w, phone_w, linkedin_w, github_w] = style.column_widths;

        let cell = |content, relative_width| ProfileCell {
            content,
            relative_width,
        };

        ProfileStrip {
            cells: [
                cell(CellContent::Text(record.name()), name_w),
                cell(CellContent::Text(record.email()), email_w),
                cell(CellContent::Text(record.phone()), phone_w),
                cell(
                    CellContent::Link {
                        label: style.linkedin_label,
                        uri: record.linkedin_url(),
                    },
                    linkedin_w,
                ),
                cell(
                    CellContent::Link {
                        label: style.github_label,
                        uri: record.github_url(),
                    },
                    github_w,
                ),
            ],
            padding: style.padding,
            background: style.background,
            foreground: style.foreground,
            font_size: style.font_size,
            margin_bottom: style.margin_bottom,
        }
    }

    fn render_section<S>(
        &self,
        record: &ResumeRecord,
        section: &SectionStyle,
        surface: &mut S,
    ) -> RenderResult<()>
    where
        S: RenderSurface + ?Sized,
    {
        let separator = &self.theme.separator;
        let body = &self.theme.body;

        emit(
            surface,
            &LayoutBlock::SectionHeading(SectionHeading {
                title: section.title,
                background: section.background,
                foreground: section.foreground,
                font_size: section.title_size,
                padding: section.padding,
            }),
        )?;

        emit(
            surface,
            &LayoutBlock::SectionBody(SectionBody {
                text: record.get(section.kind.field()),
                font_size: section.body_size,
                color: body.color,
                spacing: body.spacing,
            }),
        )?;

        emit(
            surface,
            &LayoutBlock::Separator(Separator {
                kind: section.separator,
                line_width: separator.line_width,
                color: separator.color,
                margin_top: separator.margin_top,
                margin_bottom: separator.margin_bottom,
                dash: separator.dash,
            }),
        )
    }
}

fn emit<S>(surface: &mut S, block: &LayoutBlock<'_>) -> RenderResult<()>
where
    S: RenderSurface + ?Sized,
{
    debug!("drawing {}", block.kind_name());
    surface.draw(block)
}

/// Draw `record` onto `surface` using the default theme.
pub fn compose<S>(record: &ResumeRecord, surface: &mut S) -> RenderResult<()>
where
    S: RenderSurface + ?Sized,
{
    DocumentComposer::new().compose(record, surface)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::block::{CellContent, LayoutBlock, RenderSurface};
    use crate::compose::{compose, DocumentComposer, BLOCK_COUNT};
    use crate::error::{RenderError, RenderResult};
    use crate::record::ResumeRecord;
    use crate::theme::{Color, SeparatorKind, Theme};

    #[derive(Debug, Clone, PartialEq)]
    enum Recorded {
        Profile(Vec<(String, Option<String>, f32)>),
        Heading(String),
        Body(String),
        Separator(SeparatorKind),
    }

    #[derive(Default)]
    struct RecordingSurface {
        blocks: Vec<Recorded>,
        fail_at: Option<usize>,
        attempts: usize,
    }

    impl RecordingSurface {
        fn failing_at(index: usize) -> Self {
            Self {
                fail_at: Some(index),
                ..Self::default()
            }
        }
    }

    impl RenderSurface for RecordingSurface {
        fn draw(&mut self, block: &LayoutBlock<'_>) -> RenderResult<()> {
            self.attempts += 1;

            if self.fail_at == Some(self.blocks.len()) {
                return Err(RenderError::Io(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    "disk full",
                )));
            }

            let recorded = match block {
                LayoutBlock::ProfileStrip(strip) => Recorded::Profile(
                    strip
                        .cells
                        .iter()
                        .map(|c| match c.content {
                            CellContent::Text(t) => (t.to_string(), None, c.relative_width),
                            CellContent::Link { label, uri } => {
                                (label.to_string(), Some(uri.to_string()), c.relative_width)
                            }
                        })
                        .collect(),
                ),
                LayoutBlock::SectionHeading(h) => Recorded::Heading(h.title.to_string()),
                LayoutBlock::SectionBody(b) => Recorded::Body(b.text.to_string()),
                LayoutBlock::Separator(s) => Recorded::Separator(s.kind),
            };

            self.blocks.push(recorded);
            Ok(())
        }
    }

    fn sample_record() -> ResumeRecord {
        let value = json!({
            "name": "Grace Hopper",
            "email": "grace@example.org",
            "phone": "555-0100",
            "github": "https://github.com/grace",
            "summary_section": "Compiler pioneer.",
            "experience_section": "UNIVAC.",
            "skills_section": "COBOL.",
            "education_section": "Yale.",
        });
        ResumeRecord::from_map(value.as_object().unwrap())
    }

    #[test]
    fn emits_blocks_in_fixed_order() {
        let mut surface = RecordingSurface::default();
        compose(&sample_record(), &mut surface).unwrap();

        assert_eq!(surface.blocks.len(), BLOCK_COUNT);
        assert_eq!(
            surface.blocks[1..],
            [
                Recorded::Heading("Skills".to_string()),
                Recorded::Body("COBOL.".to_string()),
                Recorded::Separator(SeparatorKind::Dashed),
                Recorded::Heading("Experience".to_string()),
                Recorded::Body("UNIVAC.".to_string()),
                Recorded::Separator(SeparatorKind::Solid),
                Recorded::Heading("Summary".to_string()),
                Recorded::Body("Compiler pioneer.".to_string()),
                Recorded::Separator(SeparatorKind::Solid),
                Recorded::Heading("Education".to_string()),
                Recorded::Body("Yale.".to_string()),
                Recorded::Separator(SeparatorKind::Dashed),
            ]
        );
    }

    #[test]
    fn profile_strip_cells() {
        let mut surface = RecordingSurface::default();
        compose(&sample_record(), &mut surface).unwrap();

        assert_eq!(
            surface.blocks[0],
            Recorded::Profile(vec![
                ("Grace Hopper".to_string(), None, 3.0),
                ("grace@example.org".to_string(), None, 6.0),
                ("555-0100".to_string(), None, 3.0),
                (
                    "LinkedIn".to_string(),
                    Some("https://www.linkedin.com".to_string()),
                    3.0
                ),
                (
                    "GitHub".to_string(),
                    Some("https://github.com/grace".to_string()),
                    3.0
                ),
            ])
        );
    }

    #[test]
    fn separators_do_not_depend_on_content() {
        let mut empty = RecordingSurface::default();
        compose(&ResumeRecord::default(), &mut empty).unwrap();
        let mut full = RecordingSurface::default();
        compose(&sample_record(), &mut full).unwrap();

        let separators = |s: &RecordingSurface| {
            s.blocks
                .iter()
                .filter_map(|b| match b {
                    Recorded::Separator(kind) => Some(*kind),
                    _ => None,
                })
                .collect::<Vec<_>>()
        };

        assert_eq!(separators(&empty), separators(&full));
        assert_eq!(
            separators(&empty),
            vec![
                SeparatorKind::Dashed,
                SeparatorKind::Solid,
                SeparatorKind::Solid,
                SeparatorKind::Dashed
            ]
        );
    }

    #[test]
    fn stops_at_first_failure() {
        for fail_at in 0..BLOCK_COUNT {
            let mut surface = RecordingSurface::failing_at(fail_at);
            let result = compose(&sample_record(), &mut surface);

            assert!(matches!(result, Err(RenderError::Io(_))));
            assert_eq!(surface.blocks.len(), fail_at);
            assert_eq!(surface.attempts, fail_at + 1);
        }
    }

    #[test]
    fn works_with_trait_objects() {
        let mut recording = RecordingSurface::default();
        let surface: &mut dyn RenderSurface = &mut recording;
        DocumentComposer::new()
            .compose(&sample_record(), surface)
            .unwrap();
        assert_eq!(recording.blocks.len(), BLOCK_COUNT);
    }

    #[test]
    fn custom_theme_is_applied() {
        struct Check;

        impl RenderSurface for Check {
            fn draw(&mut self, block: &LayoutBlock<'_>) -> RenderResult<()> {
                if let LayoutBlock::SectionHeading(h) = block {
                    assert_eq!(h.background, Color::new(0, 0, 128));
                }
                Ok(())
            }
        }

        let mut theme = Theme::default();
        for section in &mut theme.sections {
            section.background = Color::new(0, 0, 128);
        }

        DocumentComposer::with_theme(theme)
            .compose(&ResumeRecord::default(), &mut Check)
            .unwrap();
    }
}

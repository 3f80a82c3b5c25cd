//! Layout blocks and the surface they are drawn onto.
//!
//! A [`LayoutBlock`] is a single unit of visual output. Blocks are never
//! collected into a document tree: the composer hands each one to a
//! [`RenderSurface`] as soon as it is produced, and the surface is responsible
//! for placing it below everything that was drawn before.

use crate::error::RenderResult;
use crate::theme::{Color, SeparatorKind};

/// The content of a profile cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellContent<'a> {
    /// Plain text.
    Text(&'a str),
    /// A label that links to a URI.
    Link {
        /// The visible anchor text.
        label: &'a str,
        /// The target of the link.
        uri: &'a str,
    },
}

impl CellContent<'_> {
    /// The text that is shown in the cell.
    pub fn text(&self) -> &str {
        match self {
            CellContent::Text(text) => text,
            CellContent::Link { label, .. } => label,
        }
    }
}

/// A single cell of the profile strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileCell<'a> {
    /// What the cell shows.
    pub content: CellContent<'a>,
    /// The width of the cell relative to the other cells.
    pub relative_width: f32,
}

/// A borderless full-width row of five cells.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileStrip<'a> {
    /// Name, email, phone, LinkedIn and GitHub, in that order.
    pub cells: [ProfileCell<'a>; 5],
    /// The padding inside each cell.
    pub padding: f32,
    /// The background of each cell.
    pub background: Color,
    /// The text color.
    pub foreground: Color,
    /// The font size.
    pub font_size: f32,
    /// The space below the strip.
    pub margin_bottom: f32,
}

/// A full-width bar with a bold title.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionHeading<'a> {
    /// The title.
    pub title: &'a str,
    /// The background of the bar.
    pub background: Color,
    /// The color of the title.
    pub foreground: Color,
    /// The font size of the title.
    pub font_size: f32,
    /// The padding inside the bar.
    pub padding: f32,
}

/// A paragraph of body text.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBody<'a> {
    /// The text. Newlines start a new line.
    pub text: &'a str,
    /// The font size.
    pub font_size: f32,
    /// The text color.
    pub color: Color,
    /// The space above and below the paragraph.
    pub spacing: f32,
}

/// A full-width horizontal rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Separator {
    /// Dashed or solid.
    pub kind: SeparatorKind,
    /// The stroke width.
    pub line_width: f32,
    /// The stroke color.
    pub color: Color,
    /// The space above the line.
    pub margin_top: f32,
    /// The space below the line.
    pub margin_bottom: f32,
    /// The on/off lengths used when the line is dashed.
    pub dash: [f32; 2],
}

/// A unit of visual output.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutBlock<'a> {
    /// The contact details at the top of the document.
    ProfileStrip(ProfileStrip<'a>),
    /// The title bar of a section.
    SectionHeading(SectionHeading<'a>),
    /// The body of a section.
    SectionBody(SectionBody<'a>),
    /// The rule closing a section.
    Separator(Separator),
}

impl LayoutBlock<'_> {
    /// A short name of the block kind, used for logging.
    pub fn kind_name(&self) -> &'static str {
        match self {
            LayoutBlock::ProfileStrip(_) => "profile strip",
            LayoutBlock::SectionHeading(_) => "section heading",
            LayoutBlock::SectionBody(_) => "section body",
            LayoutBlock::Separator(_) => "separator",
        }
    }
}

/// Something layout blocks can be drawn onto, one after the other.
///
/// Each call places the block directly below the previously drawn one. An
/// error means the block was not (or not completely) drawn, and the whole
/// document must be considered invalid.
pub trait RenderSurface {
    /// Draw a block below everything drawn so far.
    fn draw(&mut self, block: &LayoutBlock<'_>) -> RenderResult<()>;
}

impl<T: RenderSurface + ?Sized> RenderSurface for &mut T {
    fn draw(&mut self, block: &LayoutBlock<'_>) -> RenderResult<()> {
        (**self).draw(block)
    }
}

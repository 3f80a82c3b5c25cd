//! Drawing layout blocks onto PDF pages.
//!
//! The [`PdfSurface`] is the rendering surface the binary uses. It keeps a
//! vertical cursor and places every block directly below the previous one,
//! inside the margins of the current page. If a block doesn't fit into the
//! remaining space, a new page is started first. Body paragraphs, and profile
//! strips taller than a page, are split between lines. A block that doesn't
//! even fit onto an empty page, or a single line that doesn't, is an error.
//!
//! Once drawing fails, the surface is poisoned: all further draws and
//! [`PdfSurface::finish`] fail, so a partially drawn document can never be
//! mistaken for a complete one.

use std::ops::Range;

use float_cmp::approx_eq;
use log::debug;
use tiny_skia_path::Rect;

use crate::annotation::LinkAnnotation;
use crate::block::{
    CellContent, LayoutBlock, ProfileStrip, RenderSurface, SectionBody, SectionHeading, Separator,
};
use crate::content::ContentBuilder;
use crate::document::Document;
use crate::error::{RenderError, RenderResult};
use crate::font::{line_height, wrap_lines, StandardFont};
use crate::metadata::Metadata;
use crate::page::{Page, PageSettings};
use crate::serialize::SerializeSettings;
use crate::theme::SeparatorKind;

/// A page that is currently being drawn on.
struct PageBuilder {
    content: ContentBuilder,
    annotations: Vec<LinkAnnotation>,
}

impl PageBuilder {
    fn new(page_settings: &PageSettings) -> Self {
        Self {
            content: ContentBuilder::new(page_settings.height()),
            annotations: vec![],
        }
    }

    fn finish(self, page_settings: &PageSettings) -> Page {
        let (content, fonts) = self.content.finish();

        Page {
            settings: page_settings.clone(),
            content,
            fonts,
            annotations: self.annotations,
        }
    }
}

/// A rendering surface producing a PDF document.
pub struct PdfSurface {
    document: Document,
    page_settings: PageSettings,
    page: PageBuilder,
    cursor: f32,
    poisoned: bool,
}

impl PdfSurface {
    /// Create a new surface with an empty first page.
    pub fn new(page_settings: PageSettings, serialize_settings: SerializeSettings) -> Self {
        let page = PageBuilder::new(&page_settings);
        let cursor = page_settings.margins().top;

        Self {
            document: Document::new(serialize_settings),
            page_settings,
            page,
            cursor,
            poisoned: false,
        }
    }

    /// Set the metadata of the document.
    pub fn set_metadata(&mut self, metadata: Metadata) {
        self.document.set_metadata(metadata);
    }

    /// The number of pages drawn so far, including the current one.
    pub fn page_count(&self) -> usize {
        self.document.page_count() + 1
    }

    /// The vertical position below the last drawn block on the current page.
    pub fn cursor(&self) -> f32 {
        self.cursor
    }

    /// Finish the current page and write the document.
    pub fn finish(mut self) -> RenderResult<Vec<u8>> {
        if self.poisoned {
            return Err(RenderError::Poisoned);
        }

        let page = self.page.finish(&self.page_settings);
        self.document.add_page(page);

        Ok(self.document.finish())
    }

    fn content_rect(&self) -> RenderResult<Rect> {
        self.page_settings
            .content_rect()
            .ok_or(RenderError::InvalidGeometry)
    }

    fn new_page(&mut self) {
        let page = std::mem::replace(&mut self.page, PageBuilder::new(&self.page_settings));
        self.document.add_page(page.finish(&self.page_settings));
        self.cursor = self.page_settings.margins().top;
        debug!("starting page {}", self.page_count());
    }

    /// Make sure that `height` fits below the cursor, starting a new page if necessary.
    fn ensure_room(&mut self, height: f32) -> RenderResult<()> {
        let content_rect = self.content_rect()?;
        let fits = |height: f32, available: f32| {
            height <= available || approx_eq!(f32, height, available, epsilon = 0.01)
        };

        if !height.is_finite() || height < 0.0 {
            return Err(RenderError::InvalidGeometry);
        }

        if !fits(height, content_rect.height()) {
            return Err(RenderError::BlockTooTall {
                height,
                available: content_rect.height(),
            });
        }

        if !fits(height, content_rect.bottom() - self.cursor) {
            self.new_page();
        }

        Ok(())
    }

    fn draw_profile_strip(&mut self, strip: &ProfileStrip<'_>) -> RenderResult<()> {
        let content_rect = self.content_rect()?;
        let total: f32 = strip.cells.iter().map(|c| c.relative_width).sum();

        if !(total > 0.0) {
            return Err(RenderError::InvalidGeometry);
        }

        let font = StandardFont::Helvetica;
        let line_height = line_height(strip.font_size);

        let mut columns = Vec::with_capacity(strip.cells.len());
        let mut x = content_rect.left();

        for cell in &strip.cells {
            let width = content_rect.width() * cell.relative_width / total;
            let text_width = width - 2.0 * strip.padding;

            if !(text_width > 0.0) {
                return Err(RenderError::InvalidGeometry);
            }

            let lines = wrap_lines(cell.content.text(), font, strip.font_size, text_width);
            columns.push((x, width, lines));
            x += width;
        }

        let max_lines = columns.iter().map(|(_, _, l)| l.len()).max().unwrap_or(1);
        let row_height = max_lines as f32 * line_height + 2.0 * strip.padding;

        if row_height <= content_rect.height() {
            self.ensure_room(row_height)?;
            self.draw_strip_rows(strip, &columns, 0..max_lines)?;
        } else {
            // Too tall for a single page, so the row continues on the next
            // page(s), line by line.
            let mut start = 0;

            while start < max_lines {
                let mut fitting =
                    fitting_lines(content_rect.bottom() - self.cursor, strip.padding, line_height);

                if fitting == 0 {
                    self.ensure_room(line_height + 2.0 * strip.padding)?;
                    fitting = fitting_lines(
                        content_rect.bottom() - self.cursor,
                        strip.padding,
                        line_height,
                    )
                    .max(1);
                }

                let end = (start + fitting).min(max_lines);
                self.draw_strip_rows(strip, &columns, start..end)?;
                start = end;
            }
        }

        self.cursor += strip.margin_bottom;

        Ok(())
    }

    /// Draw the lines `rows` of every cell of a profile strip at the cursor.
    fn draw_strip_rows(
        &mut self,
        strip: &ProfileStrip<'_>,
        columns: &[(f32, f32, Vec<String>)],
        rows: Range<usize>,
    ) -> RenderResult<()> {
        let font = StandardFont::Helvetica;
        let line_height = line_height(strip.font_size);
        let height = rows.len() as f32 * line_height + 2.0 * strip.padding;
        let top = self.cursor;

        for (cell, (x, width, lines)) in strip.cells.iter().zip(columns) {
            let background =
                Rect::from_xywh(*x, top, *width, height).ok_or(RenderError::InvalidGeometry)?;
            self.page.content.fill_rect(background, strip.background);

            let lines = &lines[rows.start.min(lines.len())..rows.end.min(lines.len())];
            let text_x = x + strip.padding;
            let text_top = top + strip.padding;

            for (index, line) in lines.iter().enumerate() {
                let baseline =
                    text_top + index as f32 * line_height + font.baseline_offset(strip.font_size);
                self.page.content.show_text(
                    text_x,
                    baseline,
                    font,
                    strip.font_size,
                    strip.foreground,
                    line,
                );
            }

            if let CellContent::Link { uri, .. } = cell.content {
                if lines.is_empty() {
                    continue;
                }

                let label_width = lines
                    .iter()
                    .map(|l| font.text_width(l, strip.font_size))
                    .fold(0.0, f32::max)
                    .min(width - 2.0 * strip.padding);
                let rect = Rect::from_xywh(
                    text_x,
                    text_top,
                    label_width,
                    lines.len() as f32 * line_height,
                )
                .ok_or(RenderError::InvalidGeometry)?;

                self.page
                    .annotations
                    .push(LinkAnnotation::new(rect, uri.to_string()));
            }
        }

        self.cursor = top + height;

        Ok(())
    }

    fn draw_heading(&mut self, heading: &SectionHeading<'_>) -> RenderResult<()> {
        let content_rect = self.content_rect()?;
        let font = StandardFont::HelveticaBold;
        let line_height = line_height(heading.font_size);
        let text_width = content_rect.width() - 2.0 * heading.padding;

        if !(text_width > 0.0) {
            return Err(RenderError::InvalidGeometry);
        }

        let lines = wrap_lines(heading.title, font, heading.font_size, text_width);
        let height = lines.len() as f32 * line_height + 2.0 * heading.padding;
        self.ensure_room(height)?;

        let top = self.cursor;
        let bar = Rect::from_xywh(content_rect.left(), top, content_rect.width(), height)
            .ok_or(RenderError::InvalidGeometry)?;
        self.page.content.fill_rect(bar, heading.background);

        for (index, line) in lines.iter().enumerate() {
            let baseline = top
                + heading.padding
                + index as f32 * line_height
                + font.baseline_offset(heading.font_size);
            self.page.content.show_text(
                content_rect.left() + heading.padding,
                baseline,
                font,
                heading.font_size,
                heading.foreground,
                line,
            );
        }

        self.cursor = top + height;

        Ok(())
    }

    fn draw_body(&mut self, body: &SectionBody<'_>) -> RenderResult<()> {
        let content_rect = self.content_rect()?;
        let font = StandardFont::Helvetica;
        let line_height = line_height(body.font_size);
        let lines = wrap_lines(body.text, font, body.font_size, content_rect.width());

        self.cursor += body.spacing;

        for line in &lines {
            self.ensure_room(line_height)?;

            let baseline = self.cursor + font.baseline_offset(body.font_size);
            self.page.content.show_text(
                content_rect.left(),
                baseline,
                font,
                body.font_size,
                body.color,
                line,
            );

            self.cursor += line_height;
        }

        self.cursor += body.spacing;

        Ok(())
    }

    fn draw_separator(&mut self, separator: &Separator) -> RenderResult<()> {
        let content_rect = self.content_rect()?;
        self.ensure_room(separator.margin_top + separator.line_width)?;

        let y = self.cursor + separator.margin_top + separator.line_width / 2.0;
        let dash = match separator.kind {
            SeparatorKind::Dashed => Some(separator.dash),
            SeparatorKind::Solid => None,
        };

        self.page.content.stroke_horizontal(
            content_rect.left(),
            content_rect.right(),
            y,
            separator.line_width,
            separator.color,
            dash,
        );

        self.cursor += separator.margin_top + separator.line_width + separator.margin_bottom;

        Ok(())
    }
}

/// The number of lines of a padded row that fit into `available`.
fn fitting_lines(available: f32, padding: f32, line_height: f32) -> usize {
    let room = available - 2.0 * padding;

    if room <= 0.0 {
        0
    } else {
        ((room + 0.01) / line_height).floor() as usize
    }
}

impl RenderSurface for PdfSurface {
    fn draw(&mut self, block: &LayoutBlock<'_>) -> RenderResult<()> {
        if self.poisoned {
            return Err(RenderError::Poisoned);
        }

        let result = match block {
            LayoutBlock::ProfileStrip(strip) => self.draw_profile_strip(strip),
            LayoutBlock::SectionHeading(heading) => self.draw_heading(heading),
            LayoutBlock::SectionBody(body) => self.draw_body(body),
            LayoutBlock::Separator(separator) => self.draw_separator(separator),
        };

        if let Err(err) = &result {
            debug!("failed to draw {}: {}", block.kind_name(), err);
            self.poisoned = true;
        }

        result
    }
}

//! Page geometry and finished pages.

use std::collections::BTreeSet;

use tiny_skia_path::Rect;

use crate::annotation::LinkAnnotation;
use crate::font::StandardFont;

/// The empty space around the content area of a page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margins {
    /// The top margin.
    pub top: f32,
    /// The right margin.
    pub right: f32,
    /// The bottom margin.
    pub bottom: f32,
    /// The left margin.
    pub left: f32,
}

impl Margins {
    /// The same margin on all four sides.
    pub fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::all(36.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
/// The settings of a page.
pub struct PageSettings {
    width: f32,
    height: f32,
    margins: Margins,
}

impl PageSettings {
    /// Create new page settings with the given dimensions and default margins.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            margins: Margins::default(),
        }
    }

    /// US Letter (8.5 × 11 in).
    pub fn letter() -> Self {
        Self::new(612.0, 792.0)
    }

    /// Change the margins.
    pub fn with_margins(mut self, margins: Margins) -> PageSettings {
        self.margins = margins;
        self
    }

    /// The width of the page.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// The height of the page.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// The margins of the page.
    pub fn margins(&self) -> Margins {
        self.margins
    }

    /// The area inside the margins, in top-left based coordinates.
    ///
    /// Returns `None` if the margins leave no room for content.
    pub fn content_rect(&self) -> Option<Rect> {
        Rect::from_ltrb(
            self.margins.left,
            self.margins.top,
            self.width - self.margins.right,
            self.height - self.margins.bottom,
        )
    }
}

impl Default for PageSettings {
    fn default() -> Self {
        // Default for A4.
        Self::new(595.0, 842.0)
    }
}

/// A page whose content has been completely drawn.
pub(crate) struct Page {
    pub(crate) settings: PageSettings,
    pub(crate) content: Vec<u8>,
    pub(crate) fonts: BTreeSet<StandardFont>,
    pub(crate) annotations: Vec<LinkAnnotation>,
}

#[cfg(test)]
mod tests {
    use crate::page::{Margins, PageSettings};

    #[test]
    fn a4_content_rect() {
        let rect = PageSettings::default().content_rect().unwrap();
        assert_eq!(
            (rect.left(), rect.top(), rect.width(), rect.height()),
            (36.0, 36.0, 523.0, 770.0)
        );
    }

    #[test]
    fn oversized_margins_have_no_content() {
        let settings = PageSettings::new(100.0, 100.0).with_margins(Margins::all(60.0));
        assert!(settings.content_rect().is_none());
    }
}

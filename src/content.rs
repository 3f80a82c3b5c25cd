//! A low-level abstraction over a single content stream.
//!
//! All coordinates passed to the [`ContentBuilder`] are in layout space,
//! where the origin is the top-left corner of the page and y grows downwards.
//! They are flipped into PDF user space when written.

use std::collections::BTreeSet;

use pdf_writer::{Content, Str};
use tiny_skia_path::Rect;

use crate::font::{encode_win_ansi, StandardFont};
use crate::theme::Color;

pub(crate) struct ContentBuilder {
    content: Content,
    page_height: f32,
    fonts: BTreeSet<StandardFont>,
}

impl ContentBuilder {
    pub(crate) fn new(page_height: f32) -> Self {
        Self {
            content: Content::new(),
            page_height,
            fonts: BTreeSet::new(),
        }
    }

    fn flip(&self, y: f32) -> f32 {
        self.page_height - y
    }

    pub(crate) fn fill_rect(&mut self, rect: Rect, color: Color) {
        let [r, g, b] = color.to_pdf_color();
        let bottom = self.flip(rect.bottom());

        self.content.save_state();
        self.content.set_fill_rgb(r, g, b);
        self.content
            .rect(rect.left(), bottom, rect.width(), rect.height());
        self.content.fill_nonzero();
        self.content.restore_state();
    }

    /// Show a single line of text with its baseline starting at `(x, baseline)`.
    pub(crate) fn show_text(
        &mut self,
        x: f32,
        baseline: f32,
        font: StandardFont,
        size: f32,
        color: Color,
        text: &str,
    ) {
        if text.is_empty() {
            return;
        }

        let [r, g, b] = color.to_pdf_color();
        let encoded = encode_win_ansi(text);
        let y = self.flip(baseline);
        self.fonts.insert(font);

        self.content.save_state();
        self.content.set_fill_rgb(r, g, b);
        self.content.begin_text();
        self.content.set_font(font.resource_name(), size);
        self.content.next_line(x, y);
        self.content.show(Str(&encoded));
        self.content.end_text();
        self.content.restore_state();
    }

    /// Stroke a horizontal line at `y` from `x1` to `x2`.
    pub(crate) fn stroke_horizontal(
        &mut self,
        x1: f32,
        x2: f32,
        y: f32,
        line_width: f32,
        color: Color,
        dash: Option<[f32; 2]>,
    ) {
        let [r, g, b] = color.to_pdf_color();
        let y = self.flip(y);

        self.content.save_state();
        self.content.set_line_width(line_width);
        self.content.set_stroke_rgb(r, g, b);

        if let Some(dash) = dash {
            self.content.set_dash_pattern(dash, 0.0);
        }

        self.content.move_to(x1, y);
        self.content.line_to(x2, y);
        self.content.stroke();
        self.content.restore_state();
    }

    /// Return the encoded operators and the fonts they reference.
    pub(crate) fn finish(self) -> (Vec<u8>, BTreeSet<StandardFont>) {
        (self.content.finish(), self.fonts)
    }
}

#[cfg(test)]
mod tests {
    use tiny_skia_path::Rect;

    use crate::content::ContentBuilder;
    use crate::font::StandardFont;
    use crate::theme::Color;

    fn text(builder: ContentBuilder) -> String {
        String::from_utf8(builder.finish().0).unwrap()
    }

    #[test]
    fn fill_rect_is_flipped() {
        let mut builder = ContentBuilder::new(100.0);
        builder.fill_rect(Rect::from_xywh(10.0, 10.0, 20.0, 30.0).unwrap(), Color::WHITE);
        let ops = text(builder);

        assert!(ops.contains("1 1 1 rg"));
        assert!(ops.contains("10 60 20 30 re"));
        assert!(ops.contains("f"));
    }

    #[test]
    fn text_registers_font() {
        let mut builder = ContentBuilder::new(100.0);
        builder.show_text(5.0, 20.0, StandardFont::HelveticaBold, 16.0, Color::BLACK, "Skills");
        let (ops, fonts) = builder.finish();
        let ops = String::from_utf8(ops).unwrap();

        assert!(fonts.contains(&StandardFont::HelveticaBold));
        assert!(ops.contains("/F2 16 Tf"));
        assert!(ops.contains("5 80 Td"));
        assert!(ops.contains("(Skills) Tj"));
    }

    #[test]
    fn empty_text_is_skipped() {
        let mut builder = ContentBuilder::new(100.0);
        builder.show_text(5.0, 20.0, StandardFont::Helvetica, 12.0, Color::BLACK, "");
        let (ops, fonts) = builder.finish();
        assert!(ops.is_empty());
        assert!(fonts.is_empty());
    }

    #[test]
    fn dashed_line_sets_pattern() {
        let mut builder = ContentBuilder::new(100.0);
        builder.stroke_horizontal(0.0, 50.0, 10.0, 1.0, Color::BLACK, Some([2.0, 2.0]));
        let ops = text(builder);
        assert!(ops.contains("[2 2] 0 d"));
        assert!(ops.contains("0 90 m"));
        assert!(ops.contains("50 90 l"));
    }
}

//! Link annotations.
//!
//! PDF has the concept of annotations, which associate a region of a page with
//! some extra behavior. The only kind needed here is the link annotation with a
//! URI action: clicking the region opens the link.

use pdf_writer::types::{ActionType, AnnotationType};
use pdf_writer::{Chunk, Ref, Str};
use tiny_skia_path::Rect;

use crate::util::RectExt;

/// A link annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkAnnotation {
    /// The area the annotation covers, in top-left based page coordinates.
    pub rect: Rect,
    /// The URI that is opened when the annotation is activated.
    pub uri: String,
}

impl LinkAnnotation {
    /// Create a new link annotation.
    pub fn new(rect: Rect, uri: String) -> Self {
        Self { rect, uri }
    }

    pub(crate) fn serialize_into(&self, chunk: &mut Chunk, root_ref: Ref, page_height: f32) {
        let mut annotation = chunk
            .indirect(root_ref)
            .start::<pdf_writer::writers::Annotation>();

        annotation.subtype(AnnotationType::Link);
        annotation.rect(self.rect.to_pdf_rect(page_height));
        annotation.border(0.0, 0.0, 0.0, None);
        annotation
            .action()
            .action_type(ActionType::Uri)
            .uri(Str(self.uri.as_bytes()));
    }
}

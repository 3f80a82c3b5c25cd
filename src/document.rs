//! Assembling finished pages into a PDF file.
//!
//! A [`Document`] collects pages as they are completed and writes everything
//! out in one go when [`Document::finish`] is called. Objects are numbered in
//! the order they are written, and the file identifier is derived from the
//! document body, so identical input always produces identical bytes.

use std::collections::BTreeSet;

use log::info;
use pdf_writer::{Finish, Name, Pdf, Ref};

use crate::font::StandardFont;
use crate::metadata::Metadata;
use crate::page::Page;
use crate::serialize::{FilterStream, SerializeSettings};
use crate::util::hash_base64;

/// A PDF document under construction.
pub(crate) struct Document {
    serialize_settings: SerializeSettings,
    metadata: Option<Metadata>,
    pages: Vec<Page>,
}

impl Document {
    pub(crate) fn new(serialize_settings: SerializeSettings) -> Self {
        Self {
            serialize_settings,
            metadata: None,
            pages: vec![],
        }
    }

    pub(crate) fn set_metadata(&mut self, metadata: Metadata) {
        self.metadata = Some(metadata);
    }

    pub(crate) fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    pub(crate) fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Write the document to a PDF.
    pub(crate) fn finish(self) -> Vec<u8> {
        let mut next_ref = Ref::new(1);
        let catalog_ref = next_ref.bump();
        let page_tree_ref = next_ref.bump();

        let used_fonts: BTreeSet<StandardFont> = self
            .pages
            .iter()
            .flat_map(|page| page.fonts.iter().copied())
            .collect();
        let font_refs: Vec<(StandardFont, Ref)> = used_fonts
            .into_iter()
            .map(|font| (font, next_ref.bump()))
            .collect();
        let font_ref = |font: StandardFont| {
            font_refs
                .iter()
                .find(|(f, _)| *f == font)
                .map(|(_, r)| *r)
        };

        let page_refs: Vec<(Ref, Ref, Vec<Ref>)> = self
            .pages
            .iter()
            .map(|page| {
                let page_ref = next_ref.bump();
                let content_ref = next_ref.bump();
                let annotation_refs = page.annotations.iter().map(|_| next_ref.bump()).collect();
                (page_ref, content_ref, annotation_refs)
            })
            .collect();

        let mut pdf = Pdf::new();

        if self.serialize_settings.ascii_compatible {
            pdf.set_binary_marker(b"AAAA");
        }

        pdf.catalog(catalog_ref).pages(page_tree_ref);
        pdf.pages(page_tree_ref)
            .kids(page_refs.iter().map(|(page_ref, _, _)| *page_ref))
            .count(page_refs.len() as i32);

        for (font, font_ref) in &font_refs {
            pdf.type1_font(*font_ref)
                .base_font(font.base_font())
                .encoding_predefined(Name(b"WinAnsiEncoding"));
        }

        for (page, (page_ref, content_ref, annotation_refs)) in self.pages.iter().zip(&page_refs) {
            let settings = &page.settings;
            let mut page_writer = pdf.page(*page_ref);
            page_writer.media_box(pdf_writer::Rect::new(
                0.0,
                0.0,
                settings.width(),
                settings.height(),
            ));
            page_writer.parent(page_tree_ref);
            page_writer.contents(*content_ref);

            let mut resources = page_writer.resources();
            let mut fonts = resources.fonts();
            for font in &page.fonts {
                if let Some(r) = font_ref(*font) {
                    fonts.pair(font.resource_name(), r);
                }
            }
            fonts.finish();
            resources.finish();

            if !annotation_refs.is_empty() {
                page_writer.annotations(annotation_refs.iter().copied());
            }

            page_writer.finish();

            let filter_stream =
                FilterStream::new_from_content_stream(&page.content, &self.serialize_settings);
            let mut stream = pdf.stream(*content_ref, &filter_stream.data);
            filter_stream.write_filters(&mut stream);
            stream.finish();

            for (annotation, annotation_ref) in page.annotations.iter().zip(annotation_refs) {
                annotation.serialize_into(&mut pdf, *annotation_ref, settings.height());
            }
        }

        if self.serialize_settings.document_info {
            if let Some(metadata) = self.metadata.as_ref().filter(|m| m.has_document_info()) {
                metadata.serialize_document_info(&mut pdf, next_ref.bump());
            }
        }

        let file_id = hash_base64(pdf.as_bytes());
        pdf.set_file_id((file_id.clone().into_bytes(), file_id.into_bytes()));

        info!(
            "serialized document with {} page(s) and {} font(s)",
            self.pages.len(),
            font_refs.len()
        );

        pdf.finish()
    }
}

//! Setting document metadata.
//!
//! The metadata ends up in the document information dictionary of the PDF.
//! No dates are written, so the same input always yields the same bytes.

use pdf_writer::{Pdf, Ref, TextStr};

use crate::record::{Field, ResumeRecord};

/// The name written as creator and producer of generated documents.
pub const PRODUCER: &str = "resume-pdf";

/// Metadata for a PDF document.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct Metadata {
    pub(crate) title: Option<String>,
    pub(crate) author: Option<String>,
    pub(crate) creator: Option<String>,
    pub(crate) producer: Option<String>,
}

impl Metadata {
    /// Create new, empty metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Metadata describing the resume of `record`.
    ///
    /// A defaulted name is not used as title or author.
    pub fn for_record(record: &ResumeRecord) -> Self {
        let metadata = Self::new()
            .creator(PRODUCER.to_string())
            .producer(PRODUCER.to_string());

        if record.is_default(Field::Name) {
            metadata.title("Resume".to_string())
        } else {
            metadata
                .title(format!("{} - Resume", record.name()))
                .author(record.name().to_string())
        }
    }

    /// The title of the document.
    pub fn title(mut self, title: String) -> Self {
        if !title.is_empty() {
            self.title = Some(title);
        }
        self
    }

    /// The author of the document.
    pub fn author(mut self, author: String) -> Self {
        if !author.is_empty() {
            self.author = Some(author);
        }
        self
    }

    /// The creator tool of the document.
    pub fn creator(mut self, creator: String) -> Self {
        if !creator.is_empty() {
            self.creator = Some(creator);
        }
        self
    }

    /// The producer tool of the document.
    pub fn producer(mut self, producer: String) -> Self {
        if !producer.is_empty() {
            self.producer = Some(producer);
        }
        self
    }

    pub(crate) fn has_document_info(&self) -> bool {
        self.title.is_some()
            || self.author.is_some()
            || self.creator.is_some()
            || self.producer.is_some()
    }

    pub(crate) fn serialize_document_info(&self, pdf: &mut Pdf, root_ref: Ref) {
        let mut info = pdf.document_info(root_ref);

        if let Some(title) = &self.title {
            info.title(TextStr(title));
        }

        if let Some(author) = &self.author {
            info.author(TextStr(author));
        }

        if let Some(creator) = &self.creator {
            info.creator(TextStr(creator));
        }

        if let Some(producer) = &self.producer {
            info.producer(TextStr(producer));
        }
    }
}

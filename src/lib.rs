/*!
Compose a styled resume PDF from a loosely structured record.

A resume is described by nine text fields (name, contact details and four
free-text sections). The input is a JSON object that may contain any subset
of them; missing, empty or non-string values are replaced with fixed
defaults, so composing a document never fails because of incomplete data.

The work is split into three steps:

1. [`decode`] reads a JSON resource into a field map,
2. [`ResumeRecord`] applies the defaulting rules to that map,
3. [`DocumentComposer`] turns the record into a fixed sequence of layout
   blocks (a profile strip followed by four sections) and draws them onto a
   [`RenderSurface`].

The crate ships one surface, [`PdfSurface`], which lays the blocks out on
pages and writes a PDF file using the standard Helvetica fonts.

# Example

```
# use resume_pdf::{render_pdf, Options, ResumeRecord};
# fn main() {
let value = serde_json::json!({
    "name": "Ada Lovelace",
    "skills_section": "Mathematics, analytical engines",
});
let record = ResumeRecord::from_map(value.as_object().unwrap());

let pdf = render_pdf(&record, &Options::default()).unwrap();
assert!(pdf.starts_with(b"%PDF-"));
# }
```

To go straight from a file to a file, use [`generate`](generate()).
*/

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod document;
mod util;

pub(crate) mod content;

pub mod annotation;
pub mod block;
pub mod compose;
pub mod decode;
pub mod error;
pub mod font;
pub mod generate;
pub mod metadata;
pub mod output;
pub mod page;
pub mod record;
pub mod serialize;
pub mod surface;
pub mod theme;

pub use block::{LayoutBlock, RenderSurface};
pub use compose::DocumentComposer;
pub use error::{DecodeError, Error, RenderError};
pub use generate::{generate, render_pdf, Options};
pub use page::PageSettings;
pub use record::{Field, ResumeRecord};
pub use serialize::SerializeSettings;
pub use surface::PdfSurface;
pub use theme::Theme;

#[cfg(test)]
mod tests;

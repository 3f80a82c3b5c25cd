//! The complete pipeline from an input file to a resume PDF.

use std::path::Path;

use log::info;

use crate::compose::DocumentComposer;
use crate::decode::decode_file;
use crate::error::{Error, RenderResult};
use crate::metadata::Metadata;
use crate::output::OutputFile;
use crate::page::PageSettings;
use crate::record::ResumeRecord;
use crate::serialize::SerializeSettings;
use crate::surface::PdfSurface;
use crate::theme::Theme;

/// Everything that influences how a resume is rendered.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Options {
    /// The size and margins of every page.
    pub page: PageSettings,
    /// How the PDF is written.
    pub serialize: SerializeSettings,
    /// The visual style of the document.
    pub theme: Theme,
}

/// Render `record` into the bytes of a PDF.
pub fn render_pdf(record: &ResumeRecord, options: &Options) -> RenderResult<Vec<u8>> {
    let mut surface = PdfSurface::new(options.page.clone(), options.serialize.clone());
    surface.set_metadata(Metadata::for_record(record));

    DocumentComposer::with_theme(options.theme.clone()).compose(record, &mut surface)?;

    surface.finish()
}

/// Read the record stored at `input` and write its resume to `output`.
///
/// The output file is only created once the whole document has been
/// rendered. An existing file at `output` is replaced.
pub fn generate(input: &Path, output: &Path, options: &Options) -> Result<(), Error> {
    let fields = decode_file(input)?;
    let record = ResumeRecord::from_map(&fields);

    let output = OutputFile::create(output)?;
    let pdf = render_pdf(&record, options)?;
    output.commit(&pdf)?;

    info!("generated resume for {}", record.name());

    Ok(())
}

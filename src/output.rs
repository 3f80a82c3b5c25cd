//! Writing the finished document to its destination.
//!
//! The bytes are first written to a temporary file next to the destination
//! and only moved into place once everything was written. If the
//! [`OutputFile`] is dropped without being committed, the temporary file is
//! removed again, so a failed run never leaves a truncated document behind.

use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info};
use tempfile::NamedTempFile;

use crate::error::{RenderError, RenderResult};

/// A destination file that only appears once it was completely written.
pub struct OutputFile {
    path: PathBuf,
    temp: NamedTempFile,
}

impl OutputFile {
    /// Acquire a temporary file for writing to `path`.
    pub fn create(path: impl AsRef<Path>) -> RenderResult<Self> {
        let path = path.as_ref().to_path_buf();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let temp = tempfile::Builder::new()
            .prefix(".resume-pdf")
            .suffix(".partial")
            .tempfile_in(&dir)?;
        debug!("writing to temporary file {}", temp.path().display());

        Ok(Self { path, temp })
    }

    /// The final destination.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `data` and move it to the destination, replacing any existing file.
    pub fn commit(mut self, data: &[u8]) -> RenderResult<()> {
        self.temp.write_all(data)?;
        self.temp.as_file().sync_all()?;
        self.temp
            .persist(&self.path)
            .map_err(|err| RenderError::Io(err.error))?;

        info!("wrote {} bytes to {}", data.len(), self.path.display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::output::OutputFile;

    fn partial_files(dir: &std::path::Path) -> usize {
        std::fs::read_dir(dir)
            .unwrap()
            .filter(|e| {
                e.as_ref()
                    .unwrap()
                    .file_name()
                    .to_string_lossy()
                    .ends_with(".partial")
            })
            .count()
    }

    #[test]
    fn commit_moves_into_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");

        let output = OutputFile::create(&path).unwrap();
        assert!(!path.exists());
        assert_eq!(partial_files(dir.path()), 1);

        output.commit(b"%PDF-1.7").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-1.7");
        assert_eq!(partial_files(dir.path()), 0);
    }

    #[test]
    fn commit_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        std::fs::write(&path, b"old contents that are longer").unwrap();

        OutputFile::create(&path).unwrap().commit(b"new").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"new");
    }

    #[test]
    fn dropping_leaves_nothing_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");

        let output = OutputFile::create(&path).unwrap();
        assert_eq!(output.path(), path.as_path());
        drop(output);

        assert!(!path.exists());
        assert_eq!(partial_files(dir.path()), 0);
    }

    #[test]
    fn missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("resume.pdf");
        assert!(OutputFile::create(path).is_err());
    }
}

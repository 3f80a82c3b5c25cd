use std::path::PathBuf;
use std::sync::LazyLock;

use crate::serialize::SerializeSettings;

const STORE: Option<&str> = option_env!("STORE");

static STORE_PATH: LazyLock<PathBuf> = LazyLock::new(|| {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/store");
    let _ = std::fs::create_dir_all(&path);
    path
});

/// Uncompressed settings, so that content streams can be inspected as text.
pub fn settings_1() -> SerializeSettings {
    SerializeSettings {
        compress_content_streams: false,
        ascii_compatible: false,
        document_info: true,
    }
}

/// The number of (possibly overlapping) occurrences of `needle` in `haystack`.
pub fn count(haystack: &[u8], needle: &str) -> usize {
    let needle = needle.as_bytes();
    haystack
        .windows(needle.len())
        .filter(|window| *window == needle)
        .count()
}

fn write_to_store(name: &str, content: &[u8]) {
    let path = STORE_PATH.join(format!("{}.pdf", name));
    std::fs::write(path, content).unwrap();
}

/// Check the overall structure of a generated document.
pub fn check_pdf(name: &str, pdf: &[u8], pages: usize) {
    if STORE.is_some() {
        write_to_store(name, pdf);
    }

    assert!(pdf.starts_with(b"%PDF-"), "{name}: missing header");
    assert!(
        pdf.trim_ascii_end().ends_with(b"%%EOF"),
        "{name}: missing end-of-file marker"
    );
    assert_eq!(count(pdf, "/Type /Catalog"), 1, "{name}: catalog");
    assert_eq!(
        count(pdf, "/Type /Page") - count(pdf, "/Type /Pages"),
        pages,
        "{name}: pages"
    );
    assert_eq!(count(pdf, &format!("/Count {}", pages)), 1, "{name}: page count");
    assert_eq!(count(pdf, "/ID ["), 1, "{name}: file identifier");
}

//! Internal utilities.

use std::hash::Hash;

use base64::Engine;
use siphasher::sip128::{Hasher128, SipHasher13};
use tiny_skia_path::Rect;

pub(crate) trait RectExt {
    /// Convert a rectangle in the top-left based layout space of a page
    /// with height `page_height` into a PDF rectangle.
    fn to_pdf_rect(&self, page_height: f32) -> pdf_writer::Rect;
}

impl RectExt for Rect {
    fn to_pdf_rect(&self, page_height: f32) -> pdf_writer::Rect {
        pdf_writer::Rect::new(
            self.left(),
            page_height - self.bottom(),
            self.right(),
            page_height - self.top(),
        )
    }
}

/// Create a base64-encoded hash of the value.
pub(crate) fn hash_base64<T: Hash + ?Sized>(value: &T) -> String {
    base64::engine::general_purpose::STANDARD.encode(hash128(value).to_be_bytes())
}

/// Calculate a 128-bit siphash of a value.
pub(crate) fn hash128<T: Hash + ?Sized>(value: &T) -> u128 {
    let mut state = SipHasher13::new();
    value.hash(&mut state);
    state.finish128().as_u128()
}

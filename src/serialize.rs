//! Settings and helpers for writing the final PDF.

use std::borrow::Cow;

use pdf_writer::Name;

/// Settings that should be applied when creating a PDF document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SerializeSettings {
    /// Whether content streams should be compressed. Leads to significantly smaller
    /// file sizes. It is highly recommended that you set this to true.
    pub compress_content_streams: bool,
    /// Whether the PDF should be ASCII-compatible, i.e. only consist of
    /// characters in the ASCII range.
    ///
    /// Compressed streams are hex encoded in this mode, and text in the
    /// document information dictionary may still contain non-ASCII bytes.
    pub ascii_compatible: bool,
    /// Whether a document information dictionary (title, author, producer)
    /// should be written.
    pub document_info: bool,
}

impl Default for SerializeSettings {
    fn default() -> Self {
        Self {
            compress_content_streams: true,
            ascii_compatible: false,
            document_info: true,
        }
    }
}

/// A PDF stream filter.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum StreamFilter {
    Flate,
    AsciiHex,
}

impl StreamFilter {
    pub(crate) fn to_name(self) -> Name<'static> {
        match self {
            Self::AsciiHex => Name(b"ASCIIHexDecode"),
            Self::Flate => Name(b"FlateDecode"),
        }
    }
}

/// A content stream ready to be written, together with its filters in
/// decoding order.
pub(crate) struct FilterStream<'a> {
    pub(crate) data: Cow<'a, [u8]>,
    pub(crate) filters: Vec<StreamFilter>,
}

impl<'a> FilterStream<'a> {
    pub(crate) fn new_from_content_stream(
        content: &'a [u8],
        serialize_settings: &SerializeSettings,
    ) -> Self {
        let mut stream = Self {
            data: Cow::Borrowed(content),
            filters: vec![],
        };

        if serialize_settings.compress_content_streams {
            stream.data = Cow::Owned(deflate_encode(&stream.data));
            stream.filters.push(StreamFilter::Flate);

            if serialize_settings.ascii_compatible {
                stream.data = Cow::Owned(hex_encode(&stream.data));
                stream.filters.insert(0, StreamFilter::AsciiHex);
            }
        }

        stream
    }

    pub(crate) fn write_filters(&self, stream: &mut pdf_writer::Stream) {
        match self.filters.as_slice() {
            [] => {}
            [filter] => {
                stream.pair(Name(b"Filter"), filter.to_name());
            }
            filters => {
                stream
                    .insert(Name(b"Filter"))
                    .array()
                    .items(filters.iter().map(|f| f.to_name()));
            }
        }
    }
}

pub(crate) fn deflate_encode(data: &[u8]) -> Vec<u8> {
    const COMPRESSION_LEVEL: u8 = 6;
    miniz_oxide::deflate::compress_to_vec_zlib(data, COMPRESSION_LEVEL)
}

fn hex_encode(data: &[u8]) -> Vec<u8> {
    data.iter()
        .enumerate()
        .map(|(index, byte)| {
            let mut formatted = format!("{:02X}", byte);
            if index % 35 == 34 {
                formatted.push('\n');
            }
            formatted
        })
        .collect::<String>()
        .into_bytes()
}

#[cfg(test)]
mod tests {
    use crate::serialize::{FilterStream, SerializeSettings, StreamFilter};

    #[test]
    fn uncompressed_stream_is_borrowed() {
        let settings = SerializeSettings {
            compress_content_streams: false,
            ..SerializeSettings::default()
        };
        let stream = FilterStream::new_from_content_stream(b"0 0 m", &settings);
        assert_eq!(stream.data.as_ref(), b"0 0 m");
        assert!(stream.filters.is_empty());
    }

    #[test]
    fn compressed_stream_inflates_back() {
        let content = b"BT /F1 12 Tf (Skills) Tj ET".repeat(10);
        let stream = FilterStream::new_from_content_stream(&content, &SerializeSettings::default());

        assert_eq!(stream.filters, vec![StreamFilter::Flate]);
        let inflated = miniz_oxide::inflate::decompress_to_vec_zlib(&stream.data).unwrap();
        assert_eq!(inflated, content);
    }

    #[test]
    fn ascii_compatible_stream_is_hex() {
        let settings = SerializeSettings {
            ascii_compatible: true,
            ..SerializeSettings::default()
        };
        let stream = FilterStream::new_from_content_stream(b"0 0 m 10 10 l S", &settings);

        assert_eq!(
            stream.filters,
            vec![StreamFilter::AsciiHex, StreamFilter::Flate]
        );
        assert!(stream.data.iter().all(|b| b.is_ascii_hexdigit() || *b == b'\n'));
    }
}

//! Decoding the input resource into a field map.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::debug;
use serde_json::{Map, Value};

use crate::error::{DecodeError, DecodeResult};

/// A string-keyed map of decoded values.
pub type FieldMap = Map<String, Value>;

/// Decode a field map from JSON bytes.
pub fn decode_slice(data: &[u8]) -> DecodeResult<FieldMap> {
    into_object(serde_json::from_slice(data)?)
}

/// Decode a field map from a reader.
pub fn decode_reader<R: Read>(reader: R) -> DecodeResult<FieldMap> {
    into_object(serde_json::from_reader(reader)?)
}

/// Decode a field map from a JSON file.
pub fn decode_file(path: &Path) -> DecodeResult<FieldMap> {
    debug!("decoding {}", path.display());
    let file = File::open(path)?;
    decode_reader(BufReader::new(file))
}

fn into_object(value: Value) -> DecodeResult<FieldMap> {
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(DecodeError::NotAnObject),
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::decode::{decode_file, decode_slice};
    use crate::error::DecodeError;

    #[test]
    fn decodes_object() {
        let map = decode_slice(br#"{"name": "Ada", "phone": 5}"#).unwrap();
        assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Ada"));
        assert!(map.get("phone").unwrap().is_number());
    }

    #[test]
    fn rejects_non_object() {
        assert!(matches!(
            decode_slice(b"[1, 2, 3]"),
            Err(DecodeError::NotAnObject)
        ));
        assert!(matches!(
            decode_slice(b"\"name\""),
            Err(DecodeError::NotAnObject)
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            decode_slice(b"{\"name\": "),
            Err(DecodeError::Syntax(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            decode_file(Path::new("/definitely/not/here.json")),
            Err(DecodeError::Io(_))
        ));
    }
}

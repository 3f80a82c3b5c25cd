//! Error handling.
//!
//! Only two things can go wrong when producing a resume: the input resource
//! can't be decoded into a field map, or the rendering surface fails while
//! writing the document. Missing or malformed *field values* are never errors,
//! they are replaced with defaults when the [`ResumeRecord`] is built.
//!
//! [`ResumeRecord`]: crate::record::ResumeRecord

use std::fmt;
use std::io;

/// A wrapper type for decoding results.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// A wrapper type for rendering results.
pub type RenderResult<T> = Result<T, RenderError>;

/// An error while decoding the input resource.
#[derive(Debug)]
pub enum DecodeError {
    /// The input resource couldn't be read.
    Io(io::Error),
    /// The input is not well-formed JSON.
    Syntax(serde_json::Error),
    /// The input is well-formed, but the top-level value is not an object.
    NotAnObject,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Io(err) => write!(f, "failed to read input: {}", err),
            DecodeError::Syntax(err) => write!(f, "malformed input: {}", err),
            DecodeError::NotAnObject => write!(f, "input is not a JSON object"),
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::Io(err) => Some(err),
            DecodeError::Syntax(err) => Some(err),
            DecodeError::NotAnObject => None,
        }
    }
}

impl From<io::Error> for DecodeError {
    fn from(value: io::Error) -> Self {
        DecodeError::Io(value)
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(value: serde_json::Error) -> Self {
        DecodeError::Syntax(value)
    }
}

/// An error reported by a rendering surface.
#[derive(Debug)]
pub enum RenderError {
    /// The destination couldn't be created or written.
    Io(io::Error),
    /// A block doesn't fit on an empty page.
    BlockTooTall {
        /// The height the block needs.
        height: f32,
        /// The height available on an empty page.
        available: f32,
    },
    /// A block was laid out with a degenerate (empty or non-finite) area.
    InvalidGeometry,
    /// The surface has already failed and refuses further blocks.
    Poisoned,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Io(err) => write!(f, "failed to write document: {}", err),
            RenderError::BlockTooTall { height, available } => write!(
                f,
                "block of height {:.1}pt doesn't fit on a page with {:.1}pt of room",
                height, available
            ),
            RenderError::InvalidGeometry => write!(f, "block has invalid geometry"),
            RenderError::Poisoned => write!(f, "surface was used after a failure"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for RenderError {
    fn from(value: io::Error) -> Self {
        RenderError::Io(value)
    }
}

/// Any error that can abort the generation of a resume.
#[derive(Debug)]
pub enum Error {
    /// The input couldn't be decoded.
    Decode(DecodeError),
    /// The document couldn't be rendered.
    Render(RenderError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Decode(err) => write!(f, "decoding failed: {}", err),
            Error::Render(err) => write!(f, "rendering failed: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Decode(err) => Some(err),
            Error::Render(err) => Some(err),
        }
    }
}

impl From<DecodeError> for Error {
    fn from(value: DecodeError) -> Self {
        Error::Decode(value)
    }
}

impl From<RenderError> for Error {
    fn from(value: RenderError) -> Self {
        Error::Render(value)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;
    use std::io;

    use crate::error::{DecodeError, Error, RenderError};

    #[test]
    fn render_error_keeps_io_source() {
        let err: Error = RenderError::from(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "read-only",
        ))
        .into();

        assert!(matches!(err, Error::Render(RenderError::Io(_))));
        let source = err.source().and_then(|s| s.source()).unwrap();
        assert_eq!(source.to_string(), "read-only");
    }

    #[test]
    fn decode_error_message() {
        let err = Error::from(DecodeError::NotAnObject);
        assert_eq!(
            err.to_string(),
            "decoding failed: input is not a JSON object"
        );
    }
}

//! Error types for p2m stream decoding.

use thiserror::Error;

/// Failure reported by the primitive MessagePack layer.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error(transparent)]
    Msgpack(#[from] rmp_serde::decode::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Primary error type for stream decoding operations.
///
/// Every variant except `InvalidPageRange` is terminal for the stream it
/// came from: the reader never resynchronises after a failure.
#[derive(Error, Debug)]
pub enum P2mError {
    #[error("malformed header: {0}")]
    MalformedHeader(#[source] DecodeError),

    #[error("malformed page {page}: {source}")]
    MalformedPage {
        page: usize,
        #[source]
        source: DecodeError,
    },

    #[error("invalid page range: {0}")]
    InvalidPageRange(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias for P2mError.
pub type Result<T> = std::result::Result<T, P2mError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_malformed_page_names_the_page() {
        let err = P2mError::MalformedPage {
            page: 3,
            source: DecodeError::Io(io::Error::new(io::ErrorKind::UnexpectedEof, "short read")),
        };
        assert_eq!(err.to_string(), "malformed page 3: io error: short read");
    }

    #[test]
    fn test_malformed_header_keeps_source() {
        let err = P2mError::MalformedHeader(DecodeError::Io(io::Error::other("gone")));
        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("io error: gone"));
    }
}

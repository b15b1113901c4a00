//!
//! ordmap: an insertion-ordered map that keeps its order through JSON.
//!
//! ## Core Concepts
//!
//! * **OrderedMap (`map::OrderedMap`)**: A hash-indexed map whose iteration order is the order keys
//!   were first inserted. Setting a key that already exists is a no-op (first write wins).
//! * **Codec (`codec`)**: Encodes an `OrderedMap` as a JSON object in insertion order, and decodes a
//!   JSON object back into an `OrderedMap` whose order matches the literal key order of the source
//!   text rather than whatever order a hash map would produce.
//! * **Key-order scan (`codec::object_keys`)**: The pass over serde_json's token stream that recovers
//!   the top-level key order, skipping nested values without building them.
//!
//! `OrderedMap` also implements serde's `Serialize` and `Deserialize`, so it can be embedded in other
//! serde types and used with any serde format that preserves map entry order.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

pub mod codec;
pub mod map;

/// Re-export the `OrderedMap` struct for easier access.
pub use map::OrderedMap;

pub use codec::CodecError;

/// Result type used throughout the ordmap library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the ordmap library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Structured codec errors from the codec module
    #[error(transparent)]
    Codec(codec::CodecError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Codec(_) => "codec",
            Error::Io(_) => "io",
        }
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        matches!(self, Error::Io(_))
    }

    /// Check if this error is codec-related.
    pub fn is_codec_error(&self) -> bool {
        matches!(self, Error::Codec(_))
    }

    /// Check if the input was not well-formed JSON.
    pub fn is_decode_error(&self) -> bool {
        match self {
            Error::Codec(codec_err) => codec_err.is_decode_error(),
            _ => false,
        }
    }

    /// Check if this error is type-related.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Codec(codec_err) => codec_err.is_type_error(),
            _ => false,
        }
    }

    /// Check if the input was not shaped like a JSON object.
    pub fn is_structure_error(&self) -> bool {
        match self {
            Error::Codec(codec_err) => codec_err.is_structure_error(),
            _ => false,
        }
    }

    /// Check if encoding failed.
    pub fn is_encode_error(&self) -> bool {
        match self {
            Error::Codec(codec_err) => codec_err.is_encode_error(),
            _ => false,
        }
    }
}

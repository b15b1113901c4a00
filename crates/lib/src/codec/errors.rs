//! Error types for encoding and decoding.
//!
//! Every failure of the JSON codec is reported as a [`CodecError`]. The variant
//! says which stage rejected the input: the tokenizer, the key-order scan, the
//! typed value decode, or the encoder.

use serde_json::error::Category;
use thiserror::Error;

/// Structured error types for codec operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CodecError {
    /// Input is not well-formed JSON
    #[error("malformed JSON: {reason}")]
    Decode { reason: String },

    /// A key or value could not be converted to the requested type
    #[error("type mismatch: {reason}")]
    Type { reason: String },

    /// Top level is not an object, or the input opens with a close delimiter
    #[error("invalid structure: {reason}")]
    Structure { reason: String },

    /// A key or value cannot be represented as JSON
    #[error("encoding failed: {reason}")]
    Encode { reason: String },
}

impl CodecError {
    /// Check if the input was not well-formed JSON
    pub fn is_decode_error(&self) -> bool {
        matches!(self, CodecError::Decode { .. })
    }

    /// Check if a key or value had the wrong type
    pub fn is_type_error(&self) -> bool {
        matches!(self, CodecError::Type { .. })
    }

    /// Check if the input had the wrong shape
    pub fn is_structure_error(&self) -> bool {
        matches!(self, CodecError::Structure { .. })
    }

    /// Check if this error came from encoding
    pub fn is_encode_error(&self) -> bool {
        matches!(self, CodecError::Encode { .. })
    }

    /// Get the human-readable reason carried by every variant.
    pub fn reason(&self) -> &str {
        match self {
            CodecError::Decode { reason }
            | CodecError::Type { reason }
            | CodecError::Structure { reason }
            | CodecError::Encode { reason } => reason,
        }
    }

    pub(crate) fn decode(reason: impl Into<String>) -> Self {
        CodecError::Decode {
            reason: reason.into(),
        }
    }

    pub(crate) fn structure(reason: impl Into<String>) -> Self {
        CodecError::Structure {
            reason: reason.into(),
        }
    }

    /// Classify a serde_json failure that happened while decoding.
    ///
    /// Data errors mean the JSON was fine but did not fit the target type;
    /// everything else means the JSON itself was bad.
    pub(crate) fn from_decode(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Data => CodecError::Type {
                reason: err.to_string(),
            },
            Category::Syntax | Category::Eof | Category::Io => CodecError::Decode {
                reason: err.to_string(),
            },
        }
    }

    pub(crate) fn from_encode(err: serde_json::Error) -> Self {
        CodecError::Encode {
            reason: err.to_string(),
        }
    }
}

// Conversion from CodecError to the main Error type
impl From<CodecError> for crate::Error {
    fn from(err: CodecError) -> Self {
        crate::Error::Codec(err)
    }
}

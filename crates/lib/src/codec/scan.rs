//! Top-level key-order extraction.
//!
//! Standard serde decoding into a hash map loses the order keys appear in.
//! [`object_keys`] recovers it by driving serde_json's tokenizer with a
//! visitor that records each top-level key and skips the key's value with
//! [`IgnoredAny`], without building it.
//!
//! Nesting is bounded by serde_json's recursion limit, so adversarial depth
//! is reported as a [`CodecError::Decode`] instead of exhausting the stack.

use std::fmt;

use serde::Deserializer as _;
use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};

use super::errors::CodecError;

const NOT_AN_OBJECT: &str = "expected start of object";

/// Collects top-level keys in the order the tokenizer yields them.
///
/// serde_json reports visitor failures as data errors, so a top level that
/// is not an object is recorded in `failure` to keep it apart from type
/// errors.
struct KeyOrder<'a> {
    failure: &'a mut Option<CodecError>,
}

impl KeyOrder<'_> {
    fn not_an_object<E: de::Error>(self) -> Result<Vec<String>, E> {
        *self.failure = Some(CodecError::structure(NOT_AN_OBJECT));
        Err(E::custom(NOT_AN_OBJECT))
    }
}

impl<'de> Visitor<'de> for KeyOrder<'_> {
    type Value = Vec<String>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a JSON object")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut keys = Vec::new();
        while let Some(key) = access.next_key::<String>()? {
            access.next_value::<IgnoredAny>()?;
            keys.push(key);
        }
        Ok(keys)
    }

    fn visit_seq<A>(self, _access: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        self.not_an_object()
    }

    fn visit_str<E: de::Error>(self, _value: &str) -> Result<Self::Value, E> {
        self.not_an_object()
    }

    fn visit_bool<E: de::Error>(self, _value: bool) -> Result<Self::Value, E> {
        self.not_an_object()
    }

    fn visit_i64<E: de::Error>(self, _value: i64) -> Result<Self::Value, E> {
        self.not_an_object()
    }

    fn visit_u64<E: de::Error>(self, _value: u64) -> Result<Self::Value, E> {
        self.not_an_object()
    }

    fn visit_f64<E: de::Error>(self, _value: f64) -> Result<Self::Value, E> {
        self.not_an_object()
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        self.not_an_object()
    }
}

/// First byte that is not JSON whitespace.
fn leading_byte(input: &[u8]) -> Option<u8> {
    input
        .iter()
        .copied()
        .find(|b| !matches!(b, b' ' | b'\t' | b'\n' | b'\r'))
}

/// Extract the top-level keys of a JSON object in the order they appear.
///
/// Keys are returned unescaped and may repeat if the source repeats them.
/// Values are skipped without being interpreted, so any well-formed value is
/// accepted under any key. Only whitespace may follow the closing brace.
///
/// # Errors
///
/// - [`CodecError::Structure`] if the top level is not an object, or the
///   input opens with a `]`/`}` that closes nothing.
/// - [`CodecError::Decode`] if the input is not well-formed JSON, including
///   misplaced delimiters inside the object and nesting beyond serde_json's
///   recursion limit.
pub fn object_keys(input: &[u8]) -> Result<Vec<String>, CodecError> {
    if let Some(b']' | b'}') = leading_byte(input) {
        return Err(CodecError::structure("invalid end of array or object"));
    }

    let mut failure = None;
    let mut deserializer = serde_json::Deserializer::from_slice(input);
    let keys = match (&mut deserializer).deserialize_any(KeyOrder {
        failure: &mut failure,
    }) {
        Ok(keys) => keys,
        Err(err) => return Err(failure.unwrap_or_else(|| CodecError::from_decode(err))),
    };
    deserializer.end().map_err(CodecError::from_decode)?;

    tracing::trace!(
        keys = keys.len(),
        bytes = input.len(),
        "extracted object key order"
    );
    Ok(keys)
}

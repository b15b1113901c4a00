//! Order-preserving JSON encoding and decoding for [`OrderedMap`].
//!
//! Encoding writes entries in insertion order. Decoding restores the order
//! keys appear in the source text, which a plain decode into a hash map
//! would lose.
//!
//! # Decoding
//!
//! [`decode`] runs two passes over the same input:
//!
//! 1. [`object_keys`] walks serde_json's token stream and returns the
//!    top-level keys in source order, skipping every value without building
//!    it. This pass also rejects input that is not an object.
//! 2. serde_json decodes the input into a temporary `HashMap<String, V>`,
//!    checking every value against `V`.
//!
//! The result is built by converting each extracted key to `K` and setting
//! it with its value from the temporary map. If a key appears more than
//! once, it takes the position of its first occurrence and the value of its
//! last, matching what the standard decode keeps.
//!
//! ```
//! use ordmap::{OrderedMap, codec};
//!
//! let map: OrderedMap<String, u32> = codec::decode(br#"{"b":1,"a":2,"c":3}"#).unwrap();
//! assert_eq!(map.keys().collect::<Vec<_>>(), ["b", "a", "c"]);
//!
//! assert_eq!(codec::encode_to_string(&map).unwrap(), r#"{"b":1,"a":2,"c":3}"#);
//! ```
//!
//! # Keys
//!
//! Keys are encoded with JSON's map-key rules: strings as-is, integers and
//! booleans quoted. Keys that have no such form (sequences, structs) fail to
//! encode. On decode each key string is converted back with the same rules.

pub mod errors;
mod scan;

use std::collections::HashMap;
use std::hash::Hash;
use std::io::{Read, Write};

use serde::Serialize;
use serde::de::{DeserializeOwned, IgnoredAny};

use crate::map::OrderedMap;

pub use errors::CodecError;
pub use scan::object_keys;

/// Encode a map as compact JSON, entries in insertion order.
///
/// An empty map encodes as `{}`.
///
/// # Errors
///
/// [`CodecError::Encode`] if a key or value cannot be represented as JSON.
pub fn encode<K, V>(map: &OrderedMap<K, V>) -> Result<Vec<u8>, CodecError>
where
    K: Serialize,
    V: Serialize,
{
    encode_with(map, false)
}

/// Encode a map as a JSON string. See [`encode`].
pub fn encode_to_string<K, V>(map: &OrderedMap<K, V>) -> Result<String, CodecError>
where
    K: Serialize,
    V: Serialize,
{
    let bytes = encode_with(map, false)?;
    String::from_utf8(bytes).map_err(|err| CodecError::Encode {
        reason: err.to_string(),
    })
}

/// Encode a map as indented JSON, entries in insertion order.
pub fn encode_pretty<K, V>(map: &OrderedMap<K, V>) -> Result<Vec<u8>, CodecError>
where
    K: Serialize,
    V: Serialize,
{
    encode_with(map, true)
}

fn encode_with<K, V>(map: &OrderedMap<K, V>, pretty: bool) -> Result<Vec<u8>, CodecError>
where
    K: Serialize,
    V: Serialize,
{
    let bytes = if map.is_empty() {
        b"{}".to_vec()
    } else if pretty {
        serde_json::to_vec_pretty(map).map_err(CodecError::from_encode)?
    } else {
        serde_json::to_vec(map).map_err(CodecError::from_encode)?
    };
    tracing::trace!(
        entries = map.len(),
        bytes = bytes.len(),
        pretty,
        "encoded ordered map"
    );
    Ok(bytes)
}

/// Decode a JSON object into a new map whose order matches the source text.
///
/// # Errors
///
/// - [`CodecError::Structure`] if the top level is not an object or the input
///   opens with a `]`/`}` that closes nothing.
/// - [`CodecError::Decode`] if the input is not well-formed JSON.
/// - [`CodecError::Type`] if a key or value does not convert to `K` or `V`.
pub fn decode<K, V>(input: &[u8]) -> Result<OrderedMap<K, V>, CodecError>
where
    K: DeserializeOwned + Hash + Eq + Clone,
    V: DeserializeOwned,
{
    let order = object_keys(input)?;
    let mut values: HashMap<String, V> =
        serde_json::from_slice(input).map_err(CodecError::from_decode)?;

    let mut map = OrderedMap::with_capacity(values.len());
    for textual in order {
        // A repeated key already took its value at its first position.
        let Some(value) = values.remove(&textual) else {
            tracing::trace!(key = %textual, "skipping repeated key");
            continue;
        };
        let key = parse_key::<K>(&textual)?;
        map.set(key, value);
    }

    tracing::debug!(entries = map.len(), bytes = input.len(), "decoded ordered map");
    Ok(map)
}

/// Decode a JSON string. See [`decode`].
pub fn decode_str<K, V>(input: &str) -> Result<OrderedMap<K, V>, CodecError>
where
    K: DeserializeOwned + Hash + Eq + Clone,
    V: DeserializeOwned,
{
    decode(input.as_bytes())
}

/// Replace the contents of `target` with the decoded input.
///
/// `target` is only modified if decoding succeeds; on error it keeps its
/// previous entries and order.
pub fn decode_into<K, V>(
    target: &mut OrderedMap<K, V>,
    input: &[u8],
) -> Result<(), CodecError>
where
    K: DeserializeOwned + Hash + Eq + Clone,
    V: DeserializeOwned,
{
    *target = decode(input)?;
    Ok(())
}

/// Read a JSON object from `reader` to the end and decode it. See [`decode`].
pub fn decode_reader<K, V, R>(mut reader: R) -> crate::Result<OrderedMap<K, V>>
where
    K: DeserializeOwned + Hash + Eq + Clone,
    V: DeserializeOwned,
    R: Read,
{
    let mut input = Vec::new();
    reader.read_to_end(&mut input)?;
    Ok(decode(&input)?)
}

/// Encode a map and write it to `writer`. See [`encode`] and [`encode_pretty`].
pub fn encode_writer<K, V, W>(
    map: &OrderedMap<K, V>,
    mut writer: W,
    pretty: bool,
) -> crate::Result<()>
where
    K: Serialize,
    V: Serialize,
    W: Write,
{
    writer.write_all(&encode_with(map, pretty)?)?;
    Ok(())
}

/// Convert an object key back into `K` using JSON's map-key rules.
fn parse_key<K>(textual: &str) -> Result<K, CodecError>
where
    K: DeserializeOwned + Hash + Eq + Clone,
{
    let mut object = serde_json::Map::new();
    object.insert(textual.to_string(), serde_json::Value::Null);

    let single: OrderedMap<K, IgnoredAny> =
        serde_json::from_value(serde_json::Value::Object(object)).map_err(|err| {
            CodecError::Type {
                reason: format!("key {textual:?}: {err}"),
            }
        })?;

    single
        .into_iter()
        .next()
        .map(|(key, _)| key)
        .ok_or_else(|| CodecError::Type {
            reason: format!("key {textual:?} did not produce a value"),
        })
}

impl<K, V> OrderedMap<K, V>
where
    K: Serialize,
    V: Serialize,
{
    /// Encode as compact JSON bytes. See [`encode`].
    pub fn to_json_vec(&self) -> Result<Vec<u8>, CodecError> {
        encode(self)
    }

    /// Encode as a compact JSON string. See [`encode`].
    pub fn to_json_string(&self) -> Result<String, CodecError> {
        encode_to_string(self)
    }
}

impl<K, V> OrderedMap<K, V>
where
    K: DeserializeOwned + Hash + Eq + Clone,
    V: DeserializeOwned,
{
    /// Decode from JSON bytes. See [`decode`].
    pub fn from_json_slice(input: &[u8]) -> Result<Self, CodecError> {
        decode(input)
    }

    /// Decode from a JSON string. See [`decode`].
    pub fn from_json_str(input: &str) -> Result<Self, CodecError> {
        decode_str(input)
    }

    /// Replace this map's contents with decoded JSON. See [`decode_into`].
    pub fn replace_from_json(&mut self, input: &[u8]) -> Result<(), CodecError> {
        decode_into(self, input)
    }
}

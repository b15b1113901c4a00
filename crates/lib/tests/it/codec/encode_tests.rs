//! Encoding tests: output format, ordering and failures.

use std::collections::HashMap;

use ordmap::{OrderedMap, codec};
use serde::Serialize;

use crate::helpers::*;

#[test]
fn test_encode_empty_map() {
    let map: OrderedMap<String, i64> = OrderedMap::new();
    assert_eq!(codec::encode(&map).unwrap(), b"{}");
    assert_eq!(codec::encode_to_string(&map).unwrap(), "{}");
    assert_eq!(codec::encode_pretty(&map).unwrap(), b"{}");
}

#[test]
fn test_encode_follows_insertion_order() {
    let map = map_of(&[("b", 1), ("a", 2), ("c", 3)]);
    assert_eq!(map.to_json_string().unwrap(), r#"{"b":1,"a":2,"c":3}"#);
}

#[test]
fn test_encode_after_delete_and_reinsert() {
    let mut map = map_of(&[("a", 1), ("b", 2), ("c", 3)]);
    map.delete("a");
    map.set("a".to_string(), 4);
    assert_eq!(map.to_json_string().unwrap(), r#"{"b":2,"c":3,"a":4}"#);
}

#[test]
fn test_encode_after_reset() {
    let mut map = map_of(&[("a", 1)]);
    map.reset();
    assert_eq!(map.to_json_vec().unwrap(), b"{}");
}

#[test]
fn test_encode_escapes_keys_and_values() {
    let mut map = OrderedMap::new();
    map.set("quote\"key".to_string(), "line\nbreak".to_string());
    map.set("tab\tkey".to_string(), "back\\slash".to_string());

    assert_eq!(
        map.to_json_string().unwrap(),
        r#"{"quote\"key":"line\nbreak","tab\tkey":"back\\slash"}"#
    );
}

#[test]
fn test_encode_integer_keys_are_quoted() {
    let mut map = OrderedMap::new();
    map.set(30u32, "thirty");
    map.set(10u32, "ten");
    assert_eq!(
        codec::encode_to_string(&map).unwrap(),
        r#"{"30":"thirty","10":"ten"}"#
    );
}

#[test]
fn test_encode_structured_values() {
    #[derive(Serialize)]
    struct Point {
        x: i32,
        y: i32,
    }

    let mut map: OrderedMap<&str, serde_json::Value> = OrderedMap::new();
    map.set("list", serde_json::json!([1, "two", null, true]));
    map.set("point", serde_json::to_value(Point { x: 1, y: -2 }).unwrap());
    map.set("float", serde_json::json!(1.5));

    assert_eq!(
        codec::encode_to_string(&map).unwrap(),
        r#"{"list":[1,"two",null,true],"point":{"x":1,"y":-2},"float":1.5}"#
    );
}

#[test]
fn test_encode_nested_ordered_maps_keep_inner_order() {
    let mut inner = OrderedMap::new();
    inner.set("z", 1);
    inner.set("a", 2);

    let mut outer = OrderedMap::new();
    outer.set("second", OrderedMap::new());
    outer.set("first", inner);

    assert_eq!(
        codec::encode_to_string(&outer).unwrap(),
        r#"{"second":{},"first":{"z":1,"a":2}}"#
    );
}

#[test]
fn test_encode_pretty() {
    let map = map_of(&[("b", 1), ("a", 2)]);
    let pretty = String::from_utf8(codec::encode_pretty(&map).unwrap()).unwrap();
    assert_eq!(pretty, "{\n  \"b\": 1,\n  \"a\": 2\n}");
}

#[test]
fn test_encode_writer() {
    let map = map_of(&[("k", 7)]);
    let mut out = Vec::new();
    codec::encode_writer(&map, &mut out, false).unwrap();
    assert_eq!(out, br#"{"k":7}"#);
}

#[test]
fn test_encode_rejects_struct_keys() {
    #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
    struct Point {
        x: i32,
        y: i32,
    }

    let mut map = OrderedMap::new();
    map.set(Point { x: 1, y: 2 }, "p");

    let err = codec::encode(&map).unwrap_err();
    assert!(err.is_encode_error(), "{err:?}");
}

#[test]
fn test_encode_rejects_unrepresentable_values() {
    let mut bad = HashMap::new();
    bad.insert(vec![1u8, 2], 3);

    let mut map = OrderedMap::new();
    map.set("ok", HashMap::new());
    map.set("bad", bad);

    let err = codec::encode(&map).unwrap_err();
    assert!(err.is_encode_error(), "{err:?}");
}

#[test]
fn test_encode_propagates_serialize_errors() {
    struct Failing;

    impl Serialize for Failing {
        fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("refusing to serialize"))
        }
    }

    let mut map = OrderedMap::new();
    map.set("x", Failing);

    let err = codec::encode(&map).unwrap_err();
    assert!(err.is_encode_error());
    assert!(err.reason().contains("refusing to serialize"));
}

// Serde support: an OrderedMap serializes as a map in insertion order and
// deserializes from any map, keeping the order the format yields entries in.

use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::OrderedMap;

// Upper bound on preallocation from an untrusted size hint.
const MAX_PREALLOCATED_ENTRIES: usize = 4096;

impl<K, V> Serialize for OrderedMap<K, V>
where
    K: Serialize,
    V: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de, K, V> Deserialize<'de> for OrderedMap<K, V>
where
    K: Deserialize<'de> + Hash + Eq + Clone,
    V: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OrderedMapVisitor<K, V> {
            marker: PhantomData<fn() -> OrderedMap<K, V>>,
        }

        impl<'de, K, V> Visitor<'de> for OrderedMapVisitor<K, V>
        where
            K: Deserialize<'de> + Hash + Eq + Clone,
            V: Deserialize<'de>,
        {
            type Value = OrderedMap<K, V>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let capacity = access
                    .size_hint()
                    .unwrap_or(0)
                    .min(MAX_PREALLOCATED_ENTRIES);
                let mut map = OrderedMap::with_capacity(capacity);
                while let Some((key, value)) = access.next_entry::<K, V>()? {
                    // Repeated keys keep their first value, as with `set`.
                    map.set(key, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(OrderedMapVisitor {
            marker: PhantomData,
        })
    }
}

//! Response bodies returned by the search backend, as they arrive on the wire.

use std::{collections::BTreeMap, fmt};

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{MapAccess, Visitor},
    ser::SerializeMap,
};
use serde_json::{Map, Value};


/// One matched document: field name to raw value (scalar or sequence of scalars).
pub type RawHit = Map<String, Value>;


/// Body of a `POST search` response.
///
/// `total_hits` is kept optional and signed so that a missing or negative count can be
/// reported as a malformed response instead of a generic parse failure.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BackendSearchResponse {
    #[serde(default)]
    pub hits: Vec<RawHit>,
    #[serde(default)]
    pub total_hits: Option<i64>,
    #[serde(default)]
    pub request_id: Option<Value>,
    /// Present only when the backend computed facets itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facets: Option<BTreeMap<String, ServerFacetCounts>>,
}

impl BackendSearchResponse {
    /// Server-side facets, unless the backend sent none.
    pub fn server_facets(&self) -> Option<&BTreeMap<String, ServerFacetCounts>> {
        self.facets.as_ref().filter(|facets| !facets.is_empty())
    }
}


/// Body of a `POST suggest` response. Suggestions are opaque objects for the autocomplete UI.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BackendSuggestResponse {
    #[serde(default)]
    pub hits: Vec<Value>,
    #[serde(default)]
    pub request_id: Option<Value>,
}


/// Error body the backend sends alongside a non-2xx status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendError {
    pub error: String,
    #[serde(default)]
    pub cause: Value,
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cause {
            Value::Null => write!(f, "{}", self.error),
            Value::Object(cause) if cause.is_empty() => write!(f, "{}", self.error),
            cause => write!(f, "{} ({})", self.error, cause),
        }
    }
}


/// Value to count mapping for one facet field, in the order the backend sent it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ServerFacetCounts(pub Vec<(String, u64)>);

impl Serialize for ServerFacetCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (value, count) in &self.0 {
            map.serialize_entry(value, count)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ServerFacetCounts {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CountsVisitor;

        impl<'de> Visitor<'de> for CountsVisitor {
            type Value = ServerFacetCounts;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of facet value to non-negative count")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut counts = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((value, count)) = map.next_entry::<String, u64>()? {
                    counts.push((value, count));
                }
                Ok(ServerFacetCounts(counts))
            }
        }

        deserializer.deserialize_map(CountsVisitor)
    }
}

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;


/// A result field wrapped the way the result widgets read it (`result.title.raw`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawField {
    pub raw: Value,
}

pub type NormalizedResult = BTreeMap<String, RawField>;

/// Facet buckets per field name.
pub type FacetMap = BTreeMap<String, Vec<FacetBucket>>;


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetBucket {
    pub value: Value,
    pub count: u64,
}

impl FacetBucket {
    pub fn new(value: impl Into<Value>, count: u64) -> Self {
        Self { value: value.into(), count }
    }
}


/// What a search hands back to the result, paging and facet widgets.
///
/// `result_search_term` is the term the request was built from, not the backend's echo, so the
/// caller can drop a response whose term no longer matches the current state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub result_search_term: String,
    pub results: Vec<NormalizedResult>,
    pub total_results: u64,
    pub total_pages: u64,
    pub request_id: Option<Value>,
    pub facets: FacetMap,
}

impl ResponseEnvelope {
    /// True when this response was produced for `search_term`.
    pub fn is_current_for(&self, search_term: &str) -> bool {
        self.result_search_term == search_term
    }
}


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutocompleteEnvelope {
    pub request_id: Option<Value>,
    pub suggestions: Vec<Value>,
}

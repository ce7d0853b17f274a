//! Request payloads sent to the search backend.
//!
//! Field names here are the backend's wire contract and must not be renamed.

use serde::{Deserialize, Serialize};

use crate::search_const::{DEFAULT_FACET_BUCKETS, SUGGEST_MAX_RESULTS};


/// Body of `POST search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    pub max_results: u64,
    pub offset: u64,
    pub fields: Vec<String>,
    pub facets: Vec<FacetRequest>,
    pub filters: Vec<FilterClause>,
    /// Rank by relevance when true, index order otherwise.
    pub score: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetRequest {
    pub field: String,
    pub num_values: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterClause {
    pub field: String,
    pub value: String,
}

/// Body of `POST suggest`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestRequest {
    pub query: String,
    pub max_results: u64,
}

impl SuggestRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self { query: query.into(), max_results: SUGGEST_MAX_RESULTS }
    }
}


/// A facet the UI wants to display, configured once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetSpec {
    pub field: String,
    /// Maximum number of buckets to show.
    #[serde(default = "default_bucket_count")]
    pub bucket_count: u64,
}

fn default_bucket_count() -> u64 {
    DEFAULT_FACET_BUCKETS
}

impl FacetSpec {
    pub fn new(field: impl Into<String>, bucket_count: u64) -> Self {
        Self { field: field.into(), bucket_count }
    }
}

impl From<&FacetSpec> for FacetRequest {
    fn from(spec: &FacetSpec) -> Self {
        FacetRequest { field: spec.field.clone(), num_values: spec.bucket_count }
    }
}

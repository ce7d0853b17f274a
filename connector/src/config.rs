//! Connector configuration: backend endpoints, requested fields and facets.
//!
//! Supplied once when the connector is constructed and never mutated afterwards.

use std::path::Path;

use anyhow::Context;
use common::{
    search_const::{DEFAULT_FACET_BUCKETS, DEFAULT_FACET_FIELDS, DEFAULT_RESULT_FIELDS},
    search_request::FacetSpec,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectorConfig {
    pub search_url: String,
    pub suggest_url: String,
    pub result_fields: Vec<String>,
    pub facets: Vec<FacetSpec>,
    pub connect_timeout_ms: u64,
    pub request_timeout_ms: u64,
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self::for_base_url(DEFAULT_BASE_URL)
    }
}

impl ConnectorConfig {
    /// Both endpoints hang off one base URL: `{base}/search` and `{base}/suggest`.
    pub fn for_base_url(base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/');
        Self {
            search_url: format!("{base_url}/search"),
            suggest_url: format!("{base_url}/suggest"),
            result_fields: DEFAULT_RESULT_FIELDS.iter().map(|f| f.to_string()).collect(),
            facets: DEFAULT_FACET_FIELDS.iter().map(|f| FacetSpec::new(*f, DEFAULT_FACET_BUCKETS)).collect(),
            connect_timeout_ms: 5_000,
            request_timeout_ms: 30_000,
        }
    }

    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let config = serde_json::from_str(json).context("invalid connector config")?;
        Ok(config)
    }

    /// Loads a `config.json` style file. Missing keys take their defaults.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading connector config {}", path.display()))?;
        Self::from_json_str(&json).with_context(|| format!("parsing connector config {}", path.display()))
    }

    pub fn with_result_fields<I, F>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<String>,
    {
        self.result_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_facets(mut self, facets: Vec<FacetSpec>) -> Self {
        self.facets = facets;
        self
    }

    pub fn with_timeouts(mut self, connect_timeout_ms: u64, request_timeout_ms: u64) -> Self {
        self.connect_timeout_ms = connect_timeout_ms;
        self.request_timeout_ms = request_timeout_ms;
        self
    }
}

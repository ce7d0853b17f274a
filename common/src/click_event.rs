//! Click-through payloads reported by the result list and the autocomplete dropdown.

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClickEvent {
    pub query: String,
    pub document_id: String,
    pub tags: Vec<String>,
}

impl ClickEvent {
    pub fn new(query: impl Into<String>, document_id: impl Into<String>) -> Self {
        Self { query: query.into(), document_id: document_id.into(), tags: vec![] }
    }

    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

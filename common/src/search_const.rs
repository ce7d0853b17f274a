//! Defaults shared by the search state, the request payload and the connector configuration.

pub const DEFAULT_RESULTS_PER_PAGE: u64 = 20;

pub const DEFAULT_FACET_BUCKETS: u64 = 10;

/// Document fields requested from the backend when no configuration overrides them.
pub const DEFAULT_RESULT_FIELDS: [&str; 4] = ["abstract", "authors", "subject", "title"];

/// Facet fields shown in the sidebar when no configuration overrides them.
pub const DEFAULT_FACET_FIELDS: [&str; 2] = ["subject", "authors"];

/// Suggestion-only requests never ask for documents.
pub const SUGGEST_MAX_RESULTS: u64 = 0;

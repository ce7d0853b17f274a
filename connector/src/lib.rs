//! Search connector: the adapter between the search UI and the search backend.
//!
//! A [`SearchConnector`] turns UI [`SearchState`](common::search_state::SearchState) into
//! `POST search` / `POST suggest` bodies, sends them through a [`SearchTransport`], and maps the
//! replies into the envelopes the result, paging, facet and autocomplete widgets read.
//!
//! - **`query_builder`**: search state to request payload (offsets, filter clauses, facets).
//! - **`field_normalizer`**: raw hit fields to `{raw: value}` containers.
//! - **`facet_aggregator`**: facet buckets, relayed from the backend or tallied from hits.
//! - **`response_mapper`**: backend replies to UI envelopes (totals, pages, request ids).
//! - **`connector`**: the façade composing the above with a transport and a click sink.

pub mod config;
pub mod connector;
pub mod error;
pub mod facet_aggregator;
pub mod field_normalizer;
pub mod query_builder;
pub mod response_mapper;
pub mod telemetry;
pub mod transport;

pub use config::ConnectorConfig;
pub use connector::SearchConnector;
pub use error::{ConnectorError, Result};
pub use telemetry::{ClickKind, ClickSink, NoopClickSink, TracingClickSink};
pub use transport::{HttpTransport, SearchTransport};

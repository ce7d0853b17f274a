//! The façade the presentation layer talks to.

use std::{sync::Arc, time::Instant};

use common::{
    click_event::ClickEvent,
    search_result::{AutocompleteEnvelope, ResponseEnvelope},
    search_state::SearchState,
};
use tracing::{debug, info, warn};

use crate::{
    config::ConnectorConfig,
    error::Result,
    query_builder,
    response_mapper,
    telemetry::{ClickKind, ClickSink, NoopClickSink, dispatch},
    transport::{HttpTransport, SearchTransport},
};


/// Translates search state into backend calls and backend replies into UI envelopes.
///
/// Holds only immutable configuration, so one value can serve any number of concurrent calls.
/// Responses are never reordered or dropped here: callers compare
/// [`ResponseEnvelope::result_search_term`] or the request id against their current state to
/// discard stale replies.
#[derive(Clone)]
pub struct SearchConnector<T = HttpTransport> {
    config: Arc<ConnectorConfig>,
    transport: T,
    click_sink: Arc<dyn ClickSink>,
}

impl SearchConnector<HttpTransport> {
    pub fn new(config: ConnectorConfig) -> Result<Self> {
        let transport = HttpTransport::from_config(&config)?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: SearchTransport> SearchConnector<T> {
    pub fn with_transport(config: ConnectorConfig, transport: T) -> Self {
        Self { config: Arc::new(config), transport, click_sink: Arc::new(NoopClickSink) }
    }

    pub fn with_click_sink(mut self, click_sink: Arc<dyn ClickSink>) -> Self {
        self.click_sink = click_sink;
        self
    }

    pub fn config(&self) -> &ConnectorConfig {
        &self.config
    }

    pub async fn search(&self, state: &SearchState) -> Result<ResponseEnvelope> {
        let request = query_builder::build(state, &self.config.result_fields, &self.config.facets)?;
        debug!(
            query = %request.query,
            offset = request.offset,
            max_results = request.max_results,
            filters = request.filters.len(),
            "search request"
        );

        let t0 = Instant::now();
        let body = match self.transport.post_json(&self.config.search_url, &request).await {
            Ok(body) => body,
            Err(e) => {
                warn!(query = %request.query, error = %e, "search failed");
                return Err(e);
            }
        };
        let envelope = response_mapper::map_search_response(state, &self.config.facets, body)
            .inspect_err(|e| warn!(query = %request.query, error = %e, "search response rejected"))?;

        info!(
            query = %request.query,
            total_results = envelope.total_results,
            returned = envelope.results.len(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "search completed"
        );
        Ok(envelope)
    }

    pub async fn autocomplete(&self, state: &SearchState) -> Result<AutocompleteEnvelope> {
        let request = query_builder::build_suggest(state);
        debug!(query = %request.query, "suggest request");

        let body = match self.transport.post_json(&self.config.suggest_url, &request).await {
            Ok(body) => body,
            Err(e) => {
                warn!(query = %request.query, error = %e, "suggest failed");
                return Err(e);
            }
        };
        let envelope = response_mapper::map_suggest_response(body)
            .inspect_err(|e| warn!(query = %request.query, error = %e, "suggest response rejected"))?;
        debug!(query = %request.query, suggestions = envelope.suggestions.len(), "suggest completed");
        Ok(envelope)
    }

    /// Never fails and never waits on the sink's outcome.
    pub fn on_result_click(&self, event: &ClickEvent) {
        dispatch(self.click_sink.as_ref(), ClickKind::Result, event);
    }

    /// Never fails and never waits on the sink's outcome.
    pub fn on_autocomplete_result_click(&self, event: &ClickEvent) {
        dispatch(self.click_sink.as_ref(), ClickKind::AutocompleteResult, event);
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConnectorError;
    use serde::Serialize;
    use serde_json::{Value, json};
    use std::sync::Mutex;

    /// Answers every call with a canned body and remembers what was sent.
    struct CannedTransport {
        reply: Value,
        sent: Mutex<Vec<(String, Value)>>,
    }

    impl CannedTransport {
        fn new(reply: Value) -> Self {
            Self { reply, sent: Mutex::new(vec![]) }
        }

        fn sent(&self) -> Vec<(String, Value)> {
            self.sent.lock().unwrap().clone()
        }
    }

    impl SearchTransport for &CannedTransport {
        async fn post_json<B: Serialize + Sync>(&self, url: &str, body: &B) -> Result<Value> {
            let body = serde_json::to_value(body).unwrap();
            self.sent.lock().unwrap().push((url.to_string(), body));
            Ok(self.reply.clone())
        }
    }

    fn config() -> ConnectorConfig {
        ConnectorConfig::for_base_url("http://backend").with_result_fields(["title", "subject"])
    }

    #[tokio::test]
    async fn invalid_state_fails_before_any_request() {
        let transport = CannedTransport::new(json!({"hits": [], "total_hits": 0}));
        let connector = SearchConnector::with_transport(config(), &transport);

        let result = connector.search(&SearchState::new("q").with_results_per_page(0)).await;

        assert!(matches!(result, Err(ConnectorError::InvalidState { .. })));
        assert!(transport.sent().is_empty());
    }

    #[tokio::test]
    async fn search_posts_built_payload_to_search_url() {
        let transport = CannedTransport::new(json!({"hits": [{"title": "t"}], "total_hits": 21, "request_id": "r"}));
        let connector = SearchConnector::with_transport(config(), &transport);
        let state = SearchState::new("dark matter").with_page(3).with_results_per_page(10).with_filter("subject", ["astro-ph"]);

        let envelope = connector.search(&state).await.unwrap();

        let sent = transport.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "http://backend/search");
        assert_eq!(sent[0].1["offset"], json!(20));
        assert_eq!(sent[0].1["fields"], json!(["title", "subject"]));
        assert_eq!(sent[0].1["filters"], json!([{"field": "subject", "value": "astro-ph"}]));
        assert_eq!(envelope.total_pages, 3);
        assert_eq!(envelope.result_search_term, "dark matter");
    }

    #[tokio::test]
    async fn autocomplete_posts_suggestion_only_request() {
        let transport = CannedTransport::new(json!({"hits": [], "request_id": "s"}));
        let connector = SearchConnector::with_transport(config(), &transport);

        let envelope = connector.autocomplete(&SearchState::new("")).await.unwrap();

        assert_eq!(transport.sent(), vec![("http://backend/suggest".to_string(), json!({"query": "", "max_results": 0}))]);
        assert!(envelope.suggestions.is_empty());
        assert_eq!(envelope.request_id, Some(json!("s")));
    }
}

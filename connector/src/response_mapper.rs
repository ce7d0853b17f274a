//! Maps backend response bodies into the envelopes the UI consumes.

use common::{
    backend_response::{BackendSearchResponse, BackendSuggestResponse},
    search_request::FacetSpec,
    search_result::{AutocompleteEnvelope, FacetMap, ResponseEnvelope},
    search_state::SearchState,
};
use serde_json::Value;

use crate::{
    error::{ConnectorError, Result},
    facet_aggregator::{FacetsInput, aggregate},
    field_normalizer::normalize,
};


/// Maps a `POST search` response body.
///
/// `facet_specs` are the facets the request asked for; when it is empty the envelope carries no
/// facets whatever the backend sent.
pub fn map_search_response(state: &SearchState, facet_specs: &[FacetSpec], body: Value) -> Result<ResponseEnvelope> {
    let response: BackendSearchResponse = serde_json::from_value(body)
        .map_err(|e| ConnectorError::malformed(format!("unexpected search response shape: {e}")))?;

    let total_results = match response.total_hits {
        None => return Err(ConnectorError::malformed("search response is missing total_hits")),
        Some(total) if total < 0 => {
            return Err(ConnectorError::malformed(format!("search response has negative total_hits: {total}")));
        }
        Some(total) => total as u64,
    };
    let total_pages = total_pages(total_results, state.results_per_page)?;

    let facets = if facet_specs.is_empty() {
        FacetMap::new()
    } else {
        aggregate(FacetsInput::resolve(response.server_facets(), &response.hits, facet_specs))
    };

    Ok(ResponseEnvelope {
        result_search_term: state.search_term.clone(),
        results: response.hits.iter().map(normalize).collect(),
        total_results,
        total_pages,
        request_id: response.request_id,
        facets,
    })
}

/// Maps a `POST suggest` response body. Suggestions are passed through untouched.
pub fn map_suggest_response(body: Value) -> Result<AutocompleteEnvelope> {
    let response: BackendSuggestResponse = serde_json::from_value(body)
        .map_err(|e| ConnectorError::malformed(format!("unexpected suggest response shape: {e}")))?;
    Ok(AutocompleteEnvelope { request_id: response.request_id, suggestions: response.hits })
}

/// `ceil(total_results / results_per_page)`
pub fn total_pages(total_results: u64, results_per_page: u64) -> Result<u64> {
    if results_per_page == 0 {
        return Err(ConnectorError::invalid_state("results per page must be positive, got 0"));
    }
    Ok(total_results.div_ceil(results_per_page))
}

//! Turns UI search state into backend request payloads.

use common::{
    search_request::{FacetRequest, FacetSpec, FilterClause, SearchRequest, SuggestRequest},
    search_state::SearchState,
};

use crate::error::{ConnectorError, Result};


/// Builds the `POST search` body for `state`.
///
/// Fails before anything is sent if the page number or page size is zero.
pub fn build(state: &SearchState, requested_fields: &[String], facet_specs: &[FacetSpec]) -> Result<SearchRequest> {
    let offset = page_offset(state)?;

    let mut fields: Vec<String> = Vec::with_capacity(requested_fields.len());
    for field in requested_fields {
        if !fields.contains(field) {
            fields.push(field.clone());
        }
    }

    Ok(SearchRequest {
        query: state.search_term.clone(),
        max_results: state.results_per_page,
        offset,
        fields,
        facets: facet_specs.iter().map(FacetRequest::from).collect(),
        filters: filter_clauses(state),
        score: state.sort.is_scored(),
    })
}

/// Builds the `POST suggest` body. Paging is irrelevant for suggestions, so it is not validated.
pub fn build_suggest(state: &SearchState) -> SuggestRequest {
    SuggestRequest::new(state.search_term.clone())
}

/// `(current_page - 1) * results_per_page`
pub fn page_offset(state: &SearchState) -> Result<u64> {
    if state.current_page < 1 {
        return Err(ConnectorError::invalid_state(format!(
            "current page must be at least 1, got {}",
            state.current_page
        )));
    }
    if state.results_per_page == 0 {
        return Err(ConnectorError::invalid_state("results per page must be positive, got 0"));
    }
    (state.current_page - 1).checked_mul(state.results_per_page).ok_or_else(|| {
        ConnectorError::invalid_state(format!(
            "page {} of size {} is out of range",
            state.current_page, state.results_per_page
        ))
    })
}

/// One clause per selected value, filter order first, then value order.
pub fn filter_clauses(state: &SearchState) -> Vec<FilterClause> {
    state
        .active_filters
        .iter()
        .flat_map(|filter| {
            filter.values.iter().map(|value| FilterClause { field: filter.field.clone(), value: value.clone() })
        })
        .collect()
}

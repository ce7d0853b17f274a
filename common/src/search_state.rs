//! UI-side search state: what the user typed, which page they are on and which filters are active.

use serde::{Deserialize, Deserializer, Serialize};

use crate::search_const::DEFAULT_RESULTS_PER_PAGE;


/// Search state as produced by the presentation layer.
///
/// The connector only reads it. Field names follow the UI framework's camelCase contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchState {
    pub search_term: String,
    /// 1-based.
    pub current_page: u64,
    pub results_per_page: u64,
    pub active_filters: Vec<ActiveFilter>,
    pub sort: SortOrder,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            current_page: 1,
            results_per_page: DEFAULT_RESULTS_PER_PAGE,
            active_filters: vec![],
            sort: SortOrder::default(),
        }
    }
}

impl SearchState {
    pub fn new(search_term: impl Into<String>) -> Self {
        Self { search_term: search_term.into(), ..Self::default() }
    }

    pub fn with_page(mut self, current_page: u64) -> Self {
        self.current_page = current_page;
        self
    }

    pub fn with_results_per_page(mut self, results_per_page: u64) -> Self {
        self.results_per_page = results_per_page;
        self
    }

    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Adds values to the filter on `field`, creating the filter if it is not active yet.
    ///
    /// Filters keep the order in which they were first added; values inside a filter keep
    /// their first-seen order and are never repeated.
    pub fn with_filter<I, V>(mut self, field: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let field = field.into();
        let position = match self.active_filters.iter().position(|f| f.field == field) {
            Some(position) => position,
            None => {
                self.active_filters.push(ActiveFilter { field, values: vec![] });
                self.active_filters.len() - 1
            }
        };
        let filter = &mut self.active_filters[position];
        for value in values {
            filter.insert(value.into());
        }
        self
    }

    pub fn without_filters(mut self) -> Self {
        self.active_filters.clear();
        self
    }
}


/// The set of values selected for one facet field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveFilter {
    pub field: String,
    #[serde(deserialize_with = "deserialize_value_set")]
    pub values: Vec<String>,
}

/// Drops repeated values, keeping the first occurrence.
fn deserialize_value_set<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let mut values: Vec<String> = Vec::new();
    for value in Vec::<String>::deserialize(deserializer)? {
        if !values.contains(&value) {
            values.push(value);
        }
    }
    Ok(values)
}

impl ActiveFilter {
    pub fn new<I, V>(field: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let mut filter = Self { field: field.into(), values: vec![] };
        for value in values {
            filter.insert(value.into());
        }
        filter
    }

    /// Returns false if the value was already selected.
    pub fn insert(&mut self, value: String) -> bool {
        if self.values.contains(&value) {
            return false;
        }
        self.values.push(value);
        true
    }
}


/// How the backend should order matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Ranked by score.
    #[default]
    Relevance,
    /// Index order, no scoring.
    DocumentOrder,
}

impl SortOrder {
    pub fn is_scored(self) -> bool {
        matches!(self, SortOrder::Relevance)
    }
}

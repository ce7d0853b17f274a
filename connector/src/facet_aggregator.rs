//! Facet buckets for faceted navigation.
//!
//! Backends that compute facets send `{field: {value: count}}` and those buckets are relayed in
//! the order received. Backends that do not are covered by tallying the returned hits.

use std::collections::{BTreeMap, HashMap};

use common::{
    backend_response::{RawHit, ServerFacetCounts},
    search_request::FacetSpec,
    search_result::{FacetBucket, FacetMap},
};
use serde_json::Value;


/// Where the facet buckets come from.
#[derive(Debug, Clone, Copy)]
pub enum FacetsInput<'a> {
    ServerComputed(&'a BTreeMap<String, ServerFacetCounts>),
    ClientComputed { hits: &'a [RawHit], specs: &'a [FacetSpec] },
}

impl<'a> FacetsInput<'a> {
    /// Server facets win when the backend sent any; otherwise fall back to the hits.
    pub fn resolve(
        server: Option<&'a BTreeMap<String, ServerFacetCounts>>,
        hits: &'a [RawHit],
        specs: &'a [FacetSpec],
    ) -> Self {
        match server {
            Some(facets) => FacetsInput::ServerComputed(facets),
            None => FacetsInput::ClientComputed { hits, specs },
        }
    }
}

pub fn aggregate(input: FacetsInput<'_>) -> FacetMap {
    match input {
        FacetsInput::ServerComputed(facets) => facets
            .iter()
            .map(|(field, counts)| {
                let buckets = counts.0.iter().map(|(value, count)| FacetBucket::new(value.as_str(), *count)).collect();
                (field.clone(), buckets)
            })
            .collect(),
        FacetsInput::ClientComputed { hits, specs } => specs
            .iter()
            .map(|spec| {
                let mut buckets = tally_field(hits, &spec.field);
                // same cut the backend applies to `num_values`
                buckets.truncate(usize::try_from(spec.bucket_count).unwrap_or(usize::MAX));
                (spec.field.clone(), buckets)
            })
            .collect(),
    }
}

/// Counts the values of `field` across `hits`, highest count first, ties in first-seen order.
///
/// A sequence-valued field counts once per member. Nulls and missing fields count nothing.
pub fn tally_field(hits: &[RawHit], field: &str) -> Vec<FacetBucket> {
    let mut buckets: Vec<FacetBucket> = Vec::new();
    // keyed by the JSON text so that "1" and 1 stay distinct
    let mut positions: HashMap<String, usize> = HashMap::new();

    let mut count_value = |value: &Value| {
        if value.is_null() {
            return;
        }
        let key = value.to_string();
        match positions.get(&key) {
            Some(&position) => buckets[position].count += 1,
            None => {
                positions.insert(key, buckets.len());
                buckets.push(FacetBucket::new(value.clone(), 1));
            }
        }
    };

    for hit in hits {
        match hit.get(field) {
            Some(Value::Array(members)) => members.iter().for_each(&mut count_value),
            Some(value) => count_value(value),
            None => {}
        }
    }

    // stable, so equal counts keep first-seen order
    buckets.sort_by(|a, b| b.count.cmp(&a.count));
    buckets
}

//! Wraps raw hit fields into `{raw: value}` containers for the result widgets.

use common::{
    backend_response::RawHit,
    search_result::{NormalizedResult, RawField},
};

/// Every field of `hit` becomes `name -> {raw: value}`; values are not coerced or checked.
pub fn normalize(hit: &RawHit) -> NormalizedResult {
    hit.iter()
        .map(|(name, value)| (name.clone(), RawField { raw: value.clone() }))
        .collect()
}

/// Unwraps a normalized result back into the raw hit it came from.
pub fn restore_raw(result: &NormalizedResult) -> RawHit {
    result.iter().map(|(name, field)| (name.clone(), field.raw.clone())).collect()
}

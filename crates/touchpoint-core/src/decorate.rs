//! Merging resolved attribution into outbound ticket URLs

use crate::params::UtmParams;
use std::collections::HashSet;
use url::Url;

/// Set or overwrite the recognized parameters on `url`, leaving every other
/// query component and its ordering untouched.
///
/// An already-present recognized key is updated in place; missing keys are
/// appended at the end. Repeated occurrences of a recognized key collapse to
/// the first one, so decorating an already-decorated URL changes nothing.
///
/// The whole query is re-serialized as form-urlencoded, so equivalent
/// encodings normalize (`%20` becomes `+`). Keys, values, and ordering of
/// unrelated pairs are preserved exactly.
pub fn decorate_url(url: &Url, params: &UtmParams) -> Url {
    if params.is_empty() {
        return url.clone();
    }

    let mut pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    for (key, value) in params.iter() {
        match pairs.iter_mut().find(|(k, _)| k == key) {
            Some(pair) => pair.1 = value.to_string(),
            None => pairs.push((key.to_string(), value.to_string())),
        }
    }

    let mut seen = HashSet::new();
    pairs.retain(|(k, _)| !UtmParams::is_recognized(k) || seen.insert(k.clone()));

    let mut decorated = url.clone();
    decorated
        .query_pairs_mut()
        .clear()
        .extend_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    decorated
}

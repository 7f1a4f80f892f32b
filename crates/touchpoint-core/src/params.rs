//! Recognized UTM parameters and their extraction from visit URLs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use url::Url;

/// The recognized marketing parameters. Anything else on a URL is ignored.
pub const UTM_PARAMS: [&str; 5] = [
    "utm_source",
    "utm_medium",
    "utm_campaign",
    "utm_term",
    "utm_content",
];

/// The subset of recognized parameters captured from one URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UtmParams(BTreeMap<String, String>);

impl UtmParams {
    pub fn is_recognized(name: &str) -> bool {
        UTM_PARAMS.contains(&name)
    }

    /// Extract the recognized parameters present in `url`'s query string.
    ///
    /// Values get standard URL decoding and nothing more. An empty value
    /// counts as absent, and the first occurrence of a repeated key wins.
    pub fn from_url(url: &Url) -> Self {
        let mut params = BTreeMap::new();
        for (key, value) in url.query_pairs() {
            if Self::is_recognized(&key)
                && !value.is_empty()
                && !params.contains_key(key.as_ref())
            {
                params.insert(key.into_owned(), value.into_owned());
            }
        }
        Self(params)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Render as an URL-encoded query string (`utm_source=x&utm_term=y`).
    pub fn to_query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.0.iter())
            .finish()
    }
}

impl FromIterator<(String, String)> for UtmParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

//! Request locators: a base URL plus ordered, percent-encoded query
//! parameters.

use std::fmt::{Display, Formatter};

use urlencoding::{decode, encode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locator {
    base: String,
    params: Vec<(&'static str, String)>,
}

impl Locator {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            params: Vec::new(),
        }
    }

    pub fn param(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.params.push((name, value.into()));
        self
    }

    pub fn to_url(&self) -> String {
        if self.params.is_empty() {
            return self.base.clone();
        }
        let query = self
            .params
            .iter()
            .map(|(name, value)| format!("{}={}", encode(name), encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        let separator = if self.base.contains('?') { '&' } else { '?' };
        format!("{}{separator}{query}", self.base)
    }
}

impl Display for Locator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_url())
    }
}

/// Decode the query component of `url` into ordered name/value pairs.
///
/// Undecodable escapes are kept verbatim.
pub fn query_pairs(url: &str) -> Vec<(String, String)> {
    let Some((_, query)) = url.split_once('?') else {
        return Vec::new();
    };
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_lossy(name), decode_lossy(value))
        })
        .collect()
}

fn decode_lossy(value: &str) -> String {
    decode(value)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| value.to_owned())
}

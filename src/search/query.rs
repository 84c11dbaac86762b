use itertools::Itertools;
use serde::Serialize;
use std::collections::HashMap;

/// A single search parameter value.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum QueryValue {
    Integer(i64),
    Boolean(bool),
    String(String),
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        QueryValue::Integer(value)
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        QueryValue::Integer(value.into())
    }
}

impl From<i32> for QueryValue {
    fn from(value: i32) -> Self {
        QueryValue::Integer(value.into())
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        QueryValue::Boolean(value)
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::String(value)
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::String(value.to_string())
    }
}

/// Search parameters of a collection query, e.g. `asn=65536` or
/// `name__contains=Example`.
///
/// Names are not checked: PeeringDB decides which ones are meaningful for each
/// collection. See <https://www.peeringdb.com/apidocs/>
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams(HashMap<String, QueryValue>);

impl SearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, replacing any previous value of the same name.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> &mut Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Like [Self::insert], by value.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Encode as `&key=value` pairs sorted by key, with values escaped.
    /// Empty parameters encode as an empty string.
    ///
    /// The same set of parameters always produces the same string.
    pub fn encode(&self) -> String {
        let pairs: Vec<_> = self.0.iter().sorted_by(|(a, _), (b, _)| a.cmp(b)).collect();
        match serde_urlencoded::to_string(pairs) {
            Ok(query) if query.is_empty() => query,
            Ok(query) => format!("&{}", query),
            // unreachable while every QueryValue is a scalar
            Err(e) => {
                log::error!("cannot encode search parameters: {}", e);
                String::new()
            }
        }
    }
}

/// Encode optional search parameters. See [SearchParams::encode].
pub fn encode_query(params: Option<&SearchParams>) -> String {
    params.map(SearchParams::encode).unwrap_or_default()
}

impl<K: Into<String>, V: Into<QueryValue>> FromIterator<(K, V)> for SearchParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<QueryValue>, const N: usize> From<[(K, V); N]> for SearchParams {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl From<HashMap<String, QueryValue>> for SearchParams {
    fn from(map: HashMap<String, QueryValue>) -> Self {
        Self(map)
    }
}

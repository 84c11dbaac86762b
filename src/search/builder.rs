use super::{QueryValue, SearchParams};
use crate::errors::PeeringDbError;
use crate::types::{Namespace, StatusFilter};
use crate::PeeringDbClient;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use time::OffsetDateTime;

/// A `SearchBuilder` builds a query for a PeeringDB collection API, e.g. `api/net`.
pub struct SearchBuilder<'a, T: DeserializeOwned> {
    client: &'a PeeringDbClient,
    namespace: Namespace,
    query: SearchParams,
    phantom: PhantomData<T>,
}

impl<'a, T: DeserializeOwned> SearchBuilder<'a, T> {
    /// Create a search query
    pub(crate) fn new(client: &'a PeeringDbClient, namespace: Namespace) -> Self {
        Self {
            client,
            namespace,
            query: SearchParams::new(),
            phantom: Default::default(),
        }
    }

    /// Add any search parameter, e.g. `name__contains` or `info_prefixes4__gt`.
    ///
    /// See <https://www.peeringdb.com/apidocs/> for what each collection supports.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.query.insert(key, value);
        self
    }

    /// Search by ID
    pub fn id(self, id: impl Into<u32>) -> Self {
        self.add_u32("id", id.into())
    }

    /// Search by status. Records of any other status are never returned.
    pub fn status(self, status: StatusFilter) -> Self {
        self.add_string("status", status.as_str())
    }

    /// Only objects updated since the given time.
    pub fn since(self, since: OffsetDateTime) -> Self {
        self.param("since", since.unix_timestamp())
    }

    /// The collection being searched.
    pub fn namespace(&self) -> Namespace {
        self.namespace
    }

    /// Search parameters given so far.
    pub fn params(&self) -> &SearchParams {
        &self.query
    }

    /// Get all objects matching this search.
    pub async fn fetch(&self) -> Result<Vec<T>, PeeringDbError> {
        self.client.fetch(self.namespace, &self.query).await
    }

    /// Get the first object matching this search.
    ///
    /// See also: [SearchBuilder::only]
    pub async fn first(&self) -> Result<Option<T>, PeeringDbError> {
        let query = self.query.clone().with("limit", 1);
        let results = self.client.fetch(self.namespace, &query).await?;
        Ok(results.into_iter().next())
    }

    /// Get the _only_ object matching this search.
    ///
    /// This function _should_ only be called when some invariant holds that
    /// the search has only one result, e.g. searching for a network by `asn`.
    pub async fn only(&self) -> Result<T, PeeringDbError> {
        let query = self.query.clone().with("limit", 2);
        let results = self.client.fetch(self.namespace, &query).await?;
        if results.len() > 1 {
            return Err(PeeringDbError::MoreThanOne {
                namespace: self.namespace,
            });
        }
        results
            .into_iter()
            .next()
            .ok_or_else(|| PeeringDbError::NotFound {
                namespace: self.namespace,
                query: self.query.encode().trim_start_matches('&').to_string(),
            })
    }

    pub(crate) fn add_string(self, key: &'static str, value: impl Into<String>) -> Self {
        self.param(key, QueryValue::String(value.into()))
    }

    pub(crate) fn add_u32(self, key: &'static str, value: u32) -> Self {
        self.param(key, value)
    }
}

use super::PeeringDbClient;
use crate::errors::PeeringDbError;
use crate::models::Envelope;
use crate::search::{build_url, SearchParams};
use crate::types::Namespace;
use serde::de::DeserializeOwned;

impl PeeringDbClient {
    /// Get the objects of a collection which match the given search parameters.
    ///
    /// Finding nothing is not an error: an empty [Vec] is returned.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        namespace: Namespace,
        search: &SearchParams,
    ) -> Result<Vec<T>, PeeringDbError> {
        let url = build_url(&self.url, namespace, Some(search));
        let body = self.invoke(&url).await?;
        let envelope: Envelope<T> = serde_json::from_slice(&body)?;
        log::debug!("decoded {} objects from {}", envelope.data.len(), namespace);
        Ok(envelope.data)
    }

    /// Get an object of a collection by ID, or `None` if it is not found.
    ///
    /// IDs start at 1, `0` fails with [PeeringDbError::InvalidId] without making a
    /// request. Negative IDs cannot be expressed since IDs are `u32`.
    ///
    /// IDs are expected to be unique. Should PeeringDB return several objects
    /// anyway, the first one is returned.
    pub async fn fetch_by_id<T: DeserializeOwned>(
        &self,
        namespace: Namespace,
        id: u32,
    ) -> Result<Option<T>, PeeringDbError> {
        if id == 0 {
            return Err(PeeringDbError::InvalidId);
        }
        let search = SearchParams::from([("id", id)]);
        let results = self.fetch(namespace, &search).await?;
        if results.len() > 1 {
            log::warn!("{} objects found in {} with id={}", results.len(), namespace, id);
        }
        Ok(results.into_iter().next())
    }
}

use super::PeeringDbClient;
use crate::errors::{check, PeeringDbError, QueryError};
use bytes::Bytes;
use reqwest::header::{self, HeaderMap, HeaderValue};
use std::future::Future;
use std::time::Duration;

impl PeeringDbClient {
    /// Send a GET request and get the body of its successful response.
    ///
    /// The request is abandoned if this client's cancellation token is
    /// cancelled, or if its timeout elapses, before the whole body is received.
    pub(crate) async fn invoke(&self, url: &str) -> Result<Bytes, PeeringDbError> {
        log::debug!("GET {}", url);
        let exchange = async {
            let res = self.client.get(url).headers(self.headers()).send().await?;
            let body = check(res).await?.bytes().await?;
            Ok::<_, PeeringDbError>(body)
        };
        let exchange = deadline(self.timeout, exchange);
        match &self.cancel {
            Some(token) => tokio::select! {
                biased;
                _ = token.cancelled() => Err(PeeringDbError::Query(QueryError::Cancelled)),
                res = exchange => res,
            },
            None => exchange.await,
        }
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::with_capacity(3);
        headers.insert(header::USER_AGENT, HeaderValue::from_static(crate::USER_AGENT));
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(authorization) = &self.authorization {
            headers.insert(header::AUTHORIZATION, authorization.clone());
        }
        headers
    }
}

async fn deadline<F>(timeout: Option<Duration>, exchange: F) -> Result<Bytes, PeeringDbError>
where
    F: Future<Output = Result<Bytes, PeeringDbError>>,
{
    match timeout {
        Some(limit) => tokio::time::timeout(limit, exchange)
            .await
            .unwrap_or_else(|_| Err(PeeringDbError::Query(QueryError::TimedOut(limit)))),
        None => exchange.await,
    }
}

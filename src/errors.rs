//! Errors for this crate.
//! About anyhow: see https://github.com/TrueLayer/reqwest-middleware/issues/119

use crate::types::Namespace;
use reqwest::header::{InvalidHeaderValue, RETRY_AFTER};
use reqwest::StatusCode;
use std::time::Duration;

#[derive(thiserror::Error, Debug)]
pub enum InvalidApiUrl {
    #[error("Given URL does not end with \"/\": {0}")]
    TrailingSlash(String),

    #[error("Given URL does not start with \"http://\" or \"https://\": {0}")]
    Protocol(String),
}

aliri_braid::from_infallible!(InvalidApiUrl);

/// Errors which might occur while building a [crate::PeeringDbClient].
#[derive(thiserror::Error, Debug)]
pub enum ClientBuildError {
    #[error(transparent)]
    Url(#[from] InvalidApiUrl),

    #[error("API key cannot be sent in an HTTP header: {0}")]
    ApiKey(#[from] InvalidHeaderValue),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Failure to get any HTTP response from PeeringDB.
#[derive(thiserror::Error, Debug)]
pub enum QueryError {
    /// DNS, connection, TLS or body transfer failure.
    #[error(transparent)]
    Transport(reqwest::Error),

    /// Error from reqwest middleware function.
    #[error(transparent)]
    Middleware(anyhow::Error),

    #[error("request was cancelled")]
    Cancelled,

    #[error("request timed out after {0:?}")]
    TimedOut(Duration),
}

/// Errors representing failed interactions with PeeringDB.
#[derive(thiserror::Error, Debug)]
pub enum PeeringDbError {
    /// Resource IDs start at 1. No request is made.
    #[error("invalid resource ID")]
    InvalidId,

    #[error("error building request for peeringdb api: {0}")]
    BuildRequest(#[source] reqwest::Error),

    #[error("error querying peeringdb api: {0}")]
    Query(#[from] QueryError),

    /// HTTP 429. Backing off is left to the caller.
    #[error("rate limit exceeded")]
    RateLimited { retry_after: Option<Duration> },

    /// Error response with an explanation from PeeringDB.
    #[error("({status:?} {reason:?}): {text}")]
    Request {
        status: StatusCode,
        reason: &'static str,
        text: String,
    },

    #[error("cannot decode peeringdb api response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Error when exactly one object is expected but none is found.
    #[error("no {namespace} found for {query}")]
    NotFound { namespace: Namespace, query: String },

    /// Error when exactly one object is expected but several are found.
    #[error("more than one {namespace} found")]
    MoreThanOne { namespace: Namespace },
}

impl From<reqwest::Error> for PeeringDbError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_builder() {
            PeeringDbError::BuildRequest(error)
        } else {
            QueryError::Transport(error).into()
        }
    }
}

impl From<reqwest_middleware::Error> for PeeringDbError {
    fn from(error: reqwest_middleware::Error) -> Self {
        match error {
            reqwest_middleware::Error::Middleware(e) => QueryError::Middleware(e).into(),
            reqwest_middleware::Error::Reqwest(e) => e.into(),
        }
    }
}

/// Classify a response by its status code. Only 2xx responses pass.
pub(crate) async fn check(res: reqwest::Response) -> Result<reqwest::Response, PeeringDbError> {
    let status = res.status();
    if status == StatusCode::TOO_MANY_REQUESTS {
        let retry_after = res
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse().ok())
            .map(Duration::from_secs);
        log::warn!("rate limited by {}", res.url());
        return Err(PeeringDbError::RateLimited { retry_after });
    }
    if status.is_success() {
        return Ok(res);
    }
    let reason = status.canonical_reason().unwrap_or("unknown reason");
    let text = res.text().await?;
    Err(PeeringDbError::Request {
        status,
        reason,
        text,
    })
}

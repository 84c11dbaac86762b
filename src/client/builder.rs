use crate::constants::DEFAULT_URL;
use crate::errors::ClientBuildError;
use crate::types::{ApiKey, ApiUrl};
use reqwest::header::{HeaderValue, InvalidHeaderValue};
use reqwest_middleware::{ClientWithMiddleware, Middleware};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// PeeringDB API client.
///
/// Cloning is cheap: clones share the same connection pool. The client is
/// never modified after [PeeringDbClientBuilder::build], so it can be used by
/// any number of tasks at the same time.
#[derive(Debug, Clone)]
pub struct PeeringDbClient {
    pub(crate) client: ClientWithMiddleware,
    pub(crate) url: ApiUrl,
    pub(crate) authorization: Option<HeaderValue>,
    pub(crate) timeout: Option<Duration>,
    pub(crate) cancel: Option<CancellationToken>,
}

/// Options for a [PeeringDbClient]. Each option is independent and a later
/// call replaces the value set by an earlier one.
#[derive(Default)]
pub struct PeeringDbClientBuilder {
    url: Option<ApiUrl>,
    api_key: Option<ApiKey>,
    http_client: Option<reqwest::Client>,
    middleware: Vec<Arc<dyn Middleware>>,
    timeout: Option<Duration>,
}

impl PeeringDbClientBuilder {
    /// Use another PeeringDB API endpoint instead of [DEFAULT_URL].
    pub fn url(self, url: ApiUrl) -> Self {
        Self {
            url: Some(url),
            ..self
        }
    }

    /// Authenticate using an API key.
    pub fn api_key(self, api_key: impl Into<ApiKey>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..self
        }
    }

    /// Send requests using the given HTTP client.
    pub fn http_client(self, client: reqwest::Client) -> Self {
        Self {
            http_client: Some(client),
            ..self
        }
    }

    /// Add middleware to the HTTP client.
    pub fn with<M: Middleware>(mut self, middleware: M) -> Self {
        self.middleware.push(Arc::new(middleware));
        self
    }

    /// Give up on a request if no complete response is received within `timeout`.
    pub fn timeout(self, timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
            ..self
        }
    }

    pub fn build(self) -> Result<PeeringDbClient, ClientBuildError> {
        let url = match self.url {
            Some(url) => url,
            None => ApiUrl::try_from(DEFAULT_URL)?,
        };
        let authorization = self.api_key.as_ref().map(api_key2header).transpose()?;
        let client = match self.http_client {
            Some(client) => client,
            None => reqwest::ClientBuilder::new().build()?,
        };
        let client = self
            .middleware
            .into_iter()
            .fold(reqwest_middleware::ClientBuilder::new(client), |builder, m| {
                builder.with_arc(m)
            })
            .build();
        Ok(PeeringDbClient {
            client,
            url,
            authorization,
            timeout: self.timeout,
            cancel: None,
        })
    }
}

impl PeeringDbClient {
    /// Create a client for the public PeeringDB API without authentication.
    pub fn new() -> Result<Self, ClientBuildError> {
        Self::builder().build()
    }

    /// Create a client builder.
    pub fn builder() -> PeeringDbClientBuilder {
        PeeringDbClientBuilder::default()
    }

    /// Get the PeeringDB API URL.
    pub fn url(&self) -> &ApiUrl {
        &self.url
    }

    /// Create a handle to this client whose requests fail with
    /// [crate::QueryError::Cancelled] as soon as `token` is cancelled.
    ///
    /// Requests made through other handles are not affected.
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        Self {
            cancel: Some(token),
            ..self.clone()
        }
    }
}

fn api_key2header(api_key: &ApiKey) -> Result<HeaderValue, InvalidHeaderValue> {
    let mut value = HeaderValue::try_from(format!("Api-Key {}", api_key.as_str()))?;
    value.set_sensitive(true);
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_url() {
        let client = PeeringDbClient::new().unwrap();
        assert_eq!(client.url().as_str(), "https://www.peeringdb.com/api/");
        assert!(client.authorization.is_none());
    }

    #[test]
    fn test_later_options_win() {
        let client = PeeringDbClient::builder()
            .url(ApiUrl::try_from("http://localhost/api/").unwrap())
            .api_key("first")
            .url(ApiUrl::try_from("http://127.0.0.1:8000/api/").unwrap())
            .api_key("second")
            .build()
            .unwrap();
        assert_eq!(client.url().as_str(), "http://127.0.0.1:8000/api/");
        let authorization = client.authorization.unwrap();
        assert_eq!(authorization.to_str().unwrap(), "Api-Key second");
        assert!(authorization.is_sensitive());
    }

    #[test]
    fn test_reject_api_key_which_is_not_a_header() {
        let result = PeeringDbClient::builder().api_key("bad\nkey").build();
        assert!(matches!(result, Err(ClientBuildError::ApiKey(_))));
    }

    #[test]
    fn test_cancellation_handle_keeps_configuration() {
        let client = PeeringDbClient::builder()
            .timeout(Duration::from_secs(3))
            .build()
            .unwrap();
        let handle = client.with_cancellation(CancellationToken::new());
        assert!(client.cancel.is_none());
        assert!(handle.cancel.is_some());
        assert_eq!(handle.timeout, Some(Duration::from_secs(3)));
        assert_eq!(handle.url(), client.url());
    }
}

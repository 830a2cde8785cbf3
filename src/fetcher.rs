use crate::config::AnswerConfig;
use crate::error::FetchError;
use reqwest::Client;
use std::time::Duration;

/// Outcome of a completed HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetched {
    /// Body of a successful response
    Body(String),
    /// The server answered with a client or server error status
    ErrorStatus(u16),
}

/// Base trait for page fetchers
#[allow(async_fn_in_trait)]
pub trait Fetcher {
    /// Fetch the page at `url` with a single GET request
    async fn fetch(&self, url: &str) -> Result<Fetched, FetchError>;
}

/// Fetcher backed by a reqwest client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher using the user agent and timeout of the configuration
    pub fn new(config: &AnswerConfig) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Fetched, FetchError> {
        ::log::debug!("Fetching {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| transport_error(url, e))?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            ::log::info!("{} answered with status {}", url, status);
            return Ok(Fetched::ErrorStatus(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| transport_error(url, e))?;
        ::log::trace!("Fetched {} bytes from {}", body.len(), url);

        Ok(Fetched::Body(body))
    }
}

/// Classify a reqwest failure as a connection error or a generic request error
fn transport_error(url: &str, e: reqwest::Error) -> FetchError {
    if e.is_connect() {
        FetchError::Connect {
            url: url.to_string(),
            source: Box::new(e),
        }
    } else {
        FetchError::Request {
            url: url.to_string(),
            source: Box::new(e),
        }
    }
}

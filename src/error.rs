use thiserror::Error;

/// Boxed transport error carried by the request-failure variants.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failure while fetching a single URL.
///
/// An HTTP error status is not a failure; see [`crate::fetcher::Fetched`].
#[derive(Debug, Error)]
pub enum FetchError {
    /// The transport could not reach the host
    #[error("cannot connect to {url}")]
    Connect {
        url: String,
        #[source]
        source: BoxError,
    },

    /// Any other transport-level failure
    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: BoxError,
    },
}

/// Errors surfaced by the answer pipeline.
#[derive(Debug, Error)]
pub enum AnswerError {
    /// The search engine or the Q&A site could not be reached
    #[error("{url}{}", query_suffix(.query))]
    Connection { url: String, query: Option<String> },

    /// Ambiguous failure while fetching the search results
    #[error("failed to get question links from {url} (query: {query})")]
    GetQuestionLinks {
        url: String,
        query: String,
        #[source]
        source: BoxError,
    },

    /// Ambiguous failure while fetching a question page
    #[error("failed to get answer from {url}")]
    GetAnswer {
        url: String,
        #[source]
        source: BoxError,
    },

    /// A question link that is not an absolute URL
    #[error("invalid question link {link}")]
    InvalidLink {
        link: String,
        #[source]
        source: url::ParseError,
    },
}

fn query_suffix(query: &Option<String>) -> String {
    match query {
        Some(query) => format!(" (query: {query})"),
        None => String::new(),
    }
}

/// Errors raised while loading an [`crate::config::AnswerConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

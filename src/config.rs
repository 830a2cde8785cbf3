use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use url::Url;

/// Configuration for the answer pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerConfig {
    /// Q&A site the search is restricted to
    #[serde(default = "default_site")]
    pub site: String,

    /// Search engine endpoint
    #[serde(default = "default_search_url")]
    pub search_url: String,

    /// Interface language passed to the search engine (`hl`)
    #[serde(default = "default_language")]
    pub language: String,

    /// User agent sent with every request (reqwest's default when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,

    /// Per-request timeout in seconds (no timeout when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

/// Default value for site
fn default_site() -> String {
    "stackoverflow.com".to_string()
}

/// Default value for search_url
fn default_search_url() -> String {
    "https://www.google.com/search".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for AnswerConfig {
    fn default() -> Self {
        Self {
            site: default_site(),
            search_url: default_search_url(),
            language: default_language(),
            user_agent: None,
            timeout_secs: None,
        }
    }
}

impl AnswerConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the search-engine URL for a query, restricted to the configured site.
    ///
    /// With the default configuration this yields
    /// `https://www.google.com/search?q=site%3Astackoverflow.com+<query>&hl=en`.
    pub fn search_url(&self, query: &str) -> String {
        let q = format!("site:{} {}", self.site, query);
        let params = [("q", q.as_str()), ("hl", self.language.as_str())];

        match Url::parse_with_params(&self.search_url, &params) {
            Ok(url) => url.to_string(),
            Err(e) => {
                // Endpoint is not an absolute URL, encode the query by hand
                ::log::warn!("Invalid search endpoint {}: {}", self.search_url, e);
                let encoded = url::form_urlencoded::Serializer::new(String::new())
                    .extend_pairs(params)
                    .finish();
                format!("{}?{}", self.search_url, encoded)
            }
        }
    }
}

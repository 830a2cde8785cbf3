//! Instant coding answers from a Q&A site.
//!
//! A query is sent to a search engine restricted to the site, the question
//! links are picked out of the result page, and the top-voted answer of each
//! question is scraped for its code block.
//!
//! ```no_run
//! # async fn run() -> Result<(), code_answer::AnswerError> {
//! for answer in code_answer::answer("python stack trace", 2).await? {
//!     println!("{}\n{}", answer.link, answer.content);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod fetcher;
pub mod links;
pub mod parsers;
pub mod results;

// Re-export commonly used types for convenience
pub use config::AnswerConfig;
pub use error::{AnswerError, ConfigError, FetchError};
pub use fetcher::{Fetched, Fetcher, HttpFetcher};
pub use results::Answer;

use links::QuestionLinkMatcher;

/// Search `num_answers` code answers for a query with the default
/// configuration and an HTTP fetcher.
pub async fn answer(query: &str, num_answers: usize) -> Result<Vec<Answer>, AnswerError> {
    let config = AnswerConfig::default();
    let fetcher = HttpFetcher::new(&config).map_err(|e| AnswerError::GetQuestionLinks {
        url: config.search_url(query),
        query: query.to_string(),
        source: Box::new(e),
    })?;

    CodeAnswer::new(fetcher)
        .with_config(config)
        .answer(query, num_answers)
        .await
}

/// Answer pipeline over a page fetcher
pub struct CodeAnswer<F> {
    fetcher: F,
    config: AnswerConfig,
    matcher: QuestionLinkMatcher,
}

impl<F: Fetcher> CodeAnswer<F> {
    /// Create a pipeline with the default configuration
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            config: AnswerConfig::default(),
            matcher: QuestionLinkMatcher::default(),
        }
    }

    /// Set the configuration
    pub fn with_config(mut self, config: AnswerConfig) -> Self {
        self.matcher = QuestionLinkMatcher::new(&config.site);
        self.config = config;
        self
    }

    /// Search `num_answers` code answers for a query.
    ///
    /// The first `num_answers` question links are visited in order; links
    /// without an extractable answer, or whose answer is empty, are skipped,
    /// so fewer answers than requested may come back.
    pub async fn answer(
        &self,
        query: &str,
        num_answers: usize,
    ) -> Result<Vec<Answer>, AnswerError> {
        let mut links = self.get_question_links(query).await?;
        links.truncate(num_answers);

        let mut results = Vec::with_capacity(links.len());
        for link in links {
            match self.get_answer(&link).await? {
                Some(content) if !content.is_empty() => {
                    results.push(Answer::new(link, content));
                }
                Some(_) => ::log::debug!("Empty answer on {}, skipping", link),
                None => {}
            }
        }

        ::log::info!(
            "Found {} answers for '{}' ({} requested)",
            results.len(),
            query,
            num_answers
        );
        Ok(results)
    }

    /// Search the query and return the question links of the result page.
    ///
    /// An error status from the search engine yields no links.
    pub async fn get_question_links(&self, query: &str) -> Result<Vec<String>, AnswerError> {
        let url = self.config.search_url(query);

        let text = match self.fetcher.fetch(&url).await {
            Ok(Fetched::Body(text)) => text,
            Ok(Fetched::ErrorStatus(status)) => {
                ::log::warn!("Search for '{}' answered with status {}", query, status);
                return Ok(Vec::new());
            }
            Err(FetchError::Connect { .. }) => {
                return Err(AnswerError::Connection {
                    url,
                    query: Some(query.to_string()),
                });
            }
            Err(FetchError::Request { source, .. }) => {
                return Err(AnswerError::GetQuestionLinks {
                    url,
                    query: query.to_string(),
                    source,
                });
            }
        };

        Ok(self.matcher.extract(&text))
    }

    /// Get the code block (or text) of the top-voted answer of a question.
    ///
    /// Returns `None` when the page answers with an error status or has no
    /// answer.
    pub async fn get_answer(&self, link: &str) -> Result<Option<String>, AnswerError> {
        let url = links::scoredesc_url(link)?;

        let text = match self.fetcher.fetch(&url).await {
            Ok(Fetched::Body(text)) => text,
            Ok(Fetched::ErrorStatus(status)) => {
                ::log::warn!("{} answered with status {}, skipping", url, status);
                return Ok(None);
            }
            Err(FetchError::Connect { .. }) => {
                return Err(AnswerError::Connection { url, query: None });
            }
            Err(FetchError::Request { source, .. }) => {
                return Err(AnswerError::GetAnswer { url, source });
            }
        };

        Ok(parsers::extract_answer(&text))
    }
}

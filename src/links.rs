use crate::error::AnswerError;
use regex::Regex;
use url::Url;

/// Query parameter that makes the site render answers highest score first
pub const SCOREDESC_QUERY: &str = "answertab=scoredesc";

/// Matches question-page links of a single Q&A site in raw text
#[derive(Debug, Clone)]
pub struct QuestionLinkMatcher {
    pattern: Regex,
}

impl Default for QuestionLinkMatcher {
    fn default() -> Self {
        Self::new("stackoverflow.com")
    }
}

impl QuestionLinkMatcher {
    /// Create a matcher for `https://<site>/questions/<id>/<slug>` links
    pub fn new(site: &str) -> Self {
        let pattern = format!(
            r"https://{}/questions/\d+/[a-z0-9-]+",
            regex::escape(site)
        );
        Self {
            pattern: Regex::new(&pattern).expect("escaped site should form a valid regex"),
        }
    }

    /// Extract every question link from the text, in order of appearance.
    ///
    /// Duplicates are kept. No HTML parsing happens here, search-result
    /// snippets carry the full URLs as plain text.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let links = self
            .pattern
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect::<Vec<String>>();

        ::log::debug!("Link extractor found {} question links", links.len());
        links
    }
}

/// Rewrite a question link so its answers are sorted by score, highest first.
///
/// An existing query string is kept and `answertab=scoredesc` is appended to
/// it; otherwise the query becomes exactly `answertab=scoredesc`. Fragments
/// pass through unchanged.
pub fn scoredesc_url(link: &str) -> Result<String, AnswerError> {
    let mut url = Url::parse(link).map_err(|source| AnswerError::InvalidLink {
        link: link.to_string(),
        source,
    })?;

    let query = match url.query() {
        Some(existing) if !existing.is_empty() => format!("{existing}&{SCOREDESC_QUERY}"),
        _ => SCOREDESC_QUERY.to_string(),
    };
    url.set_query(Some(&query));

    Ok(url.to_string())
}

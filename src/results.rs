use crate::error::{AnswerError, ConfigError};
use serde::{Deserialize, Serialize};

pub const NO_RESULTS_MESSAGE: &str = "Sorry, couldn't find any answers with that query";
pub const TECHNICAL_DIFFICULTY_MESSAGE: &str = "Sorry, there is some technical difficulty";
pub const CONNECTION_ERROR_MESSAGE: &str = "Sorry, cannot connect to ";
pub const CONFIG_ERROR_MESSAGE: &str = "Sorry, cannot load the configuration:";

/// Top answer extracted from one question page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// Question link the answer was found on
    pub link: String,

    /// Code block of the answer, or its text when it has no code
    #[serde(rename = "result")]
    pub content: String,
}

impl Answer {
    /// Create a new answer
    pub fn new(link: String, content: String) -> Self {
        Self { link, content }
    }
}

/// Render answers for the terminal.
///
/// A single answer is printed bare; several are each preceded by a rule and
/// the link they came from.
pub fn render_answers(answers: &[Answer]) -> String {
    match answers {
        [] => NO_RESULTS_MESSAGE.to_string(),
        [answer] => answer.content.clone(),
        _ => answers
            .iter()
            .map(|answer| {
                format!(
                    "{}\nAnswer from: {} as: \n{}",
                    "==".repeat(30),
                    answer.link,
                    answer.content
                )
            })
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// User-facing line for a pipeline error
pub fn render_error(error: &AnswerError) -> String {
    match error {
        AnswerError::Connection { .. } => format!("{} {}", CONNECTION_ERROR_MESSAGE, error),
        _ => format!("{} {}", TECHNICAL_DIFFICULTY_MESSAGE, error),
    }
}

/// User-facing line for a configuration that could not be loaded
pub fn render_config_error(error: &ConfigError) -> String {
    format!("{} {}", CONFIG_ERROR_MESSAGE, error)
}

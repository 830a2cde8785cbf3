use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "code-answer")]
#[command(about = "The code answer utility")]
#[command(version)]
pub struct Args {
    /// The question to answer
    #[arg(value_name = "QUERY")]
    pub query: Vec<String>,

    /// Number of answers to return, should be among [1,10]
    #[arg(
        short = 'n',
        long = "num",
        value_name = "NUM",
        default_value_t = 1,
        value_parser = clap::value_parser!(u8).range(1..=10)
    )]
    pub num_answers: u8,

    /// Log level
    #[arg(
        short = 'v',
        value_name = "LEVEL",
        value_enum,
        num_args = 0..=1,
        default_value_t = LogLevel::Warning,
        default_missing_value = "debug"
    )]
    pub log_level: LogLevel,

    /// Path to a JSON configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the answers as JSON
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Query tokens joined with single spaces, `None` when no query was given
    pub fn query_string(&self) -> Option<String> {
        if self.query.is_empty() {
            None
        } else {
            Some(self.query.join(" "))
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warning => LevelFilter::Warn,
            // log has no level above error
            LogLevel::Error | LogLevel::Critical => LevelFilter::Error,
        }
    }
}

use clap::{CommandFactory, Parser};
use code_answer::results::{
    TECHNICAL_DIFFICULTY_MESSAGE, render_answers, render_config_error, render_error,
};
use code_answer::{Answer, AnswerConfig, CodeAnswer, HttpFetcher};
use std::error::Error;

mod args;
use args::Args;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Parse command-line arguments
    let args = Args::parse();

    // Logger level comes from -v, RUST_LOG still overrides it
    env_logger::Builder::new()
        .format_timestamp(None)
        .filter_level(args.log_level.into())
        .parse_default_env()
        .init();

    let Some(query) = args.query_string() else {
        Args::command().print_help()?;
        return Ok(());
    };

    let config = match &args.config {
        Some(path) => match AnswerConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                ::log::error!("Failed to load {}: {}", path.display(), e);
                println!("{}", render_config_error(&e));
                return Ok(());
            }
        },
        None => AnswerConfig::default(),
    };
    ::log::debug!("Using configuration {:?}", config);

    let fetcher = match HttpFetcher::new(&config) {
        Ok(fetcher) => fetcher,
        Err(e) => {
            ::log::error!("Failed to build HTTP client: {}", e);
            println!("{} {}", TECHNICAL_DIFFICULTY_MESSAGE, e);
            return Ok(());
        }
    };
    let pipeline = CodeAnswer::new(fetcher).with_config(config);

    match pipeline.answer(&query, usize::from(args.num_answers)).await {
        Ok(answers) => print_answers(&answers, args.json)?,
        Err(e) => {
            ::log::error!("{}: {:?}", e, e.source());
            println!("{}", render_error(&e));
        }
    }

    Ok(())
}

fn print_answers(answers: &[Answer], json: bool) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(answers)?);
    } else {
        println!("{}", render_answers(answers));
    }
    Ok(())
}

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use dotenv::dotenv;
use github_repo_searching_lib::{write_results, Args, GitHubSearcher, SearchError, SearchQuery};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenv().ok();

    // Logs go to stderr, stdout only carries the result table
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {}", e.context(), e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args) -> Result<(), SearchError> {
    let query = SearchQuery::from_args(args);
    debug!("Query string: {}", query);

    let searcher = GitHubSearcher::new(args)?;
    let response = searcher.search(&query).await?;

    write_results(
        std::io::stdout().lock(),
        &response.items,
        !args.filters_language(),
    )?;
    Ok(())
}

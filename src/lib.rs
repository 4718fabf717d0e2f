//! # GitHub Repo Searching
//!
//! A Rust library for searching repositories on GitHub: command line
//! options become search qualifiers, and the matches are printed as an
//! aligned table.
//!
//! ## Main Components
//!
//! - [`Args`]: Command line options, one per search qualifier
//! - [`SearchQuery`]: Turns the options into a `q=...&sort=...` query string
//! - [`GitHubSearcher`]: Sends the request and decodes the result list
//! - [`write_results`]: Prints the repositories as aligned columns
//!
//! ## Example
//!
//! ```no_run
//! use github_repo_searching_lib::{write_results, Args, GitHubSearcher, SearchQuery};
//! use clap::Parser;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//!     let args = Args::parse();
//!     let query = SearchQuery::from_args(&args);
//!
//!     let searcher = GitHubSearcher::new(&args)?;
//!     let response = searcher.search(&query).await?;
//!
//!     write_results(std::io::stdout(), &response.items, !args.filters_language())?;
//!     Ok(())
//! }
//! ```

mod args;
mod error;
mod github_searcher;
mod query;
mod render;

// Re-export main components for documentation and external use
pub use crate::args::{Args, ForkPolicy, SortField, SortOrder, DEFAULT_API_URI};
pub use crate::error::{Result, SearchError};
pub use crate::github_searcher::{GitHubSearcher, Repository, SearchResponse};
pub use crate::query::{Qualifier, SearchQuery, SortDirective};
pub use crate::render::{shorten_language, write_results};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("{0}")]
    Request(#[source] reqwest::Error),

    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),

    #[error("{0}")]
    Decode(#[from] serde_json::Error),

    #[error("{0}")]
    Output(#[from] std::io::Error),
}

impl SearchError {
    /// Short context printed in front of the error on stderr.
    pub fn context(&self) -> &'static str {
        match self {
            SearchError::Request(_) => "error in requesting",
            SearchError::Body(_) | SearchError::Decode(_) => "error in parsing response",
            SearchError::Output(_) => "error in writing output",
        }
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;

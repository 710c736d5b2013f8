//! GitHub API error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("Invalid credentials provided for auth")]
    InvalidCredentials,

    #[error("Unexpected response [{status}] for `{context}`")]
    UnexpectedResponse { status: u16, context: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, GitHubError>;

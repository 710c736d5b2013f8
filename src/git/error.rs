//! Git error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not in a git repository")]
    NotInRepo,

    #[error("No remote 'origin' found")]
    NoOriginRemote,

    #[error("Could not parse origin URL: {0}")]
    InvalidOriginUrl(String),

    #[error("Remote origin is not hosted on github.com: {0}")]
    UnsupportedHost(String),

    #[error("Unable to find current branch name")]
    BranchNotFound,

    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),
}

pub type Result<T> = std::result::Result<T, GitError>;

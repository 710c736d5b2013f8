use thiserror::Error;

use crate::git::GitError;
use crate::github::GitHubError;

#[derive(Error, Debug)]
pub enum ChecksError {
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    #[error("GitHub API error: {0}")]
    GitHub(#[from] GitHubError),
}

pub type Result<T> = std::result::Result<T, ChecksError>;

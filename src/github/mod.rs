//! GitHub API client module using reqwest.
//!
//! Provides `ChecksClient` for the check-runs endpoints, with credentials
//! sourced from the process environment.

mod checks;
mod credentials;
mod error;
mod validate;

pub use checks::{CheckRun, CheckRunList, ChecksClient};
pub use credentials::Credentials;
pub use error::GitHubError;

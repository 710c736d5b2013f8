//! GitHub credentials, read from the process environment.

use std::env;

/// Environment variable holding the GitHub account name.
const USERNAME_VAR: &str = "GITHUB_USERNAME";

/// Environment variable holding the GitHub API token.
const TOKEN_VAR: &str = "GITHUB_TOKEN";

/// A username/token pair, used verbatim in the Authorization header.
///
/// Values are opaque strings: a missing variable becomes an empty string and
/// nothing is validated before use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub token: String,
}

impl Credentials {
    /// Read credentials from `GITHUB_USERNAME` / `GITHUB_TOKEN`.
    pub fn from_env() -> Self {
        Self {
            username: env::var(USERNAME_VAR).unwrap_or_default(),
            token: env::var(TOKEN_VAR).unwrap_or_default(),
        }
    }

    /// The Authorization header value: the raw `username:token` pair,
    /// not a standard encoded credential.
    pub fn authorization_header(&self) -> String {
        format!("{}:{}", self.username, self.token)
    }
}

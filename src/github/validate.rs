//! Status validation for GitHub API responses.

use reqwest::StatusCode;

use super::error::{GitHubError, Result};

/// Statuses GitHub uses for bad or missing credentials. 404 is included
/// because the API hides private resources from unauthorized callers.
const AUTH_FAILURE_STATUSES: [StatusCode; 2] = [StatusCode::UNAUTHORIZED, StatusCode::NOT_FOUND];

/// Check a response status against the expected set for an operation.
///
/// 401 and 404 are always credential failures, even when listed in
/// `expected`. An empty `expected` set defaults to `200 OK`. `context` is
/// the request path, carried into the error for diagnostics.
pub fn validate_status(status: StatusCode, expected: &[StatusCode], context: &str) -> Result<()> {
    if AUTH_FAILURE_STATUSES.contains(&status) {
        return Err(GitHubError::InvalidCredentials);
    }

    let expected = if expected.is_empty() {
        &[StatusCode::OK][..]
    } else {
        expected
    };

    if !expected.contains(&status) {
        return Err(GitHubError::UnexpectedResponse {
            status: status.as_u16(),
            context: context.to_string(),
        });
    }

    Ok(())
}

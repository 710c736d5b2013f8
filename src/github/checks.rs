//! Check-run operations against the GitHub REST API.

use chrono::{DateTime, Utc};
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize};

use super::credentials::Credentials;
use super::error::Result;
use super::validate::validate_status;
use crate::git::RepositoryInfo;

/// Accept header selecting the check-runs preview representation.
const ACCEPT_CHECK_RUNS: &str = "application/vnd.github.antiope-preview+json";

/// User-Agent for API requests. GitHub rejects requests without one.
const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Payload for `POST /check-runs`.
///
/// Only `name`, `branch` and `head_sha` vary; every run is reported as
/// already completed and successful.
#[derive(Debug, Serialize)]
struct CheckRunPayload<'a> {
    name: &'a str,
    branch: &'a str,
    head_sha: &'a str,
    status: &'static str,
    conclusion: &'static str,
    completed_at: DateTime<Utc>,
}

impl<'a> CheckRunPayload<'a> {
    /// Build a completed/successful payload stamped with the current time.
    fn now(name: &'a str, branch: &'a str, sha: &'a str) -> Self {
        Self {
            name,
            branch,
            head_sha: sha,
            status: "completed",
            conclusion: "success",
            completed_at: Utc::now(),
        }
    }
}

/// A check-run resource as returned by the API.
#[derive(Debug, Deserialize)]
pub struct CheckRun {
    pub id: u64,
    pub name: String,
    pub head_sha: String,
    pub status: String,
    pub conclusion: Option<String>,
    pub html_url: Option<String>,
}

/// Collection returned by `GET /commits/<sha>/check-runs`.
#[derive(Debug, Deserialize)]
pub struct CheckRunList {
    pub total_count: u64,
    pub check_runs: Vec<CheckRun>,
}

/// Client for the check-run endpoints of a single repository.
///
/// Holds the resolved repository identity and the credentials explicitly;
/// one client is built per command invocation and nothing is cached across
/// calls.
pub struct ChecksClient {
    http: Client,
    repo: RepositoryInfo,
    credentials: Credentials,
}

impl ChecksClient {
    pub fn new(repo: RepositoryInfo, credentials: Credentials) -> Self {
        Self {
            http: Client::new(),
            repo,
            credentials,
        }
    }

    /// Report a completed, successful check run named `name` for `sha`.
    ///
    /// Issues a `POST` that creates a remote resource; a failed call is
    /// surfaced immediately and never retried.
    pub async fn create(&self, name: &str, branch: &str, sha: &str) -> Result<CheckRun> {
        let payload = CheckRunPayload::now(name, branch, sha);
        let response = self
            .request(Method::POST, "/check-runs")
            .json(&payload)
            .send()
            .await?;

        self.validated_json(response, &[StatusCode::CREATED], "/check-runs")
            .await
    }

    /// List the check runs recorded for a commit.
    pub async fn list(&self, sha: &str) -> Result<CheckRunList> {
        let path = format!("/commits/{sha}/check-runs");
        let response = self.request(Method::GET, &path).send().await?;

        self.validated_json(response, &[], &path).await
    }

    /// Build an authenticated request for a path under the repository
    /// endpoint.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.repo.api_url, path);
        tracing::debug!(%method, %url, "sending GitHub API request");

        self.http
            .request(method, url)
            .header(ACCEPT, ACCEPT_CHECK_RUNS)
            // Raw `username:token` pair, not a Basic credential.
            .header(AUTHORIZATION, self.credentials.authorization_header())
            .header(USER_AGENT, APP_USER_AGENT)
    }

    /// Validate the response status against `expected`, then decode the
    /// JSON body.
    async fn validated_json<T: serde::de::DeserializeOwned>(
        &self,
        response: Response,
        expected: &[StatusCode],
        context: &str,
    ) -> Result<T> {
        let status = response.status();
        tracing::debug!(status = status.as_u16(), context, "GitHub API response");

        validate_status(status, expected, context)?;
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::error::GitHubError;
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ChecksClient {
        ChecksClient::new(
            RepositoryInfo {
                api_url: format!("{}/repos/acme/widgets", server.uri()),
                branch: "main".to_string(),
            },
            Credentials {
                username: "octocat".to_string(),
                token: "s3cret".to_string(),
            },
        )
    }

    fn check_run_body(id: u64, name: &str, sha: &str) -> serde_json::Value {
        json!({
            "id": id,
            "name": name,
            "head_sha": sha,
            "status": "completed",
            "conclusion": "success",
            "html_url": format!("https://github.com/acme/widgets/runs/{id}"),
        })
    }

    #[tokio::test]
    async fn create_posts_check_run_and_returns_resource() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/repos/acme/widgets/check-runs"))
            .and(header("Accept", ACCEPT_CHECK_RUNS))
            .and(header("Authorization", "octocat:s3cret"))
            .and(body_string_contains("\"name\":\"build\""))
            .and(body_string_contains("\"head_sha\":\"abc123\""))
            .and(body_string_contains("\"status\":\"completed\""))
            .and(body_string_contains("\"conclusion\":\"success\""))
            .and(body_string_contains("\"completed_at\":"))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(check_run_body(7, "build", "abc123")),
            )
            .mount(&server)
            .await;

        let check_run = client_for(&server)
            .create("build", "main", "abc123")
            .await
            .unwrap();

        assert_eq!(check_run.id, 7);
        assert_eq!(check_run.name, "build");
        assert_eq!(check_run.head_sha, "abc123");
        assert_eq!(check_run.conclusion.as_deref(), Some("success"));
    }

    #[tokio::test]
    async fn create_rejects_unexpected_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/repos/acme/widgets/check-runs"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(check_run_body(7, "build", "abc123")),
            )
            .mount(&server)
            .await;

        let result = client_for(&server).create("build", "main", "abc123").await;

        assert!(matches!(
            result,
            Err(GitHubError::UnexpectedResponse { status: 200, context }) if context == "/check-runs"
        ));
    }

    #[tokio::test]
    async fn create_maps_unauthorized_to_credential_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/repos/acme/widgets/check-runs"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let result = client_for(&server).create("build", "main", "abc123").await;

        assert!(matches!(result, Err(GitHubError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn list_returns_parsed_collection() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/acme/widgets/commits/abc123/check-runs"))
            .and(header("Accept", ACCEPT_CHECK_RUNS))
            .and(header("Authorization", "octocat:s3cret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "total_count": 2,
                "check_runs": [
                    check_run_body(7, "build", "abc123"),
                    check_run_body(8, "lint", "abc123"),
                ],
            })))
            .mount(&server)
            .await;

        let list = client_for(&server).list("abc123").await.unwrap();

        assert_eq!(list.total_count, 2);
        assert_eq!(list.check_runs.len(), 2);
        assert_eq!(list.check_runs[1].name, "lint");
    }

    #[tokio::test]
    async fn list_maps_not_found_to_credential_failure() {
        // 404 is treated as a credential failure, not an unexpected status.
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/acme/widgets/commits/abc123/check-runs"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let result = client_for(&server).list("abc123").await;

        assert!(matches!(result, Err(GitHubError::InvalidCredentials)));
    }
}

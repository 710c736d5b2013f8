//! Resolution of the origin remote into a GitHub API endpoint.

use git2::Repository;
use lazy_regex::regex_captures;

use super::error::{GitError, Result};
use super::repo::{current_branch, open_repo, origin_url};

/// The only code-hosting domain this tool talks to.
const GITHUB_HOST: &str = "github.com";

/// Identity of the checked-out repository as the GitHub API sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryInfo {
    /// API base endpoint, `https://api.github.com/repos/<owner>/<repo>`.
    pub api_url: String,
    /// Name of the currently checked-out branch.
    pub branch: String,
}

/// Parse host, owner and repo out of an SSH-style remote URL
/// (`git@<host>:<owner>/<repo>.git`).
pub fn parse_ssh_remote(url: &str) -> Result<(String, String, String)> {
    let (_, host, owner, repo) = regex_captures!(
        r"^git@([A-Za-z0-9.-]+):([A-Za-z0-9_-]+)/([A-Za-z0-9_-]+)\.git$",
        url
    )
    .ok_or_else(|| GitError::InvalidOriginUrl(url.to_string()))?;

    Ok((host.to_string(), owner.to_string(), repo.to_string()))
}

/// Resolve the repository of the current working directory.
///
/// Re-reads the on-disk state on every call; nothing is cached between
/// invocations.
pub fn resolve() -> Result<RepositoryInfo> {
    let repo = open_repo()?;
    resolve_from(&repo)
}

/// Resolve identity from an already-opened repository.
pub fn resolve_from(repo: &Repository) -> Result<RepositoryInfo> {
    let url = origin_url(repo)?;
    let (host, owner, name) = parse_ssh_remote(&url)?;

    if host != GITHUB_HOST {
        return Err(GitError::UnsupportedHost(host));
    }

    let branch = current_branch(repo)?;

    Ok(RepositoryInfo {
        api_url: format!("https://api.{host}/repos/{owner}/{name}"),
        branch,
    })
}

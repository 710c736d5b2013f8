//! Repository operations.

use git2::Repository;

use super::error::{GitError, Result};

/// Open a git repository from the current directory or any parent.
pub fn open_repo() -> Result<Repository> {
    Repository::open_from_env().map_err(|_| GitError::NotInRepo)
}

/// Open a git repository from a specific path.
#[cfg(test)]
pub fn open_repo_at(path: &std::path::Path) -> Result<Repository> {
    use git2::RepositoryOpenFlags;
    Repository::open_ext(
        path,
        RepositoryOpenFlags::empty(),
        std::iter::empty::<&std::path::Path>(),
    )
    .map_err(|_| GitError::NotInRepo)
}

/// Get the remote URL for "origin".
pub fn origin_url(repo: &Repository) -> Result<String> {
    let remote = repo
        .find_remote("origin")
        .map_err(|_| GitError::NoOriginRemote)?;
    remote
        .url()
        .map(str::to_string)
        .ok_or(GitError::NoOriginRemote)
}

/// Get the name of the currently checked-out branch.
///
/// Reads the symbolic HEAD target (`refs/heads/<branch>`). Fails on a
/// detached HEAD: there is no branch name to report in that state.
pub fn current_branch(repo: &Repository) -> Result<String> {
    let head = repo.find_reference("HEAD")?;
    head.symbolic_target()
        .and_then(|target| target.strip_prefix("refs/heads/"))
        .filter(|branch| !branch.is_empty())
        .map(str::to_string)
        .ok_or(GitError::BranchNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::test_utils::TempRepo;

    #[test]
    fn current_branch_reads_symbolic_head() {
        let temp = TempRepo::new("owner", "repo", "main");
        let repo = temp.open();

        assert_eq!(current_branch(&repo).unwrap(), "main");
    }

    #[test]
    fn current_branch_fails_on_detached_head() {
        let temp = TempRepo::new("owner", "repo", "main");
        temp.detach_head();
        let repo = temp.open();

        let result = current_branch(&repo);
        assert!(matches!(result, Err(GitError::BranchNotFound)));
    }

    #[test]
    fn origin_url_returns_configured_remote() {
        let temp = TempRepo::new("owner", "repo", "main");
        let repo = temp.open();

        assert_eq!(origin_url(&repo).unwrap(), "git@github.com:owner/repo.git");
    }

    #[test]
    fn origin_url_fails_without_origin() {
        let temp = TempRepo::without_origin("main");
        let repo = temp.open();

        let result = origin_url(&repo);
        assert!(matches!(result, Err(GitError::NoOriginRemote)));
    }
}

//! Test utilities for creating temporary git repositories.

use git2::Repository;
use tempfile::TempDir;

use super::repo::open_repo_at;

/// A temporary git repository for testing.
pub struct TempRepo {
    pub dir: TempDir,
}

impl TempRepo {
    /// Create a new temporary git repository with a GitHub-style SSH origin.
    pub fn new(owner: &str, repo_name: &str, branch: &str) -> Self {
        Self::with_origin_url(&format!("git@github.com:{owner}/{repo_name}.git"), branch)
    }

    /// Create a temporary repository with an arbitrary origin URL.
    pub fn with_origin_url(url: &str, branch: &str) -> Self {
        let temp = Self::without_origin(branch);
        temp.open().remote("origin", url).expect("set origin");
        temp
    }

    /// Create a temporary repository with no origin remote configured.
    pub fn without_origin(branch: &str) -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let repo = Repository::init(dir.path()).expect("init repo");

        // Create initial commit so HEAD exists
        {
            let sig = git2::Signature::now("Test", "test@example.com").unwrap();
            let tree_id = repo.index().unwrap().write_tree().unwrap();
            let tree = repo.find_tree(tree_id).unwrap();
            repo.commit(Some("HEAD"), &sig, &sig, "Initial commit", &tree, &[])
                .expect("create initial commit");
        }

        // Rename default branch if needed
        {
            let head = repo.head().expect("get head");
            let current_branch = head.shorthand().unwrap_or("master").to_string();
            drop(head); // Release borrow before renaming
            if current_branch != branch {
                let mut branch_ref = repo
                    .find_branch(&current_branch, git2::BranchType::Local)
                    .expect("find branch");
                branch_ref.rename(branch, true).expect("rename branch");
            }
        }

        Self { dir }
    }

    /// Detach HEAD at the current commit.
    pub fn detach_head(&self) {
        let repo = self.open();
        let commit = repo
            .head()
            .expect("get head")
            .peel_to_commit()
            .expect("peel to commit");
        repo.set_head_detached(commit.id()).expect("detach head");
    }

    /// Open the repository.
    pub fn open(&self) -> Repository {
        open_repo_at(self.dir.path()).expect("open temp repo")
    }
}

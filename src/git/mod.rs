//! Git operations abstraction layer
//!
//! The release workflow depends on the [Repository] trait rather than on a
//! concrete backend, so the whole flow can run against [mock::MockRepository]
//! in tests.
//!
//! - [repository::Git2Repository]: local queries through `git2`, remote and
//!   working-tree changes through the `git` binary
//! - [mock::MockRepository]: in-memory state with a log of mutating calls

pub mod mock;
pub mod repository;

pub use mock::{GitCall, MockRepository};
pub use repository::Git2Repository;

use crate::error::Result;

/// Version-control operations needed to cut a release
///
/// Query methods never touch the remote. Mutating methods run in the order
/// the workflow calls them and are not rolled back on later failures.
pub trait Repository {
    /// Whether the `git` executable can be found on `PATH`
    fn is_cli_available(&self) -> bool;

    /// Short name of the checked out branch, `HEAD` when detached
    fn current_branch(&self) -> Result<String>;

    /// Paths with uncommitted changes, including untracked files
    ///
    /// Empty when the working tree is clean (`git status --porcelain` prints
    /// nothing).
    fn uncommitted_changes(&self) -> Result<Vec<String>>;

    /// Name of the tag on the most recently committed tagged commit
    ///
    /// # Returns
    /// * `Ok(Some(tag))` - The latest tag
    /// * `Ok(None)` - If the repository has no tags
    fn latest_tag(&self) -> Result<Option<String>>;

    /// Whether a local branch with this name exists
    fn branch_exists(&self, branch_name: &str) -> Result<bool>;

    /// `git pull <remote> <branch>`
    fn pull(&self, remote: &str, branch: &str) -> Result<()>;

    /// `git fetch --prune --prune-tags <remote>`
    fn fetch_tags(&self, remote: &str) -> Result<()>;

    /// `git checkout -b <branch> <start_point>`
    fn create_branch(&self, branch: &str, start_point: &str) -> Result<()>;

    /// `git push <remote> <branch>`
    fn push_branch(&self, remote: &str, branch: &str) -> Result<()>;
}

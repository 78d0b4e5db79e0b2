//! Review-platform seam
//!
//! The workflow talks to the review platform through [ReviewPlatform];
//! [gh::GhCli] drives the GitHub CLI and [mock::MockForge] backs the tests.

pub mod gh;
pub mod mock;

pub use gh::GhCli;
pub use mock::MockForge;

use crate::error::Result;

/// Authenticated session reported by the review tool
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthStatus {
    /// Account name, when the tool prints one
    pub account: Option<String>,
}

/// Pull request to open from a release branch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequest {
    /// Branch the pull request merges into
    pub base: String,
    /// The release branch
    pub head: String,
    pub title: String,
    /// Fill the body from the branch commits
    pub fill: bool,
}

/// Operations against the code-review platform
pub trait ReviewPlatform {
    /// Executable name, used in messages
    fn program(&self) -> &str;

    /// Whether the executable can be found on `PATH`
    fn is_installed(&self) -> bool;

    /// Verify the operator is logged in
    ///
    /// # Returns
    /// * `Ok(AuthStatus)` - The session is authenticated
    /// * `Err(ReleaseError::Precondition)` - Not logged in, with the tool's explanation
    fn auth_status(&self) -> Result<AuthStatus>;

    /// Open the pull request, returning its URL when the tool prints one
    fn create_pull_request(&self, request: &PullRequest) -> Result<Option<String>>;
}

//! Checks that must pass before anything touches the remote.

use std::fmt;

use crate::config::Config;
use crate::error::{ReleaseError, Result};
use crate::forge::ReviewPlatform;
use crate::git::Repository;

/// Reasons the release cannot start.
#[derive(Debug, Clone, PartialEq)]
pub enum PreflightFailure {
    /// A required executable is not on `PATH`
    ToolMissing { tool: String },
    /// The review tool reports no authenticated session
    NotAuthenticated { details: String },
    /// The release must be cut from another branch
    WrongBranch { expected: String, actual: String },
    /// Uncommitted changes in the working tree
    DirtyWorkingTree { entries: Vec<String> },
}

impl fmt::Display for PreflightFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreflightFailure::ToolMissing { tool } => {
                write!(f, "{} CLI is not installed. Please install it first", tool)
            }
            PreflightFailure::NotAuthenticated { details } => {
                write!(f, "{}", details)
            }
            PreflightFailure::WrongBranch { expected, actual } => {
                write!(
                    f,
                    "You must be on the {} branch (currently on {})",
                    expected, actual
                )
            }
            PreflightFailure::DirtyWorkingTree { entries } => {
                write!(
                    f,
                    "You have uncommitted changes. Clean the branch first ({} {})",
                    entries.len(),
                    if entries.len() == 1 { "entry" } else { "entries" }
                )?;
                for entry in entries.iter().take(10) {
                    write!(f, "\n  {}", entry)?;
                }
                if entries.len() > 10 {
                    write!(f, "\n  ... and {} more", entries.len() - 10)?;
                }
                Ok(())
            }
        }
    }
}

impl From<PreflightFailure> for ReleaseError {
    fn from(failure: PreflightFailure) -> Self {
        ReleaseError::precondition(failure.to_string())
    }
}

/// Outcome of a passed gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreflightReport {
    pub branch: String,
    pub account: Option<String>,
}

/// Runs the checks in order, stopping at the first failure.
///
/// 1. `git` and the review tool are installed
/// 2. The review tool has an authenticated session
/// 3. The configured source branch is checked out
/// 4. The working tree is clean
pub fn run_preflight<R, F>(repo: &R, forge: &F, config: &Config) -> Result<PreflightReport>
where
    R: Repository + ?Sized,
    F: ReviewPlatform + ?Sized,
{
    if !repo.is_cli_available() {
        return Err(PreflightFailure::ToolMissing {
            tool: "git".to_string(),
        }
        .into());
    }

    if !forge.is_installed() {
        return Err(PreflightFailure::ToolMissing {
            tool: forge.program().to_string(),
        }
        .into());
    }

    let auth = forge.auth_status().map_err(|e| match e {
        ReleaseError::Precondition(details) => {
            ReleaseError::from(PreflightFailure::NotAuthenticated { details })
        }
        other => other,
    })?;
    log::debug!("authenticated as {:?}", auth.account);

    let branch = repo.current_branch()?;
    if branch != config.branches.source {
        return Err(PreflightFailure::WrongBranch {
            expected: config.branches.source.clone(),
            actual: branch,
        }
        .into());
    }

    let entries = repo.uncommitted_changes()?;
    if !entries.is_empty() {
        return Err(PreflightFailure::DirtyWorkingTree { entries }.into());
    }

    Ok(PreflightReport {
        branch,
        account: auth.account,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forge::MockForge;
    use crate::git::MockRepository;

    #[test]
    fn test_preflight_passes() {
        let report =
            run_preflight(&MockRepository::new(), &MockForge::new(), &Config::default()).unwrap();
        assert_eq!(report.branch, "develop");
        assert_eq!(report.account, Some("releaser".to_string()));
    }

    #[test]
    fn test_missing_git() {
        let repo = MockRepository::new().with_cli_available(false);
        let err = run_preflight(&repo, &MockForge::new(), &Config::default()).unwrap_err();
        assert!(err.to_string().contains("git CLI is not installed"));
    }

    #[test]
    fn test_missing_review_tool_checked_before_auth() {
        let forge = MockForge::new()
            .with_installed(false)
            .with_authenticated(false);
        let err = run_preflight(&MockRepository::new(), &forge, &Config::default()).unwrap_err();
        assert!(err.to_string().contains("gh CLI is not installed"));
    }

    #[test]
    fn test_not_authenticated() {
        let forge = MockForge::new().with_authenticated(false);
        let err = run_preflight(&MockRepository::new(), &forge, &Config::default()).unwrap_err();
        assert!(matches!(err, ReleaseError::Precondition(_)));
        assert!(err.to_string().contains("not logged in"));
    }

    #[test]
    fn test_wrong_branch() {
        let repo = MockRepository::new().on_branch("feature/login");
        let err = run_preflight(&repo, &MockForge::new(), &Config::default()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("develop"), "got: {}", msg);
        assert!(msg.contains("feature/login"), "got: {}", msg);
    }

    #[test]
    fn test_branch_checked_before_working_tree() {
        let repo = MockRepository::new()
            .on_branch("main")
            .with_change("src/lib.rs");
        let err = run_preflight(&repo, &MockForge::new(), &Config::default()).unwrap_err();
        assert!(err.to_string().contains("must be on the develop branch"));
    }

    #[test]
    fn test_dirty_working_tree() {
        let repo = MockRepository::new()
            .with_change("src/lib.rs")
            .with_change("notes.txt");
        let err = run_preflight(&repo, &MockForge::new(), &Config::default()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("uncommitted changes"));
        assert!(msg.contains("2 entries"));
        assert!(msg.contains("notes.txt"));
    }

    #[test]
    fn test_dirty_working_tree_truncates_listing() {
        let failure = PreflightFailure::DirtyWorkingTree {
            entries: (0..12).map(|i| format!("file{}.txt", i)).collect(),
        };
        let msg = failure.to_string();
        assert!(msg.contains("file9.txt"));
        assert!(!msg.contains("file10.txt"));
        assert!(msg.contains("... and 2 more"));
    }
}

use crate::error::{ReleaseError, Result};
use crate::git::Repository;
use std::cell::RefCell;

/// A mutating call recorded by [`MockRepository`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitCall {
    Pull { remote: String, branch: String },
    FetchTags { remote: String },
    CreateBranch { branch: String, start_point: String },
    PushBranch { remote: String, branch: String },
}

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    cli_available: bool,
    current_branch: String,
    changes: Vec<String>,
    latest_tag: Option<String>,
    branches: Vec<String>,
    failing_call: Option<&'static str>,
    calls: RefCell<Vec<GitCall>>,
}

impl MockRepository {
    /// Create a clean repository on `develop` whose latest tag is `1.0`
    pub fn new() -> Self {
        MockRepository {
            cli_available: true,
            current_branch: "develop".to_string(),
            changes: Vec::new(),
            latest_tag: Some("1.0".to_string()),
            branches: vec!["develop".to_string(), "main".to_string()],
            failing_call: None,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn with_cli_available(mut self, available: bool) -> Self {
        self.cli_available = available;
        self
    }

    pub fn on_branch(mut self, branch: impl Into<String>) -> Self {
        self.current_branch = branch.into();
        self
    }

    /// Mark a path as modified
    pub fn with_change(mut self, path: impl Into<String>) -> Self {
        self.changes.push(path.into());
        self
    }

    pub fn with_latest_tag(mut self, tag: Option<&str>) -> Self {
        self.latest_tag = tag.map(str::to_string);
        self
    }

    /// Add a local branch
    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branches.push(branch.into());
        self
    }

    /// Make a mutating operation fail: "pull", "fetch", "checkout" or "push"
    pub fn failing_on(mut self, operation: &'static str) -> Self {
        self.failing_call = Some(operation);
        self
    }

    /// Mutating calls in the order they were made
    pub fn calls(&self) -> Vec<GitCall> {
        self.calls.borrow().clone()
    }

    fn record(&self, operation: &'static str, call: GitCall) -> Result<()> {
        self.calls.borrow_mut().push(call);
        if self.failing_call == Some(operation) {
            return Err(ReleaseError::command(format!("git {}", operation), Some(1)));
        }
        Ok(())
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn is_cli_available(&self) -> bool {
        self.cli_available
    }

    fn current_branch(&self) -> Result<String> {
        Ok(self.current_branch.clone())
    }

    fn uncommitted_changes(&self) -> Result<Vec<String>> {
        Ok(self.changes.clone())
    }

    fn latest_tag(&self) -> Result<Option<String>> {
        Ok(self.latest_tag.clone())
    }

    fn branch_exists(&self, branch_name: &str) -> Result<bool> {
        Ok(self.branches.iter().any(|b| b == branch_name))
    }

    fn pull(&self, remote: &str, branch: &str) -> Result<()> {
        self.record(
            "pull",
            GitCall::Pull {
                remote: remote.to_string(),
                branch: branch.to_string(),
            },
        )
    }

    fn fetch_tags(&self, remote: &str) -> Result<()> {
        self.record(
            "fetch",
            GitCall::FetchTags {
                remote: remote.to_string(),
            },
        )
    }

    fn create_branch(&self, branch: &str, start_point: &str) -> Result<()> {
        self.record(
            "checkout",
            GitCall::CreateBranch {
                branch: branch.to_string(),
                start_point: start_point.to_string(),
            },
        )
    }

    fn push_branch(&self, remote: &str, branch: &str) -> Result<()> {
        self.record(
            "push",
            GitCall::PushBranch {
                remote: remote.to_string(),
                branch: branch.to_string(),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_repository_defaults() {
        let repo = MockRepository::default();
        assert!(repo.is_cli_available());
        assert_eq!(repo.current_branch().unwrap(), "develop");
        assert!(repo.uncommitted_changes().unwrap().is_empty());
        assert_eq!(repo.latest_tag().unwrap(), Some("1.0".to_string()));
    }

    #[test]
    fn test_mock_repository_records_calls() {
        let repo = MockRepository::new();
        repo.pull("origin", "develop").unwrap();
        repo.push_branch("origin", "release/2.0").unwrap();

        assert_eq!(
            repo.calls(),
            vec![
                GitCall::Pull {
                    remote: "origin".to_string(),
                    branch: "develop".to_string(),
                },
                GitCall::PushBranch {
                    remote: "origin".to_string(),
                    branch: "release/2.0".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_mock_repository_failure_is_recorded() {
        let repo = MockRepository::new().failing_on("push");
        assert!(repo.push_branch("origin", "release/2.0").is_err());
        assert_eq!(repo.calls().len(), 1);
    }

    #[test]
    fn test_mock_repository_branches() {
        let repo = MockRepository::new().with_branch("release/2.0");
        assert!(repo.branch_exists("release/2.0").unwrap());
        assert!(!repo.branch_exists("release/3.0").unwrap());
    }
}

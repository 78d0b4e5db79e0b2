use crate::error::{ReleaseError, Result};
use crate::forge::{AuthStatus, PullRequest, ReviewPlatform};
use std::cell::RefCell;

/// Mock review platform recording the pull requests it was asked to open
pub struct MockForge {
    installed: bool,
    authenticated: bool,
    account: Option<String>,
    fail_create: bool,
    requests: RefCell<Vec<PullRequest>>,
}

impl MockForge {
    /// Installed and logged in as `releaser`
    pub fn new() -> Self {
        MockForge {
            installed: true,
            authenticated: true,
            account: Some("releaser".to_string()),
            fail_create: false,
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn with_installed(mut self, installed: bool) -> Self {
        self.installed = installed;
        self
    }

    pub fn with_authenticated(mut self, authenticated: bool) -> Self {
        self.authenticated = authenticated;
        self
    }

    pub fn failing_create(mut self) -> Self {
        self.fail_create = true;
        self
    }

    pub fn requests(&self) -> Vec<PullRequest> {
        self.requests.borrow().clone()
    }
}

impl Default for MockForge {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewPlatform for MockForge {
    fn program(&self) -> &str {
        "gh"
    }

    fn is_installed(&self) -> bool {
        self.installed
    }

    fn auth_status(&self) -> Result<AuthStatus> {
        if self.authenticated {
            Ok(AuthStatus {
                account: self.account.clone(),
            })
        } else {
            Err(ReleaseError::precondition("not logged in to the review platform"))
        }
    }

    fn create_pull_request(&self, request: &PullRequest) -> Result<Option<String>> {
        self.requests.borrow_mut().push(request.clone());
        if self.fail_create {
            return Err(ReleaseError::command("gh pr create", Some(1)));
        }
        Ok(Some(format!(
            "https://github.com/acme/app/pull/{}",
            self.requests.borrow().len()
        )))
    }
}

use crate::command;
use crate::error::{ReleaseError, Result};
use crate::forge::{AuthStatus, PullRequest, ReviewPlatform};
use regex::Regex;
use std::path::PathBuf;

/// GitHub CLI (`gh`) backend
pub struct GhCli {
    program: String,
    workdir: Option<PathBuf>,
}

impl GhCli {
    pub fn new(program: impl Into<String>) -> Self {
        GhCli {
            program: program.into(),
            workdir: None,
        }
    }

    /// Run `gh` inside this directory so it resolves the right repository
    pub fn in_dir(mut self, workdir: impl Into<PathBuf>) -> Self {
        self.workdir = Some(workdir.into());
        self
    }
}

impl Default for GhCli {
    fn default() -> Self {
        Self::new("gh")
    }
}

/// Extracts the account from `gh auth status` output.
///
/// Recent releases print `Logged in to github.com account octocat (keyring)`,
/// older ones `Logged in to github.com as octocat (oauth_token)`.
pub fn parse_auth_account(output: &str) -> Option<String> {
    let re = Regex::new(r"Logged in to \S+ (?:account|as) ([^\s(]+)").ok()?;
    re.captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Picks the pull request URL out of `gh pr create` stdout.
pub fn parse_pull_request_url(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with("https://") || line.starts_with("http://"))
        .last()
        .map(str::to_string)
}

/// Arguments of `gh pr create` for a request
pub fn pr_create_args(request: &PullRequest) -> Vec<&str> {
    let mut args = vec![
        "pr",
        "create",
        "--base",
        request.base.as_str(),
        "--head",
        request.head.as_str(),
        "--title",
        request.title.as_str(),
    ];
    // Without a tty gh refuses to prompt, so a body source is always given
    if request.fill {
        args.push("--fill");
    } else {
        args.extend(["--body", ""]);
    }
    args
}

impl ReviewPlatform for GhCli {
    fn program(&self) -> &str {
        &self.program
    }

    fn is_installed(&self) -> bool {
        which::which(&self.program).is_ok()
    }

    fn auth_status(&self) -> Result<AuthStatus> {
        let output = command::run_captured(&self.program, &["auth", "status"], self.workdir.as_deref())?;

        // gh has written the status report to stderr or stdout depending on version
        let report = format!("{}\n{}", output.stdout, output.stderr);

        if !output.success {
            let details = report.trim();
            return Err(ReleaseError::precondition(format!(
                "not logged in to the review platform (`{} auth login` to authenticate){}{}",
                self.program,
                if details.is_empty() { "" } else { ":\n" },
                details
            )));
        }

        Ok(AuthStatus {
            account: parse_auth_account(&report),
        })
    }

    fn create_pull_request(&self, request: &PullRequest) -> Result<Option<String>> {
        let args = pr_create_args(request);
        let stdout = command::run_stdout(&self.program, &args, self.workdir.as_deref())?;
        Ok(parse_pull_request_url(&stdout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_auth_account_current_format() {
        let output = "github.com\n  ✓ Logged in to github.com account octocat (keyring)\n  - Active account: true\n";
        assert_eq!(parse_auth_account(output), Some("octocat".to_string()));
    }

    #[test]
    fn test_parse_auth_account_legacy_format() {
        let output = "github.com\n  ✓ Logged in to github.com as hubot (oauth_token)\n";
        assert_eq!(parse_auth_account(output), Some("hubot".to_string()));
    }

    #[test]
    fn test_parse_auth_account_missing() {
        assert_eq!(parse_auth_account("You are not logged into any GitHub hosts."), None);
    }

    #[test]
    fn test_parse_pull_request_url() {
        let stdout = "\nCreating pull request for release/13.0 into main\n\nhttps://github.com/acme/app/pull/42\n";
        assert_eq!(
            parse_pull_request_url(stdout),
            Some("https://github.com/acme/app/pull/42".to_string())
        );
        assert_eq!(parse_pull_request_url(""), None);
    }

    #[test]
    fn test_pr_create_args() {
        let request = PullRequest {
            base: "main".to_string(),
            head: "release/13.0".to_string(),
            title: "Release - 13.0".to_string(),
            fill: true,
        };
        assert_eq!(
            pr_create_args(&request),
            vec![
                "pr",
                "create",
                "--base",
                "main",
                "--head",
                "release/13.0",
                "--title",
                "Release - 13.0",
                "--fill"
            ]
        );

        let no_fill = PullRequest { fill: false, ..request };
        let args = pr_create_args(&no_fill);
        assert!(!args.contains(&"--fill"));
        assert_eq!(&args[args.len() - 2..], &["--body", ""]);
    }

    #[test]
    fn test_missing_program_is_not_installed() {
        let gh = GhCli::new("cut-release-no-such-gh");
        assert!(!gh.is_installed());
        assert_eq!(gh.program(), "cut-release-no-such-gh");
    }
}

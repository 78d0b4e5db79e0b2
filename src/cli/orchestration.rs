//! Main workflow orchestration logic
//!
//! The release flow lives here rather than in main.rs so it can run against
//! mock backends. main.rs only parses arguments and wires the real backends.

use crate::command;
use crate::config::Config;
use crate::domain::{next_release_version, pull_request_title, ReleaseBranch, ReleaseVersion};
use crate::error::{ReleaseError, Result};
use crate::forge::{gh, PullRequest, ReviewPlatform};
use crate::git::Repository;
use crate::preflight;
use crate::ui;

/// Arguments for the release workflow
///
/// Mirrors the CLI Args but in a format suitable for orchestration logic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReleaseWorkflowArgs {
    /// Skip the confirmation prompt
    pub assume_yes: bool,

    /// Stop after confirmation and print the commands that would run
    pub dry_run: bool,
}

/// Result of a successful release workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// Tag the version was computed from
    pub previous_tag: String,

    pub version: ReleaseVersion,

    /// The release branch name
    pub branch: String,

    /// URL printed by the review tool, if any
    pub pull_request_url: Option<String>,

    /// False for dry runs
    pub executed: bool,
}

/// Main release workflow
///
/// Orchestrates the entire process:
/// 1. Preflight checks (tools, authentication, branch, clean tree)
/// 2. Pull the source branch and fetch tags
/// 3. Compute the next version from the latest tag
/// 4. Ask for confirmation
/// 5. Create and push the release branch, then open the pull request
///
/// Steps in 5 run strictly in order; a failure aborts the rest and leaves the
/// completed ones in place.
///
/// # Arguments
///
/// * `confirm` - Called with the previous tag and the new version; `Ok(false)` cancels
///
/// # Returns
///
/// The release that was cut, or the first error. Cancellation is
/// [`ReleaseError::Cancelled`].
pub fn run_release_workflow<R, F, C>(
    args: &ReleaseWorkflowArgs,
    config: &Config,
    repo: &R,
    forge: &F,
    mut confirm: C,
) -> Result<WorkflowResult>
where
    R: Repository + ?Sized,
    F: ReviewPlatform + ?Sized,
    C: FnMut(&str, &str) -> Result<bool>,
{
    let source = config.branches.source.as_str();
    let target = config.branches.target.as_str();
    let remote = config.remote.as_str();

    ui::display_banner(">>> Starting release");

    let report = preflight::run_preflight(repo, forge, config)?;
    if let Some(account) = &report.account {
        ui::display_success(&format!("Logged in to {} as {}", forge.program(), account));
    }

    ui::display_banner(&format!(">>> Pulling {}", source));
    repo.pull(remote, source)?;

    ui::display_banner(">>> Pulling tags");
    repo.fetch_tags(remote)?;

    let previous_tag = repo.latest_tag()?.ok_or_else(|| {
        ReleaseError::version("no tags found; create an initial <major>.<minor> tag first")
    })?;
    let version = next_release_version(&previous_tag)?;
    let branch = ReleaseBranch::new(&config.release.branch_prefix, version);
    let title = pull_request_title(&config.release.title, &version);

    ui::display_banner(&format!(">>> Release: {}", version));
    ui::display_proposed_release(&previous_tag, &version.to_string());

    if repo.branch_exists(branch.name())? {
        return Err(ReleaseError::precondition(format!(
            "branch '{}' already exists locally",
            branch.name()
        )));
    }

    if !args.assume_yes && !confirm(&previous_tag, &version.to_string())? {
        return Err(ReleaseError::Cancelled);
    }

    let request = PullRequest {
        base: target.to_string(),
        head: branch.name().to_string(),
        title,
        fill: config.release.fill,
    };

    if args.dry_run {
        ui::display_release_plan(&[
            command::render("git", &["checkout", "-b", branch.name(), source]),
            command::render("git", &["push", remote, branch.name()]),
            command::render(forge.program(), &gh::pr_create_args(&request)),
        ]);
        return Ok(WorkflowResult {
            previous_tag,
            version,
            branch: branch.name,
            pull_request_url: None,
            executed: false,
        });
    }

    ui::display_banner(&format!(
        ">>>>> Creating branch '{}' from {}...",
        branch.name(),
        source
    ));

    repo.create_branch(branch.name(), source)?;
    repo.push_branch(remote, branch.name())?;
    let pull_request_url = forge.create_pull_request(&request)?;

    if let Some(url) = &pull_request_url {
        ui::display_success(&format!("Pull request opened: {}", url));
    }
    ui::display_banner("✅ Release branch created successfully!");

    Ok(WorkflowResult {
        previous_tag,
        version,
        branch: branch.name,
        pull_request_url,
        executed: true,
    })
}

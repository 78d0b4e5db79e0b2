use crate::command;
use crate::error::{ReleaseError, Result};
use git2::{BranchType, DescribeOptions, ErrorCode, Repository as Git2Repo, Sort, StatusOptions};
use std::path::{Path, PathBuf};

const GIT: &str = "git";

/// Wrapper around git2::Repository with our trait interface
///
/// Reads go through libgit2. Pull, fetch, checkout and push shell out to the
/// `git` binary so they use the operator's credential helpers and show their
/// usual progress output.
pub struct Git2Repository {
    repo: Git2Repo,
    workdir: PathBuf,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Self::from_git2(repo))
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        let workdir = repo
            .workdir()
            .unwrap_or_else(|| repo.path())
            .to_path_buf();
        Git2Repository { repo, workdir }
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    fn git(&self, args: &[&str]) -> Result<()> {
        command::run_streaming(GIT, args, Some(&self.workdir))
    }
}

impl super::Repository for Git2Repository {
    fn is_cli_available(&self) -> bool {
        which::which(GIT).is_ok()
    }

    fn current_branch(&self) -> Result<String> {
        match self.repo.head() {
            Ok(head) => {
                if !head.is_branch() {
                    return Ok("HEAD".to_string());
                }
                head.shorthand()
                    .map(str::to_string)
                    .ok_or_else(|| ReleaseError::precondition("HEAD is not valid UTF-8"))
            }
            // Fresh repository: HEAD points at a branch with no commits yet
            Err(e) if e.code() == ErrorCode::UnbornBranch => {
                let head = self.repo.find_reference("HEAD")?;
                let target = head.symbolic_target().unwrap_or("HEAD");
                Ok(target.trim_start_matches("refs/heads/").to_string())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn uncommitted_changes(&self) -> Result<Vec<String>> {
        let mut options = StatusOptions::new();
        options
            .include_untracked(true)
            .recurse_untracked_dirs(false)
            .include_ignored(false);

        let statuses = self.repo.statuses(Some(&mut options))?;

        Ok(statuses
            .iter()
            .filter(|entry| {
                let status = entry.status();
                !status.is_empty() && !status.is_ignored()
            })
            .map(|entry| entry.path().unwrap_or("(non UTF-8 path)").to_string())
            .collect())
    }

    fn latest_tag(&self) -> Result<Option<String>> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TIME)?;
        revwalk.push_glob("refs/tags")?;

        let newest = match revwalk.next() {
            Some(oid) => oid?,
            None => return Ok(None),
        };

        let commit = self.repo.find_commit(newest)?;
        let describe = commit
            .as_object()
            .describe(DescribeOptions::new().describe_tags())?;
        let tag = describe.format(None)?;

        log::debug!("latest tag is {} ({})", tag, newest);
        Ok(Some(tag))
    }

    fn branch_exists(&self, branch_name: &str) -> Result<bool> {
        match self.repo.find_branch(branch_name, BranchType::Local) {
            Ok(_) => Ok(true),
            Err(e) if e.code() == ErrorCode::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn pull(&self, remote: &str, branch: &str) -> Result<()> {
        self.git(&["pull", remote, branch])
    }

    fn fetch_tags(&self, remote: &str) -> Result<()> {
        self.git(&["fetch", "--prune", "--prune-tags", remote])
    }

    fn create_branch(&self, branch: &str, start_point: &str) -> Result<()> {
        self.git(&["checkout", "-b", branch, start_point])
    }

    fn push_branch(&self, remote: &str, branch: &str) -> Result<()> {
        self.git(&["push", remote, branch])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_discovers_from_subdirectory() {
        let dir = tempfile::tempdir().unwrap();
        Git2Repo::init(dir.path()).unwrap();
        let nested = dir.path().join("nested");
        std::fs::create_dir(&nested).unwrap();

        let repo = Git2Repository::open(&nested).unwrap();
        assert_eq!(
            repo.workdir().canonicalize().unwrap(),
            dir.path().canonicalize().unwrap()
        );
    }
}

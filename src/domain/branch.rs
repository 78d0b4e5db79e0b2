use super::version::ReleaseVersion;

/// The branch a release is cut into, e.g. `release/13.0`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseBranch {
    pub name: String,
    pub version: ReleaseVersion,
}

impl ReleaseBranch {
    /// Create a release branch name from a prefix and version
    pub fn new(prefix: &str, version: ReleaseVersion) -> Self {
        ReleaseBranch {
            name: format!("{}{}", prefix, version),
            version,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Renders a pull request title, replacing `{version}` in the template.
pub fn pull_request_title(template: &str, version: &ReleaseVersion) -> String {
    template.replace("{version}", &version.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_branch_name() {
        let branch = ReleaseBranch::new("release/", ReleaseVersion::new(13, 0));
        assert_eq!(branch.name(), "release/13.0");
    }

    #[test]
    fn test_release_branch_custom_prefix() {
        let branch = ReleaseBranch::new("rel-", ReleaseVersion::new(4, 0));
        assert_eq!(branch.name(), "rel-4.0");
    }

    #[test]
    fn test_pull_request_title() {
        let title = pull_request_title("Release - {version}", &ReleaseVersion::new(13, 0));
        assert_eq!(title, "Release - 13.0");
    }

    #[test]
    fn test_pull_request_title_without_placeholder() {
        let title = pull_request_title("Next release", &ReleaseVersion::new(2, 0));
        assert_eq!(title, "Next release");
    }
}

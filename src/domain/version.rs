use crate::error::{ReleaseError, Result};
use std::fmt;

/// Two-part release version read from tags such as `12.0`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReleaseVersion {
    pub major: u64,
    pub minor: u64,
}

impl ReleaseVersion {
    /// Create a new version
    pub fn new(major: u64, minor: u64) -> Self {
        ReleaseVersion { major, minor }
    }

    /// Parse version from a tag string (e.g., "12.3" -> ReleaseVersion(12, 3))
    ///
    /// The tag must consist of exactly two dot-separated unsigned numbers.
    /// Prefixes such as `v` and three-part versions are rejected.
    pub fn parse(tag: &str) -> Result<Self> {
        let clean_tag = tag.trim();

        let parts: Vec<&str> = clean_tag.split('.').collect();
        if parts.len() != 2 {
            return Err(ReleaseError::version(format!(
                "'{}' is not a valid release version - expected <major>.<minor>",
                tag
            )));
        }

        let major = parse_component(tag, "major", parts[0])?;
        let minor = parse_component(tag, "minor", parts[1])?;

        Ok(ReleaseVersion { major, minor })
    }

    /// The version of the next release: first part incremented, second reset
    ///
    /// Fails when the major component is already `u64::MAX`.
    pub fn next(&self) -> Result<Self> {
        let major = self.major.checked_add(1).ok_or_else(|| {
            ReleaseError::version(format!(
                "cannot release after '{}' - major component is out of range",
                self
            ))
        })?;

        Ok(ReleaseVersion { major, minor: 0 })
    }
}

fn parse_component(tag: &str, name: &str, part: &str) -> Result<u64> {
    // `u64::from_str` accepts a leading '+'
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ReleaseError::version(format!(
            "'{}' is not a valid release version - invalid {} component '{}'",
            tag, name, part
        )));
    }

    part.parse::<u64>().map_err(|_| {
        ReleaseError::version(format!(
            "'{}' is not a valid release version - {} component '{}' is out of range",
            tag, name, part
        ))
    })
}

impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Computes the release that follows `latest_tag`.
///
/// # Example
/// ```
/// # use cut_release::domain::next_release_version;
/// assert_eq!(next_release_version("12.0").unwrap().to_string(), "13.0");
/// assert_eq!(next_release_version("3.7").unwrap().to_string(), "4.0");
/// assert!(next_release_version("v1").is_err());
/// ```
pub fn next_release_version(latest_tag: &str) -> Result<ReleaseVersion> {
    ReleaseVersion::parse(latest_tag)?.next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parse() {
        let v = ReleaseVersion::parse("12.3").unwrap();
        assert_eq!(v.major, 12);
        assert_eq!(v.minor, 3);
    }

    #[test]
    fn test_version_parse_trims_whitespace() {
        let v = ReleaseVersion::parse(" 4.1\n").unwrap();
        assert_eq!(v, ReleaseVersion::new(4, 1));
    }

    #[test]
    fn test_version_parse_wrong_part_count() {
        assert!(ReleaseVersion::parse("v1").is_err());
        assert!(ReleaseVersion::parse("1").is_err());
        assert!(ReleaseVersion::parse("1.2.3").is_err());
        assert!(ReleaseVersion::parse("").is_err());
    }

    #[test]
    fn test_version_parse_non_numeric() {
        assert!(ReleaseVersion::parse("v1.2").is_err());
        assert!(ReleaseVersion::parse("1.x").is_err());
        assert!(ReleaseVersion::parse(".2").is_err());
        assert!(ReleaseVersion::parse("1.").is_err());
        assert!(ReleaseVersion::parse("+1.2").is_err());
    }

    #[test]
    fn test_version_parse_error_names_tag() {
        let err = ReleaseVersion::parse("v1").unwrap_err();
        assert!(err.to_string().contains("'v1'"));
    }

    #[test]
    fn test_next_resets_minor() {
        assert_eq!(
            ReleaseVersion::new(12, 0).next().unwrap(),
            ReleaseVersion::new(13, 0)
        );
        assert_eq!(
            ReleaseVersion::new(3, 7).next().unwrap(),
            ReleaseVersion::new(4, 0)
        );
    }

    #[test]
    fn test_next_major_overflow_is_error() {
        let err = next_release_version("18446744073709551615.0").unwrap_err();
        assert!(matches!(err, ReleaseError::Version(_)));
        assert!(err.to_string().contains("out of range"));

        assert!(ReleaseVersion::new(u64::MAX, 3).next().is_err());
        assert_eq!(
            ReleaseVersion::new(u64::MAX - 1, 3).next().unwrap(),
            ReleaseVersion::new(u64::MAX, 0)
        );
    }

    #[test]
    fn test_next_release_version_from_tags() {
        for (major, minor) in [(0, 0), (1, 9), (12, 0), (99, 42)] {
            let tag = format!("{}.{}", major, minor);
            assert_eq!(
                next_release_version(&tag).unwrap().to_string(),
                format!("{}.0", major + 1)
            );
        }
    }

    #[test]
    fn test_version_display() {
        assert_eq!(ReleaseVersion::new(13, 0).to_string(), "13.0");
    }
}

//! Domain logic - pure release rules independent of git and the review platform

pub mod branch;
pub mod version;

pub use branch::{pull_request_title, ReleaseBranch};
pub use version::{next_release_version, ReleaseVersion};

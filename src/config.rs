use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "cutrelease.toml";

/// Represents the complete configuration for cut-release.
///
/// Every key is optional; the defaults cut `release/<version>` from `develop`
/// and open a pull request into `main` on `origin` using `gh`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_remote")]
    pub remote: String,

    #[serde(default)]
    pub branches: BranchesConfig,

    #[serde(default)]
    pub release: ReleaseConfig,

    #[serde(default)]
    pub tools: ToolsConfig,
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_source_branch() -> String {
    "develop".to_string()
}

fn default_target_branch() -> String {
    "main".to_string()
}

fn default_branch_prefix() -> String {
    "release/".to_string()
}

fn default_title() -> String {
    "Release - {version}".to_string()
}

fn default_fill() -> bool {
    true
}

fn default_review_tool() -> String {
    "gh".to_string()
}

/// Branches the release is cut from and merged into.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BranchesConfig {
    /// Branch the release branch is created from; must be checked out.
    #[serde(default = "default_source_branch")]
    pub source: String,

    /// Base branch of the pull request.
    #[serde(default = "default_target_branch")]
    pub target: String,
}

impl Default for BranchesConfig {
    fn default() -> Self {
        BranchesConfig {
            source: default_source_branch(),
            target: default_target_branch(),
        }
    }
}

/// Naming of the release branch and pull request.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReleaseConfig {
    #[serde(default = "default_branch_prefix")]
    pub branch_prefix: String,

    /// Pull request title; `{version}` is replaced with the new version.
    #[serde(default = "default_title")]
    pub title: String,

    /// Pass `--fill` so the body is filled from the commits.
    #[serde(default = "default_fill")]
    pub fill: bool,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        ReleaseConfig {
            branch_prefix: default_branch_prefix(),
            title: default_title(),
            fill: default_fill(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ToolsConfig {
    /// Review-platform executable.
    #[serde(default = "default_review_tool")]
    pub review: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        ToolsConfig {
            review: default_review_tool(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            remote: default_remote(),
            branches: BranchesConfig::default(),
            release: ReleaseConfig::default(),
            tools: ToolsConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `cutrelease.toml` in current directory
/// 3. `.cutrelease.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<Config> {
    let path = if let Some(path) = config_path {
        Path::new(path).to_path_buf()
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        Path::new(CONFIG_FILE_NAME).to_path_buf()
    } else if let Some(config_dir) = dirs::config_dir() {
        let user_path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if user_path.exists() {
            user_path
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    log::debug!("loading configuration from {}", path.display());
    let config_str = fs::read_to_string(&path)
        .with_context(|| format!("cannot read config file {}", path.display()))?;
    let config: Config = toml::from_str(&config_str)
        .with_context(|| format!("cannot parse config file {}", path.display()))?;
    Ok(config)
}

pub mod cli;
pub mod command;
pub mod config;
pub mod domain;
pub mod error;
pub mod forge;
pub mod git;
pub mod preflight;
pub mod ui;

pub use error::{ReleaseError, Result};

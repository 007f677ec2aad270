//! debsetup library
//!
//! Core functionality for provisioning a Debian/Ubuntu developer
//! workstation: apt package and repository handling, shell setup, and the
//! fixed provisioning pipeline that sequences them.

pub mod apt;
pub mod cli;
pub mod config_file;
pub mod distro;
pub mod error;
pub mod extras;
pub mod provision;
pub mod runner;
pub mod sanity;
pub mod select;
pub mod shell;
pub mod zshrc;

// Re-export main types for convenience
pub use apt::{Apt, AptMode};
pub use cli::Cli;
pub use config_file::SetupConfig;
pub use distro::Distro;
pub use error::{Result, SetupError};
pub use provision::{ProvisionSummary, provision};
pub use runner::{CommandRunner, SystemRunner};
pub use select::{Package, Repository, SigningKey, main_packages, prerequisite_packages, repositories};

//! Apt command facade.
//!
//! Builds and runs the `apt-get` / `add-apt-repository` / `apt-key`
//! invocations from a verbosity mode and the selected package and repository
//! lists. Privileged commands are escalated per invocation with `sudo`; the
//! tool itself runs as the operator.
//!
//! Key import never pipes through a shell: the key is downloaded to a temp
//! file with curl and handed to `apt-key add` as a path.

use crate::error::Result;
use crate::runner::CommandRunner;
use crate::select::{Package, Repository, SigningKey};
use std::env;
use strum::{Display, EnumString};
use tracing::info;

/// Apt verbosity mode, chosen from the `verbose` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum AptMode {
    /// `-yqq`: assume yes, fully quiet.
    #[default]
    Quiet,
    /// `-y`: assume yes, full apt output.
    Verbose,
}

impl AptMode {
    pub fn from_verbose(verbose: bool) -> Self {
        if verbose { Self::Verbose } else { Self::Quiet }
    }

    /// The assume-yes flag passed to every apt-get invocation.
    pub fn assume_yes_flag(self) -> &'static str {
        match self {
            Self::Quiet => "-yqq",
            Self::Verbose => "-y",
        }
    }
}

/// Facade over the apt command family.
pub struct Apt<'a, R: CommandRunner> {
    runner: &'a R,
    mode: AptMode,
}

impl<'a, R: CommandRunner> Apt<'a, R> {
    pub fn new(runner: &'a R, mode: AptMode) -> Self {
        Self { runner, mode }
    }

    /// `sudo apt-get update`.
    pub fn update(&self) -> Result<()> {
        self.runner
            .run("sudo", &["apt-get", "update", self.mode.assume_yes_flag()])
    }

    /// `sudo apt-get dist-upgrade`.
    pub fn dist_upgrade(&self) -> Result<()> {
        self.runner.run(
            "sudo",
            &["apt-get", "dist-upgrade", self.mode.assume_yes_flag()],
        )
    }

    /// `sudo apt-get install` over the given packages, in order.
    ///
    /// An empty slice is a no-op rather than an `apt-get install` with no
    /// arguments.
    pub fn install(&self, packages: &[Package]) -> Result<()> {
        if packages.is_empty() {
            return Ok(());
        }
        info!(
            "installing {} package(s): {}",
            packages.len(),
            packages
                .iter()
                .map(Package::name)
                .collect::<Vec<_>>()
                .join(" ")
        );
        let mut args: Vec<&str> = vec!["apt-get", "install", self.mode.assume_yes_flag()];
        args.extend(packages.iter().map(Package::name));
        self.runner.run("sudo", &args)
    }

    /// Register a repository via `sudo add-apt-repository -y`.
    pub fn add_repository(&self, repo: &Repository) -> Result<()> {
        info!("registering repository: {}", repo.source_line);
        self.runner
            .run("sudo", &["add-apt-repository", "-y", &repo.source_line])
    }

    /// Import a repository signing key.
    ///
    /// Downloads the key to a temp file, then runs `sudo apt-key add` on it.
    pub fn import_key(&self, key: &SigningKey) -> Result<()> {
        match key {
            SigningKey::Url(url) => {
                info!("importing signing key from {}", url);
                let dest = env::temp_dir().join("debsetup-signing-key.gpg");
                let dest = dest.to_string_lossy().into_owned();
                self.runner.run("curl", &["-fsSL", url, "-o", &dest])?;
                self.runner.run("sudo", &["apt-key", "add", &dest])
            }
        }
    }
}

//! Optional developer tools.
//!
//! Each installer follows the same shape: download the upstream artifact
//! with curl, then run or unpack it. All of these are user-scoped installs
//! under `$HOME`, so nothing here needs sudo. Failures are fatal like every
//! other pipeline step.

use crate::error::Result;
use crate::runner::CommandRunner;
use std::env;
use std::fs;
use std::path::Path;
use tracing::info;

/// micro editor installer script (drops a `micro` binary into the cwd).
pub const MICRO_INSTALL_URL: &str = "https://getmic.ro";

/// nvm installer script.
pub const NVM_INSTALL_URL: &str =
    "https://raw.githubusercontent.com/nvm-sh/nvm/v0.40.3/install.sh";

/// JetBrains Toolbox tarball.
pub const JETBRAINS_TOOLBOX_URL: &str =
    "https://download.jetbrains.com/toolbox/jetbrains-toolbox-2.5.2.35332.tar.gz";

/// Install the micro editor into `~/.local/bin`.
///
/// The upstream script installs into its working directory, so it is run
/// from the target bin directory rather than piped into a shell.
pub fn install_micro<R: CommandRunner>(runner: &R, home: &Path) -> Result<()> {
    let bin_dir = home.join(".local").join("bin");
    fs::create_dir_all(&bin_dir)?;
    info!("installing micro into {}", bin_dir.display());

    let script = env::temp_dir().join("debsetup-getmicro.sh");
    let script = script.to_string_lossy().into_owned();
    runner.run("curl", &["-fsSL", MICRO_INSTALL_URL, "-o", &script])?;
    runner.run_in(&bin_dir, "bash", &[&script])
}

/// Install nvm into `~/.nvm`.
///
/// Skipped when `~/.nvm` already exists; the upstream installer would
/// otherwise re-clone over it.
pub fn install_nvm<R: CommandRunner>(runner: &R, home: &Path) -> Result<()> {
    if home.join(".nvm").exists() {
        info!("nvm already installed, skipping");
        return Ok(());
    }
    info!("installing nvm");
    let script = env::temp_dir().join("debsetup-nvm-install.sh");
    let script = script.to_string_lossy().into_owned();
    runner.run("curl", &["-fsSL", NVM_INSTALL_URL, "-o", &script])?;
    runner.run("bash", &[&script])
}

/// Download and unpack JetBrains Toolbox into `~/jetbrains/`.
pub fn install_jetbrains_toolbox<R: CommandRunner>(runner: &R, home: &Path) -> Result<()> {
    let dest = home.join("jetbrains");
    fs::create_dir_all(&dest)?;
    info!("installing JetBrains Toolbox into {}", dest.display());

    let tarball = env::temp_dir().join("debsetup-jetbrains-toolbox.tar.gz");
    let tarball = tarball.to_string_lossy().into_owned();
    let dest = dest.to_string_lossy().into_owned();
    runner.run("curl", &["-fsSL", JETBRAINS_TOOLBOX_URL, "-o", &tarball])?;
    runner.run(
        "tar",
        &["-xzf", &tarball, "-C", &dest, "--strip-components=1"],
    )
}

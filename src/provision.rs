//! Provisioning pipeline.
//!
//! One fixed linear sequence, no loops beyond per-repository iteration, no
//! state machine, no parallelism. Every step blocks until its command exits;
//! the first failure propagates out through `?` and halts the remainder.
//! Prior side effects (installed packages, registered repositories) are not
//! rolled back.

use crate::apt::{Apt, AptMode};
use crate::config_file::SetupConfig;
use crate::distro::Distro;
use crate::error::Result;
use crate::extras::{install_jetbrains_toolbox, install_micro, install_nvm};
use crate::runner::CommandRunner;
use crate::select::{main_packages, prerequisite_packages, repositories};
use crate::shell::{add_groups, change_default_shell};
use crate::zshrc::{install_oh_my_zsh, render_zshrc, write_zshrc};
use std::path::Path;
use tracing::info;

/// Outcome of a completed provisioning run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProvisionSummary {
    /// True when group membership changed and a reboot (or re-login) is
    /// needed before it takes effect.
    pub reboot_recommended: bool,
}

impl ProvisionSummary {
    /// The final line printed to the operator.
    pub fn status_line(&self) -> &'static str {
        if self.reboot_recommended {
            "Done, please reboot"
        } else {
            "Done"
        }
    }
}

/// Run the full provisioning sequence.
///
/// 1. apt update
/// 2. install prerequisite packages
/// 3. per selected repository: import its key, then register it
/// 4. apt update again
/// 5. apt dist-upgrade
/// 6. install main packages
/// 7. change the login shell to zsh
/// 8. add group memberships (docker)
/// 9. install oh-my-zsh
/// 10. write `~/.zshrc`
/// 11. optional extras: nvm, micro, JetBrains Toolbox
pub fn provision<R: CommandRunner>(
    runner: &R,
    config: &SetupConfig,
    distro: &Distro,
    home: &Path,
    user: &str,
) -> Result<ProvisionSummary> {
    let apt = Apt::new(runner, AptMode::from_verbose(config.verbose));

    info!("updating package lists");
    apt.update()?;

    info!("installing prerequisites");
    apt.install(&prerequisite_packages(config))?;

    let repos = repositories(config, distro);
    for repo in &repos {
        if let Some(key) = &repo.key {
            apt.import_key(key)?;
        }
        apt.add_repository(repo)?;
    }

    info!("refreshing package lists");
    apt.update()?;
    apt.dist_upgrade()?;

    info!("installing packages");
    apt.install(&main_packages(config))?;

    change_default_shell(runner, user)?;

    let mut groups: Vec<&str> = Vec::new();
    if config.docker {
        groups.push("docker");
    }
    let reboot_recommended = add_groups(runner, user, &groups)?;

    install_oh_my_zsh(runner, home)?;
    let rc = render_zshrc(&config.zsh_theme, config.nvm);
    write_zshrc(&home.join(".zshrc"), &rc, config.overwrite_zsh)?;

    if config.nvm {
        install_nvm(runner, home)?;
    }
    if config.micro {
        install_micro(runner, home)?;
    }
    if config.jetbrains {
        install_jetbrains_toolbox(runner, home)?;
    }

    Ok(ProvisionSummary { reboot_recommended })
}

//! Login shell and group membership.
//!
//! Both operations touch the user database, so they run under sudo. Group
//! membership only takes effect in new sessions, which is why adding any
//! group makes the final status line recommend a reboot.

use crate::error::Result;
use crate::runner::CommandRunner;
use tracing::info;

/// Path handed to `chsh -s`.
pub const ZSH_PATH: &str = "/usr/bin/zsh";

/// Change the user's login shell to zsh.
pub fn change_default_shell<R: CommandRunner>(runner: &R, user: &str) -> Result<()> {
    info!("changing login shell of {} to {}", user, ZSH_PATH);
    runner.run("sudo", &["chsh", "-s", ZSH_PATH, user])
}

/// Add the user to the given groups.
///
/// Returns true iff at least one group was added, i.e. the membership is not
/// yet visible to running sessions and a reboot (or re-login) is
/// recommended. No current-membership check is made; selecting a group means
/// issuing the command.
pub fn add_groups<R: CommandRunner>(runner: &R, user: &str, groups: &[&str]) -> Result<bool> {
    for group in groups {
        info!("adding {} to group {}", user, group);
        runner.run("sudo", &["usermod", "-aG", group, user])?;
    }
    Ok(!groups.is_empty())
}

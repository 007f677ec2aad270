//! Command-line interface.
//!
//! One flat flag set, read once at startup and immutable for the process
//! lifetime. Feature flags are booleans that also accept an explicit value,
//! so `--docker`, `--docker=true` and `--docker false` all parse.

use crate::config_file::SetupConfig;
use clap::Parser;
use std::path::PathBuf;

/// Provision a Debian/Ubuntu developer workstation
#[derive(Parser, Debug)]
#[command(name = "debsetup")]
#[command(about = "Provision a Debian/Ubuntu developer workstation")]
#[command(version)]
pub struct Cli {
    /// Show full apt output (-y instead of -yqq)
    #[arg(long, num_args = 0..=1, default_missing_value = "true", default_value_t = false, action = clap::ArgAction::Set)]
    pub verbose: bool,

    /// Install Docker Engine from the official apt repository
    #[arg(long, num_args = 0..=1, default_missing_value = "true", default_value_t = false, action = clap::ArgAction::Set)]
    pub docker: bool,

    /// Install nvm and enable its oh-my-zsh plugin
    #[arg(long, num_args = 0..=1, default_missing_value = "true", default_value_t = false, action = clap::ArgAction::Set)]
    pub nvm: bool,

    /// oh-my-zsh theme written into ~/.zshrc
    #[arg(long, value_name = "NAME", default_value = "robbyrussell")]
    pub zsh_theme: String,

    /// Overwrite an existing ~/.zshrc
    #[arg(long, num_args = 0..=1, default_missing_value = "true", default_value_t = false, action = clap::ArgAction::Set)]
    pub overwrite_zsh: bool,

    /// Install the micro editor
    #[arg(long, num_args = 0..=1, default_missing_value = "true", default_value_t = false, action = clap::ArgAction::Set)]
    pub micro: bool,

    /// Download JetBrains Toolbox into ~/jetbrains/
    #[arg(long, num_args = 0..=1, default_missing_value = "true", default_value_t = false, action = clap::ArgAction::Set)]
    pub jetbrains: bool,

    /// Install KeePassXC from its PPA
    #[arg(long, num_args = 0..=1, default_missing_value = "true", default_value_t = false, action = clap::ArgAction::Set)]
    pub keepassxc: bool,

    /// Install davfs2
    #[arg(long, num_args = 0..=1, default_missing_value = "true", default_value_t = false, action = clap::ArgAction::Set)]
    pub davfs: bool,

    /// Log every command instead of executing it
    #[arg(long)]
    pub dry_run: bool,

    /// Load the flag set from a saved JSON file (other feature flags are ignored)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write the flag set to a JSON file and exit without provisioning
    #[arg(long, value_name = "PATH", conflicts_with = "config")]
    pub save_config: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Collect the feature flags into a [`SetupConfig`].
    pub fn to_setup_config(&self) -> SetupConfig {
        SetupConfig {
            verbose: self.verbose,
            docker: self.docker,
            nvm: self.nvm,
            zsh_theme: self.zsh_theme.clone(),
            overwrite_zsh: self.overwrite_zsh,
            micro: self.micro,
            jetbrains: self.jetbrains,
            keepassxc: self.keepassxc,
            davfs: self.davfs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["debsetup"]);
        assert!(!cli.verbose);
        assert!(!cli.docker);
        assert_eq!(cli.zsh_theme, "robbyrussell");
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_bare_flag_means_true() {
        let cli = Cli::parse_from(["debsetup", "--docker", "--nvm"]);
        assert!(cli.docker);
        assert!(cli.nvm);
        assert!(!cli.micro);
    }

    #[test]
    fn test_explicit_false_value() {
        let cli = Cli::parse_from(["debsetup", "--docker=false"]);
        assert!(!cli.docker);
    }

    #[test]
    fn test_explicit_true_value_with_space() {
        let cli = Cli::parse_from(["debsetup", "--keepassxc", "true"]);
        assert!(cli.keepassxc);
    }

    #[test]
    fn test_theme_flag() {
        let cli = Cli::parse_from(["debsetup", "--zsh-theme", "agnoster"]);
        assert_eq!(cli.zsh_theme, "agnoster");
    }

    #[test]
    fn test_to_setup_config_carries_flags() {
        let cli = Cli::parse_from(["debsetup", "--docker", "--davfs", "--zsh-theme", "af-magic"]);
        let config = cli.to_setup_config();
        assert!(config.docker);
        assert!(config.davfs);
        assert!(!config.jetbrains);
        assert_eq!(config.zsh_theme, "af-magic");
    }

    #[test]
    fn test_config_conflicts_with_save_config() {
        let result = Cli::try_parse_from([
            "debsetup",
            "--config",
            "a.json",
            "--save-config",
            "b.json",
        ]);
        assert!(result.is_err());
    }
}

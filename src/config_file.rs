//! Saved configuration files.
//!
//! A flag set can be written to a JSON file with `--save-config` and loaded
//! back with `--config`, so a workstation build can be reproduced without
//! retyping the flags. The file holds only the provisioning choices;
//! runtime switches (`--dry-run`) stay on the command line.

use crate::error::{Result, SetupError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// The full provisioning flag set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SetupConfig {
    /// Show full apt output (`-y` instead of `-yqq`).
    pub verbose: bool,
    /// Docker Engine: official apt repo + GPG key, packages, `docker` group.
    pub docker: bool,
    /// nvm install script + oh-my-zsh plugin.
    pub nvm: bool,
    /// oh-my-zsh theme written into `~/.zshrc`.
    pub zsh_theme: String,
    /// Overwrite an existing `~/.zshrc`.
    pub overwrite_zsh: bool,
    /// micro editor via its upstream install script.
    pub micro: bool,
    /// JetBrains Toolbox downloaded into `~/jetbrains/`.
    pub jetbrains: bool,
    /// KeePassXC PPA + package.
    pub keepassxc: bool,
    /// davfs2 package.
    pub davfs: bool,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            docker: false,
            nvm: false,
            zsh_theme: "robbyrussell".to_string(),
            overwrite_zsh: false,
            micro: false,
            jetbrains: false,
            keepassxc: false,
            davfs: false,
        }
    }
}

impl SetupConfig {
    /// Load and validate a configuration from a JSON file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            SetupError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        info!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Write the configuration to a JSON file, pretty-printed.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        info!("saved configuration to {}", path.display());
        Ok(())
    }

    /// Validate the configuration values.
    ///
    /// The theme name ends up inside `~/.zshrc`; an empty or whitespace
    /// value would produce a broken rc file.
    pub fn validate(&self) -> Result<()> {
        if self.zsh_theme.trim().is_empty() {
            return Err(SetupError::Config(
                "zsh_theme must not be empty".to_string(),
            ));
        }
        if self.zsh_theme.contains(char::is_whitespace) {
            return Err(SetupError::Config(
                "zsh_theme must not contain whitespace".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let config = SetupConfig::default();
        assert_eq!(config.zsh_theme, "robbyrussell");
        assert!(!config.docker);
    }

    #[test]
    fn test_validate_rejects_empty_theme() {
        let config = SetupConfig {
            zsh_theme: "  ".to_string(),
            ..SetupConfig::default()
        };
        assert!(matches!(config.validate(), Err(SetupError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_whitespace_theme() {
        let config = SetupConfig {
            zsh_theme: "agn oster".to_string(),
            ..SetupConfig::default()
        };
        assert!(matches!(config.validate(), Err(SetupError::Config(_))));
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("setup.json");
        let config = SetupConfig {
            docker: true,
            nvm: true,
            zsh_theme: "agnoster".to_string(),
            ..SetupConfig::default()
        };
        config.save_to_file(&path).unwrap();
        let loaded = SetupConfig::load_from_file(&path).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_fills_missing_fields_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.json");
        fs::write(&path, r#"{"docker": true}"#).unwrap();
        let loaded = SetupConfig::load_from_file(&path).unwrap();
        assert!(loaded.docker);
        assert_eq!(loaded.zsh_theme, "robbyrussell");
    }

    #[test]
    fn test_load_rejects_unknown_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"{"dokcer": true}"#).unwrap();
        assert!(SetupConfig::load_from_file(&path).is_err());
    }
}

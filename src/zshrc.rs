//! Zsh startup configuration.
//!
//! Renders `~/.zshrc` for oh-my-zsh and installs the framework itself. The
//! rc file is generated from the selected theme and plugin set; an existing
//! file is left alone unless overwriting was requested.

use crate::error::Result;
use crate::runner::CommandRunner;
use std::env;
use std::fs;
use std::path::Path;
use tracing::info;

/// Upstream oh-my-zsh installer.
pub const OH_MY_ZSH_INSTALL_URL: &str =
    "https://raw.githubusercontent.com/ohmyzsh/ohmyzsh/master/tools/install.sh";

/// Render the `.zshrc` contents for the given theme and plugin selection.
///
/// The plugin line always carries `git`; `nvm` is appended when nvm support
/// was selected, along with the loader lines nvm needs outside of oh-my-zsh.
pub fn render_zshrc(theme: &str, nvm: bool) -> String {
    let plugins = if nvm { "git nvm" } else { "git" };
    let mut rc = format!(
        "export ZSH=\"$HOME/.oh-my-zsh\"\n\
         \n\
         ZSH_THEME=\"{theme}\"\n\
         \n\
         plugins=({plugins})\n\
         \n\
         source \"$ZSH/oh-my-zsh.sh\"\n"
    );
    if nvm {
        rc.push_str(
            "\nexport NVM_DIR=\"$HOME/.nvm\"\n\
             [ -s \"$NVM_DIR/nvm.sh\" ] && \\. \"$NVM_DIR/nvm.sh\"\n",
        );
    }
    rc
}

/// Write the rc file, honoring the overwrite flag.
///
/// Returns `Ok(true)` when the file was written, `Ok(false)` when an
/// existing file was kept.
pub fn write_zshrc(path: &Path, contents: &str, overwrite: bool) -> Result<bool> {
    if path.exists() && !overwrite {
        info!("{} exists, keeping it (pass --overwrite-zsh to replace)", path.display());
        return Ok(false);
    }
    fs::write(path, contents)?;
    info!("wrote {}", path.display());
    Ok(true)
}

/// Install oh-my-zsh for the invoking user.
///
/// Skipped when `~/.oh-my-zsh` already exists. The installer script is
/// downloaded to a temp file and run unattended so it neither switches the
/// shell nor launches zsh itself; the pipeline handles the shell change.
pub fn install_oh_my_zsh<R: CommandRunner>(runner: &R, home: &Path) -> Result<()> {
    if home.join(".oh-my-zsh").exists() {
        info!("oh-my-zsh already installed, skipping");
        return Ok(());
    }
    let script = env::temp_dir().join("debsetup-oh-my-zsh-install.sh");
    let script = script.to_string_lossy().into_owned();
    runner.run("curl", &["-fsSL", OH_MY_ZSH_INSTALL_URL, "-o", &script])?;
    runner.run("sh", &[&script, "--unattended"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_without_nvm_has_git_only() {
        let rc = render_zshrc("robbyrussell", false);
        assert!(rc.contains("plugins=(git)"));
        assert!(!rc.contains("nvm"));
    }

    #[test]
    fn test_render_with_nvm_has_both_plugins() {
        let rc = render_zshrc("robbyrussell", true);
        assert!(rc.contains("plugins=(git nvm)"));
        assert!(rc.contains("NVM_DIR"));
    }

    #[test]
    fn test_render_carries_theme() {
        let rc = render_zshrc("agnoster", false);
        assert!(rc.contains("ZSH_THEME=\"agnoster\""));
    }

    #[test]
    fn test_write_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".zshrc");
        let written = write_zshrc(&path, "contents\n", false).unwrap();
        assert!(written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "contents\n");
    }

    #[test]
    fn test_write_keeps_existing_file_without_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".zshrc");
        fs::write(&path, "original\n").unwrap();
        let written = write_zshrc(&path, "replacement\n", false).unwrap();
        assert!(!written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "original\n");
    }

    #[test]
    fn test_write_replaces_existing_file_with_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".zshrc");
        fs::write(&path, "original\n").unwrap();
        let written = write_zshrc(&path, "replacement\n", true).unwrap();
        assert!(written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "replacement\n");
    }
}

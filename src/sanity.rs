//! Pre-flight sanity checks.
//!
//! Verifies that every binary the pipeline shells out to is present on PATH
//! before any side effect happens. A missing tool five steps in would leave
//! the system half-provisioned; a missing tool up front is a clean error.

use crate::error::{Result, SetupError};
use std::env;
use std::path::Path;

/// Binaries the pipeline shells out to.
pub const REQUIRED_BINARIES: &[&str] = &[
    "sudo",
    "apt-get",
    "add-apt-repository",
    "apt-key",
    "curl",
    "chsh",
    "usermod",
    "tar",
    "sh",
    "bash",
];

/// Return the required binaries not found in `path_var` (a PATH-style
/// colon-separated directory list).
pub fn missing_from(path_var: &str) -> Vec<&'static str> {
    REQUIRED_BINARIES
        .iter()
        .copied()
        .filter(|name| {
            !path_var
                .split(':')
                .filter(|dir| !dir.is_empty())
                .any(|dir| Path::new(dir).join(name).exists())
        })
        .collect()
}

/// Check PATH for the required binaries; error out if any are missing.
pub fn verify_environment() -> Result<()> {
    let path_var = env::var("PATH").unwrap_or_default();
    let missing = missing_from(&path_var);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(SetupError::MissingTools(missing.join(", ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_empty_path_reports_everything_missing() {
        let missing = missing_from("");
        assert_eq!(missing.len(), REQUIRED_BINARIES.len());
    }

    #[test]
    fn test_present_binaries_are_not_reported() {
        let dir = tempfile::tempdir().unwrap();
        for name in REQUIRED_BINARIES {
            fs::write(dir.path().join(name), "").unwrap();
        }
        let missing = missing_from(&dir.path().to_string_lossy());
        assert!(missing.is_empty());
    }

    #[test]
    fn test_partial_path_reports_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("sudo"), "").unwrap();
        fs::write(dir.path().join("curl"), "").unwrap();
        let missing = missing_from(&dir.path().to_string_lossy());
        assert!(!missing.contains(&"sudo"));
        assert!(!missing.contains(&"curl"));
        assert!(missing.contains(&"apt-get"));
    }
}

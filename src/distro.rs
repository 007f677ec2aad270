//! Distribution detection.
//!
//! Reads `/etc/os-release` and reduces it to the two facts the provisioner
//! needs: the distribution id and the release codename that third-party apt
//! source lines interpolate.
//!
//! Linux Mint is the one special case: its `ID` does not match the codename
//! apt repositories expect, so the upstream Ubuntu pair
//! (`ubuntu`, `UBUNTU_CODENAME`) is reported instead.

use crate::error::{Result, SetupError};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use tracing::info;

const OS_RELEASE_PATH: &str = "/etc/os-release";

/// Detected distribution identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distro {
    /// Distribution id as apt repositories know it (e.g. `ubuntu`, `debian`).
    pub id: String,
    /// Release codename (e.g. `jammy`, `bookworm`).
    pub codename: String,
}

impl Distro {
    /// Detect the running distribution from `/etc/os-release`.
    ///
    /// A missing or malformed file is an error; the provisioning run cannot
    /// continue without knowing which repositories to register.
    pub fn detect() -> Result<Self> {
        let contents = fs::read_to_string(OS_RELEASE_PATH).map_err(|e| {
            SetupError::OsRelease(format!("cannot read {}: {}", OS_RELEASE_PATH, e))
        })?;
        let distro = Self::parse(&contents)?;
        info!("detected distribution: {}", distro);
        Ok(distro)
    }

    /// Parse `os-release` contents (`KEY=VALUE` lines, values may be quoted).
    pub fn parse(contents: &str) -> Result<Self> {
        let mut fields: HashMap<&str, &str> = HashMap::new();
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                fields.insert(key.trim(), value.trim().trim_matches('"'));
            }
        }

        let id = *fields
            .get("ID")
            .ok_or_else(|| SetupError::OsRelease("missing ID field".to_string()))?;

        // Mint ships Ubuntu's repositories under its own ID; apt source
        // lines need the upstream pair.
        if id == "linuxmint" {
            let codename = fields.get("UBUNTU_CODENAME").ok_or_else(|| {
                SetupError::OsRelease("missing UBUNTU_CODENAME field".to_string())
            })?;
            return Ok(Self {
                id: "ubuntu".to_string(),
                codename: (*codename).to_string(),
            });
        }

        let codename = fields.get("VERSION_CODENAME").ok_or_else(|| {
            SetupError::OsRelease("missing VERSION_CODENAME field".to_string())
        })?;
        Ok(Self {
            id: id.to_string(),
            codename: (*codename).to_string(),
        })
    }
}

impl fmt::Display for Distro {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.id, self.codename)
    }
}

//! Package & repository selection.
//!
//! Translates the provisioning flag set into concrete package names and apt
//! repository descriptors.
//!
//! # Resolution rules
//!
//! - Selection is order-preserving per table: apt receives the packages in
//!   the order the tables define them.
//! - No deduplication and no conflict detection; apt resolves dependencies.
//! - An entry appears in the output iff its gating flag is true.

use crate::config_file::SetupConfig;
use crate::distro::Distro;
use std::fmt;

/// A package name destined for `apt-get install`.
///
/// There is no identity beyond the name; the type exists so call sites take
/// `&[Package]` rather than bare strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Package {
    name: &'static str,
}

impl Package {
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Location of a repository signing key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SigningKey {
    /// GPG key fetched over HTTPS and handed to `apt-key add`.
    Url(&'static str),
}

/// An apt repository to register before the main package install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    /// Full source line (`deb ...`) or a `ppa:` spec, as accepted by
    /// `add-apt-repository`.
    pub source_line: String,
    /// Signing key to import first, if the archive is not keyed by a PPA.
    pub key: Option<SigningKey>,
}

/// Docker's apt archive signing key.
pub const DOCKER_GPG_URL: &str = "https://download.docker.com/linux/ubuntu/gpg";

/// Packages needed before third-party repositories can be registered.
const PREREQUISITE_PACKAGES: &[Package] = &[
    Package::new("apt-transport-https"),
    Package::new("ca-certificates"),
    Package::new("curl"),
    Package::new("gnupg"),
    Package::new("software-properties-common"),
];

/// Unconditional entries of the main package table.
const BASE_PACKAGES: &[Package] = &[
    Package::new("zsh"),
    Package::new("git"),
    Package::new("wget"),
    Package::new("vim"),
    Package::new("htop"),
    Package::new("build-essential"),
];

/// Docker Engine packages from the official repository.
const DOCKER_PACKAGES: &[Package] = &[
    Package::new("docker-ce"),
    Package::new("docker-ce-cli"),
    Package::new("containerd.io"),
];

/// Packages installed before any repository work.
///
/// These are needed by the repository registration itself (curl for key
/// downloads, software-properties-common for `add-apt-repository`), so they
/// are unconditional.
pub fn prerequisite_packages(_config: &SetupConfig) -> Vec<Package> {
    PREREQUISITE_PACKAGES.to_vec()
}

/// Resolve the main package table from the flag set.
///
/// 1. Base workstation packages — always installed
/// 2. Docker Engine packages when `docker` is set
/// 3. `keepassxc` when `keepassxc` is set
/// 4. `davfs2` when `davfs` is set
pub fn main_packages(config: &SetupConfig) -> Vec<Package> {
    let mut packages: Vec<Package> = BASE_PACKAGES.to_vec();

    if config.docker {
        packages.extend_from_slice(DOCKER_PACKAGES);
    }
    if config.keepassxc {
        packages.push(Package::new("keepassxc"));
    }
    if config.davfs {
        packages.push(Package::new("davfs2"));
    }

    packages
}

/// Resolve the third-party repositories to register from the flag set.
///
/// Docker's source line interpolates the detected distribution id and
/// codename; the KeePassXC PPA is keyed by Launchpad and needs no explicit
/// key import.
pub fn repositories(config: &SetupConfig, distro: &Distro) -> Vec<Repository> {
    let mut repos = Vec::new();

    if config.docker {
        repos.push(Repository {
            source_line: format!(
                "deb [arch=amd64] https://download.docker.com/linux/{} {} stable",
                distro.id, distro.codename
            ),
            key: Some(SigningKey::Url(DOCKER_GPG_URL)),
        });
    }
    if config.keepassxc {
        repos.push(Repository {
            source_line: "ppa:phoerious/keepassxc".to_string(),
            key: None,
        });
    }

    repos
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_distro() -> Distro {
        Distro {
            id: "ubuntu".to_string(),
            codename: "jammy".to_string(),
        }
    }

    fn names(packages: &[Package]) -> Vec<&'static str> {
        packages.iter().map(Package::name).collect()
    }

    #[test]
    fn test_prerequisites_are_unconditional() {
        let plain = prerequisite_packages(&SetupConfig::default());
        let loaded = prerequisite_packages(&SetupConfig {
            docker: true,
            keepassxc: true,
            davfs: true,
            ..SetupConfig::default()
        });
        assert_eq!(plain, loaded);
        assert!(names(&plain).contains(&"curl"));
        assert!(names(&plain).contains(&"software-properties-common"));
    }

    #[test]
    fn test_main_packages_default_has_only_base() {
        let packages = main_packages(&SetupConfig::default());
        assert_eq!(
            names(&packages),
            vec!["zsh", "git", "wget", "vim", "htop", "build-essential"]
        );
    }

    #[test]
    fn test_main_packages_docker_appends_engine_packages() {
        let packages = main_packages(&SetupConfig {
            docker: true,
            ..SetupConfig::default()
        });
        let names = names(&packages);
        assert!(names.contains(&"docker-ce"));
        assert!(names.contains(&"docker-ce-cli"));
        assert!(names.contains(&"containerd.io"));
        // Gated entries come after the base table, in table order.
        assert_eq!(names[names.len() - 3..], ["docker-ce", "docker-ce-cli", "containerd.io"]);
    }

    #[test]
    fn test_main_packages_keepassxc_and_davfs_ordering() {
        let packages = main_packages(&SetupConfig {
            keepassxc: true,
            davfs: true,
            ..SetupConfig::default()
        });
        let names = names(&packages);
        let keepass = names.iter().position(|n| *n == "keepassxc").unwrap();
        let davfs = names.iter().position(|n| *n == "davfs2").unwrap();
        assert!(keepass < davfs);
    }

    #[test]
    fn test_main_packages_no_duplicates() {
        let packages = main_packages(&SetupConfig {
            docker: true,
            keepassxc: true,
            davfs: true,
            ..SetupConfig::default()
        });
        let mut seen = names(&packages);
        seen.sort_unstable();
        let len = seen.len();
        seen.dedup();
        assert_eq!(seen.len(), len);
    }

    #[test]
    fn test_repositories_default_is_empty() {
        assert!(repositories(&SetupConfig::default(), &test_distro()).is_empty());
    }

    #[test]
    fn test_repositories_docker_interpolates_codename() {
        let repos = repositories(
            &SetupConfig {
                docker: true,
                ..SetupConfig::default()
            },
            &test_distro(),
        );
        assert_eq!(repos.len(), 1);
        assert_eq!(
            repos[0].source_line,
            "deb [arch=amd64] https://download.docker.com/linux/ubuntu jammy stable"
        );
        assert_eq!(repos[0].key, Some(SigningKey::Url(DOCKER_GPG_URL)));
    }

    #[test]
    fn test_repositories_keepassxc_is_unkeyed_ppa() {
        let repos = repositories(
            &SetupConfig {
                keepassxc: true,
                ..SetupConfig::default()
            },
            &test_distro(),
        );
        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].source_line, "ppa:phoerious/keepassxc");
        assert!(repos[0].key.is_none());
    }

    #[test]
    fn test_repositories_docker_before_keepassxc() {
        let repos = repositories(
            &SetupConfig {
                docker: true,
                keepassxc: true,
                ..SetupConfig::default()
            },
            &test_distro(),
        );
        assert_eq!(repos.len(), 2);
        assert!(repos[0].source_line.starts_with("deb "));
        assert!(repos[1].source_line.starts_with("ppa:"));
    }
}

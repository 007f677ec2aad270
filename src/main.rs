//! debsetup - Main entry point
//!
//! Parses the flag set, verifies the environment, and runs the provisioning
//! pipeline. The process exits non-zero on the first failing step; otherwise
//! it prints the final status line and exits zero.

use anyhow::Context;
use std::env;
use std::path::PathBuf;
use std::process;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use debsetup::cli::Cli;
use debsetup::config_file::SetupConfig;
use debsetup::distro::Distro;
use debsetup::error::SetupError;
use debsetup::provision::provision;
use debsetup::runner::SystemRunner;
use debsetup::sanity;

/// Initialize tracing with an env-filter; `RUST_LOG` overrides the default.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse_args();
    if let Err(e) = run(&cli) {
        error!("{:#}", e);
        eprintln!("setup failed: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => SetupConfig::load_from_file(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => cli.to_setup_config(),
    };
    config.validate()?;

    if let Some(path) = &cli.save_config {
        config.save_to_file(path)?;
        println!("Configuration written to {}", path.display());
        return Ok(());
    }

    sanity::verify_environment()?;

    let distro = Distro::detect()?;
    let home = PathBuf::from(env::var_os("HOME").ok_or(SetupError::MissingEnv("HOME"))?);
    // Under sudo the target user is the invoker, not root.
    let user = env::var("SUDO_USER")
        .or_else(|_| env::var("USER"))
        .map_err(|_| SetupError::MissingEnv("USER"))?;
    info!("provisioning for {} (home {})", user, home.display());

    let runner = SystemRunner::new(cli.dry_run);
    let summary = provision(&runner, &config, &distro, &home, &user)?;

    println!("{}", summary.status_line());
    Ok(())
}

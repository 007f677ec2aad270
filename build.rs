//! Build script: generates the man page and shell completions.
//!
//! The CLI is mirrored here with the builder API because build scripts cannot
//! depend on the crate they build. Keep the flag list in sync with
//! `src/cli.rs`.

use clap::{Arg, ArgAction, Command};
use clap_complete::generate_to;
use clap_complete::shells::{Bash, Zsh};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Boolean feature flag taking an optional explicit value.
fn toggle(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .help(help)
        .num_args(0..=1)
        .default_missing_value("true")
        .default_value("false")
        .value_parser(clap::value_parser!(bool))
        .action(ArgAction::Set)
}

fn cli() -> Command {
    Command::new("debsetup")
        .about("Provision a Debian/Ubuntu developer workstation")
        .arg(toggle("verbose", "Show full apt output (-y instead of -yqq)"))
        .arg(toggle("docker", "Install Docker Engine from the official apt repository"))
        .arg(toggle("nvm", "Install nvm and enable its oh-my-zsh plugin"))
        .arg(
            Arg::new("zsh-theme")
                .long("zsh-theme")
                .value_name("NAME")
                .default_value("robbyrussell")
                .help("oh-my-zsh theme written into ~/.zshrc"),
        )
        .arg(toggle("overwrite-zsh", "Overwrite an existing ~/.zshrc"))
        .arg(toggle("micro", "Install the micro editor"))
        .arg(toggle("jetbrains", "Download JetBrains Toolbox into ~/jetbrains/"))
        .arg(toggle("keepassxc", "Install KeePassXC from its PPA"))
        .arg(toggle("davfs", "Install davfs2"))
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .action(ArgAction::SetTrue)
                .help("Log every command instead of executing it"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Load the flag set from a saved JSON file"),
        )
        .arg(
            Arg::new("save-config")
                .long("save-config")
                .value_name("PATH")
                .help("Write the flag set to a JSON file and exit"),
        )
}

fn main() -> io::Result<()> {
    let Some(out_dir) = env::var_os("OUT_DIR") else {
        return Ok(());
    };
    let out_dir = PathBuf::from(out_dir);

    let mut cmd = cli();
    generate_to(Bash, &mut cmd, "debsetup", &out_dir)?;
    generate_to(Zsh, &mut cmd, "debsetup", &out_dir)?;

    let man = Man::new(cli());
    let mut buf: Vec<u8> = Vec::new();
    man.render(&mut buf)?;
    fs::write(out_dir.join("debsetup.1"), buf)?;

    println!("cargo:rerun-if-changed=build.rs");
    Ok(())
}

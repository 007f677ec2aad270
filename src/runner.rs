//! Command execution.
//!
//! Every external command the provisioner issues goes through the
//! [`CommandRunner`] trait. Commands are argument vectors, never shell
//! strings, so operator-supplied values (theme names, package names) are
//! passed to the kernel verbatim with no quoting hazards.
//!
//! [`SystemRunner`] is the production implementation: it blocks until the
//! child exits and fails fast on anything but a clean zero exit. Tests swap
//! in a recording fake to assert on invocation order without side effects.

use crate::error::{Result, SetupError};
use std::path::Path;
use std::process::Command;
use tracing::{debug, info};

/// Abstraction over running external commands.
///
/// The pipeline never inspects command output; it only cares whether the
/// command succeeded. Failure is signalled through `SetupError` and aborts
/// the run at the call site via `?`.
pub trait CommandRunner {
    /// Run `program` with `args`, blocking until it exits.
    fn run(&self, program: &str, args: &[&str]) -> Result<()>;

    /// Run `program` with `args` from working directory `dir`.
    fn run_in(&self, dir: &Path, program: &str, args: &[&str]) -> Result<()>;
}

/// Executes commands on the host system.
///
/// Every child is spawned with `DEBIAN_FRONTEND=noninteractive` so apt and
/// dpkg never stop to prompt. In dry-run mode commands are logged and
/// reported as successful without being executed.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner {
    dry_run: bool,
}

impl SystemRunner {
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    fn execute(&self, dir: Option<&Path>, program: &str, args: &[&str]) -> Result<()> {
        if self.dry_run {
            info!("dry-run: {} {}", program, args.join(" "));
            return Ok(());
        }

        debug!("running: {} {}", program, args.join(" "));

        let mut cmd = Command::new(program);
        cmd.args(args).env("DEBIAN_FRONTEND", "noninteractive");
        if let Some(dir) = dir {
            cmd.current_dir(dir);
        }

        let status = cmd.status().map_err(|source| SetupError::CommandSpawn {
            program: program.to_string(),
            source,
        })?;

        if status.success() {
            return Ok(());
        }
        match status.code() {
            Some(code) => Err(SetupError::CommandFailed {
                program: program.to_string(),
                code,
            }),
            None => Err(SetupError::CommandSignaled {
                program: program.to_string(),
            }),
        }
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<()> {
        self.execute(None, program, args)
    }

    fn run_in(&self, dir: &Path, program: &str, args: &[&str]) -> Result<()> {
        self.execute(Some(dir), program, args)
    }
}

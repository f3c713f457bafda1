//! Orchestration program invoker.
//!
//! Runs `docker compose ...` (or a configured replacement) with an explicit
//! environment. Output streams are inherited, never captured.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::core::domain::ChildEnv;
use crate::error::{ExecError, Result};

/// Something that can run orchestration commands.
pub trait Orchestrator {
    /// Run the program with `args` and exactly the variables in `env`.
    ///
    /// # Errors
    ///
    /// Returns `ExecError::Launch` if the program cannot be started and
    /// `ExecError::Failed` if it exits non-zero.
    fn run(&self, args: &[&str], env: &ChildEnv) -> Result<()>;
}

/// The compose program, resolved to a path.
#[derive(Debug, Clone)]
pub struct Compose {
    program: PathBuf,
}

impl Compose {
    /// Resolve `program` on PATH (or as a path).
    ///
    /// # Errors
    ///
    /// Returns `ExecError::NotFound` if it cannot be resolved to an
    /// executable.
    pub fn new(program: &str) -> Result<Self> {
        let program =
            which::which(program).map_err(|_| ExecError::NotFound(program.to_string()))?;
        debug!(program = %program.display(), "resolved compose program");
        Ok(Self { program })
    }

    /// Resolved program path.
    pub fn program(&self) -> &std::path::Path {
        &self.program
    }
}

impl Orchestrator for Compose {
    fn run(&self, args: &[&str], env: &ChildEnv) -> Result<()> {
        let command_line = format!("{} {}", self.program.display(), args.join(" "));
        debug!(command = %command_line, env_len = env.len(), "running");

        let status = Command::new(&self.program)
            .args(args)
            .env_clear()
            .envs(env.entries().iter().map(|(k, v)| (k, v)))
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| ExecError::Launch {
                program: self.program.display().to_string(),
                source,
            })?;

        if !status.success() {
            return Err(ExecError::Failed {
                command: command_line,
                code: status.code(),
            }
            .into());
        }

        debug!(command = %command_line, "finished");
        Ok(())
    }
}

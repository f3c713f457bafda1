//! Lifecycle command dispatch.
//!
//! Maps `start`, `stop`, `restart` and `update` to compose invocations,
//! fetching secrets only for the steps that need them.

use tracing::{debug, info};

use crate::cli::output;
use crate::core::backend::SecretSource;
use crate::core::compose::Orchestrator;
use crate::core::domain::{ChildEnv, Lifecycle};
use crate::core::env;
use crate::error::Result;

/// Runs lifecycle commands against a secret source and an orchestrator.
pub struct Dispatcher<'a, S, O> {
    secrets: &'a S,
    compose: &'a O,
    base: ChildEnv,
}

impl<'a, S: SecretSource, O: Orchestrator> Dispatcher<'a, S, O> {
    /// Create a dispatcher over the current process environment.
    pub fn new(secrets: &'a S, compose: &'a O) -> Self {
        Self::with_base(secrets, compose, ChildEnv::inherited())
    }

    /// Create a dispatcher over an explicit base environment.
    pub fn with_base(secrets: &'a S, compose: &'a O, base: ChildEnv) -> Self {
        Self {
            secrets,
            compose,
            base,
        }
    }

    /// Run every step of `command` in order, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the first secret or exec error. Later steps do not run.
    pub fn dispatch(&self, command: Lifecycle) -> Result<()> {
        info!(%command, "dispatching");

        for &step in command.steps() {
            let env = if step.needs_secrets() {
                self.secret_env()?
            } else {
                self.base.clone()
            };

            output::step(step.label());
            self.compose.run(step.args(), &env)?;
        }

        debug!(%command, "done");
        Ok(())
    }

    fn secret_env(&self) -> Result<ChildEnv> {
        output::progress("Fetching secrets");
        let secrets = match self.secrets.fetch() {
            Ok(secrets) => {
                output::progress_done(true);
                secrets
            }
            Err(e) => {
                output::progress_done(false);
                return Err(e);
            }
        };

        if secrets.is_empty() {
            output::warn("no secrets found, continuing without secrets");
        } else {
            output::success(&format!(
                "loaded {} secret{}",
                secrets.len(),
                if secrets.len() == 1 { "" } else { "s" }
            ));
        }

        Ok(env::merge_into(self.base.clone(), &secrets))
    }
}

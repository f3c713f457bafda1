//! Command helper methods for Test.

use super::{Test, SECRET_PATH, TOKEN};
use assert_cmd::Command;
use std::process::Output;

/// Variables that would leak the developer's own setup into a test.
const SCRUBBED_ENV: &[&str] = &[
    "VAULT_ADDR",
    "VAULT_TOKEN",
    "VAULT_PATH",
    "DCS_CONFIG",
    "DCS_LOG",
];

impl Test {
    /// Create a dcs command running in the project directory.
    ///
    /// Returns a Command configured with:
    /// - Current directory set to the test project directory
    /// - No connection or dcs variables from the outer environment
    /// - Colors disabled
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("dcs").expect("failed to find dcs binary");
        cmd.current_dir(self.dir.path());
        for var in SCRUBBED_ENV {
            cmd.env_remove(var);
        }
        cmd.env("NO_COLOR", "1");
        cmd
    }

    /// Create a dcs command with connection variables pointing at `address`.
    pub fn cmd_with_backend(&self, address: &str) -> Command {
        let mut cmd = self.cmd();
        cmd.env("VAULT_ADDR", address)
            .env("VAULT_TOKEN", TOKEN)
            .env("VAULT_PATH", SECRET_PATH);
        cmd
    }

    /// Shortcut for `dcs <command>` against `address`.
    pub fn run(&self, address: &str, command: &str) -> Output {
        self.cmd_with_backend(address)
            .arg(command)
            .output()
            .expect("failed to run dcs")
    }
}

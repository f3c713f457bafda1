//! Lifecycle commands and the compose steps they expand to.

use std::fmt;

/// A user-facing verb controlling the managed service group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Lifecycle {
    /// Bring services up, creating or reusing containers
    Start,
    /// Bring services down and remove orphaned containers
    Stop,
    /// Bring services up with forced recreation
    Restart,
    /// Pull the latest images, then restart
    Update,
}

impl Lifecycle {
    /// Compose steps for this command, in execution order.
    pub fn steps(self) -> &'static [Step] {
        match self {
            Lifecycle::Start => &[Step::Up],
            Lifecycle::Stop => &[Step::Down],
            Lifecycle::Restart => &[Step::Recreate],
            Lifecycle::Update => &[Step::Pull, Step::Recreate],
        }
    }

    /// Whether any step of this command needs secrets.
    pub fn needs_secrets(self) -> bool {
        self.steps().iter().any(|step| step.needs_secrets())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Lifecycle::Start => "start",
            Lifecycle::Stop => "stop",
            Lifecycle::Restart => "restart",
            Lifecycle::Update => "update",
        }
    }
}

impl fmt::Display for Lifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single invocation of the orchestration program.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Up,
    Recreate,
    Down,
    Pull,
}

impl Step {
    /// Argument vector passed to the orchestration program.
    pub fn args(self) -> &'static [&'static str] {
        match self {
            Step::Up => &["compose", "up", "-d"],
            Step::Recreate => &["compose", "up", "-d", "--force-recreate"],
            Step::Down => &["compose", "down", "--remove-orphans"],
            Step::Pull => &["compose", "pull"],
        }
    }

    /// Whether the step runs with secrets merged into its environment.
    pub fn needs_secrets(self) -> bool {
        matches!(self, Step::Up | Step::Recreate)
    }

    /// Progress label shown before the step runs.
    pub fn label(self) -> &'static str {
        match self {
            Step::Up => "starting services",
            Step::Recreate => "recreating services",
            Step::Down => "stopping services",
            Step::Pull => "pulling latest images",
        }
    }
}

use crate::error::ExecutorError;
use std::fmt;
use std::str::FromStr;

/// Lifecycle action requested for a service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Start,
    Stop,
    Restart,
}

/// State the container must be in once an operation has been applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedState {
    Running,
    Exited,
}

impl Operation {
    pub const ALL: [Operation; 3] = [Operation::Start, Operation::Stop, Operation::Restart];

    /// Subcommand passed to the runtime binary
    pub fn verb(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Restart => "restart",
        }
    }

    pub fn expected_state(self) -> ExpectedState {
        match self {
            Self::Start | Self::Restart => ExpectedState::Running,
            Self::Stop => ExpectedState::Exited,
        }
    }
}

impl ExpectedState {
    /// Substring of the `ps` status column that signals this state
    pub fn status_marker(self) -> &'static str {
        match self {
            Self::Running => "Up",
            Self::Exited => "Exited",
        }
    }
}

impl FromStr for Operation {
    type Err = ExecutorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Self::Start),
            "stop" => Ok(Self::Stop),
            "restart" => Ok(Self::Restart),
            other => Err(ExecutorError::UnknownOperation(other.to_string())),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

impl fmt::Display for ExpectedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Running => write!(f, "running"),
            Self::Exited => write!(f, "exited"),
        }
    }
}

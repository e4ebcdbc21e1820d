use super::ExpectedState;
use std::process::ExitStatus;

/// One line of the runtime's `ps` listing, kept verbatim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerStatusLine {
    line: String,
}

impl ContainerStatusLine {
    pub fn new(line: impl Into<String>) -> Self {
        Self { line: line.into() }
    }

    /// Splits raw `ps` output into lines, dropping the trailing newline only
    pub fn parse_listing(output: &str) -> Vec<Self> {
        output
            .strip_suffix('\n')
            .unwrap_or(output)
            .split('\n')
            .map(|line| Self::new(line.strip_suffix('\r').unwrap_or(line)))
            .collect()
    }

    pub fn as_str(&self) -> &str {
        &self.line
    }

    /// Substring match; a name contained in another container's name also matches
    pub fn mentions(&self, container: &str) -> bool {
        self.line.contains(container)
    }

    pub fn shows(&self, state: ExpectedState) -> bool {
        self.line.contains(state.status_marker())
    }
}

/// How the runtime process ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitInfo {
    /// `None` when the process was terminated by a signal
    pub code: Option<i32>,
}

impl ExitInfo {
    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<ExitStatus> for ExitInfo {
    fn from(status: ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

impl std::fmt::Display for ExitInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit status {code}"),
            None => write!(f, "terminated by signal"),
        }
    }
}

/// Merged stdout/stderr of a runtime action plus its exit status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub exit: ExitInfo,
    pub output: String,
}

impl CommandOutput {
    pub fn new(exit: ExitInfo, output: impl Into<String>) -> Self {
        Self {
            exit,
            output: output.into(),
        }
    }

    pub fn succeeded(&self) -> bool {
        self.exit.success()
    }
}

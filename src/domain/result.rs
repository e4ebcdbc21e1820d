use super::ExitInfo;

/// Outcome of one `Orchestrator::execute` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionResult {
    Succeeded,
    /// The action subcommand exited non-zero; `output` is the merged stdout/stderr
    CommandFailed { exit: ExitInfo, output: String },
    /// The action exited zero but `ps` did not show the expected state
    VerificationFailed,
    UnknownService(String),
    UnknownOperation(String),
}

impl ExecutionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded)
    }

    /// Process exit status used when the caller asks for strict exit codes
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Succeeded => 0,
            Self::UnknownOperation(_) => 2,
            Self::UnknownService(_) => 3,
            Self::CommandFailed { .. } => 4,
            Self::VerificationFailed => 5,
        }
    }
}

impl std::fmt::Display for ExecutionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Succeeded => write!(f, "succeeded"),
            Self::CommandFailed { exit, .. } => write!(f, "runtime command failed ({exit})"),
            Self::VerificationFailed => write!(f, "container not in expected state"),
            Self::UnknownService(key) => write!(f, "unknown service: {key}"),
            Self::UnknownOperation(op) => write!(f, "unknown operation: {op}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let results = [
            ExecutionResult::Succeeded,
            ExecutionResult::UnknownOperation("pause".into()),
            ExecutionResult::UnknownService("nope".into()),
            ExecutionResult::CommandFailed {
                exit: ExitInfo::from_code(1),
                output: String::new(),
            },
            ExecutionResult::VerificationFailed,
        ];

        let mut codes: Vec<i32> = results.iter().map(ExecutionResult::exit_code).collect();
        assert_eq!(codes[0], 0);
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), results.len());
    }

    #[test]
    fn only_succeeded_is_success() {
        assert!(ExecutionResult::Succeeded.is_success());
        assert!(!ExecutionResult::VerificationFailed.is_success());
    }
}

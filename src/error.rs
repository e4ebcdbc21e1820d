use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExecutorError {
    #[error("unknown service: {0}")]
    UnknownService(String),

    #[error("unknown operation was requested: {0}")]
    UnknownOperation(String),

    #[error("could not invoke container runtime '{binary}': {source}")]
    RuntimeUnavailable {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not read output of container runtime '{binary}': {source}")]
    OutputUnreadable {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{binary} ps' failed with {status}: {output}")]
    ListFailed {
        binary: String,
        status: crate::domain::ExitInfo,
        output: String,
    },
}

impl ExecutorError {
    /// Errors after which no operation can succeed; the binary exits on these
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::RuntimeUnavailable { .. }
                | Self::OutputUnreadable { .. }
                | Self::ListFailed { .. }
        )
    }
}

use super::{CommandOutput, ContainerStatusLine};
use crate::error::ExecutorError;
use std::fmt::Debug;

/// Runs lifecycle subcommands against a named container
pub trait CommandInvoker: Send + Sync + Debug {
    /// Invoke `<runtime> <verb> <container>`.
    ///
    /// A non-zero exit is an `Ok` value; `Err` means the runtime could not be
    /// launched at all.
    fn run(&self, verb: &str, container: &str) -> Result<CommandOutput, ExecutorError>;
}

/// Snapshot of the runtime's container listing
pub trait StatusSource: Send + Sync + Debug {
    fn list_containers(&self) -> Result<Vec<ContainerStatusLine>, ExecutorError>;
}

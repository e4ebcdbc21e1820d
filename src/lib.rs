pub mod cli;
pub mod domain;
pub mod error;
pub mod infra;
pub mod services;

// Make test_support available for integration tests
pub mod test_support;

pub use domain::{
    CommandInvoker, CommandOutput, ContainerStatusLine, ExecutionResult, ExitInfo, ExpectedState,
    Operation, StatusSource,
};
pub use error::ExecutorError;
pub use infra::DockerAdapter;
pub use services::{Orchestrator, ServiceRegistry, StatusVerifier};

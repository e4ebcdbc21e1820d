use crate::domain::{CommandInvoker, ExecutionResult, Operation};
use crate::error::ExecutorError;
use crate::services::{ServiceRegistry, StatusVerifier};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Resolves a service, runs the lifecycle command, then verifies the result
pub struct Orchestrator {
    registry: ServiceRegistry,
    invoker: Arc<dyn CommandInvoker>,
    verifier: StatusVerifier,
}

impl Orchestrator {
    pub fn new(
        registry: ServiceRegistry,
        invoker: Arc<dyn CommandInvoker>,
        verifier: StatusVerifier,
    ) -> Self {
        Self {
            registry,
            invoker,
            verifier,
        }
    }

    pub fn registry(&self) -> &ServiceRegistry {
        &self.registry
    }

    /// Parses `operation` before touching the registry, so an unsupported
    /// operation never reaches the runtime whatever the service key.
    pub fn execute_raw(
        &self,
        service: &str,
        operation: &str,
    ) -> Result<ExecutionResult, ExecutorError> {
        match operation.parse::<Operation>() {
            Ok(op) => self.execute(service, op),
            Err(e) => {
                warn!("{}", e);
                Ok(ExecutionResult::UnknownOperation(operation.to_string()))
            }
        }
    }

    /// Runs a single attempt.
    ///
    /// `Err` is only returned for fatal runtime errors (see
    /// [`ExecutorError::is_fatal`]); every other outcome is an
    /// [`ExecutionResult`].
    pub fn execute(
        &self,
        service: &str,
        operation: Operation,
    ) -> Result<ExecutionResult, ExecutorError> {
        let container = match self.registry.resolve(service) {
            Ok(container) => container,
            Err(e) => {
                warn!("{}", e);
                return Ok(ExecutionResult::UnknownService(service.to_string()));
            }
        };

        info!("{} {} (container {})", operation, service, container);

        let outcome = self.invoker.run(operation.verb(), container)?;
        if !outcome.succeeded() {
            error!(
                "runtime {} failed for {}: {}",
                operation.verb(),
                service,
                outcome.exit
            );
            error!("associated output: {}", outcome.output.trim_end());
            return Ok(ExecutionResult::CommandFailed {
                exit: outcome.exit,
                output: outcome.output,
            });
        }

        if self
            .verifier
            .confirm(container, operation.expected_state())?
        {
            info!("{} {} succeeded", operation, service);
            Ok(ExecutionResult::Succeeded)
        } else {
            warn!(
                "{} {} not verified: container {} is not {}",
                operation,
                service,
                container,
                operation.expected_state()
            );
            Ok(ExecutionResult::VerificationFailed)
        }
    }
}

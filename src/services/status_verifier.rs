use crate::domain::{ExpectedState, StatusSource};
use crate::error::ExecutorError;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Checks one `ps` snapshot for a container in the expected state
#[derive(Debug)]
pub struct StatusVerifier {
    source: Arc<dyn StatusSource>,
}

impl StatusVerifier {
    pub fn new(source: Arc<dyn StatusSource>) -> Self {
        Self { source }
    }

    /// Scans top to bottom; the first line mentioning `container` decides.
    ///
    /// No line mentioning the container counts as not confirmed. No retry is
    /// made, so a container still transitioning is reported as unconfirmed.
    pub fn confirm(&self, container: &str, expected: ExpectedState) -> Result<bool, ExecutorError> {
        let lines = self.source.list_containers()?;

        for line in &lines {
            if !line.mentions(container) {
                continue;
            }

            debug!("matched ps line for {}: {}", container, line.as_str());

            if line.shows(expected) {
                info!(
                    "container {} is {} ({})",
                    container,
                    expected,
                    line.as_str().trim()
                );
                return Ok(true);
            }

            warn!("container {} is NOT {}", container, expected);
            return Ok(false);
        }

        warn!("container {} not found in ps output", container);
        Ok(false)
    }
}

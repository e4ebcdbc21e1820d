mod orchestrator;
mod registry;
mod status_verifier;

pub use orchestrator::Orchestrator;
pub use registry::{BUILTIN_SERVICES, ServiceRegistry};
pub use status_verifier::StatusVerifier;

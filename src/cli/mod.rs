pub mod executor;
pub mod logging;

pub use executor::{Cli, Executor, run};
pub use logging::setup_logging;

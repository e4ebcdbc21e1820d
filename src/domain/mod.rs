mod container;
mod operation;
mod result;
pub mod traits;

pub use container::{CommandOutput, ContainerStatusLine, ExitInfo};
pub use operation::{ExpectedState, Operation};
pub use result::ExecutionResult;
pub use traits::{CommandInvoker, StatusSource};

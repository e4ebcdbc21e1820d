use crate::domain::{CommandInvoker, CommandOutput, ContainerStatusLine, ExitInfo, StatusSource};
use crate::error::ExecutorError;
use std::io::Read;
use std::process::{Command, Stdio};
use tracing::debug;

pub const DEFAULT_RUNTIME_BINARY: &str = "docker";

/// Drives a docker-compatible CLI (`docker`, `podman`, ...) by spawning it
#[derive(Debug, Clone)]
pub struct DockerAdapter {
    binary: String,
}

impl DockerAdapter {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }

    fn unavailable(&self, source: std::io::Error) -> ExecutorError {
        ExecutorError::RuntimeUnavailable {
            binary: self.binary.clone(),
            source,
        }
    }
}

impl Default for DockerAdapter {
    fn default() -> Self {
        Self::new(DEFAULT_RUNTIME_BINARY)
    }
}

impl CommandInvoker for DockerAdapter {
    fn run(&self, verb: &str, container: &str) -> Result<CommandOutput, ExecutorError> {
        debug!("{} {} {}", self.binary, verb, container);

        // stdout and stderr share one pipe so the output keeps its interleaving
        let (mut reader, writer) = std::io::pipe().map_err(|e| self.unavailable(e))?;
        let writer_clone = writer.try_clone().map_err(|e| self.unavailable(e))?;

        let mut cmd = Command::new(&self.binary);
        cmd.args([verb, container])
            .stdin(Stdio::null())
            .stdout(writer_clone)
            .stderr(writer);

        let mut child = cmd.spawn().map_err(|e| self.unavailable(e))?;
        // The command still owns the write ends; drop it so the read sees EOF
        drop(cmd);

        let mut raw = Vec::new();
        let read = reader.read_to_end(&mut raw);
        // Reap the child even when reading failed
        let status = child.wait().map_err(|e| self.unavailable(e))?;
        read.map_err(|source| ExecutorError::OutputUnreadable {
            binary: self.binary.clone(),
            source,
        })?;

        Ok(CommandOutput::new(
            ExitInfo::from(status),
            String::from_utf8_lossy(&raw),
        ))
    }
}

impl StatusSource for DockerAdapter {
    fn list_containers(&self) -> Result<Vec<ContainerStatusLine>, ExecutorError> {
        debug!("{} ps", self.binary);

        let output = Command::new(&self.binary)
            .arg("ps")
            .stdin(Stdio::null())
            .output()
            .map_err(|e| self.unavailable(e))?;

        if !output.status.success() {
            return Err(ExecutorError::ListFailed {
                binary: self.binary.clone(),
                status: ExitInfo::from(output.status),
                output: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(ContainerStatusLine::parse_listing(
            &String::from_utf8_lossy(&output.stdout),
        ))
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn missing_binary_is_runtime_unavailable() {
        let adapter = DockerAdapter::new("compose-executor-no-such-runtime");
        let err = adapter.run("start", "CoreData").unwrap_err();
        assert!(matches!(err, ExecutorError::RuntimeUnavailable { .. }));
        assert!(err.is_fatal());

        let err = adapter.list_containers().unwrap_err();
        assert!(matches!(err, ExecutorError::RuntimeUnavailable { .. }));
    }

    #[test]
    fn passes_verb_then_container() {
        let adapter = DockerAdapter::new("echo");
        let out = adapter.run("restart", "Metadata").unwrap();
        assert!(out.succeeded());
        assert_eq!(out.output, "restart Metadata\n");
    }

    #[test]
    fn merges_stdout_and_stderr() {
        let adapter = DockerAdapter::new("sh");
        let out = adapter
            .run("-c", "echo first; echo second 1>&2; echo third")
            .unwrap();
        assert_eq!(out.output, "first\nsecond\nthird\n");
    }

    #[test]
    fn non_zero_exit_keeps_output() {
        let adapter = DockerAdapter::new("sh");
        let out = adapter
            .run("-c", "echo 'Error: No such container: Foo' 1>&2; exit 1")
            .unwrap();
        assert!(!out.succeeded());
        assert_eq!(out.exit.code, Some(1));
        assert!(out.output.contains("No such container"));
    }

    #[test]
    fn failing_list_is_list_failed() {
        let adapter = DockerAdapter::new("false");
        let err = adapter.list_containers().unwrap_err();
        assert!(matches!(err, ExecutorError::ListFailed { .. }));
    }

    #[test]
    fn list_returns_stdout_lines() {
        let adapter = DockerAdapter::new("echo");
        let lines = adapter.list_containers().unwrap();
        assert_eq!(lines, vec![ContainerStatusLine::new("ps")]);
    }
}

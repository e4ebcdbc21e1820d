use crate::domain::{CommandInvoker, CommandOutput, ContainerStatusLine, ExitInfo, StatusSource};
use crate::error::ExecutorError;
use std::collections::HashMap;
use std::sync::RwLock;

/// Fake runtime that records every call as `run:<verb>:<container>` or `list`
#[derive(Debug)]
pub struct MockRuntime {
    commands: RwLock<Vec<String>>,
    exit_codes: RwLock<HashMap<String, i32>>,
    action_output: RwLock<String>,
    listing: RwLock<String>,
    unavailable: RwLock<bool>,
}

impl MockRuntime {
    pub fn new() -> Self {
        Self {
            commands: RwLock::new(Vec::new()),
            exit_codes: RwLock::new(HashMap::new()),
            action_output: RwLock::new(String::new()),
            listing: RwLock::new(String::new()),
            unavailable: RwLock::new(false),
        }
    }

    /// Exit code returned for `verb`; verbs not set exit 0
    pub fn set_exit_code(&self, verb: &str, code: i32) {
        self.exit_codes
            .write()
            .unwrap()
            .insert(verb.to_string(), code);
    }

    pub fn set_action_output(&self, output: &str) {
        *self.action_output.write().unwrap() = output.to_string();
    }

    /// Raw `ps` output returned by `list_containers`
    pub fn set_listing(&self, listing: &str) {
        *self.listing.write().unwrap() = listing.to_string();
    }

    /// Makes every call fail as if the runtime binary were missing
    pub fn set_unavailable(&self, unavailable: bool) {
        *self.unavailable.write().unwrap() = unavailable;
    }

    pub fn get_commands(&self) -> Vec<String> {
        self.commands.read().unwrap().clone()
    }

    pub fn run_count(&self) -> usize {
        self.count_with_prefix("run:")
    }

    pub fn list_count(&self) -> usize {
        self.count_with_prefix("list")
    }

    fn count_with_prefix(&self, prefix: &str) -> usize {
        self.commands
            .read()
            .unwrap()
            .iter()
            .filter(|c| c.starts_with(prefix))
            .count()
    }

    fn record_command(&self, cmd: &str) {
        self.commands.write().unwrap().push(cmd.to_string());
    }

    fn check_available(&self) -> Result<(), ExecutorError> {
        if *self.unavailable.read().unwrap() {
            return Err(ExecutorError::RuntimeUnavailable {
                binary: "mock".to_string(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            });
        }
        Ok(())
    }
}

impl Default for MockRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandInvoker for MockRuntime {
    fn run(&self, verb: &str, container: &str) -> Result<CommandOutput, ExecutorError> {
        self.record_command(&format!("run:{}:{}", verb, container));
        self.check_available()?;

        let code = self
            .exit_codes
            .read()
            .unwrap()
            .get(verb)
            .copied()
            .unwrap_or(0);

        Ok(CommandOutput::new(
            ExitInfo::from_code(code),
            self.action_output.read().unwrap().clone(),
        ))
    }
}

impl StatusSource for MockRuntime {
    fn list_containers(&self) -> Result<Vec<ContainerStatusLine>, ExecutorError> {
        self.record_command("list");
        self.check_available()?;

        Ok(ContainerStatusLine::parse_listing(
            &self.listing.read().unwrap(),
        ))
    }
}

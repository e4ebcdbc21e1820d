use crate::error::ExecutorError;
use crate::infra::config::{AppConfig, validate_service_entry};
use anyhow::{Result, bail};
use std::collections::{BTreeMap, HashMap};

/// EdgeX service keys and the container names docker-compose gives them
pub const BUILTIN_SERVICES: [(&str, &str); 8] = [
    ("edgex-support-notifications", "Notifications"),
    ("edgex-core-command", "Command"),
    ("edgex-core-data", "CoreData"),
    ("edgex-core-metadata", "Metadata"),
    ("edgex-export-client", "Export"),
    ("edgex-export-distro", "Distro"),
    ("edgex-support-logging", "Logging"),
    ("edgex-support-scheduler", "Scheduler"),
];

/// Immutable service key -> container name table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRegistry {
    services: BTreeMap<String, String>,
}

impl ServiceRegistry {
    pub fn new(services: BTreeMap<String, String>) -> Self {
        Self { services }
    }

    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_SERVICES
                .iter()
                .map(|(key, name)| (key.to_string(), name.to_string()))
                .collect(),
        )
    }

    /// Built-in table with the config's `[services]` entries layered on top.
    ///
    /// An override may replace a key's container, but no two keys may end up
    /// on the same container.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let mut registry = Self::builtin();

        if let Some(overrides) = &config.services {
            for (key, container) in overrides {
                validate_service_entry(key, container)?;
                registry.services.insert(key.clone(), container.clone());
            }
        }

        let mut owners: HashMap<&str, &str> = HashMap::new();
        for (key, container) in &registry.services {
            if let Some(previous) = owners.insert(container.as_str(), key.as_str()) {
                bail!(
                    "container '{}' is mapped by both '{}' and '{}'",
                    container,
                    previous,
                    key
                );
            }
        }

        Ok(registry)
    }

    pub fn resolve(&self, key: &str) -> Result<&str, ExecutorError> {
        self.services
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| ExecutorError::UnknownService(key.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.services
            .iter()
            .map(|(key, name)| (key.as_str(), name.as_str()))
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl Default for ServiceRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

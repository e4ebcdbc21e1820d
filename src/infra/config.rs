use crate::infra::docker_adapter::DEFAULT_RUNTIME_BINARY;
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_CONFIG_NAME: &str = "executor.toml";
pub const DEFAULT_EXECUTOR_TOML: &str = include_str!("../../config/default_executor.toml");

pub fn default_config_dir() -> PathBuf {
    config_dir_under(std::env::var("HOME").ok().as_deref())
}

fn config_dir_under(home: Option<&str>) -> PathBuf {
    home.map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("/home/dev"))
        .join(".config/compose-executor")
}

/// Expands a leading `~` the way a shell would
pub fn expand_config_dir(raw: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw.to_string_lossy().as_ref()).into_owned())
}

pub fn ensure_config_dir(config_dir: &Path) -> Result<()> {
    fs::create_dir_all(config_dir).with_context(|| format!("creating {:?}", config_dir))
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub binary: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub runtime: RuntimeConfig,
    /// `"service-key" = "ContainerName"` entries layered over the built-in table
    #[serde(default)]
    pub services: Option<BTreeMap<String, String>>,
}

impl AppConfig {
    /// Merges another AppConfig into self.
    /// Values from `other` overwrite values in `self` if present.
    pub fn merge(&mut self, other: AppConfig) {
        if let Some(binary) = other.runtime.binary {
            self.runtime.binary = Some(binary);
        }

        if let Some(other_services) = other.services {
            match &mut self.services {
                Some(existing) => existing.extend(other_services),
                None => self.services = Some(other_services),
            }
        }
    }

    pub fn runtime_binary(&self) -> &str {
        self.runtime
            .binary
            .as_deref()
            .unwrap_or(DEFAULT_RUNTIME_BINARY)
    }
}

/// Checks a service table entry; container names follow docker's naming rule
pub fn validate_service_entry(key: &str, container: &str) -> Result<()> {
    if key.trim().is_empty() {
        bail!("empty service key in [services]");
    }

    let Some(first_char) = container.chars().next() else {
        bail!("service '{}' maps to an empty container name", key);
    };

    if !first_char.is_ascii_alphanumeric() {
        bail!(
            "container name '{}' for service '{}' must start with a letter or digit",
            container,
            key
        );
    }

    for c in container.chars() {
        if !c.is_ascii_alphanumeric() && c != '_' && c != '.' && c != '-' {
            bail!(
                "container name '{}' for service '{}' contains invalid character '{}'",
                container,
                key,
                c
            );
        }
    }

    Ok(())
}

pub fn parse_app_config(content: &str, path: &Path) -> Result<AppConfig> {
    let config: AppConfig =
        toml::from_str(content).with_context(|| format!("parsing {:?}", path))?;

    if let Some(services) = &config.services {
        for (key, container) in services {
            validate_service_entry(key, container).with_context(|| format!("in {:?}", path))?;
        }
    }

    Ok(config)
}

fn load_layer(path: &Path) -> Result<Option<AppConfig>> {
    if !path.exists() {
        debug!("no config at {:?}", path);
        return Ok(None);
    }

    let content = fs::read_to_string(path).with_context(|| format!("reading {:?}", path))?;
    parse_app_config(&content, path).map(Some)
}

/// Loads `<config_dir>/executor.toml` then `./executor.toml`
pub fn load_app_config(config_dir: &Path) -> Result<AppConfig> {
    load_layered(
        &config_dir.join(DEFAULT_CONFIG_NAME),
        &PathBuf::from("./").join(DEFAULT_CONFIG_NAME),
    )
}

pub fn load_layered(global_path: &Path, local_path: &Path) -> Result<AppConfig> {
    let mut app_config = AppConfig::default();

    if let Some(global) = load_layer(global_path)? {
        app_config = global;
    }

    if let Some(local) = load_layer(local_path)? {
        app_config.merge(local);
    }

    Ok(app_config)
}

/// Writes the default `executor.toml`; returns false if one already exists
pub fn install_default_config(target_dir: &Path) -> Result<bool> {
    ensure_config_dir(target_dir)?;

    let target = target_dir.join(DEFAULT_CONFIG_NAME);
    if target.exists() {
        info!("config already present at {:?}", target);
        return Ok(false);
    }

    fs::write(&target, DEFAULT_EXECUTOR_TOML)
        .with_context(|| format!("writing default config to {:?}", target))?;
    info!("wrote default config to {:?}", target);

    Ok(true)
}

use crate::domain::{CommandInvoker, ExecutionResult, StatusSource};
use crate::infra::DockerAdapter;
use crate::infra::config::{
    AppConfig, default_config_dir, expand_config_dir, install_default_config, load_app_config,
};
use crate::services::{Orchestrator, ServiceRegistry, StatusVerifier};
use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(
    name = "compose-executor",
    version,
    about = "Start, stop or restart a service container and verify its state",
    after_help = "OPERATION is one of: start, stop, restart"
)]
pub struct Cli {
    /// Directory holding executor.toml (default: ~/.config/compose-executor)
    #[arg(long, env = "COMPOSE_EXECUTOR_CONFIG_DIR", default_value_os_t = default_config_dir())]
    pub config_dir: PathBuf,

    /// Container runtime binary, overrides [runtime].binary
    #[arg(long, env = "COMPOSE_EXECUTOR_RUNTIME")]
    pub runtime: Option<String>,

    /// Exit with a distinct non-zero status for each failure kind
    #[arg(long)]
    pub strict: bool,

    /// Print the service table and exit
    #[arg(long)]
    pub list_services: bool,

    /// Write a default executor.toml into the config dir and exit
    #[arg(long)]
    pub init_config: bool,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,

    /// Service key, e.g. edgex-core-data
    pub service: Option<String>,

    /// start, stop or restart
    pub operation: Option<String>,

    /// Anything after OPERATION is ignored
    #[arg(trailing_var_arg = true, hide = true)]
    pub extra: Vec<String>,
}

/// Configured orchestrator plus the settings it was built from
pub struct Executor {
    config: AppConfig,
    orchestrator: Orchestrator,
}

impl Executor {
    /// Builds an executor backed by the configured runtime binary
    pub fn new(config_dir: &Path, runtime_override: Option<&str>) -> Result<Self> {
        let mut config = load_app_config(config_dir)?;
        if let Some(binary) = runtime_override {
            config.runtime.binary = Some(binary.to_string());
        }

        let adapter = Arc::new(DockerAdapter::new(config.runtime_binary()));
        Self::from_parts(config, adapter)
    }

    /// Same as `new` but with an injected runtime (used by tests)
    pub fn with_runtime<R>(config_dir: &Path, runtime: Arc<R>) -> Result<Self>
    where
        R: CommandInvoker + StatusSource + 'static,
    {
        let config = load_app_config(config_dir)?;
        Self::from_parts(config, runtime)
    }

    fn from_parts<R>(config: AppConfig, runtime: Arc<R>) -> Result<Self>
    where
        R: CommandInvoker + StatusSource + 'static,
    {
        let registry = ServiceRegistry::from_config(&config)?;
        let orchestrator =
            Orchestrator::new(registry, runtime.clone(), StatusVerifier::new(runtime));

        Ok(Self {
            config,
            orchestrator,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn registry(&self) -> &ServiceRegistry {
        self.orchestrator.registry()
    }

    /// Runs one request; fatal runtime errors come back as `Err`
    pub fn execute(&self, service: &str, operation: &str) -> Result<ExecutionResult> {
        let result = self.orchestrator.execute_raw(service, operation)?;

        debug!("{} {}: {}", operation, service, result);

        Ok(result)
    }

    pub fn print_services(&self) {
        println!("Services (runtime: {}):", self.config.runtime_binary());
        for (key, container) in self.registry().iter() {
            println!("- {:<30} | {}", key, container);
        }
    }
}

/// Dispatches parsed arguments and returns the process exit status
pub fn run(cli: &Cli) -> Result<i32> {
    let config_dir = expand_config_dir(&cli.config_dir);

    if cli.init_config {
        install_default_config(&config_dir)?;
        return Ok(0);
    }

    if cli.list_services {
        Executor::new(&config_dir, cli.runtime.as_deref())?.print_services();
        return Ok(0);
    }

    let (Some(service), Some(operation)) = (cli.service.as_deref(), cli.operation.as_deref())
    else {
        info!("nothing to do: expected <SERVICE> <OPERATION> (see --help)");
        return Ok(0);
    };

    if !cli.extra.is_empty() {
        debug!("ignoring extra arguments: {:?}", cli.extra);
    }

    let executor = Executor::new(&config_dir, cli.runtime.as_deref())?;
    let result = executor.execute(service, operation)?;

    Ok(if cli.strict { result.exit_code() } else { 0 })
}

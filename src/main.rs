use anyhow::Result;
use clap::Parser;
use compose_executor::cli::{self, Cli};
use std::time::Instant;
use tracing::debug;

fn main() -> Result<()> {
    let started = Instant::now();
    let args = Cli::parse();

    cli::setup_logging(args.verbose);
    debug!("compose-executor started in {:?}", started.elapsed());

    let code = cli::run(&args)?;
    if code != 0 {
        std::process::exit(code);
    }

    Ok(())
}

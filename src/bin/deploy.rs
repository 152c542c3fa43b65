//! Deploy orchestrator: builds, tags, and pushes the connector images.

use clap::Parser;
use connector_deploy::deploy::report;
use connector_deploy::{Action, EngineCli, RegistryConfig, RunConfig, run_deploy};
use std::path::PathBuf;
use std::process::exit;

#[derive(Debug, Parser)]
#[command(name = "deploy", about = "Build and push the connector Docker images")]
struct Cli {
    /// What to do with the selected targets
    #[arg(short, long, value_enum, default_value = "build")]
    action: Action,

    /// Target to operate on: a connector name, or 'all'
    #[arg(short, long, default_value = "all")]
    target: String,

    /// Version tag for the images ('latest' is always tagged as well)
    #[arg(short = 'v', long, default_value = "latest")]
    version: String,

    /// Also push after building
    #[arg(short, long)]
    push: bool,

    /// Directory the per-connector build contexts live under
    #[arg(long, default_value = ".", hide = true)]
    root: PathBuf,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let config = RunConfig {
        action: cli.action,
        selector: cli.target,
        version: cli.version,
        push: cli.push,
        root: cli.root,
        registry: RegistryConfig::from_env(),
    };

    let engine = EngineCli::detect();
    match run_deploy(&config, &engine) {
        Ok(ledger) => {
            report::print_summary(&ledger);
            exit(report::exit_code(&ledger));
        }
        Err(e) => {
            eprintln!("❌ {e:#}");
            exit(1);
        }
    }
}

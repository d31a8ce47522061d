mod adb_client;
mod app;
mod cli;
mod command;
mod config;
mod dispatcher;
mod error;
mod gradle;
mod runner;
mod submodules;

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Invocation};
use config::Config;
use dispatcher::{Dispatcher, EXIT_NO_ARGS};
use runner::{ProcessRunner, SystemRunner};

fn init_logging() {
    let filter = EnvFilter::try_from_env("DROIDCMD_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Runs the command line `args` and returns the process exit code. The
/// config is only loaded once there is something to run.
fn run<R, F>(args: Vec<String>, runner: &R, load_config: F) -> Result<i32>
where
    R: ProcessRunner,
    F: FnOnce() -> error::Result<Config>,
{
    let Some(invocation) = Invocation::from_args(args) else {
        cli::print_usage();
        return Ok(EXIT_NO_ARGS);
    };
    let config = load_config()?;
    debug!(?config, build_config = %invocation.build_config, "starting");

    let outcome = Dispatcher::new(runner, &config, invocation.build_config).run(&invocation.tokens);
    Ok(outcome.exit_code())
}

fn real_main() -> Result<i32> {
    let cli = Cli::parse();
    run(cli.args, &SystemRunner::new(), Config::load)
}

fn main() {
    init_logging();
    match real_main() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

//! Contains CLI argument parsing and the usage text.
use clap::Parser;
use colored::*;

use crate::command::{BuildConfig, COMMANDS};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional build configuration (debug or release) followed by commands, run in order
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Build configuration plus the command tokens that follow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub build_config: BuildConfig,
    pub tokens: Vec<String>,
}

impl Invocation {
    /// Returns `None` when no arguments were given at all.
    pub fn from_args(mut args: Vec<String>) -> Option<Self> {
        let first = args.first()?;
        let build_config = match BuildConfig::from_token(first) {
            Some(config) => {
                args.remove(0);
                config
            }
            None => BuildConfig::default(),
        };
        Some(Self {
            build_config,
            tokens: args,
        })
    }
}

pub fn print_usage() {
    println!(
        "{} droidcmd [debug | release] <commands...>",
        "Usage:".bold().yellow()
    );
    println!("    commands:");
    for (name, _) in COMMANDS {
        println!("        - {}", name.cyan());
    }
    println!("    Commands execute in order, e.g. droidcmd clean build install start stop uninstall");
}

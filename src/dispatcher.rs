//! Runs command tokens in order and stops at the first failure.
use colored::*;
use tracing::{info, warn};

use crate::adb_client::AdbClient;
use crate::command::{BuildConfig, Command};
use crate::config::Config;
use crate::error::Result;
use crate::gradle::Gradle;
use crate::runner::ProcessRunner;
use crate::submodules::check_submodules;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_NO_ARGS: i32 = -1;
pub const EXIT_SKIPPED: i32 = -2;
pub const EXIT_UNRECOGNIZED: i32 = -3;

/// Status used when a tool could not be launched at all, and in place of child
/// statuses that would read as one of the reserved exit codes.
const LAUNCH_FAILURE: i32 = 1;

const KEYSTORE_ADVISORY: &str =
    "**Warning: this command fails if a release keystore is not specified";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    Failed {
        token: String,
        status: i32,
        skipped: Vec<String>,
        advisory: Option<&'static str>,
    },
    Unrecognized {
        token: String,
    },
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Completed => EXIT_SUCCESS,
            Outcome::Failed { skipped, .. } if !skipped.is_empty() => EXIT_SKIPPED,
            Outcome::Failed { status, .. } => pass_through(*status),
            Outcome::Unrecognized { .. } => EXIT_UNRECOGNIZED,
        }
    }
}

/// Keeps a failing tool's status from colliding with -1..-3, including the
/// 253..255 they become on Unix.
fn pass_through(status: i32) -> i32 {
    match status {
        EXIT_UNRECOGNIZED..=EXIT_NO_ARGS | 253..=255 => LAUNCH_FAILURE,
        status => status,
    }
}

/// Hint printed when the tool behind `command` ran and failed.
pub fn advisory(command: Command, build_config: BuildConfig) -> Option<&'static str> {
    match (command, build_config) {
        (Command::Install, BuildConfig::Release) => Some(KEYSTORE_ADVISORY),
        _ => None,
    }
}

/// How far a command got before it returned a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// The command's own tool ran and exited with this status.
    Ran(i32),
    /// A prerequisite failed, or the tool could not be launched.
    NotRun(i32),
}

pub struct Dispatcher<'a, R: ProcessRunner> {
    runner: &'a R,
    config: &'a Config,
    build_config: BuildConfig,
}

impl<'a, R: ProcessRunner> Dispatcher<'a, R> {
    pub fn new(runner: &'a R, config: &'a Config, build_config: BuildConfig) -> Self {
        Self {
            runner,
            config,
            build_config,
        }
    }

    pub fn run(&self, tokens: &[String]) -> Outcome {
        for (idx, token) in tokens.iter().enumerate() {
            let command = match token.parse::<Command>() {
                Ok(command) => command,
                Err(err) => {
                    println!("{} {}", "Error:".red(), err);
                    return Outcome::Unrecognized {
                        token: token.clone(),
                    };
                }
            };

            info!(command = command.name(), config = %self.build_config, "running");
            let step = self.execute(command).unwrap_or_else(|err| {
                println!("{} {}", "Error:".red(), err);
                Step::NotRun(LAUNCH_FAILURE)
            });
            let (status, hint) = match step {
                Step::Ran(0) | Step::NotRun(0) => continue,
                Step::Ran(status) => (status, advisory(command, self.build_config)),
                Step::NotRun(status) => (status, None),
            };

            warn!(command = command.name(), status, "command failed");
            if let Some(hint) = hint {
                println!("{}", hint.yellow());
            }
            let skipped = tokens[idx + 1..].to_vec();
            if !skipped.is_empty() {
                println!(
                    "{} {:?}",
                    "ERROR: The following commands were not executed:".red(),
                    skipped
                );
            }
            return Outcome::Failed {
                token: token.clone(),
                status,
                skipped,
                advisory: hint,
            };
        }
        Outcome::Completed
    }

    fn execute(&self, command: Command) -> Result<Step> {
        let gradle = Gradle::new(self.runner, &self.config.gradle, &self.config.flavor);
        let adb = AdbClient::new(self.runner, self.config.device.as_deref());
        let app = self.config.app();
        match command {
            Command::Build => self.after_submodules(|| gradle.assemble(self.build_config)),
            Command::Install => self.after_submodules(|| gradle.install(self.build_config)),
            Command::Uninstall => gradle.uninstall(self.build_config).map(Step::Ran),
            Command::Start => adb.start_app(&app).map(Step::Ran),
            Command::Stop => adb.force_stop(&app).map(Step::Ran),
            Command::Clean => gradle.clean().map(Step::Ran),
        }
    }

    fn after_submodules<F>(&self, step: F) -> Result<Step>
    where
        F: FnOnce() -> Result<i32>,
    {
        match check_submodules(self.runner)? {
            0 => step().map(Step::Ran),
            code => Ok(Step::NotRun(code)),
        }
    }
}

//! Subprocess execution behind a trait so the dispatcher can be driven by a mock.
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tracing::debug;
use which::which;

use crate::error::{Error, Result};

/// Captured result of a finished command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn from_output(output: Output) -> Self {
        Self {
            code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    pub fn success(&self) -> bool {
        self.code == 0
    }
}

pub trait ProcessRunner {
    /// Runs `program` with the terminal's stdio and returns its exit code.
    fn status(&self, program: &str, args: &[&str]) -> Result<i32>;

    /// Runs `program` and captures stdout and stderr.
    fn output(&self, program: &str, args: &[&str]) -> Result<CommandOutput>;
}

/// Joins a program and its arguments the way they would be typed in a shell.
pub fn command_line(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }

    /// Bare names go through PATH; anything with a separator is used as given.
    fn resolve(&self, program: &str) -> Result<PathBuf> {
        let path = Path::new(program);
        if path.components().count() > 1 {
            return Ok(path.to_path_buf());
        }
        which(program).map_err(|_| Error::ToolNotFound {
            program: program.to_string(),
        })
    }

    fn command(&self, program: &str, args: &[&str]) -> Result<Command> {
        let resolved = self.resolve(program)?;
        debug!(command = %command_line(program, args), path = %resolved.display(), "spawning");
        let mut command = Command::new(resolved);
        command.args(args);
        Ok(command)
    }
}

impl ProcessRunner for SystemRunner {
    fn status(&self, program: &str, args: &[&str]) -> Result<i32> {
        let status = self
            .command(program, args)?
            .status()
            .map_err(|source| Error::Spawn {
                program: program.to_string(),
                source,
            })?;
        Ok(status.code().unwrap_or(-1))
    }

    fn output(&self, program: &str, args: &[&str]) -> Result<CommandOutput> {
        let output = self
            .command(program, args)?
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| Error::Spawn {
                program: program.to_string(),
                source,
            })?;
        Ok(CommandOutput::from_output(output))
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Records every command line and answers with canned results.
    /// Unknown commands succeed with empty output.
    #[derive(Default)]
    pub struct MockRunner {
        calls: RefCell<Vec<String>>,
        responses: HashMap<String, CommandOutput>,
        missing: Vec<String>,
    }

    impl MockRunner {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn fail(mut self, line: &str, code: i32) -> Self {
            self.responses.insert(
                line.to_string(),
                CommandOutput {
                    code,
                    ..Default::default()
                },
            );
            self
        }

        pub fn respond(mut self, line: &str, output: CommandOutput) -> Self {
            self.responses.insert(line.to_string(), output);
            self
        }

        /// Makes `program` behave as if it were not installed.
        pub fn without(mut self, program: &str) -> Self {
            self.missing.push(program.to_string());
            self
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }

        fn answer(&self, program: &str, args: &[&str]) -> Result<CommandOutput> {
            if self.missing.iter().any(|m| m == program) {
                return Err(Error::ToolNotFound {
                    program: program.to_string(),
                });
            }
            let line = command_line(program, args);
            self.calls.borrow_mut().push(line.clone());
            Ok(self.responses.get(&line).cloned().unwrap_or_default())
        }
    }

    impl ProcessRunner for MockRunner {
        fn status(&self, program: &str, args: &[&str]) -> Result<i32> {
            self.answer(program, args).map(|out| out.code)
        }

        fn output(&self, program: &str, args: &[&str]) -> Result<CommandOutput> {
            self.answer(program, args)
        }
    }
}

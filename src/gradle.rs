//! Gradle wrapper tasks.
use crate::command::BuildConfig;
use crate::error::Result;
use crate::runner::ProcessRunner;

pub struct Gradle<'a, R: ProcessRunner> {
    runner: &'a R,
    wrapper: &'a str,
    flavor: &'a str,
}

impl<'a, R: ProcessRunner> Gradle<'a, R> {
    pub fn new(runner: &'a R, wrapper: &'a str, flavor: &'a str) -> Self {
        Self {
            runner,
            wrapper,
            flavor,
        }
    }

    pub fn run_task(&self, task: &str) -> Result<i32> {
        self.runner.status(self.wrapper, &[task])
    }

    pub fn assemble(&self, config: BuildConfig) -> Result<i32> {
        self.run_task(&format!("assemble{}", config.suffix()))
    }

    pub fn install(&self, config: BuildConfig) -> Result<i32> {
        self.run_task(&format!("install{}{}", self.flavor, config.suffix()))
    }

    pub fn uninstall(&self, config: BuildConfig) -> Result<i32> {
        self.run_task(&format!("uninstall{}{}", self.flavor, config.suffix()))
    }

    pub fn clean(&self) -> Result<i32> {
        self.run_task("clean")
    }
}

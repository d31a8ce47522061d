//! Makes sure git submodules are checked out before Gradle runs.
use colored::*;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

use crate::error::Result;
use crate::runner::ProcessRunner;

static UNINITIALIZED_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-\S+\s+(\S+)").expect("valid submodule status pattern"));

/// Paths of submodules that `git submodule status` reports as uninitialized
/// (lines prefixed with `-`).
pub fn uninitialized(status: &str) -> Vec<String> {
    status
        .lines()
        .filter(|line| line.starts_with('-'))
        .map(|line| {
            UNINITIALIZED_LINE
                .captures(line)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().to_string())
                .unwrap_or_else(|| line.trim_start_matches('-').trim().to_string())
        })
        .collect()
}

/// Returns 0 when all submodules are present, initializing missing ones first,
/// or the failing git exit code.
pub fn check_submodules<R: ProcessRunner>(runner: &R) -> Result<i32> {
    let status = runner.output("git", &["submodule", "status"])?;
    if !status.success() || !status.stderr.trim().is_empty() {
        println!(
            "{} {}",
            "Error checking submodules:".red(),
            status.stderr.trim()
        );
        warn!(code = status.code, "git submodule status failed");
        return Ok(if status.success() { 1 } else { status.code });
    }

    let missing = uninitialized(&status.stdout);
    if !missing.is_empty() {
        println!(
            "{}",
            "Submodule(s) not found -- updating submodules...".yellow()
        );
        for path in &missing {
            println!("  {}", path.cyan());
        }
        let code = runner.status("git", &["submodule", "update", "--init", "--recursive"])?;
        if code != 0 {
            println!("{} {}", "Error updating submodules:".red(), code);
            return Ok(code);
        }
        println!("{}", "Submodules updated successfully.".green());
    }

    println!("{}", "All submodules are up to date.".green());
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::mock::MockRunner;
    use crate::runner::CommandOutput;

    const STATUS: &str = "git submodule status";
    const UPDATE: &str = "git submodule update --init --recursive";

    fn status_output(stdout: &str) -> CommandOutput {
        CommandOutput {
            code: 0,
            stdout: stdout.to_string(),
            stderr: String::new(),
        }
    }

    #[test]
    fn parses_uninitialized_paths() {
        let status = " 1a2b3c externals/boost (boost-1.84.0)\n\
                      -4d5e6f externals/dynarmic\n\
                      +7a8b9c externals/fmt (10.1.1)\n\
                      -0f0f0f externals/teakra\n";
        assert_eq!(
            uninitialized(status),
            vec!["externals/dynarmic", "externals/teakra"]
        );
    }

    #[test]
    fn leading_space_is_not_uninitialized() {
        assert!(uninitialized(" -abc not/really\n").is_empty());
    }

    #[test]
    fn updates_when_a_submodule_is_missing() {
        let runner = MockRunner::new().respond(STATUS, status_output("-abc123 externals/soundtouch\n"));
        assert_eq!(check_submodules(&runner).unwrap(), 0);
        assert_eq!(runner.calls(), vec![STATUS, UPDATE]);
    }

    #[test]
    fn no_update_when_everything_is_checked_out() {
        let runner = MockRunner::new().respond(STATUS, status_output(" abc123 externals/soundtouch (v2)\n"));
        assert_eq!(check_submodules(&runner).unwrap(), 0);
        assert_eq!(runner.calls(), vec![STATUS]);
    }

    #[test]
    fn failed_update_returns_its_code() {
        let runner = MockRunner::new()
            .respond(STATUS, status_output("-abc123 externals/soundtouch\n"))
            .fail(UPDATE, 128);
        assert_eq!(check_submodules(&runner).unwrap(), 128);
    }

    #[test]
    fn stderr_from_status_is_a_failure() {
        let runner = MockRunner::new().respond(
            STATUS,
            CommandOutput {
                code: 0,
                stdout: String::new(),
                stderr: "fatal: not a git repository".to_string(),
            },
        );
        assert_eq!(check_submodules(&runner).unwrap(), 1);
        assert_eq!(runner.calls(), vec![STATUS]);
    }

    #[test]
    fn non_zero_status_is_propagated() {
        let runner = MockRunner::new().fail(STATUS, 128);
        assert_eq!(check_submodules(&runner).unwrap(), 128);
    }
}

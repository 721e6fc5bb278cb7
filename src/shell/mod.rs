//! External command execution.

pub mod command;

pub use command::{
    execute, execute_quiet, execute_streaming, CommandLine, CommandOptions, CommandResult,
    OutputCallback, OutputLine,
};

/// Check whether we're running in a CI environment.
pub fn is_ci() -> bool {
    const CI_VARS: &[&str] = &["CI", "GITHUB_ACTIONS", "GITLAB_CI", "CIRCLECI", "TRAVIS"];
    CI_VARS.iter().any(|var| std::env::var_os(var).is_some())
}

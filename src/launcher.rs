//! Application process launch.
//!
//! The launch is the single suspension point of a run: stagehand spawns
//! Streamlit with inherited stdio and blocks until the process exits or
//! the user interrupts it. Ctrl-C is delivered to the whole foreground
//! process group, so the child receives the signal directly; stagehand
//! just waits for it and reports the outcome.

use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Instant;

use chrono::Utc;

use crate::config::LaunchConfig;
use crate::error::{Result, StagehandError};
use crate::shell::CommandLine;
use crate::state::ProjectState;
use crate::venv::VenvLayout;

/// Outcome of a completed launch.
#[derive(Debug, Clone, Copy)]
pub struct LaunchOutcome {
    /// The child's exit code, mapped to 128+signal on Unix signal death.
    pub exit_code: i32,
    /// Whether the child terminated by signal.
    pub interrupted: bool,
}

/// Build the full Streamlit command line for a config.
///
/// Defaults reproduce the launcher script: entry `streamlit_app.py`,
/// `--server.port 8501`, `--server.address 0.0.0.0`.
pub fn build_launch_command(layout: &VenvLayout, config: &LaunchConfig) -> CommandLine {
    layout
        .streamlit_command()
        .arg("run")
        .arg(&config.entry)
        .args(["--server.port", &config.server.port.to_string()])
        .args(["--server.address", &config.server.address])
}

/// Verify the entry file exists before handing it to Streamlit.
pub fn check_entry(project_root: &Path, config: &LaunchConfig) -> Result<()> {
    let entry = project_root.join(&config.entry);
    if entry.is_file() {
        Ok(())
    } else {
        Err(StagehandError::EntryNotFound { path: entry })
    }
}

/// Launch the application and block until it exits.
///
/// The run record (start time, duration, exit code) is persisted before
/// returning, including after an interrupt, so state never reflects a
/// half-written run.
pub fn launch(
    line: &CommandLine,
    project_root: &Path,
    state: &mut ProjectState,
) -> Result<LaunchOutcome> {
    tracing::debug!("launching: {}", line);

    let started_at = Utc::now();
    let start = Instant::now();

    let status = Command::new(&line.program)
        .args(&line.args)
        .current_dir(project_root)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|_| StagehandError::CommandFailed {
            command: line.render(),
            code: None,
        })?;

    let duration_secs = start.elapsed().as_secs();
    let exit_code = exit_code_of(&status);

    state.record_run(started_at, duration_secs, status.code());
    if let Err(e) = state.save(project_root) {
        tracing::debug!("failed to persist run record: {}", e);
    }

    Ok(LaunchOutcome {
        exit_code,
        interrupted: status.code().is_none(),
    })
}

/// Map an exit status to a process exit code.
///
/// On Unix, a signal death becomes the conventional 128+signal.
fn exit_code_of(status: &std::process::ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}

//! Run command implementation.
//!
//! `stagehand run` is the whole launcher script in one command:
//! guard the toolchain, prepare the environment, install dependencies,
//! start the app, and block until it exits.

use std::path::{Path, PathBuf};

use crate::cli::args::RunArgs;
use crate::config::{load_config, LaunchConfig};
use crate::error::Result;
use crate::installer::install_dependencies;
use crate::launcher::{build_launch_command, check_entry, launch};
use crate::manifest::Manifest;
use crate::preflight::PreflightReport;
use crate::state::ProjectState;
use crate::ui::UserInterface;
use crate::venv::{ensure_venv, BootstrapOutcome, VenvLayout};

use super::dispatcher::{Command, CommandResult};

/// The run command implementation.
pub struct RunCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: RunArgs,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: RunArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }

    /// Load config and apply command-line overrides.
    fn load_effective_config(&self) -> Result<LaunchConfig> {
        let mut config = load_config(&self.project_root, self.config_path.as_deref())?;

        if let Some(port) = self.args.port {
            config.server.port = port;
        }
        if let Some(address) = &self.args.address {
            config.server.address = address.clone();
        }
        if let Some(entry) = &self.args.entry {
            config.entry = entry.clone();
        }

        config.validate()?;
        Ok(config)
    }
}

impl Command for RunCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.load_effective_config()?;

        ui.show_header(&format!("Launching {}", config.app_name));

        // Guard: both host tools must resolve before anything is touched.
        let report = PreflightReport::check(&config);
        report.ensure_satisfied()?;

        let manifest = Manifest::load(&self.project_root.join(&config.manifest))?;
        check_entry(&self.project_root, &config)?;

        let layout = VenvLayout::new(self.project_root.join(&config.venv_dir));

        if self.args.dry_run {
            ui.message("Dry run - no commands will be executed");
            if layout.exists() {
                ui.message(&format!(
                    "Would reuse existing environment at {}",
                    layout.root().display()
                ));
            } else {
                ui.message(&format!(
                    "Would create environment: {} -m venv {}",
                    config.python,
                    layout.root().display()
                ));
            }
            if !self.args.skip_install {
                ui.message(&format!(
                    "Would install dependencies: {} install -r {}",
                    layout.pip().display(),
                    manifest.path.display()
                ));
            }
            ui.message(&format!("Would launch: {}", build_launch_command(&layout, &config)));
            return Ok(CommandResult::success());
        }

        let python = report.python_path().expect("guard passed, python resolved");

        match ensure_venv(&layout, &python, &self.project_root, ui)? {
            BootstrapOutcome::Created => {
                ui.success(&format!("Created environment at {}", layout.root().display()));
            }
            BootstrapOutcome::AlreadyExists => {
                tracing::debug!("reusing environment at {}", layout.root().display());
            }
        }

        let mut state = ProjectState::load(&self.project_root);

        if self.args.skip_install {
            ui.message("Skipping dependency installation (--skip-install)");
            if state.manifest_drifted(manifest.fingerprint()) {
                ui.warning(&format!(
                    "{} changed since the last install",
                    config.manifest
                ));
            }
        } else {
            install_dependencies(&layout, &manifest, &self.project_root, ui)?;
            state.record_install(manifest.fingerprint());
            if let Err(e) = state.save(&self.project_root) {
                tracing::debug!("failed to persist install record: {}", e);
            }
        }

        ui.message(&format!(
            "Starting {} on {}:{}",
            config.app_name, config.server.address, config.server.port
        ));
        ui.message("Press Ctrl+C to stop");

        // Resolved after install so a freshly created entry-point script wins
        // over the `-m streamlit` fallback.
        let launch_line = build_launch_command(&layout, &config);
        let outcome = launch(&launch_line, &self.project_root, &mut state)?;

        if outcome.interrupted {
            ui.warning("Interrupted");
        } else if outcome.exit_code == 0 {
            ui.success(&format!("{} exited cleanly", config.app_name));
        } else {
            ui.error(&format!(
                "{} exited with code {}",
                config.app_name, outcome.exit_code
            ));
        }

        Ok(CommandResult::from_exit_code(outcome.exit_code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn project_with_files() -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("requirements.txt"), "streamlit\n").unwrap();
        fs::write(temp.path().join("streamlit_app.py"), "import streamlit\n").unwrap();
        temp
    }

    #[test]
    fn overrides_apply_to_config() {
        let temp = project_with_files();
        let args = RunArgs {
            port: Some(9000),
            address: Some("127.0.0.1".to_string()),
            entry: Some("other.py".to_string()),
            ..Default::default()
        };
        let cmd = RunCommand::new(temp.path(), None, args);

        let config = cmd.load_effective_config().unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.address, "127.0.0.1");
        assert_eq!(config.entry, "other.py");
    }

    #[test]
    fn zero_port_override_fails_validation() {
        let temp = project_with_files();
        let args = RunArgs {
            port: Some(0),
            ..Default::default()
        };
        let cmd = RunCommand::new(temp.path(), None, args);
        assert!(cmd.load_effective_config().is_err());
    }
}

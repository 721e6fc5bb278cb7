//! Setup command implementation.
//!
//! `stagehand setup` performs the guard and environment preparation steps
//! without launching the app. Useful for provisioning (the VPS runbook
//! runs it once before enabling the systemd service).

use std::path::{Path, PathBuf};

use crate::cli::args::SetupArgs;
use crate::config::load_config;
use crate::error::Result;
use crate::installer::install_dependencies;
use crate::manifest::Manifest;
use crate::preflight::PreflightReport;
use crate::state::ProjectState;
use crate::ui::UserInterface;
use crate::venv::{ensure_venv, BootstrapOutcome, VenvLayout};

use super::dispatcher::{Command, CommandResult};

/// The setup command implementation.
pub struct SetupCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: SetupArgs,
}

impl SetupCommand {
    /// Create a new setup command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: SetupArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }
}

impl Command for SetupCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(&self.project_root, self.config_path.as_deref())?;

        ui.show_header(&format!("Preparing {}", config.app_name));

        let report = PreflightReport::check(&config);
        report.ensure_satisfied()?;

        let manifest = Manifest::load(&self.project_root.join(&config.manifest))?;
        let layout = VenvLayout::new(self.project_root.join(&config.venv_dir));

        if self.args.dry_run {
            ui.message("Dry run - no commands will be executed");
            if !layout.exists() {
                ui.message(&format!(
                    "Would create environment: {} -m venv {}",
                    config.python,
                    layout.root().display()
                ));
            }
            ui.message(&format!(
                "Would install dependencies: {} install -r {}",
                layout.pip().display(),
                manifest.path.display()
            ));
            return Ok(CommandResult::success());
        }

        let python = report.python_path().expect("guard passed, python resolved");

        match ensure_venv(&layout, &python, &self.project_root, ui)? {
            BootstrapOutcome::Created => {
                ui.success(&format!("Created environment at {}", layout.root().display()));
            }
            BootstrapOutcome::AlreadyExists => {
                ui.message(&format!(
                    "Reusing environment at {}",
                    layout.root().display()
                ));
            }
        }

        install_dependencies(&layout, &manifest, &self.project_root, ui)?;

        let mut state = ProjectState::load(&self.project_root);
        state.record_install(manifest.fingerprint());
        if let Err(e) = state.save(&self.project_root) {
            tracing::debug!("failed to persist install record: {}", e);
        }

        ui.success("Environment ready");
        Ok(CommandResult::success())
    }
}

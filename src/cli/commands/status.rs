//! Status command implementation.
//!
//! `stagehand status` reports everything `run` would check, without
//! changing anything: host tools, environment directory, manifest, entry
//! file, and the recorded install/run history.

use std::path::{Path, PathBuf};

use crate::cli::args::StatusArgs;
use crate::config::load_config;
use crate::error::Result;
use crate::manifest::Manifest;
use crate::preflight::{PreflightReport, ToolStatus};
use crate::state::ProjectState;
use crate::ui::{Table, UserInterface};
use crate::venv::VenvLayout;

use super::dispatcher::{Command, CommandResult};

/// The status command implementation.
pub struct StatusCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: StatusArgs,
}

impl StatusCommand {
    /// Create a new status command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: StatusArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }
}

impl Command for StatusCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(&self.project_root, self.config_path.as_deref())?;

        let report = PreflightReport::check(&config);
        let layout = VenvLayout::new(self.project_root.join(&config.venv_dir));
        let manifest = Manifest::load(&self.project_root.join(&config.manifest)).ok();
        let entry_exists = self.project_root.join(&config.entry).is_file();
        let state = ProjectState::load(&self.project_root);

        if self.args.json {
            let json = build_json(&config, &report, &layout, manifest.as_ref(), entry_exists, &state);
            println!("{}", serde_json::to_string_pretty(&json).map_err(|e| anyhow::anyhow!(e))?);
            return Ok(CommandResult::success());
        }

        ui.show_header(&format!("{} status", config.app_name));

        let mut table = Table::new(vec!["Component", "Status", "Detail"]);

        for check in &report.checks {
            match &check.status {
                ToolStatus::Found { path, version } => {
                    let detail = match version {
                        Some(v) => format!("{} ({})", path.display(), v),
                        None => path.display().to_string(),
                    };
                    table.add_row(vec![&check.spec.name, "found", &detail]);
                }
                ToolStatus::Missing => {
                    table.add_row(vec![&check.spec.name, "missing", "not on PATH"]);
                }
            }
        }

        let venv_detail = layout.root().display().to_string();
        if !layout.exists() {
            table.add_row(vec!["venv", "absent", &venv_detail]);
        } else if layout.looks_valid() {
            table.add_row(vec!["venv", "present", &venv_detail]);
        } else {
            table.add_row(vec!["venv", "suspect", "directory exists but has no pyvenv.cfg"]);
        }

        match &manifest {
            Some(m) => {
                let detail = if state.manifest_drifted(m.fingerprint()) {
                    format!("{} packages, changed since last install", m.package_count())
                } else {
                    format!("{} packages, up to date", m.package_count())
                };
                table.add_row(vec![config.manifest.as_str(), "present", &detail]);
            }
            None => {
                table.add_row(vec![config.manifest.as_str(), "missing", "required for setup"]);
            }
        }

        table.add_row(vec![
            config.entry.as_str(),
            if entry_exists { "present" } else { "missing" },
            "app entry file",
        ]);

        ui.message(&table.render());

        match &state.last_run {
            Some(run) => {
                let outcome = match run.exit_code {
                    Some(0) => "exited cleanly".to_string(),
                    Some(code) => format!("exited with code {}", code),
                    None => "interrupted".to_string(),
                };
                ui.message(&format!(
                    "Last run: {} ({}, ran {}s)",
                    run.started_at.format("%Y-%m-%d %H:%M UTC"),
                    outcome,
                    run.duration_secs
                ));
            }
            None => ui.message("Last run: never"),
        }

        Ok(CommandResult::success())
    }
}

fn build_json(
    config: &crate::config::LaunchConfig,
    report: &PreflightReport,
    layout: &VenvLayout,
    manifest: Option<&Manifest>,
    entry_exists: bool,
    state: &ProjectState,
) -> serde_json::Value {
    let tools: Vec<serde_json::Value> = report
        .checks
        .iter()
        .map(|check| match &check.status {
            ToolStatus::Found { path, version } => serde_json::json!({
                "name": check.spec.name,
                "found": true,
                "path": path.display().to_string(),
                "version": version,
            }),
            ToolStatus::Missing => serde_json::json!({
                "name": check.spec.name,
                "found": false,
            }),
        })
        .collect();

    serde_json::json!({
        "app_name": config.app_name,
        "tools": tools,
        "venv": {
            "path": layout.root().display().to_string(),
            "exists": layout.exists(),
            "valid": layout.looks_valid(),
        },
        "manifest": manifest.map(|m| serde_json::json!({
            "path": m.path.display().to_string(),
            "packages": m.package_count(),
            "fingerprint": m.fingerprint(),
            "drifted": state.manifest_drifted(m.fingerprint()),
        })),
        "entry": {
            "path": config.entry,
            "exists": entry_exists,
        },
        "server": {
            "port": config.server.port,
            "address": config.server.address,
        },
        "last_install": state.last_install,
        "last_run": state.last_run,
    })
}

//! Clean command implementation.
//!
//! `stagehand clean` removes the virtual environment and recorded state,
//! returning the project to its pre-setup condition.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::args::CleanArgs;
use crate::config::load_config;
use crate::error::Result;
use crate::state::ProjectState;
use crate::ui::UserInterface;
use crate::venv::VenvLayout;

use super::dispatcher::{Command, CommandResult};

/// The clean command implementation.
pub struct CleanCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: CleanArgs,
}

impl CleanCommand {
    /// Create a new clean command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: CleanArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }
}

impl Command for CleanCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(&self.project_root, self.config_path.as_deref())?;
        let layout = VenvLayout::new(self.project_root.join(&config.venv_dir));

        let state_dir = self.project_root.join(crate::state::STATE_DIR);
        if !layout.exists() && !state_dir.exists() {
            ui.message("Nothing to clean");
            return Ok(CommandResult::success());
        }

        if !self.args.yes {
            let question = format!("Remove {} and recorded state?", layout.root().display());
            if !ui.confirm(&question, false)? {
                ui.message("Aborted");
                return Ok(CommandResult::success());
            }
        }

        if layout.exists() {
            fs::remove_dir_all(layout.root())?;
            ui.success(&format!("Removed {}", layout.root().display()));
        }

        ProjectState::clear(&self.project_root)?;

        Ok(CommandResult::success())
    }
}

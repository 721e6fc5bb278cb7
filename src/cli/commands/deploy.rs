//! Deploy command implementation.
//!
//! `stagehand deploy <target>` renders the file artifacts the deployment
//! runbooks used to dictate by hand. Assets go to stdout by default so
//! they can be piped or reviewed; `--out` writes them into a directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::args::DeployArgs;
use crate::config::load_config;
use crate::deploy::{build_context, render_target, RenderedAsset};
use crate::error::{Result, StagehandError};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The deploy command implementation.
pub struct DeployCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: DeployArgs,
}

impl DeployCommand {
    /// Create a new deploy command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: DeployArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }

    /// Write an asset into the output directory, honoring overwrite rules.
    fn write_asset(
        &self,
        out_dir: &Path,
        asset: &RenderedAsset,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        let path = out_dir.join(&asset.file_name);

        if path.exists() && !self.args.force {
            let overwrite = if ui.is_interactive() {
                ui.confirm(&format!("Overwrite {}?", path.display()), false)?
            } else {
                false
            };
            if !overwrite {
                return Err(StagehandError::WouldOverwrite { path });
            }
        }

        fs::create_dir_all(out_dir)?;
        fs::write(&path, &asset.contents)?;
        ui.success(&format!("Wrote {}", path.display()));
        Ok(())
    }
}

impl Command for DeployCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut config = load_config(&self.project_root, self.config_path.as_deref())?;

        if let Some(domain) = &self.args.domain {
            config.deploy.domain = Some(domain.clone());
        }
        if let Some(user) = &self.args.user {
            config.deploy.user = user.clone();
        }
        if let Some(service_name) = &self.args.service_name {
            config.deploy.service_name = service_name.clone();
        }

        // Deploy artifacts embed the app directory; an absolute path keeps
        // the unit file valid no matter where systemd starts the service.
        let app_dir = self
            .project_root
            .canonicalize()
            .unwrap_or_else(|_| self.project_root.clone());
        let ctx = build_context(&config, &app_dir);

        let assets = render_target(self.args.target, &ctx)?;

        match &self.args.out {
            Some(out_dir) => {
                for asset in &assets {
                    self.write_asset(out_dir, asset, ui)?;
                }
            }
            None => {
                for asset in &assets {
                    if assets.len() > 1 {
                        ui.message(&format!("# --- {} ---", asset.file_name));
                    }
                    ui.message(asset.contents.trim_end());
                }
            }
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deploy::DeployTarget;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn deploy_args(target: DeployTarget) -> DeployArgs {
        DeployArgs {
            target,
            out: None,
            force: false,
            domain: None,
            user: None,
            service_name: None,
        }
    }

    #[test]
    fn deploy_systemd_prints_unit_to_stdout_channel() {
        let temp = TempDir::new().unwrap();
        let cmd = DeployCommand::new(temp.path(), None, deploy_args(DeployTarget::Systemd));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        let transcript = ui.transcript();
        assert!(transcript.contains("[Service]"));
        assert!(transcript.contains("--server.port 8501"));
    }

    #[test]
    fn deploy_writes_assets_into_out_dir() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("deploy");
        let mut args = deploy_args(DeployTarget::Heroku);
        args.out = Some(out.clone());

        let cmd = DeployCommand::new(temp.path(), None, args);
        let mut ui = MockUI::new();
        cmd.execute(&mut ui).unwrap();

        assert!(out.join("Procfile").is_file());
        assert!(out.join("heroku-setup.sh").is_file());
    }

    #[test]
    fn deploy_refuses_overwrite_without_force() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("deploy");
        fs::create_dir_all(&out).unwrap();
        fs::write(out.join("freedom-calculator.service"), "old").unwrap();

        let mut args = deploy_args(DeployTarget::Systemd);
        args.out = Some(out.clone());
        let cmd = DeployCommand::new(temp.path(), None, args);
        let mut ui = MockUI::new();

        let err = cmd.execute(&mut ui).unwrap_err();
        assert!(matches!(err, StagehandError::WouldOverwrite { .. }));
        assert_eq!(fs::read_to_string(out.join("freedom-calculator.service")).unwrap(), "old");
    }

    #[test]
    fn deploy_force_overwrites() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("deploy");
        fs::create_dir_all(&out).unwrap();
        fs::write(out.join("freedom-calculator.service"), "old").unwrap();

        let mut args = deploy_args(DeployTarget::Systemd);
        args.out = Some(out.clone());
        args.force = true;
        let cmd = DeployCommand::new(temp.path(), None, args);
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        let written = fs::read_to_string(out.join("freedom-calculator.service")).unwrap();
        assert!(written.contains("[Unit]"));
    }

    #[test]
    fn deploy_flag_overrides_reach_the_rendered_asset() {
        let temp = TempDir::new().unwrap();
        let mut args = deploy_args(DeployTarget::Nginx);
        args.domain = Some("calc.example.com".to_string());
        args.service_name = Some("calc".to_string());

        let cmd = DeployCommand::new(temp.path(), None, args);
        let mut ui = MockUI::new();
        cmd.execute(&mut ui).unwrap();

        assert!(ui.transcript().contains("server_name calc.example.com;"));
    }
}

//! Embedded deployment asset templates.
//!
//! Each target corresponds to one of the hosting topologies the project's
//! runbooks describe: a self-managed VPS behind systemd and Nginx, or a
//! Heroku buildpack deployment. Streamlit Community Cloud needs no file
//! artifact and stays documentation-only.

use std::path::Path;

use include_dir::{include_dir, Dir};

use crate::config::LaunchConfig;
use crate::error::Result;

use super::template::{render, TemplateContext};

static TEMPLATES_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// A deployment target with renderable assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DeployTarget {
    /// systemd unit for a self-managed VPS.
    Systemd,
    /// Nginx reverse-proxy server block.
    Nginx,
    /// Heroku Procfile plus Streamlit setup script.
    Heroku,
}

impl DeployTarget {
    /// Display name used in messages and errors.
    pub fn name(&self) -> &'static str {
        match self {
            DeployTarget::Systemd => "systemd",
            DeployTarget::Nginx => "nginx",
            DeployTarget::Heroku => "heroku",
        }
    }
}

/// One rendered deployment file.
#[derive(Debug, Clone)]
pub struct RenderedAsset {
    /// Suggested output file name.
    pub file_name: String,
    /// Rendered contents.
    pub contents: String,
}

/// Build the template context from config and project location.
pub fn build_context(config: &LaunchConfig, project_root: &Path) -> TemplateContext {
    let mut ctx = TemplateContext::new();
    ctx.insert("app_name".to_string(), config.app_name.clone());
    ctx.insert(
        "app_dir".to_string(),
        project_root.to_string_lossy().into_owned(),
    );
    ctx.insert("entry".to_string(), config.entry.clone());
    ctx.insert("venv_dir".to_string(), config.venv_dir.clone());
    ctx.insert("port".to_string(), config.server.port.to_string());
    ctx.insert("address".to_string(), config.server.address.clone());
    ctx.insert("user".to_string(), config.deploy.user.clone());
    ctx.insert(
        "service_name".to_string(),
        config.deploy.service_name.clone(),
    );
    // "_" is nginx's catch-all server name, for when no domain is set yet.
    ctx.insert(
        "domain".to_string(),
        config.deploy.domain.clone().unwrap_or_else(|| "_".to_string()),
    );
    ctx
}

fn template_source(name: &str) -> &'static str {
    TEMPLATES_DIR
        .get_file(name)
        .and_then(|f| f.contents_utf8())
        .unwrap_or_else(|| panic!("template {} embedded at compile time", name))
}

/// Render every asset for a target.
pub fn render_target(target: DeployTarget, ctx: &TemplateContext) -> Result<Vec<RenderedAsset>> {
    let service_name = ctx
        .get("service_name")
        .cloned()
        .unwrap_or_else(|| "app".to_string());

    let assets = match target {
        DeployTarget::Systemd => vec![RenderedAsset {
            file_name: format!("{}.service", service_name),
            contents: render("systemd", template_source("systemd.service"), ctx)?,
        }],
        DeployTarget::Nginx => vec![RenderedAsset {
            file_name: format!("{}.conf", service_name),
            contents: render("nginx", template_source("nginx.conf"), ctx)?,
        }],
        DeployTarget::Heroku => vec![
            RenderedAsset {
                file_name: "Procfile".to_string(),
                contents: render("Procfile", template_source("Procfile"), ctx)?,
            },
            RenderedAsset {
                file_name: "heroku-setup.sh".to_string(),
                contents: render("heroku-setup.sh", template_source("heroku-setup.sh"), ctx)?,
            },
        ],
    };

    Ok(assets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn default_ctx() -> TemplateContext {
        build_context(&LaunchConfig::default(), &PathBuf::from("/srv/freedom-calculator"))
    }

    #[test]
    fn systemd_unit_renders_exec_start_with_port_and_address() {
        let assets = render_target(DeployTarget::Systemd, &default_ctx()).unwrap();

        assert_eq!(assets.len(), 1);
        assert_eq!(assets[0].file_name, "freedom-calculator.service");
        let unit = &assets[0].contents;
        assert!(unit.contains("Description=Freedom Calculator"));
        assert!(unit.contains(
            "ExecStart=/srv/freedom-calculator/venv/bin/streamlit run streamlit_app.py \
             --server.port 8501 --server.address 0.0.0.0"
        ));
        assert!(unit.contains("Restart=always"));
    }

    #[test]
    fn nginx_block_proxies_the_app_port_and_keeps_nginx_vars() {
        let assets = render_target(DeployTarget::Nginx, &default_ctx()).unwrap();

        let conf = &assets[0].contents;
        assert!(conf.contains("proxy_pass http://127.0.0.1:8501;"));
        // nginx runtime variables must survive interpolation untouched.
        assert!(conf.contains("$http_upgrade"));
        assert!(conf.contains("$host"));
        // No domain configured: catch-all server name.
        assert!(conf.contains("server_name _;"));
    }

    #[test]
    fn nginx_uses_configured_domain() {
        let mut config = LaunchConfig::default();
        config.deploy.domain = Some("calc.example.com".to_string());
        let ctx = build_context(&config, &PathBuf::from("/srv/app"));

        let assets = render_target(DeployTarget::Nginx, &ctx).unwrap();
        assert!(assets[0].contents.contains("server_name calc.example.com;"));
    }

    #[test]
    fn heroku_renders_procfile_and_setup_script() {
        let assets = render_target(DeployTarget::Heroku, &default_ctx()).unwrap();

        assert_eq!(assets.len(), 2);
        let procfile = assets.iter().find(|a| a.file_name == "Procfile").unwrap();
        assert!(procfile.contents.contains("streamlit run streamlit_app.py"));

        let setup = assets
            .iter()
            .find(|a| a.file_name == "heroku-setup.sh")
            .unwrap();
        // Heroku's runtime port variable must stay a shell variable.
        assert!(setup.contents.contains("port = $PORT"));
        assert!(setup.contents.contains("headless = true"));
    }

    #[test]
    fn target_names_are_stable() {
        assert_eq!(DeployTarget::Systemd.name(), "systemd");
        assert_eq!(DeployTarget::Nginx.name(), "nginx");
        assert_eq!(DeployTarget::Heroku.name(), "heroku");
    }
}

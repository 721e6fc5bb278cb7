//! Configuration schema.
//!
//! Every field is optional in `stagehand.yml`; the defaults reproduce the
//! original launcher script exactly, so a project with no config file
//! behaves identically to running that script.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StagehandError};

/// Default entry file served by Streamlit.
pub const DEFAULT_ENTRY: &str = "streamlit_app.py";

/// Default dependency manifest.
pub const DEFAULT_MANIFEST: &str = "requirements.txt";

/// Default virtual-environment directory.
pub const DEFAULT_VENV_DIR: &str = "venv";

/// Default server port.
pub const DEFAULT_PORT: u16 = 8501;

/// Default bind address (all interfaces).
pub const DEFAULT_ADDRESS: &str = "0.0.0.0";

/// Top-level configuration for a launched project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LaunchConfig {
    /// Display name shown in headers and rendered into deploy assets.
    pub app_name: String,

    /// Entry file passed to `streamlit run`, relative to the project root.
    pub entry: String,

    /// Dependency manifest, relative to the project root.
    pub manifest: String,

    /// Virtual-environment directory, relative to the project root.
    pub venv_dir: String,

    /// Host Python interpreter used for preflight and venv creation.
    pub python: String,

    /// Host pip binary checked during preflight.
    pub pip: String,

    /// Server bind settings.
    pub server: ServerConfig,

    /// Deployment asset parameters.
    pub deploy: DeployConfig,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            app_name: "Freedom Calculator".to_string(),
            entry: DEFAULT_ENTRY.to_string(),
            manifest: DEFAULT_MANIFEST.to_string(),
            venv_dir: DEFAULT_VENV_DIR.to_string(),
            python: "python3".to_string(),
            pip: "pip3".to_string(),
            server: ServerConfig::default(),
            deploy: DeployConfig::default(),
        }
    }
}

/// Server bind settings for the launched process.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// TCP port the app listens on.
    pub port: u16,

    /// Bind address.
    pub address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            address: DEFAULT_ADDRESS.to_string(),
        }
    }
}

/// Parameters rendered into deployment assets.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeployConfig {
    /// systemd service name (also the nginx upstream label).
    pub service_name: String,

    /// System user the service runs as.
    pub user: String,

    /// Public domain for the nginx server block.
    pub domain: Option<String>,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            service_name: "freedom-calculator".to_string(),
            user: "deploy".to_string(),
            domain: None,
        }
    }
}

impl LaunchConfig {
    /// Validate field values after parsing.
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(StagehandError::ConfigValidationError {
                message: "server.port must be non-zero".to_string(),
            });
        }

        for (field, value) in [
            ("entry", &self.entry),
            ("manifest", &self.manifest),
            ("venv_dir", &self.venv_dir),
            ("python", &self.python),
            ("pip", &self.pip),
        ] {
            if value.trim().is_empty() {
                return Err(StagehandError::ConfigValidationError {
                    message: format!("{} must not be empty", field),
                });
            }
        }

        for (field, value) in [("entry", &self.entry), ("manifest", &self.manifest), ("venv_dir", &self.venv_dir)] {
            if std::path::Path::new(value).is_absolute() {
                return Err(StagehandError::ConfigValidationError {
                    message: format!("{} must be relative to the project root", field),
                });
            }
        }

        Ok(())
    }
}

//! Configuration loading and validation.

pub mod loader;
pub mod schema;

pub use loader::{find_config, load_config, load_config_file, CONFIG_FILE};
pub use schema::{
    DeployConfig, LaunchConfig, ServerConfig, DEFAULT_ADDRESS, DEFAULT_ENTRY, DEFAULT_MANIFEST,
    DEFAULT_PORT, DEFAULT_VENV_DIR,
};

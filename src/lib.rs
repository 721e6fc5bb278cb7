//! Stagehand - bootstrap and launch automation for the Freedom Calculator
//! Streamlit app.
//!
//! Stagehand replaces the project's ad-hoc launcher shell script and manual
//! deployment runbooks with a single CLI: it verifies the host Python
//! toolchain, prepares the virtual environment, installs dependencies from
//! the manifest, launches the app, and renders deployment assets.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and validation
//! - [`deploy`] - Deployment asset rendering
//! - [`error`] - Error types and result aliases
//! - [`installer`] - Dependency installation
//! - [`launcher`] - Application process launch
//! - [`manifest`] - Dependency manifest handling
//! - [`preflight`] - Host toolchain checks
//! - [`shell`] - External command execution
//! - [`state`] - Persisted install and run records
//! - [`ui`] - Terminal output, spinners, and prompts
//! - [`venv`] - Virtual-environment layout and bootstrap
//!
//! # Example
//!
//! ```
//! use stagehand::config::LaunchConfig;
//! use stagehand::launcher::build_launch_command;
//! use stagehand::venv::VenvLayout;
//!
//! // The default command line reproduces the original launcher script.
//! let layout = VenvLayout::new("venv");
//! let command = build_launch_command(&layout, &LaunchConfig::default());
//! assert!(command.render().ends_with(
//!     "run streamlit_app.py --server.port 8501 --server.address 0.0.0.0"
//! ));
//! ```

pub mod cli;
pub mod config;
pub mod deploy;
pub mod error;
pub mod installer;
pub mod launcher;
pub mod manifest;
pub mod preflight;
pub mod shell;
pub mod state;
pub mod ui;
pub mod venv;

pub use error::{Result, StagehandError};

//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::deploy::DeployTarget;

/// Stagehand - bootstrap and launch the Freedom Calculator Streamlit app.
#[derive(Debug, Parser)]
#[command(name = "stagehand")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides stagehand.yml discovery)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check the toolchain, prepare the environment, and launch the app
    /// (default if no command specified)
    Run(RunArgs),

    /// Prepare the environment without launching
    Setup(SetupArgs),

    /// Show toolchain, environment, and last-run status
    Status(StatusArgs),

    /// Render deployment assets (systemd unit, nginx config, Heroku files)
    Deploy(DeployArgs),

    /// Remove the virtual environment and recorded state
    Clean(CleanArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RunArgs {
    /// Override the server port
    #[arg(long)]
    pub port: Option<u16>,

    /// Override the bind address
    #[arg(long)]
    pub address: Option<String>,

    /// Override the entry file
    #[arg(long)]
    pub entry: Option<String>,

    /// Launch without reinstalling dependencies
    #[arg(long)]
    pub skip_install: bool,

    /// Print the commands that would run without executing them
    #[arg(long)]
    pub dry_run: bool,

    /// Never prompt; assume defaults
    #[arg(long)]
    pub non_interactive: bool,
}

/// Arguments for the `setup` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SetupArgs {
    /// Print the commands that would run without executing them
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `status` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StatusArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `deploy` command.
#[derive(Debug, Clone, clap::Args)]
pub struct DeployArgs {
    /// Deployment target to render assets for
    #[arg(value_enum)]
    pub target: DeployTarget,

    /// Write assets into this directory instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Overwrite existing files without prompting
    #[arg(long)]
    pub force: bool,

    /// Public domain for the nginx server block
    #[arg(long)]
    pub domain: Option<String>,

    /// System user the service runs as
    #[arg(long)]
    pub user: Option<String>,

    /// Service/file base name
    #[arg(long)]
    pub service_name: Option<String>,
}

/// Arguments for the `clean` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CleanArgs {
    /// Delete without prompting
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

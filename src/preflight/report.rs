//! Aggregated preflight results with guard semantics.

use std::path::PathBuf;

use crate::config::LaunchConfig;
use crate::error::{Result, StagehandError};

use super::probe::parse_system_path;
use super::toolchain::{probe_tool, ToolSpec, ToolStatus};

/// One checked tool and its outcome.
#[derive(Debug, Clone)]
pub struct ToolCheck {
    /// The spec that was checked.
    pub spec: ToolSpec,
    /// The probe result.
    pub status: ToolStatus,
}

/// Results of checking every required host tool.
///
/// Tools are checked in declaration order; the guard fails on the first
/// missing one, before any environment setup is attempted.
#[derive(Debug, Clone)]
pub struct PreflightReport {
    /// Individual results, in check order.
    pub checks: Vec<ToolCheck>,
}

impl PreflightReport {
    /// Probe the tools the given config requires, using the system PATH.
    pub fn check(config: &LaunchConfig) -> Self {
        Self::check_with_path(config, &parse_system_path())
    }

    /// Probe with explicit PATH entries (injectable for tests).
    pub fn check_with_path(config: &LaunchConfig, path_entries: &[PathBuf]) -> Self {
        let specs = [
            ToolSpec::python(&config.python),
            ToolSpec::pip(&config.pip),
        ];

        let checks = specs
            .into_iter()
            .map(|spec| {
                let status = probe_tool(&spec, path_entries);
                match &status {
                    ToolStatus::Found { path, version } => {
                        tracing::debug!(
                            "{} resolved at {} (version {:?})",
                            spec.name,
                            path.display(),
                            version
                        );
                    }
                    ToolStatus::Missing => {
                        tracing::debug!("{} not found on PATH", spec.name);
                    }
                }
                ToolCheck { spec, status }
            })
            .collect();

        Self { checks }
    }

    /// Whether every required tool resolved.
    pub fn all_found(&self) -> bool {
        self.checks.iter().all(|c| c.status.is_found())
    }

    /// The first missing tool, if any.
    pub fn first_missing(&self) -> Option<&ToolCheck> {
        self.checks.iter().find(|c| !c.status.is_found())
    }

    /// Resolved path of the Python interpreter, when found.
    pub fn python_path(&self) -> Option<PathBuf> {
        self.checks.first().and_then(|c| match &c.status {
            ToolStatus::Found { path, .. } => Some(path.clone()),
            ToolStatus::Missing => None,
        })
    }

    /// Enforce the guard: error on the first missing tool.
    pub fn ensure_satisfied(&self) -> Result<()> {
        match self.first_missing() {
            None => Ok(()),
            Some(check) => Err(StagehandError::ToolMissing {
                tool: check.spec.name.clone(),
                hint: check.spec.missing_hint.clone(),
            }),
        }
    }
}

//! Persisted install and run records.
//!
//! State lives in `.stagehand/state.json` under the project root. It is
//! purely informational: `status` uses it to report manifest drift and the
//! last launch outcome. Absent or corrupt state is never fatal.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Directory under the project root holding stagehand's files.
pub const STATE_DIR: &str = ".stagehand";

/// State file name.
pub const STATE_FILE: &str = "state.json";

/// Record of the most recent successful dependency install.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InstallRecord {
    /// Manifest fingerprint at install time.
    pub manifest_fingerprint: String,
    /// When the install finished.
    pub installed_at: DateTime<Utc>,
}

/// Record of the most recent launch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunRecord {
    /// When the process was started.
    pub started_at: DateTime<Utc>,
    /// How long it ran, in seconds.
    pub duration_secs: u64,
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,
}

/// All persisted project state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectState {
    /// Last successful install, if any.
    pub last_install: Option<InstallRecord>,
    /// Last launch, if any.
    pub last_run: Option<RunRecord>,
}

impl ProjectState {
    /// Path of the state file for a project root.
    pub fn path(project_root: &Path) -> PathBuf {
        project_root.join(STATE_DIR).join(STATE_FILE)
    }

    /// Load state for a project, tolerating absence and corruption.
    pub fn load(project_root: &Path) -> Self {
        let path = Self::path(project_root);
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(state) => state,
                Err(e) => {
                    tracing::debug!("discarding corrupt state at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Persist state, creating the state directory if needed.
    pub fn save(&self, project_root: &Path) -> Result<()> {
        let path = Self::path(project_root);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| anyhow::anyhow!(e))?;
        fs::write(&path, json)?;
        Ok(())
    }

    /// Record a successful install of the given manifest fingerprint.
    pub fn record_install(&mut self, manifest_fingerprint: &str) {
        self.last_install = Some(InstallRecord {
            manifest_fingerprint: manifest_fingerprint.to_string(),
            installed_at: Utc::now(),
        });
    }

    /// Record a finished launch.
    pub fn record_run(&mut self, started_at: DateTime<Utc>, duration_secs: u64, exit_code: Option<i32>) {
        self.last_run = Some(RunRecord {
            started_at,
            duration_secs,
            exit_code,
        });
    }

    /// Whether the manifest changed since the last recorded install.
    ///
    /// With no recorded install, everything counts as drifted.
    pub fn manifest_drifted(&self, current_fingerprint: &str) -> bool {
        match &self.last_install {
            Some(record) => record.manifest_fingerprint != current_fingerprint,
            None => true,
        }
    }

    /// Delete persisted state for a project, if present.
    pub fn clear(project_root: &Path) -> Result<()> {
        let dir = project_root.join(STATE_DIR);
        if dir.exists() {
            fs::remove_dir_all(&dir)?;
        }
        Ok(())
    }
}

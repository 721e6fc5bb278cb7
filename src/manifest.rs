//! Dependency manifest (`requirements.txt`) handling.
//!
//! The manifest is a precondition for setup: a missing file aborts before
//! any installation is attempted. Parsing is deliberately shallow, enough
//! to list packages in `status` and to fingerprint the file for drift
//! detection; pip remains the authority on what the lines mean.

use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::error::{Result, StagehandError};

/// A single requirement line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    /// The line as written, trimmed.
    pub raw: String,
    /// Package name with extras/specifiers/markers stripped.
    pub name: String,
}

/// A parsed dependency manifest.
#[derive(Debug, Clone)]
pub struct Manifest {
    /// Path the manifest was loaded from.
    pub path: PathBuf,
    /// Package requirements, in file order.
    pub requirements: Vec<Requirement>,
    /// Option lines (`-r`, `-e`, `--index-url`, ...), in file order.
    pub options: Vec<String>,
    /// SHA-256 of the raw file bytes, hex-encoded.
    fingerprint: String,
}

impl Manifest {
    /// Load and parse a manifest file.
    ///
    /// # Errors
    ///
    /// Returns `ManifestNotFound` if the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(StagehandError::ManifestNotFound {
                path: path.to_path_buf(),
            });
        }

        let bytes = fs::read(path)?;
        let contents = String::from_utf8_lossy(&bytes);

        let mut requirements = Vec::new();
        let mut options = Vec::new();

        for line in contents.lines() {
            let line = strip_comment(line).trim();
            if line.is_empty() {
                continue;
            }
            if line.starts_with('-') {
                options.push(line.to_string());
                continue;
            }
            requirements.push(Requirement {
                raw: line.to_string(),
                name: package_name(line),
            });
        }

        let fingerprint = hex::encode(Sha256::digest(&bytes));

        Ok(Self {
            path: path.to_path_buf(),
            requirements,
            options,
            fingerprint,
        })
    }

    /// SHA-256 fingerprint of the file contents.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// Number of package requirements.
    pub fn package_count(&self) -> usize {
        self.requirements.len()
    }
}

/// Strip an end-of-line comment, respecting pip's rule that `#` must be
/// preceded by whitespace (or start the line) to begin a comment.
fn strip_comment(line: &str) -> &str {
    if line.trim_start().starts_with('#') {
        return "";
    }
    match line.find(" #") {
        Some(idx) => &line[..idx],
        None => line,
    }
}

/// Extract the bare package name from a requirement line.
fn package_name(line: &str) -> String {
    let end = line
        .find(|c: char| ['=', '<', '>', '~', '!', '[', ';', ' '].contains(&c))
        .unwrap_or(line.len());
    line[..end].trim().to_string()
}

//! Required tool definitions and version probing.

use std::path::PathBuf;

use regex::Regex;

use crate::shell::{execute_quiet, CommandLine};

use super::probe::resolve_tool_path;

/// Definition of a host tool stagehand depends on.
#[derive(Debug, Clone)]
pub struct ToolSpec {
    /// Display name (e.g. "python3").
    pub name: String,
    /// Binary to resolve on PATH.
    pub binary: String,
    /// Hint shown when the tool is missing.
    pub missing_hint: String,
}

impl ToolSpec {
    /// Create a tool spec.
    pub fn new(name: &str, binary: &str, missing_hint: &str) -> Self {
        Self {
            name: name.to_string(),
            binary: binary.to_string(),
            missing_hint: missing_hint.to_string(),
        }
    }

    /// The Python interpreter the launcher script guarded on.
    pub fn python(binary: &str) -> Self {
        Self::new(
            "python3",
            binary,
            "Install Python 3.9 or newer and ensure it is on PATH.",
        )
    }

    /// The pip installer the launcher script guarded on.
    pub fn pip(binary: &str) -> Self {
        Self::new(
            "pip3",
            binary,
            "Install pip (usually bundled with Python) and ensure it is on PATH.",
        )
    }
}

/// The result of probing a single host tool.
#[derive(Debug, Clone)]
pub enum ToolStatus {
    /// Tool resolved on PATH.
    Found {
        /// Resolved binary path.
        path: PathBuf,
        /// Version string, if `--version` produced one.
        version: Option<String>,
    },
    /// Tool not resolvable anywhere on PATH.
    Missing,
}

impl ToolStatus {
    /// Whether the tool was found.
    pub fn is_found(&self) -> bool {
        matches!(self, ToolStatus::Found { .. })
    }
}

/// Probe a tool: resolve it on the given PATH entries and extract a version.
pub fn probe_tool(spec: &ToolSpec, path_entries: &[PathBuf]) -> ToolStatus {
    let Some(path) = resolve_tool_path(&spec.binary, path_entries) else {
        return ToolStatus::Missing;
    };

    let version = query_version(&path);
    ToolStatus::Found { path, version }
}

/// Run `<tool> --version` and extract a dotted version number.
///
/// Both python and pip print versions on stdout, but older Pythons used
/// stderr, so both streams are searched.
fn query_version(path: &std::path::Path) -> Option<String> {
    let line = CommandLine::new(path).arg("--version");
    let result = execute_quiet(&line, None).ok()?;
    if !result.success {
        return None;
    }

    extract_version(&format!("{}{}", result.stdout, result.stderr))
}

/// Extract the first dotted version number from tool output.
pub(crate) fn extract_version(output: &str) -> Option<String> {
    let re = Regex::new(r"(\d+\.\d+(?:\.\d+)?)").expect("valid version regex");
    re.captures(output)
        .map(|caps| caps.get(1).expect("group 1 exists").as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_version_from_python_output() {
        assert_eq!(
            extract_version("Python 3.11.4"),
            Some("3.11.4".to_string())
        );
    }

    #[test]
    fn extract_version_from_pip_output() {
        assert_eq!(
            extract_version("pip 24.0 from /usr/lib/python3/dist-packages/pip (python 3.11)"),
            Some("24.0".to_string())
        );
    }

    #[test]
    fn extract_version_handles_two_part_versions() {
        assert_eq!(extract_version("tool 1.2"), Some("1.2".to_string()));
    }

    #[test]
    fn extract_version_returns_none_without_digits() {
        assert_eq!(extract_version("no version here"), None);
    }

    #[test]
    fn probe_tool_missing_on_empty_path() {
        let spec = ToolSpec::python("python3");
        let status = probe_tool(&spec, &[]);
        assert!(matches!(status, ToolStatus::Missing));
    }

    #[test]
    fn tool_specs_carry_hints() {
        let python = ToolSpec::python("python3");
        assert!(python.missing_hint.contains("Python"));
        let pip = ToolSpec::pip("pip3");
        assert!(pip.missing_hint.contains("pip"));
    }
}

//! Virtual-environment directory layout.

use std::path::{Path, PathBuf};

use crate::shell::CommandLine;

/// Paths inside a Python virtual environment.
///
/// Executables live under `bin/` on Unix and `Scripts/` on Windows.
#[derive(Debug, Clone)]
pub struct VenvLayout {
    root: PathBuf,
}

impl VenvLayout {
    /// Create a layout rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The environment's root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether the environment directory exists.
    pub fn exists(&self) -> bool {
        self.root.is_dir()
    }

    /// Whether the directory looks like a real venv (has `pyvenv.cfg`).
    pub fn looks_valid(&self) -> bool {
        self.root.join("pyvenv.cfg").is_file()
    }

    /// The executable directory (`bin` or `Scripts`).
    pub fn bin_dir(&self) -> PathBuf {
        if cfg!(windows) {
            self.root.join("Scripts")
        } else {
            self.root.join("bin")
        }
    }

    /// Path to an executable inside the environment.
    pub fn executable(&self, name: &str) -> PathBuf {
        let file = if cfg!(windows) {
            format!("{}.exe", name)
        } else {
            name.to_string()
        };
        self.bin_dir().join(file)
    }

    /// The environment's Python interpreter.
    pub fn python(&self) -> PathBuf {
        self.executable("python")
    }

    /// The environment's pip.
    pub fn pip(&self) -> PathBuf {
        self.executable("pip")
    }

    /// The command that runs Streamlit from this environment.
    ///
    /// Prefers the `streamlit` entry point; falls back to
    /// `python -m streamlit` when the script is absent (some pip versions
    /// skip entry-point scripts for editable installs).
    pub fn streamlit_command(&self) -> CommandLine {
        let script = self.executable("streamlit");
        if script.is_file() {
            CommandLine::new(script)
        } else {
            CommandLine::new(self.python()).args(["-m", "streamlit"])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn nonexistent_dir_does_not_exist() {
        let temp = TempDir::new().unwrap();
        let layout = VenvLayout::new(temp.path().join("venv"));
        assert!(!layout.exists());
        assert!(!layout.looks_valid());
    }

    #[test]
    fn dir_without_pyvenv_cfg_is_not_valid() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("venv");
        fs::create_dir_all(&root).unwrap();

        let layout = VenvLayout::new(&root);
        assert!(layout.exists());
        assert!(!layout.looks_valid());
    }

    #[test]
    fn dir_with_pyvenv_cfg_is_valid() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("venv");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("pyvenv.cfg"), "home = /usr/bin\n").unwrap();

        let layout = VenvLayout::new(&root);
        assert!(layout.looks_valid());
    }

    #[cfg(unix)]
    #[test]
    fn unix_executables_live_in_bin() {
        let layout = VenvLayout::new("/app/venv");
        assert_eq!(layout.pip(), PathBuf::from("/app/venv/bin/pip"));
        assert_eq!(layout.python(), PathBuf::from("/app/venv/bin/python"));
    }

    #[test]
    fn streamlit_falls_back_to_module_invocation() {
        let temp = TempDir::new().unwrap();
        let layout = VenvLayout::new(temp.path().join("venv"));

        let cmd = layout.streamlit_command();
        assert_eq!(cmd.program, layout.python());
        assert_eq!(cmd.args, vec!["-m".to_string(), "streamlit".to_string()]);
    }

    #[cfg(unix)]
    #[test]
    fn streamlit_prefers_entry_point_script() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let layout = VenvLayout::new(temp.path().join("venv"));
        let script = layout.executable("streamlit");
        fs::create_dir_all(script.parent().unwrap()).unwrap();
        fs::write(&script, "#!/bin/sh\n").unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        let cmd = layout.streamlit_command();
        assert_eq!(cmd.program, script);
        assert!(cmd.args.is_empty());
    }
}

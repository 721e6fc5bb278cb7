//! Virtual-environment creation.

use std::path::Path;

use crate::error::{Result, StagehandError};
use crate::shell::{execute_quiet, CommandLine};
use crate::ui::UserInterface;

use super::layout::VenvLayout;

/// Outcome of ensuring the environment exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// The environment directory was created by this call.
    Created,
    /// The directory already existed; creation was skipped.
    AlreadyExists,
}

/// Ensure the virtual environment exists, creating it if absent.
///
/// An existing directory is never recreated; installation proceeds into it
/// directly. A directory that exists but doesn't look like a venv gets a
/// warning, since a stray `venv/` from another tool usually means the
/// install is about to land somewhere unexpected.
pub fn ensure_venv(
    layout: &VenvLayout,
    python: &Path,
    project_root: &Path,
    ui: &mut dyn UserInterface,
) -> Result<BootstrapOutcome> {
    if layout.exists() {
        if !layout.looks_valid() {
            ui.warning(&format!(
                "{} exists but has no pyvenv.cfg; reusing it anyway",
                layout.root().display()
            ));
        }
        tracing::debug!("venv {} already exists", layout.root().display());
        return Ok(BootstrapOutcome::AlreadyExists);
    }

    let line = CommandLine::new(python)
        .args(["-m", "venv"])
        .arg(layout.root().to_string_lossy());

    tracing::debug!("creating venv: {}", line);
    let result = execute_quiet(&line, Some(project_root))?;

    if !result.success {
        // Surface the interpreter's own diagnostics.
        if !result.stderr.trim().is_empty() {
            ui.error(result.stderr.trim());
        }
        return Err(StagehandError::CommandFailed {
            command: line.render(),
            code: result.exit_code,
        });
    }

    Ok(BootstrapOutcome::Created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    /// A stub "python" whose `-m venv <dir>` creates the directory.
    #[cfg(unix)]
    fn stub_python(dir: &Path) -> std::path::PathBuf {
        use std::os::unix::fs::PermissionsExt;
        let path = dir.join("python3");
        fs::write(
            &path,
            "#!/bin/sh\nif [ \"$1\" = \"-m\" ] && [ \"$2\" = \"venv\" ]; then\n  mkdir -p \"$3\"\n  echo 'home = /usr' > \"$3/pyvenv.cfg\"\nfi\n",
        )
        .unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[cfg(unix)]
    #[test]
    fn creates_venv_when_absent() {
        let temp = TempDir::new().unwrap();
        let python = stub_python(temp.path());
        let layout = VenvLayout::new(temp.path().join("venv"));
        let mut ui = MockUI::new();

        let outcome = ensure_venv(&layout, &python, temp.path(), &mut ui).unwrap();

        assert_eq!(outcome, BootstrapOutcome::Created);
        assert!(layout.exists());
        assert!(layout.looks_valid());
    }

    #[cfg(unix)]
    #[test]
    fn skips_creation_when_present() {
        let temp = TempDir::new().unwrap();
        let python = stub_python(temp.path());
        let root = temp.path().join("venv");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("pyvenv.cfg"), "home = /usr\n").unwrap();
        let layout = VenvLayout::new(&root);
        let mut ui = MockUI::new();

        let outcome = ensure_venv(&layout, &python, temp.path(), &mut ui).unwrap();

        assert_eq!(outcome, BootstrapOutcome::AlreadyExists);
        assert!(ui.events.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn warns_on_directory_that_is_not_a_venv() {
        let temp = TempDir::new().unwrap();
        let python = stub_python(temp.path());
        let root = temp.path().join("venv");
        fs::create_dir_all(&root).unwrap();
        let layout = VenvLayout::new(&root);
        let mut ui = MockUI::new();

        let outcome = ensure_venv(&layout, &python, temp.path(), &mut ui).unwrap();

        assert_eq!(outcome, BootstrapOutcome::AlreadyExists);
        assert!(ui.transcript().contains("pyvenv.cfg"));
    }

    #[cfg(unix)]
    #[test]
    fn failing_interpreter_propagates_as_command_failure() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let python = temp.path().join("python3");
        fs::write(&python, "#!/bin/sh\necho 'No module named venv' >&2\nexit 1\n").unwrap();
        fs::set_permissions(&python, fs::Permissions::from_mode(0o755)).unwrap();

        let layout = VenvLayout::new(temp.path().join("venv"));
        let mut ui = MockUI::new();

        let err = ensure_venv(&layout, &python, temp.path(), &mut ui).unwrap_err();
        assert!(matches!(err, StagehandError::CommandFailed { .. }));
        assert!(ui.transcript().contains("No module named venv"));
    }
}

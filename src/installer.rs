//! Dependency installation into the virtual environment.

use std::path::Path;

use crate::error::{Result, StagehandError};
use crate::manifest::Manifest;
use crate::shell::{execute_streaming, CommandLine, CommandOptions, OutputCallback, OutputLine};
use crate::ui::{live_output_callback, UserInterface};
use crate::venv::VenvLayout;

/// Install manifest dependencies using the environment's pip.
///
/// Output handling follows the output mode: verbose passes pip's output
/// through line by line, normal shows a live tail under a spinner, quiet
/// and silent keep pip silent until something fails. On failure the last
/// lines of output are replayed so the diagnostics aren't lost, and the
/// pip exit code is propagated.
pub fn install_dependencies(
    layout: &VenvLayout,
    manifest: &Manifest,
    project_root: &Path,
    ui: &mut dyn UserInterface,
) -> Result<()> {
    let line = CommandLine::new(layout.pip())
        .args(["install", "-r"])
        .arg(manifest.path.to_string_lossy());

    tracing::debug!("installing dependencies: {}", line);

    let label = format!(
        "Installing {} packages from {}",
        manifest.package_count(),
        manifest.path.file_name().unwrap_or_default().to_string_lossy()
    );

    let mut spinner = ui.start_spinner(&label);

    let callback: OutputCallback = if ui.output_mode().shows_command_output() {
        Box::new(|out: OutputLine| println!("{}", out.text()))
    } else if let Some(bar) = spinner.progress_bar() {
        live_output_callback(bar, label.clone(), 3)
    } else {
        Box::new(|_| {})
    };

    let options = CommandOptions {
        cwd: Some(project_root.to_path_buf()),
        ..Default::default()
    };

    let result = execute_streaming(&line, &options, callback)?;

    if result.success {
        spinner.finish_success(&format!(
            "Dependencies installed ({} packages)",
            manifest.package_count()
        ));
        Ok(())
    } else {
        spinner.finish_error("Dependency installation failed");
        for output_line in tail_lines(&result.stderr, 10) {
            ui.message(output_line);
        }
        Err(StagehandError::CommandFailed {
            command: line.render(),
            code: result.exit_code,
        })
    }
}

/// Last `n` non-empty lines of a block of output.
fn tail_lines(output: &str, n: usize) -> Vec<&str> {
    let lines: Vec<&str> = output.lines().filter(|l| !l.trim().is_empty()).collect();
    let start = lines.len().saturating_sub(n);
    lines[start..].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    #[cfg(unix)]
    fn stub_pip(layout: &VenvLayout, script: &str) {
        use std::os::unix::fs::PermissionsExt;
        let pip = layout.pip();
        fs::create_dir_all(pip.parent().unwrap()).unwrap();
        fs::write(&pip, script).unwrap();
        fs::set_permissions(&pip, fs::Permissions::from_mode(0o755)).unwrap();
    }

    fn write_manifest(dir: &Path, contents: &str) -> Manifest {
        let path = dir.join("requirements.txt");
        fs::write(&path, contents).unwrap();
        Manifest::load(&path).unwrap()
    }

    #[cfg(unix)]
    #[test]
    fn successful_install_reports_success() {
        let temp = TempDir::new().unwrap();
        let layout = VenvLayout::new(temp.path().join("venv"));
        stub_pip(&layout, "#!/bin/sh\necho 'Successfully installed streamlit'\nexit 0\n");
        let manifest = write_manifest(temp.path(), "streamlit\npandas\n");
        let mut ui = MockUI::new();

        install_dependencies(&layout, &manifest, temp.path(), &mut ui).unwrap();

        assert!(ui.transcript().contains("Installing 2 packages"));
    }

    #[cfg(unix)]
    #[test]
    fn failed_install_propagates_exit_code() {
        let temp = TempDir::new().unwrap();
        let layout = VenvLayout::new(temp.path().join("venv"));
        stub_pip(
            &layout,
            "#!/bin/sh\necho 'ERROR: No matching distribution' >&2\nexit 2\n",
        );
        let manifest = write_manifest(temp.path(), "nonexistent-package\n");
        let mut ui = MockUI::new();

        let err = install_dependencies(&layout, &manifest, temp.path(), &mut ui).unwrap_err();

        match err {
            StagehandError::CommandFailed { code, .. } => assert_eq!(code, Some(2)),
            other => panic!("unexpected error: {}", other),
        }
        assert!(ui.transcript().contains("No matching distribution"));
    }

    #[test]
    fn tail_lines_keeps_last_n() {
        let output = "one\ntwo\n\nthree\nfour\n";
        assert_eq!(tail_lines(output, 2), vec!["three", "four"]);
        assert_eq!(tail_lines(output, 10).len(), 4);
    }
}

//! Non-interactive UI for CI/headless environments.

use crate::error::Result;

use super::theme::StagehandTheme;
use super::{OutputMode, SpinnerHandle, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Spinners are replaced with plain line output since animated progress
/// produces noisy output in log-based environments. Confirmation prompts
/// resolve to their default answer.
pub struct NonInteractiveUI {
    mode: OutputMode,
    theme: StagehandTheme,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            theme: StagehandTheme::plain(),
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_success(msg));
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_warning(msg));
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        tracing::debug!(
            "non-interactive confirm '{}' resolved to default {}",
            question,
            default
        );
        Ok(default)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_status() {
            println!("{}", message);
        }
        Box::new(LineSpinner {
            mode: self.mode,
            theme: StagehandTheme::plain(),
        })
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!();
            println!("{}", self.theme.format_header(title));
            println!();
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner stand-in that prints final status lines only.
struct LineSpinner {
    mode: OutputMode,
    theme: StagehandTheme,
}

impl SpinnerHandle for LineSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_success(msg));
        }
    }

    fn finish_error(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_error(msg));
        }
    }

    fn finish_skipped(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_skipped(msg));
        }
    }

    fn progress_bar(&self) -> Option<indicatif::ProgressBar> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_resolves_to_default() {
        let mut ui = NonInteractiveUI::new(OutputMode::Silent);
        assert!(ui.confirm("proceed?", true).unwrap());
        assert!(!ui.confirm("proceed?", false).unwrap());
    }

    #[test]
    fn not_interactive() {
        let ui = NonInteractiveUI::new(OutputMode::Normal);
        assert!(!ui.is_interactive());
    }

    #[test]
    fn line_spinner_has_no_progress_bar() {
        let mut ui = NonInteractiveUI::new(OutputMode::Silent);
        let spinner = ui.start_spinner("working");
        assert!(spinner.progress_bar().is_none());
    }
}

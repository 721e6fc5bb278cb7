//! Visual theme and styling.

use console::Style;

/// Stagehand's visual theme.
#[derive(Debug, Clone)]
pub struct StagehandTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for headers (cyan bold).
    pub header: Style,
}

impl Default for StagehandTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl StagehandTheme {
    /// Create the default stagehand theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().cyan(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a skipped message (icon + text in dim).
    pub fn format_skipped(&self, msg: &str) -> String {
        format!("{}", self.dim.apply_to(format!("○ {}", msg)))
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!(
            "{} {}",
            self.header.apply_to("📊"),
            self.highlight.apply_to(title)
        )
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().features().colors_supported()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_success_includes_icon_and_message() {
        let theme = StagehandTheme::plain();
        let out = theme.format_success("done");
        assert!(out.contains('✓'));
        assert!(out.contains("done"));
    }

    #[test]
    fn format_error_includes_icon_and_message() {
        let theme = StagehandTheme::plain();
        let out = theme.format_error("boom");
        assert!(out.contains('✗'));
        assert!(out.contains("boom"));
    }

    #[test]
    fn format_header_includes_title() {
        let theme = StagehandTheme::plain();
        assert!(theme.format_header("Freedom Calculator").contains("Freedom Calculator"));
    }

    #[test]
    fn plain_theme_has_no_ansi() {
        let theme = StagehandTheme::plain();
        let out = theme.format_warning("careful");
        assert!(!out.contains('\x1b'));
    }
}

//! Light/dark flag and its toggle handler.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Label for the toggle control: names the mode the next click activates.
    pub fn toggle_label(self) -> &'static str {
        match self {
            ThemeMode::Dark => "☀️ Light Mode",
            ThemeMode::Light => "🌙 Dark Mode",
        }
    }
}

/// Click handler for the theme toggle. Flips the flag and returns the new label.
pub fn on_theme_toggle(mode: &mut ThemeMode) -> &'static str {
    *mode = mode.toggled();
    tracing::debug!(mode = ?*mode, "theme toggled");
    mode.toggle_label()
}

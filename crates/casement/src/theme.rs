//! Theme handling.
//!
//! The active [`ThemeMode`] is shared, process-wide presentation state: every
//! widget mount publishes the mode its configuration asked for, and the last
//! caller wins. The mode also surfaces as a marker class on the document root
//! so stylesheets can scope their dark variants.

use parking_lot::RwLock;

/// Theme mode.
///
/// Dark is the default: a title bar mounted without an explicit
/// `dark_mode: false` opts into the dark theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// The marker class this mode contributes to the document root.
    ///
    /// Light is the unmarked baseline; only dark mode carries a marker.
    pub fn marker_class(self) -> Option<&'static str> {
        match self {
            Self::Dark => Some(DARK_MARKER_CLASS),
            Self::Light => None,
        }
    }
}

/// Class applied to the document root while the dark theme is active.
pub const DARK_MARKER_CLASS: &str = "casement-dark";

static CURRENT_THEME: RwLock<ThemeMode> = RwLock::new(ThemeMode::Dark);

/// The process-wide theme mode most recently published by a widget mount.
pub fn current_theme() -> ThemeMode {
    *CURRENT_THEME.read()
}

/// Publish the process-wide theme mode. Last caller wins.
pub fn set_current_theme(mode: ThemeMode) {
    let mut current = CURRENT_THEME.write();
    if *current != mode {
        tracing::debug!(target: "casement::theme", ?mode, "theme changed");
    }
    *current = mode;
}

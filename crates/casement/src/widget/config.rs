//! Title-bar configuration.

/// Caller-supplied construction options for a [`TitleBar`](crate::TitleBar).
///
/// Every field is optional and the configuration is immutable after
/// construction. Nothing is validated: color fields accept any string and a
/// value that is not a color simply produces a style that does not render.
///
/// # Example
///
/// ```
/// use casement::TitleBarConfig;
///
/// let config = TitleBarConfig::new()
///     .with_title("My App")
///     .with_icon("assets/app.png")
///     .with_background_color("#202124")
///     .with_draggable(true);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TitleBarConfig {
    /// Icon image reference (URL or path), applied as the icon background.
    pub icon: Option<String>,
    /// Visible title text.
    pub title: Option<String>,
    /// Color for the title text and the icon glyph shapes.
    pub color: Option<String>,
    /// Bar background color.
    pub background_color: Option<String>,
    /// Theme selection. `None` behaves like `Some(true)`: the dark-theme
    /// marker is applied unless this is explicitly `Some(false)`.
    pub dark_mode: Option<bool>,
    /// Mark the bar root as a draggable window region.
    pub draggable: bool,
    /// Construct the widget already in the maximized presentation state.
    pub fullscreen: bool,
}

impl TitleBarConfig {
    /// Create a configuration with every field at its default.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Builder Methods
    // =========================================================================

    /// Set the icon image reference.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the title text.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the title/glyph color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the bar background color.
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Explicitly enable or disable the dark theme.
    pub fn with_dark_mode(mut self, dark: bool) -> Self {
        self.dark_mode = Some(dark);
        self
    }

    /// Mark the bar as a draggable window region.
    pub fn with_draggable(mut self, draggable: bool) -> Self {
        self.draggable = draggable;
        self
    }

    /// Start in the maximized presentation state.
    pub fn with_fullscreen(mut self, fullscreen: bool) -> Self {
        self.fullscreen = fullscreen;
        self
    }

    /// Whether mounting should apply the dark-theme marker.
    pub(crate) fn wants_dark_theme(&self) -> bool {
        self.dark_mode != Some(false)
    }
}

//! The title-bar widget.
//!
//! # Overview
//!
//! [`TitleBar`] renders window-control affordances (minimize,
//! maximize/restore, close) plus a title and icon area into a [`Document`],
//! and emits [`TitleBarEvent`]s so a host window-management layer can act on
//! user intent. The widget never touches native window state itself; it keeps
//! only a local best-guess `maximized` flag and assumes the host performs the
//! real minimize/fullscreen/close in response to its events.
//!
//! # State machine
//!
//! Two states, `Normal` and `Maximized`, toggled by
//! [`toggle_maximize`](TitleBar::toggle_maximize). [`maximize`](TitleBar::maximize)
//! and [`restore`](TitleBar::restore) are raw presentation setters: they move
//! the marker class and emit, but never flip the toggle flag. Driving the
//! widget through the raw setters can therefore desynchronize flag and marker;
//! hosts that want the alternating contract must use the toggle.

use casement_core::Signal;

use crate::assets::{TITLE_BAR_STYLESHEET, TITLE_BAR_STYLESHEET_NAME, TITLE_BAR_TEMPLATE};
use crate::error::{Error, Result};
use crate::theme::{self, ThemeMode, DARK_MARKER_CLASS};
use crate::view::{render_template, Document, NodeKey, TitleBarView};
use crate::widget::TitleBarConfig;

/// Class carried by the widget root while in the maximized presentation state.
pub const MAXIMIZED_CLASS: &str = "casement-maximized";

/// Class marking the widget root as a draggable window region.
pub const DRAGGABLE_CLASS: &str = "casement-draggable";

/// Semantic events a title bar emits.
///
/// Events carry no payload; they signal user intent, and the host is the sole
/// authority over real window state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleBarEvent {
    /// The user asked to close the window.
    Close,
    /// The user asked to minimize the window.
    Minimize,
    /// The user asked to maximize the window.
    Maximize,
    /// The user asked to restore the window from its maximized state.
    Restore,
}

/// A draggable, themeable title bar for frameless windows.
///
/// # Example
///
/// ```
/// use casement::{Document, TitleBar, TitleBarConfig, TitleBarEvent};
///
/// let mut doc = Document::new();
/// let mut bar = TitleBar::new(
///     &mut doc,
///     TitleBarConfig::new().with_title("My App"),
/// ).unwrap();
///
/// bar.events.connect(|event| {
///     if let TitleBarEvent::Close = event {
///         // close the native window
///     }
/// });
///
/// bar.append_to(&mut doc, None).unwrap();
/// ```
pub struct TitleBar {
    /// Construction-time configuration, immutable afterwards.
    config: TitleBarConfig,

    /// Typed handles into the rendered fragment. Exclusively owned: no other
    /// component mutates these nodes.
    view: TitleBarView,

    /// Local best-guess maximized flag, flipped only by the toggle.
    maximized: bool,

    /// The container recorded at mount time; `None` while unmounted.
    mounted_parent: Option<NodeKey>,

    /// Signal emitted for every user intent.
    ///
    /// Subscribe with [`Signal::connect`]; unsubscribe with
    /// [`Signal::disconnect`] or a scoped guard.
    pub events: Signal<TitleBarEvent>,
}

impl TitleBar {
    /// Build a title bar from the given configuration.
    ///
    /// Renders the built-in template into `doc` (detached; call
    /// [`append_to`](Self::append_to) to mount) and applies the
    /// presentational configuration. Fails with
    /// [`Error::MalformedTemplate`] or [`Error::TemplateParse`] if the
    /// template does not provide the required regions.
    pub fn new(doc: &mut Document, config: TitleBarConfig) -> Result<Self> {
        Self::with_template(doc, config, TITLE_BAR_TEMPLATE)
    }

    /// Build a title bar from custom markup instead of the built-in template.
    ///
    /// The markup must satisfy the same structural contract as the built-in
    /// template; see [`render_template`].
    pub fn with_template(
        doc: &mut Document,
        config: TitleBarConfig,
        markup: &str,
    ) -> Result<Self> {
        let view = render_template(doc, markup)?;

        if config.draggable {
            doc.add_class(view.root, DRAGGABLE_CLASS);
        }
        if let Some(icon) = &config.icon {
            doc.set_style(view.icon, "background-image", format!("url({icon})"));
        }
        if let Some(title) = &config.title {
            doc.set_text(view.title, title.clone());
        }

        let maximized = config.fullscreen;
        if maximized {
            doc.add_class(view.root, MAXIMIZED_CLASS);
        }

        tracing::debug!(
            target: "casement::widget",
            title = config.title.as_deref().unwrap_or(""),
            maximized,
            "title bar constructed"
        );

        Ok(Self {
            config,
            view,
            maximized,
            mounted_parent: None,
            events: Signal::new(),
        })
    }

    // =========================================================================
    // Mount / unmount
    // =========================================================================

    /// Mount the widget into `container` (the document root when `None`).
    ///
    /// Applies the configured theme to the document root (last caller wins
    /// across widgets), the configured colors, and injects the widget
    /// stylesheet under its logical name (idempotent across instances), then
    /// appends the widget root to the container.
    ///
    /// Fails with [`Error::InvalidLifecycleState`] when already mounted.
    pub fn append_to(&mut self, doc: &mut Document, container: Option<NodeKey>) -> Result<&mut Self> {
        if self.mounted_parent.is_some() {
            return Err(Error::InvalidLifecycleState("widget is already mounted"));
        }

        let mode = if self.config.wants_dark_theme() {
            doc.add_class(doc.root(), DARK_MARKER_CLASS);
            ThemeMode::Dark
        } else {
            doc.remove_class(doc.root(), DARK_MARKER_CLASS);
            ThemeMode::Light
        };
        theme::set_current_theme(mode);

        if let Some(color) = self.config.color.clone() {
            doc.set_style(self.view.title, "color", color.clone());
            doc.set_style(self.view.icon_rect, "fill", color.clone());
            doc.set_style(self.view.icon_path, "fill", color.clone());
            doc.set_style(self.view.icon_polygon, "fill", color);
        }
        if let Some(background) = self.config.background_color.clone() {
            doc.set_style(self.view.root, "background-color", background);
        }

        doc.inject_stylesheet(TITLE_BAR_STYLESHEET_NAME, TITLE_BAR_STYLESHEET);

        let container = container.unwrap_or_else(|| doc.root());
        doc.append_child(container, self.view.root);
        self.mounted_parent = Some(container);

        tracing::debug!(target: "casement::widget", ?mode, "title bar mounted");
        Ok(self)
    }

    /// Unmount the widget from the container recorded at mount time.
    ///
    /// Fails with [`Error::InvalidLifecycleState`] when not mounted.
    pub fn destroy(&mut self, doc: &mut Document) -> Result<&mut Self> {
        if self.mounted_parent.take().is_none() {
            return Err(Error::InvalidLifecycleState("widget is not mounted"));
        }
        doc.detach(self.view.root);
        tracing::debug!(target: "casement::widget", "title bar unmounted");
        Ok(self)
    }

    /// Whether the widget is currently mounted.
    pub fn is_mounted(&self) -> bool {
        self.mounted_parent.is_some()
    }

    // =========================================================================
    // State machine
    // =========================================================================

    /// Signal a minimize intent.
    ///
    /// The widget tracks no minimized state; this is purely a notification.
    pub fn minimize(&self) {
        tracing::trace!(target: "casement::widget", "minimize requested");
        self.events.emit(TitleBarEvent::Minimize);
    }

    /// Apply the maximized presentation marker and emit
    /// [`TitleBarEvent::Maximize`].
    ///
    /// Raw setter: the marker is applied unconditionally and the toggle flag
    /// is left untouched, so calling this directly (rather than through
    /// [`toggle_maximize`](Self::toggle_maximize)) can desynchronize the flag
    /// from the marker.
    pub fn maximize(&mut self, doc: &mut Document) {
        doc.add_class(self.view.root, MAXIMIZED_CLASS);
        tracing::trace!(target: "casement::widget", "maximize requested");
        self.events.emit(TitleBarEvent::Maximize);
    }

    /// Remove the maximized presentation marker and emit
    /// [`TitleBarEvent::Restore`].
    ///
    /// Raw setter with the same caveat as [`maximize`](Self::maximize).
    pub fn restore(&mut self, doc: &mut Document) {
        doc.remove_class(self.view.root, MAXIMIZED_CLASS);
        tracing::trace!(target: "casement::widget", "restore requested");
        self.events.emit(TitleBarEvent::Restore);
    }

    /// Toggle between the normal and maximized states.
    ///
    /// Routes to [`restore`](Self::restore) when the flag is set and
    /// [`maximize`](Self::maximize) otherwise, then flips the flag; exactly
    /// one of `Maximize`/`Restore` is emitted per call, strictly alternating
    /// under toggle-only usage.
    pub fn toggle_maximize(&mut self, doc: &mut Document) {
        if self.maximized {
            self.restore(doc);
        } else {
            self.maximize(doc);
        }
        self.maximized = !self.maximized;
    }

    /// Signal a close intent. The host is expected to close the real window.
    pub fn close(&self) {
        tracing::trace!(target: "casement::widget", "close requested");
        self.events.emit(TitleBarEvent::Close);
    }

    /// The local best-guess maximized flag.
    pub fn is_maximized(&self) -> bool {
        self.maximized
    }

    // =========================================================================
    // Presentational setters
    // =========================================================================

    /// Replace the icon image reference. Accepts any string; emits nothing.
    pub fn set_icon(&mut self, doc: &mut Document, icon: impl Into<String>) {
        let icon = icon.into();
        doc.set_style(self.view.icon, "background-image", format!("url({icon})"));
    }

    /// Replace the title text. Accepts any string; emits nothing.
    pub fn set_title(&mut self, doc: &mut Document, title: impl Into<String>) {
        doc.set_text(self.view.title, title);
    }

    // =========================================================================
    // Input routing
    // =========================================================================

    /// Route a click on `target` to the matching control.
    ///
    /// Clicking the minimize control minimizes, the resize control toggles,
    /// the close control closes. Returns `true` if the event was handled.
    pub fn handle_click(&mut self, doc: &mut Document, target: NodeKey) -> bool {
        if target == self.view.minimize {
            self.minimize();
            true
        } else if target == self.view.resize {
            self.toggle_maximize(doc);
            true
        } else if target == self.view.close {
            self.close();
            true
        } else {
            false
        }
    }

    /// Route a double-click on `target`.
    ///
    /// A double-click anywhere within the widget root toggles the
    /// maximized state. Returns `true` if the event was handled.
    pub fn handle_double_click(&mut self, doc: &mut Document, target: NodeKey) -> bool {
        if doc.contains(self.view.root, target) {
            self.toggle_maximize(doc);
            true
        } else {
            false
        }
    }

    // =========================================================================
    // View access
    // =========================================================================

    /// The typed handles into the rendered fragment.
    pub fn view(&self) -> &TitleBarView {
        &self.view
    }

    /// The construction-time configuration.
    pub fn config(&self) -> &TitleBarConfig {
        &self.config
    }
}

// Ensure TitleBar is Send + Sync
static_assertions::assert_impl_all!(TitleBar: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn recorded_events(bar: &TitleBar) -> Arc<Mutex<Vec<TitleBarEvent>>> {
        let recorded = Arc::new(Mutex::new(Vec::new()));
        let recorded_clone = recorded.clone();
        bar.events.connect(move |&event| {
            recorded_clone.lock().push(event);
        });
        recorded
    }

    fn new_bar(doc: &mut Document, config: TitleBarConfig) -> TitleBar {
        TitleBar::new(doc, config).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let mut doc = Document::new();
        let bar = new_bar(&mut doc, TitleBarConfig::new());
        assert!(!bar.is_maximized());
        assert!(!bar.is_mounted());
        assert!(!doc.has_class(bar.view().root, MAXIMIZED_CLASS));
    }

    #[test]
    fn test_toggle_alternates_strictly() {
        let mut doc = Document::new();
        let mut bar = new_bar(&mut doc, TitleBarConfig::new());
        let events = recorded_events(&bar);

        for n in 1..=5 {
            bar.toggle_maximize(&mut doc);
            assert_eq!(bar.is_maximized(), n % 2 == 1);
            assert_eq!(
                doc.has_class(bar.view().root, MAXIMIZED_CLASS),
                n % 2 == 1
            );
        }

        assert_eq!(
            *events.lock(),
            vec![
                TitleBarEvent::Maximize,
                TitleBarEvent::Restore,
                TitleBarEvent::Maximize,
                TitleBarEvent::Restore,
                TitleBarEvent::Maximize,
            ]
        );
    }

    #[test]
    fn test_minimize_and_close_do_not_mutate_state() {
        let mut doc = Document::new();
        let mut bar = new_bar(&mut doc, TitleBarConfig::new());
        let events = recorded_events(&bar);

        bar.minimize();
        bar.close();
        bar.toggle_maximize(&mut doc);
        bar.minimize();
        bar.close();

        assert!(bar.is_maximized());
        assert_eq!(
            *events.lock(),
            vec![
                TitleBarEvent::Minimize,
                TitleBarEvent::Close,
                TitleBarEvent::Maximize,
                TitleBarEvent::Minimize,
                TitleBarEvent::Close,
            ]
        );
    }

    #[test]
    fn test_raw_setters_do_not_flip_flag() {
        let mut doc = Document::new();
        let mut bar = new_bar(&mut doc, TitleBarConfig::new());

        bar.maximize(&mut doc);
        assert!(doc.has_class(bar.view().root, MAXIMIZED_CLASS));
        // The flag is only flipped by the toggle - documented desync
        assert!(!bar.is_maximized());

        bar.restore(&mut doc);
        assert!(!doc.has_class(bar.view().root, MAXIMIZED_CLASS));
        assert!(!bar.is_maximized());
    }

    #[test]
    fn test_fullscreen_constructs_maximized() {
        let mut doc = Document::new();
        let bar = new_bar(&mut doc, TitleBarConfig::new().with_fullscreen(true));
        assert!(bar.is_maximized());
        assert!(doc.has_class(bar.view().root, MAXIMIZED_CLASS));
    }

    #[test]
    fn test_title_and_icon_configuration() {
        let mut doc = Document::new();
        let mut bar = new_bar(
            &mut doc,
            TitleBarConfig::new()
                .with_title("My App")
                .with_icon("icon.png"),
        );

        assert_eq!(doc.text(bar.view().title), "My App");
        assert_eq!(
            doc.style(bar.view().icon, "background-image"),
            Some("url(icon.png)")
        );

        bar.set_title(&mut doc, "X");
        bar.set_icon(&mut doc, "other.png");
        assert_eq!(doc.text(bar.view().title), "X");
        let image = doc.style(bar.view().icon, "background-image").unwrap();
        assert_eq!(image, "url(other.png)");
        assert!(!image.contains("icon.png"));
    }

    #[test]
    fn test_draggable_marker() {
        let mut doc = Document::new();
        let bar = new_bar(&mut doc, TitleBarConfig::new().with_draggable(true));
        assert!(doc.has_class(bar.view().root, DRAGGABLE_CLASS));

        let plain = new_bar(&mut doc, TitleBarConfig::new());
        assert!(!doc.has_class(plain.view().root, DRAGGABLE_CLASS));
    }

    #[test]
    fn test_mount_applies_colors_and_appends() {
        let mut doc = Document::new();
        let mut bar = new_bar(
            &mut doc,
            TitleBarConfig::new()
                .with_color("tomato")
                .with_background_color("#123456"),
        );

        bar.append_to(&mut doc, None).unwrap();
        let view = *bar.view();

        assert!(bar.is_mounted());
        assert!(doc.children(doc.root()).contains(&view.root));
        assert_eq!(doc.style(view.title, "color"), Some("tomato"));
        assert_eq!(doc.style(view.icon_rect, "fill"), Some("tomato"));
        assert_eq!(doc.style(view.icon_path, "fill"), Some("tomato"));
        assert_eq!(doc.style(view.icon_polygon, "fill"), Some("tomato"));
        assert_eq!(doc.style(view.root, "background-color"), Some("#123456"));
        assert!(doc.has_stylesheet(crate::assets::TITLE_BAR_STYLESHEET_NAME));
    }

    #[test]
    fn test_mount_into_custom_container() {
        let mut doc = Document::new();
        let container = doc.create_element("div");
        let mut bar = new_bar(&mut doc, TitleBarConfig::new());

        bar.append_to(&mut doc, Some(container)).unwrap();
        assert_eq!(doc.children(container), &[bar.view().root]);

        bar.destroy(&mut doc).unwrap();
        assert!(doc.children(container).is_empty());
    }

    #[test]
    fn test_lifecycle_errors() {
        let mut doc = Document::new();
        let mut bar = new_bar(&mut doc, TitleBarConfig::new());

        // Destroy before mount
        assert!(matches!(
            bar.destroy(&mut doc),
            Err(Error::InvalidLifecycleState(_))
        ));

        bar.append_to(&mut doc, None).unwrap();

        // Double mount
        assert!(matches!(
            bar.append_to(&mut doc, None),
            Err(Error::InvalidLifecycleState(_))
        ));

        bar.destroy(&mut doc).unwrap();
        assert!(!bar.is_mounted());

        // Remount after destroy is accepted
        bar.append_to(&mut doc, None).unwrap();
        assert!(bar.is_mounted());
    }

    #[test]
    fn test_click_routing() {
        let mut doc = Document::new();
        let mut bar = new_bar(&mut doc, TitleBarConfig::new());
        let events = recorded_events(&bar);
        let view = *bar.view();

        assert!(bar.handle_click(&mut doc, view.minimize));
        assert!(bar.handle_click(&mut doc, view.resize));
        assert!(bar.handle_click(&mut doc, view.close));
        // A click elsewhere is not ours
        assert!(!bar.handle_click(&mut doc, view.title));

        assert_eq!(
            *events.lock(),
            vec![
                TitleBarEvent::Minimize,
                TitleBarEvent::Maximize,
                TitleBarEvent::Close,
            ]
        );
        assert!(bar.is_maximized());
    }

    #[test]
    fn test_double_click_routing() {
        let mut doc = Document::new();
        let mut bar = new_bar(&mut doc, TitleBarConfig::new());
        let view = *bar.view();
        let outside = doc.create_element("div");

        // Anywhere within the root toggles, including nested nodes
        assert!(bar.handle_double_click(&mut doc, view.title));
        assert!(bar.is_maximized());
        assert!(bar.handle_double_click(&mut doc, view.root));
        assert!(!bar.is_maximized());

        assert!(!bar.handle_double_click(&mut doc, outside));
        assert!(!bar.is_maximized());
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let mut doc = Document::new();
        let bar = new_bar(&mut doc, TitleBarConfig::new());

        let recorded = Arc::new(Mutex::new(Vec::new()));
        let recorded_clone = recorded.clone();
        let id = bar.events.connect(move |&event| {
            recorded_clone.lock().push(event);
        });

        bar.close();
        assert!(bar.events.disconnect(id));
        bar.close();

        assert_eq!(*recorded.lock(), vec![TitleBarEvent::Close]);
    }
}

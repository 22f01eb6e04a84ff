//! Casement: a draggable, themeable title-bar widget for frameless windows.
//!
//! # Overview
//!
//! When a window has no native decorations (frameless), the application is
//! responsible for providing the visual chrome. Casement supplies the title
//! bar: a widget with minimize, maximize/restore and close controls plus a
//! title and icon area, rendered into a retained [`Document`] and wired to a
//! typed event signal. The widget never touches native window state — it
//! emits [`TitleBarEvent`]s and the host performs the real window action.
//!
//! # Example
//!
//! ```
//! use casement::{Document, TitleBar, TitleBarConfig, TitleBarEvent};
//!
//! let mut doc = Document::new();
//! let mut bar = TitleBar::new(
//!     &mut doc,
//!     TitleBarConfig::new()
//!         .with_title("My App")
//!         .with_draggable(true),
//! ).unwrap();
//!
//! bar.events.connect(|event| match event {
//!     TitleBarEvent::Close => { /* close the native window */ }
//!     TitleBarEvent::Minimize => { /* minimize it */ }
//!     TitleBarEvent::Maximize | TitleBarEvent::Restore => { /* toggle fullscreen */ }
//! });
//!
//! bar.append_to(&mut doc, None).unwrap();
//! ```
//!
//! # Crate layout
//!
//! - [`view`] - the retained element tree and the template renderer
//! - [`widget`] - the title bar and its configuration
//! - [`theme`] - the shared theme mode and its document marker
//! - [`assets`] - the embedded template and stylesheet

pub mod assets;
mod error;
pub mod theme;
pub mod view;
pub mod widget;

pub use error::{Error, Result};
pub use theme::{current_theme, set_current_theme, ThemeMode};
pub use view::{render_template, Document, Node, NodeKey, TitleBarView};
pub use widget::{TitleBar, TitleBarConfig, TitleBarEvent};

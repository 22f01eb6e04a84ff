//! Widgets.

mod config;
mod title_bar;

pub use config::TitleBarConfig;
pub use title_bar::{TitleBar, TitleBarEvent, DRAGGABLE_CLASS, MAXIMIZED_CLASS};

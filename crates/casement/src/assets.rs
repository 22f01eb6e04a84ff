//! Static assets compiled into the library.
//!
//! The template and stylesheet are embedded at compile time, so they are read
//! exactly once per process and shared by every widget instance; no runtime
//! I/O is involved.

/// The default title-bar markup template.
pub const TITLE_BAR_TEMPLATE: &str = include_str!("../assets/title_bar.xml");

/// The default title-bar stylesheet text.
pub const TITLE_BAR_STYLESHEET: &str = include_str!("../assets/title_bar.css");

/// Logical name the title-bar stylesheet is injected under.
///
/// Injection is idempotent per name: mounting any number of widgets into the
/// same document registers the sheet exactly once.
pub const TITLE_BAR_STYLESHEET_NAME: &str = "casement/title-bar";

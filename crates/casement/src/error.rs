//! Error types for the widget library.

/// Result type alias for widget operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or driving a widget.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The template markup is well-formed but missing a required region.
    #[error("malformed template: missing {role}")]
    MalformedTemplate {
        /// The structural role that could not be resolved.
        role: &'static str,
    },

    /// The template markup could not be parsed at all.
    #[error("template parse error: {0}")]
    TemplateParse(String),

    /// An operation was called in a lifecycle state that does not permit it,
    /// such as mounting an already-mounted widget or destroying an unmounted
    /// one.
    #[error("invalid lifecycle state: {0}")]
    InvalidLifecycleState(&'static str),
}

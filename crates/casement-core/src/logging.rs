//! Logging facilities for Casement.
//!
//! Casement uses the `tracing` crate for instrumentation. To see logs, install
//! a tracing subscriber in your application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     // Initialize tracing (you can customize this)
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! The constants in [`targets`] can be used with `tracing` filter directives
//! to select individual subsystems, e.g. `casement::widget=trace`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "casement_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "casement_core::signal";
    /// Widget lifecycle and state machine target.
    pub const WIDGET: &str = "casement::widget";
    /// View document target.
    pub const VIEW: &str = "casement::view";
    /// Theme handling target.
    pub const THEME: &str = "casement::theme";
}

/// Macros for common tracing patterns.
///
/// These are re-exported for convenience but are just wrappers around
/// the `tracing` crate macros with consistent target naming.
#[macro_export]
macro_rules! casement_trace {
    ($($arg:tt)*) => {
        tracing::trace!(target: "casement_core", $($arg)*)
    };
}

#[macro_export]
macro_rules! casement_debug {
    ($($arg:tt)*) => {
        tracing::debug!(target: "casement_core", $($arg)*)
    };
}

#[macro_export]
macro_rules! casement_info {
    ($($arg:tt)*) => {
        tracing::info!(target: "casement_core", $($arg)*)
    };
}

#[macro_export]
macro_rules! casement_warn {
    ($($arg:tt)*) => {
        tracing::warn!(target: "casement_core", $($arg)*)
    };
}

#[macro_export]
macro_rules! casement_error {
    ($($arg:tt)*) => {
        tracing::error!(target: "casement_core", $($arg)*)
    };
}

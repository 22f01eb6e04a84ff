//! Core systems for Casement.
//!
//! This crate provides the foundational pieces of the Casement widget library:
//!
//! - **Signal/Slot System**: Type-safe observer registration and notification
//! - **Logging**: `tracing` targets and convenience macros
//!
//! # Signal/Slot Example
//!
//! ```
//! use casement_core::Signal;
//!
//! // Create a signal that passes a string argument
//! let title_changed = Signal::<String>::new();
//!
//! // Connect a slot (closure)
//! let conn_id = title_changed.connect(|title| {
//!     println!("Title changed to: {}", title);
//! });
//!
//! // Emit the signal
//! title_changed.emit("Hello, World!".to_string());
//!
//! // Disconnect when done
//! title_changed.disconnect(conn_id);
//! ```

pub mod logging;
mod signal;

pub use signal::{ConnectionGuard, ConnectionId, Signal};

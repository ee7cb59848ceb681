//! User-facing messages.
//!
//! Every line of text the CLI shows is a [`Message`] variant rendered through
//! its `Display` impl, and printed through the `msg_*` macros so that debug
//! runs can route output into `tracing` instead of the terminal.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;

//! Domain model types (pure).
//!
//! All types in this module are pure data.

pub mod error;
pub mod key_action;

// Re-export for convenience
pub use error::{AppError, VirtualizerError};
pub use key_action::KeyAction;

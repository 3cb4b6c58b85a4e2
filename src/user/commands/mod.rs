//! Built-in command implementations.

pub mod help;

pub use help::HELP;

/// Commands every registry starts with.
pub static BUILTINS: &[crate::user::CommandEntry] = &[HELP];

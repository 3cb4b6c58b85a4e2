//! Shell configuration constants.

pub mod shell;

pub use shell::*;

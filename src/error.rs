//! Unified error types for the shell.
//!
//! Setup-time operations (registering commands, setting the prompt or the
//! password, installing the logger) return [`ShellResult`], an alias for
//! `anyhow::Result`.
//!
//! The dispatch path never allocates, so it reports failures with the plain
//! [`DispatchError`] enum instead.
//!
//! ## Usage Examples
//!
//! ```ignore
//! anyhow::ensure!(len <= CONSOLEBUF_SIZE, "prompt too long: {} bytes", len);
//! anyhow::bail!("command registry full");
//! ```

use core::fmt;

/// Result type alias using anyhow::Error.
pub type ShellResult<T> = anyhow::Result<T>;

/// Failure of a dispatched command line.
///
/// A handler's own return code is never turned into an error; it is passed
/// through as `Ok(code)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchError {
    /// The first token names no registered command.
    CommandNotFound,
}

impl DispatchError {
    /// Numeric status matching the classic `-1` of C shells.
    pub const fn status(&self) -> i32 {
        match self {
            DispatchError::CommandNotFound => -1,
        }
    }
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::CommandNotFound => f.write_str("command not found"),
        }
    }
}

impl core::error::Error for DispatchError {}

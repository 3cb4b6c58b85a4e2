//! RstinyShell - an interactive command shell for byte-oriented consoles.
//!
//! The shell reads raw bytes from a [`Console`], edits the line in a
//! fixed-size buffer with history and tab completion, splits the submitted
//! line into argv tokens and dispatches it to a registered command.
//!
//! The editing and dispatch paths never allocate. Setup-time errors use
//! `anyhow`, which needs an allocator on bare-metal targets.
//!
//! ```ignore
//! let mut shell = Shell::new(uart, ShellConfig::default());
//! shell.register(CommandEntry::new("reboot", reboot).with_description("Reset the board."))?;
//! shell.run();
//! ```

#![cfg_attr(not(test), no_std)]

#[macro_use]
extern crate log;

#[macro_use]
pub mod console;

pub mod config;
pub mod error;
pub mod shell;
pub mod user;

#[cfg(test)]
mod testing;

pub use console::{Console, init_logger};
pub use error::{DispatchError, ShellResult};
pub use shell::{Shell, ShellConfig, ShellMode};
pub use user::{Args, CommandContext, CommandEntry, CommandFn, Registry};

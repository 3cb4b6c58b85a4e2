//! User command system.
//!
//! # Architecture
//!
//! - `command.rs` - Defines `CommandEntry` and the execution context
//! - `registry.rs` - Ordered command table, lookup and dispatch
//! - `parser.rs` - Splits a line into argv tokens
//! - `completion.rs` - Tab completion of command names
//! - `commands/` - Built-in command implementations
//!
//! # Adding a New Command
//!
//! 1. Write a handler `fn mycommand(ctx: &mut CommandContext<'_>) -> i32`
//! 2. Describe it: `CommandEntry::new("mycommand", mycommand).with_description("...")`
//! 3. Register it before the shell loop starts: `shell.register(entry)?`

pub mod command;
pub mod commands;
pub mod completion;
pub mod parser;
pub mod registry;

pub use command::{Args, CommandContext, CommandEntry, CommandFn};
pub use registry::Registry;

//! Shell capacity and default constants.
//!
//! Every capacity can be overridden at build time through the environment
//! variable named in its attribute, e.g. `SHELL_CMD_MAX=128 cargo build`.

use const_env::env_item;

/// Capacity of the line buffer in bytes. A line reaching this length is discarded.
#[env_item("SHELL_CMD_MAX")]
pub const CMD_MAX: usize = 80;

/// Number of submitted lines kept in the history ring.
#[env_item("SHELL_HISTORY_LINES")]
pub const HISTORY_LINES: usize = 5;

/// Maximum number of tokens handed to a command.
#[env_item("SHELL_ARG_MAX")]
pub const ARG_MAX: usize = 8;

/// Maximum number of registered commands.
#[env_item("SHELL_REGISTRY_MAX")]
pub const REGISTRY_MAX: usize = 64;

/// Capacity of a custom prompt string.
#[env_item("SHELL_CONSOLEBUF_SIZE")]
pub const CONSOLEBUF_SIZE: usize = 128;

#[env_item("SHELL_PASSWORD_MIN")]
pub const PASSWORD_MIN: usize = 6;

#[env_item("SHELL_PASSWORD_MAX")]
pub const PASSWORD_MAX: usize = 8;

/// Column the description starts at in the `help` listing.
pub const HELP_NAME_WIDTH: usize = 16;

pub const DEFAULT_PROMPT: &str = "msh >";

/// Installed when authentication is enabled without a password.
pub const DEFAULT_PASSWORD: &str = "rtthread";

//! Command entry and execution context definitions.

use crate::console::Console;
use crate::user::registry::Registry;

/// Command handler. The returned code is passed through to the caller untouched.
pub type CommandFn = fn(&mut CommandContext<'_>) -> i32;

/// A registered command.
#[derive(Debug, Clone, Copy)]
pub struct CommandEntry {
    /// Primary command name.
    pub name: &'static str,
    /// Alternative names accepted by the dispatcher.
    pub aliases: &'static [&'static str],
    /// Short description (shown in help list).
    pub description: Option<&'static str>,
    pub handler: CommandFn,
}

impl CommandEntry {
    pub const fn new(name: &'static str, handler: CommandFn) -> Self {
        Self {
            name,
            aliases: &[],
            description: None,
            handler,
        }
    }

    pub const fn with_description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    /// Exact match against the name or one of the aliases.
    pub fn matches(&self, name: &str) -> bool {
        self.name == name || self.aliases.iter().any(|alias| *alias == name)
    }
}

/// Tokenized arguments; `argv[0]` is the command name.
#[derive(Debug, Clone, Copy)]
pub struct Args<'a> {
    argv: &'a [&'a str],
}

impl<'a> Args<'a> {
    pub fn new(argv: &'a [&'a str]) -> Self {
        Self { argv }
    }

    /// Number of tokens, command name included.
    pub fn argc(&self) -> usize {
        self.argv.len()
    }

    pub fn argv(&self) -> &'a [&'a str] {
        self.argv
    }

    /// Get token at index (0 is the command name).
    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.argv.get(index).copied()
    }

    /// The name the command was invoked with.
    pub fn command(&self) -> &'a str {
        self.get(0).unwrap_or("")
    }

    /// Iterate over the tokens after the command name.
    pub fn params(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.argv.iter().skip(1).copied()
    }
}

/// Command execution context.
pub struct CommandContext<'a> {
    pub args: Args<'a>,
    /// Where the command prints its output.
    pub console: &'a mut dyn Console,
    /// Read-only view of every registered command.
    pub registry: &'a Registry,
}

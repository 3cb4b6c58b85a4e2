//! Command registry - ordered command table and dispatch.

use crate::config::REGISTRY_MAX;
use crate::console::Console;
use crate::error::{DispatchError, ShellResult};
use crate::user::command::{Args, CommandContext, CommandEntry};
use crate::user::{commands, parser};

/// Ordered, fixed-capacity table of commands.
///
/// Populated before the shell loop starts and only read afterwards.
/// Lookups scan front to back, so on duplicate names the earliest entry wins.
pub struct Registry {
    commands: heapless::Vec<CommandEntry, REGISTRY_MAX>,
}

impl Registry {
    /// Create a registry holding the built-in commands.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for entry in commands::BUILTINS {
            // REGISTRY_MAX is far above the number of built-ins
            let _ = registry.commands.push(*entry);
        }
        registry
    }

    /// Create a registry without any command.
    pub const fn empty() -> Self {
        Self {
            commands: heapless::Vec::new(),
        }
    }

    /// Append a command.
    pub fn register(&mut self, entry: CommandEntry) -> ShellResult<()> {
        if self.find_command(entry.name).is_some() {
            warn!("command '{}' registered twice, first entry wins", entry.name);
        }
        self.commands.push(entry).map_err(|entry| {
            anyhow::anyhow!(
                "command registry full ({} entries), cannot add '{}'",
                REGISTRY_MAX,
                entry.name
            )
        })?;
        debug!("registered command '{}'", entry.name);
        Ok(())
    }

    /// Find a command by name or alias.
    pub fn find_command(&self, name: &str) -> Option<&CommandEntry> {
        self.commands
            .iter()
            .find(|cmd| cmd.name == name)
            .or_else(|| self.commands.iter().find(|cmd| cmd.matches(name)))
    }

    /// Get all registered commands, in registration order.
    pub fn all_commands(&self) -> &[CommandEntry] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Execute a command line.
    ///
    /// Leading blanks are skipped and a blank line succeeds without output.
    /// The first token selects the command; the whole line is tokenized into
    /// its argv. The handler's return code is passed through.
    pub fn execute(&self, line: &mut [u8], console: &mut dyn Console) -> Result<i32, DispatchError> {
        let start = line
            .iter()
            .position(|&c| c != b' ' && c != b'\t')
            .unwrap_or(line.len());
        let line = &mut line[start..];
        if line.is_empty() {
            return Ok(0);
        }

        let name_len = line
            .iter()
            .position(|&c| c == b' ' || c == b'\t')
            .unwrap_or(line.len());
        let entry = core::str::from_utf8(&line[..name_len])
            .ok()
            .and_then(|name| self.find_command(name));

        let Some(entry) = entry else {
            let name = &line[..name_len];
            warn!("command not found: {}", name.escape_ascii());
            shell_println!(console, "{}: command not found.", name.escape_ascii());
            return Err(DispatchError::CommandNotFound);
        };

        let tokens = parser::split(line);
        if tokens.is_truncated() {
            warn!("too many arguments for '{}', keeping {}", entry.name, tokens.argc());
            shell_println!(console, "Too many args ! We only Use:");
            for token in tokens.argv() {
                shell_print!(console, "{} ", token);
            }
            shell_println!(console);
        }

        debug!("exec '{}' argc={}", entry.name, tokens.argc());
        let mut ctx = CommandContext {
            args: Args::new(tokens.argv()),
            console,
            registry: self,
        };
        Ok((entry.handler)(&mut ctx))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedConsole;

    fn count_args(ctx: &mut CommandContext<'_>) -> i32 {
        ctx.args.argc() as i32
    }

    fn print_args(ctx: &mut CommandContext<'_>) -> i32 {
        for arg in ctx.args.params() {
            shell_println!(ctx.console, "[{}]", arg);
        }
        0
    }

    fn fail(_ctx: &mut CommandContext<'_>) -> i32 {
        42
    }

    fn registry() -> Registry {
        let mut registry = Registry::new();
        registry.register(CommandEntry::new("ls", count_args)).unwrap();
        registry.register(CommandEntry::new("echo", print_args)).unwrap();
        registry.register(CommandEntry::new("fail", fail)).unwrap();
        registry
    }

    fn exec(registry: &Registry, line: &str) -> (Result<i32, DispatchError>, String) {
        let mut console = ScriptedConsole::new(b"");
        let mut buf = line.as_bytes().to_vec();
        let result = registry.execute(&mut buf, &mut console);
        (result, console.output())
    }

    #[test]
    fn test_blank_line_is_noop() {
        let registry = registry();
        assert_eq!(exec(&registry, ""), (Ok(0), String::new()));
        assert_eq!(exec(&registry, " \t  "), (Ok(0), String::new()));
    }

    #[test]
    fn test_leading_blanks_trimmed() {
        let registry = registry();
        assert_eq!(exec(&registry, "  \tls a b").0, Ok(3));
    }

    #[test]
    fn test_handler_code_passed_through() {
        let registry = registry();
        assert_eq!(exec(&registry, "fail").0, Ok(42));
    }

    #[test]
    fn test_exact_name_required() {
        let registry = registry();
        let (result, output) = exec(&registry, "lsx");
        assert_eq!(result, Err(DispatchError::CommandNotFound));
        assert_eq!(output, "lsx: command not found.\r\n");
    }

    #[test]
    fn test_not_found_truncates_at_first_blank() {
        let registry = registry();
        let (result, output) = exec(&registry, "zzz foo");
        assert_eq!(result.unwrap_err().status(), -1);
        assert_eq!(output, "zzz: command not found.\r\n");
    }

    #[test]
    fn test_quoted_args_reach_handler() {
        let registry = registry();
        let (result, output) = exec(&registry, r#"echo "a b" "c\"d""#);
        assert_eq!(result, Ok(0));
        assert_eq!(output, "[a b]\r\n[c\"d]\r\n");
    }

    #[test]
    fn test_too_many_args_reported_and_executed() {
        let registry = registry();
        let (result, output) = exec(&registry, "ls 1 2 3 4 5 6 7 8 9");
        assert_eq!(result, Ok(crate::config::ARG_MAX as i32));
        assert_eq!(output, "Too many args ! We only Use:\r\nls 1 2 3 4 5 6 7 \r\n");
    }

    #[test]
    fn test_alias_dispatches() {
        let registry = registry();
        let (result, output) = exec(&registry, "msh_help");
        assert_eq!(result, Ok(0));
        assert!(output.starts_with("Shell commands:"));
    }

    #[test]
    fn test_duplicate_name_first_wins() {
        let mut registry = registry();
        registry.register(CommandEntry::new("fail", count_args)).unwrap();
        assert_eq!(exec(&registry, "fail").0, Ok(42));
    }

    #[test]
    fn test_register_until_full() {
        let mut registry = Registry::empty();
        for _ in 0..REGISTRY_MAX {
            registry.register(CommandEntry::new("x", fail)).unwrap();
        }
        assert!(registry.register(CommandEntry::new("y", fail)).is_err());
        assert_eq!(registry.len(), REGISTRY_MAX);
    }
}

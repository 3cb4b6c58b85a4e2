//! Help command - lists the registered commands.

use crate::config::HELP_NAME_WIDTH;
use crate::console::Console;
use crate::user::{CommandContext, CommandEntry, Registry};

/// Help command entry, also reachable as `msh_help`.
pub const HELP: CommandEntry = CommandEntry::new("help", help)
    .with_aliases(&["msh_help"])
    .with_description("Shell help.");

fn help(ctx: &mut CommandContext<'_>) -> i32 {
    show_all_commands(ctx.registry, ctx.console);
    0
}

/// Print every command in registry order, one per line.
pub fn show_all_commands(registry: &Registry, console: &mut dyn Console) {
    shell_println!(console, "Shell commands:");
    for cmd in registry.all_commands() {
        match cmd.description {
            Some(description) => {
                shell_println!(console, "{:<width$} - {}", cmd.name, description, width = HELP_NAME_WIDTH)
            }
            None => shell_println!(console, "{}", cmd.name),
        }
    }
    shell_println!(console);
}

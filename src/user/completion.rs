//! Command name completion.

use crate::console::{Console, Line};
use crate::user::Registry;
use crate::user::commands::help::show_all_commands;

/// Length of the common prefix of `a` and `b`.
fn common_prefix_len(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

/// Complete `prefix` against the registered command names.
///
/// Every matching name is printed on its own line and `prefix` is extended
/// to the longest prefix shared by all matches. An empty prefix prints the
/// full command listing instead. Returns the number of matches.
pub fn complete(registry: &Registry, prefix: &mut Line, console: &mut dyn Console) -> usize {
    if prefix.is_empty() {
        show_all_commands(registry, console);
        return 0;
    }

    let mut first: Option<&[u8]> = None;
    let mut common = 0;
    let mut matches = 0;

    for cmd in registry.all_commands() {
        let name = cmd.name.as_bytes();
        if !name.starts_with(prefix.as_slice()) {
            continue;
        }
        match first {
            None => {
                first = Some(name);
                common = name.len();
            }
            Some(first) => common = common.min(common_prefix_len(first, name)),
        }
        matches += 1;
        shell_println!(console, "{}", cmd.name);
    }

    if let Some(first) = first {
        let len = common.min(prefix.capacity());
        prefix.clear();
        // len is bounded by the capacity
        let _ = prefix.extend_from_slice(&first[..len]);
    }
    matches
}

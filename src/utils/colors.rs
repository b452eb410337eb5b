/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Entrées green, sorties red, matching the admin table badges.
pub fn colorize_direction(label: &str, is_entry: bool) -> String {
    if is_entry {
        format!("{GREEN}{label}{RESET}")
    } else {
        format!("{RED}{label}{RESET}")
    }
}

//! Level colors.

use colored::Color;
use quill_core::Level;

/// Color used for a level.
#[must_use]
pub fn level_color(level: Level) -> Color {
    match level {
        Level::Error => Color::Red,
        Level::Warn => Color::Yellow,
        Level::Info => Color::Cyan,
        Level::Debug => Color::Green,
        Level::Trace => Color::BrightBlue,
    }
}

/// Wrap a whole line in the level's foreground color.
///
/// The escape codes are written unconditionally; whether to colorize is the
/// logger's `colorize` option, not a property of the terminal.
#[must_use]
pub fn colorize(level: Level, line: &str) -> String {
    format!("\x1b[{}m{line}\x1b[0m", level_color(level).to_fg_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_line() {
        assert_eq!(colorize(Level::Error, "boom"), "\x1b[31mboom\x1b[0m");
        assert_eq!(colorize(Level::Info, "ok"), "\x1b[36mok\x1b[0m");
        assert_eq!(colorize(Level::Trace, "t"), "\x1b[94mt\x1b[0m");
    }

    #[test]
    fn test_every_level_has_distinct_color() {
        let colors: Vec<_> = Level::ALL.iter().map(|l| level_color(*l)).collect();
        for (i, a) in colors.iter().enumerate() {
            for (j, b) in colors.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b);
                }
            }
        }
    }
}

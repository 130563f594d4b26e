//! # Scripted Sessions
//!
//! Utilities for driving the menu in tests.
//!
//! Use [`run_script`] to feed a sequence of input lines to a fresh shop and
//! get back everything written to the console, plus the shop in its final
//! state for direct assertions.

use std::io::Cursor;

use crate::app_system::Shop;
use crate::menu::{Console, Menu, MenuOptions};

/// Outcome of a scripted run.
pub struct Session {
    pub output: String,
    pub shop: Shop,
}

/// Runs `lines` through a menu without the acknowledgement pauses.
///
/// # Testing Strategy
/// Stdin and stdout are replaced with in-memory buffers, so a whole
/// interactive session becomes a plain function call. The script does not
/// need to end with the exit code: running out of input ends the session the
/// same way.
pub fn run_script(lines: &[&str]) -> Session {
    let options = MenuOptions {
        clear_screen: false,
        pause_between_commands: false,
    };
    run_script_with(options, lines)
}

pub fn run_script_with(options: MenuOptions, lines: &[&str]) -> Session {
    let mut input = lines.join("\n");
    input.push('\n');

    let console = Console::new(Cursor::new(input.into_bytes()), Vec::new());
    let mut menu = Menu::new(Shop::new(), console, options);
    menu.run().expect("in-memory console never fails");

    let (shop, output) = menu.into_parts();
    Session {
        output: String::from_utf8(output).expect("console output is UTF-8"),
        shop,
    }
}

/// Number of times `needle` appears in `haystack`.
pub fn occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_script_exits_cleanly() {
        let session = run_script(&[]);
        assert!(session.output.contains("MENU"));
        assert!(session.output.ends_with("Goodbye!\n"));
        assert_eq!(session.shop.orders().count(), 0);
    }
}

mod domain;
mod error;
mod resource_store;
mod order;

mod app_system;
mod menu;

#[cfg(test)]
mod test_support;

use std::io::{self, IsTerminal};

use tracing::{error, info};
use crate::app_system::{setup_tracing, Shop};
use crate::error::MenuError;
use crate::menu::{Console, Menu, MenuOptions};

fn main() -> Result<(), MenuError> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting shop console");

    let stdout = io::stdout();
    let options = MenuOptions::for_terminal(stdout.is_terminal());
    let console = Console::new(io::stdin().lock(), stdout.lock());

    let mut menu = Menu::new(Shop::new(), console, options);
    if let Err(e) = menu.run() {
        error!(error = %e, "Console session failed");
        return Err(e);
    }

    info!("Shop console closed");
    Ok(())
}

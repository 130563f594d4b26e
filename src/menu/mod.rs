//! Interactive controller: reads menu codes, drives the [`Shop`], renders text.

pub mod commands;
pub mod console;

pub use commands::*;
pub use console::*;

use std::io::{BufRead, Write};

use tracing::{debug, info, instrument};

use crate::app_system::Shop;
use crate::domain::{OrderId, ProductId};
use crate::error::{InputError, MenuError, ShopError};

const MAIN_MENU: &str = "              MENU

  1. Create order
  2. Edit order
  3. View order
  4. Delete order
  5. View all orders
  0. Exit";

const EDIT_MENU: &str = "
1. Add product
2. Change product quantity
3. Remove product
0. Finish editing";

const FAREWELL: &str = "\nGoodbye!";

/// Presentation knobs for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuOptions {
    /// Clear the screen before the main menu and each section header.
    pub clear_screen: bool,
    /// Wait for Enter after each main menu command.
    pub pause_between_commands: bool,
}

impl MenuOptions {
    pub fn for_terminal(is_terminal: bool) -> Self {
        Self {
            clear_screen: is_terminal,
            ..Self::default()
        }
    }
}

impl Default for MenuOptions {
    fn default() -> Self {
        Self {
            clear_screen: false,
            pause_between_commands: true,
        }
    }
}

pub struct Menu<R, W> {
    shop: Shop,
    console: Console<R, W>,
    options: MenuOptions,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(shop: Shop, console: Console<R, W>, options: MenuOptions) -> Self {
        Self { shop, console, options }
    }

    /// Runs until the exit code is chosen or the input runs dry.
    ///
    /// Only console I/O failures are returned; every domain or input problem
    /// is reported on screen and the loop carries on.
    pub fn run(&mut self) -> Result<(), MenuError> {
        match self.main_loop() {
            Err(MenuError::InputClosed) => {
                info!("Input closed, ending session");
                self.console.say(FAREWELL)?;
            }
            result => result?,
        }
        self.console.flush()
    }

    fn main_loop(&mut self) -> Result<(), MenuError> {
        loop {
            self.show_main_menu()?;
            let choice = self.console.prompt("\nYour choice: ")?;

            match choice.parse::<MainCommand>() {
                Ok(MainCommand::Exit) => {
                    info!("Exit chosen");
                    return self.console.say(FAREWELL);
                }
                Ok(command) => self.dispatch(command)?,
                Err(e) => self.reject(&e, "\n Invalid choice!")?,
            }

            self.pause()?;
        }
    }

    #[instrument(skip(self))]
    fn dispatch(&mut self, command: MainCommand) -> Result<(), MenuError> {
        match command {
            MainCommand::CreateOrder => self.create_order(),
            MainCommand::EditOrder => self.edit_order(),
            MainCommand::ViewOrder => self.view_order(),
            MainCommand::DeleteOrder => self.delete_order(),
            MainCommand::ViewAllOrders => self.view_all_orders(),
            MainCommand::Exit => Ok(()),
        }
    }

    // =========================================================================
    // Main menu commands
    // =========================================================================

    fn create_order(&mut self) -> Result<(), MenuError> {
        self.section("    CREATING A NEW ORDER")?;

        let order_id = self.shop.create_order();
        self.console.say(format_args!("\nCreated order {order_id}"))?;

        self.add_products(order_id)?;

        self.console.say(format_args!("\nOrder {order_id} created successfully!"))?;
        self.show_order(order_id)
    }

    fn edit_order(&mut self) -> Result<(), MenuError> {
        self.section("      EDITING AN ORDER")?;

        let Some(order_id) = self.select_order("\nEnter order number to edit: ")? else {
            return Ok(());
        };
        self.show_order(order_id)?;

        loop {
            self.console.say(EDIT_MENU)?;
            let choice = self.console.prompt("\nYour choice: ")?;

            match choice.parse::<EditCommand>() {
                Ok(EditCommand::Done) => break,
                Ok(EditCommand::AddItem) => self.add_products(order_id)?,
                Ok(EditCommand::ChangeQuantity) => self.change_quantity(order_id)?,
                Ok(EditCommand::RemoveItem) => self.remove_product(order_id)?,
                Err(e) => self.reject(&e, "\nInvalid choice!")?,
            }

            self.show_order(order_id)?;
        }

        self.console.say("\nOrder updated!")
    }

    fn view_order(&mut self) -> Result<(), MenuError> {
        self.section("     VIEWING AN ORDER")?;

        if let Some(order_id) = self.select_order("\nEnter order number: ")? {
            self.show_order(order_id)?;
        }
        Ok(())
    }

    fn delete_order(&mut self) -> Result<(), MenuError> {
        self.section("      DELETING AN ORDER")?;

        let Some(order_id) = self.select_order("\nEnter order number to delete: ")? else {
            return Ok(());
        };
        self.show_order(order_id)?;

        let answer = self.console.prompt("\nAre you sure? (y/n): ")?;
        if !is_affirmative(&answer) {
            debug!(order_id = %order_id, answer = %answer, "Deletion not confirmed");
            return self.console.say("\nDeletion cancelled!");
        }

        match self.shop.delete_order(order_id) {
            Ok(_) => self.console.say(format_args!("\nOrder {order_id} deleted successfully!")),
            Err(_) => self.console.say(format_args!("\n Order {order_id} not found!")),
        }
    }

    fn view_all_orders(&mut self) -> Result<(), MenuError> {
        if self.options.clear_screen {
            self.console.clear()?;
        }
        self.console.show(self.shop.report())
    }

    // =========================================================================
    // Order editing steps
    // =========================================================================

    /// Offers the catalog until the user finishes with `0` or declines to add more.
    fn add_products(&mut self, order_id: OrderId) -> Result<(), MenuError> {
        loop {
            self.console.show(self.shop.catalog())?;
            let answer = self.console.prompt("\nEnter product ID (0 - finish): ")?;

            match parse_id(&answer) {
                Ok(0) => return Ok(()),
                Ok(id) => self.add_one_product(order_id, ProductId::from(id))?,
                Err(e) => self.reject(&e, "\nInvalid input!")?,
            }

            let again = self.console.prompt("\nAdd another product? (y/n): ")?;
            if !is_affirmative(&again) {
                return Ok(());
            }
        }
    }

    fn add_one_product(&mut self, order_id: OrderId, product_id: ProductId) -> Result<(), MenuError> {
        let Some(product) = self.shop.product(product_id) else {
            return self.report(&ShopError::ProductNotFound(product_id));
        };

        let answer = self.console.prompt("Enter quantity: ")?;
        let quantity = match parse_positive_quantity(&answer) {
            Ok(quantity) => quantity,
            Err(e) => return self.reject(&e, "\nInvalid quantity!"),
        };

        match self.shop.add_product(order_id, product_id, quantity) {
            Ok(_) => self.console.say(format_args!("\nAdded: {} x{}", product.name, quantity)),
            Err(e) => self.report(&e),
        }
    }

    fn change_quantity(&mut self, order_id: OrderId) -> Result<(), MenuError> {
        self.console.show(self.shop.catalog())?;
        let answer = self.console.prompt("\nEnter product ID: ")?;
        let product_id = match parse_id(&answer) {
            Ok(id) => ProductId::from(id),
            Err(e) => return self.reject(&e, "\nInvalid input!"),
        };

        let held = self
            .shop
            .order(order_id)
            .is_some_and(|order| order.contains(product_id));
        if !held {
            return self.report(&ShopError::ProductNotInOrder(product_id));
        }

        let answer = self.console.prompt("Enter new quantity (0 - remove): ")?;
        let quantity = match parse_quantity(&answer) {
            Ok(quantity) => quantity,
            Err(e) => return self.reject(&e, "\nInvalid quantity!"),
        };

        match self.shop.change_quantity(order_id, product_id, quantity) {
            Ok(_) => self.console.say("\nQuantity updated!"),
            Err(e) => self.report(&e),
        }
    }

    fn remove_product(&mut self, order_id: OrderId) -> Result<(), MenuError> {
        self.console.show(self.shop.catalog())?;
        let answer = self.console.prompt("\nEnter product ID to remove: ")?;
        let product_id = match parse_id(&answer) {
            Ok(id) => ProductId::from(id),
            Err(e) => return self.reject(&e, "\nInvalid input!"),
        };

        match self.shop.remove_product(order_id, product_id) {
            Ok(_) => self.console.say("\nProduct removed from order!"),
            Err(e) => self.report(&e),
        }
    }

    // =========================================================================
    // Shared helpers
    // =========================================================================

    /// Shows every order, asks for one, and resolves it.
    fn select_order(&mut self, label: &str) -> Result<Option<OrderId>, MenuError> {
        self.console.show(self.shop.report())?;

        let answer = self.console.prompt(label)?;
        let order_id = match parse_id(&answer) {
            Ok(id) => OrderId::from(id),
            Err(e) => {
                self.reject(&e, "\nInvalid input!")?;
                return Ok(None);
            }
        };

        if self.shop.order(order_id).is_none() {
            self.report(&ShopError::OrderNotFound(order_id))?;
            return Ok(None);
        }
        Ok(Some(order_id))
    }

    fn show_order(&mut self, order_id: OrderId) -> Result<(), MenuError> {
        match self.shop.order(order_id) {
            Some(order) => self.console.show(order),
            None => self.report(&ShopError::OrderNotFound(order_id)),
        }
    }

    fn show_main_menu(&mut self) -> Result<(), MenuError> {
        if self.options.clear_screen {
            self.console.clear()?;
        }
        self.console.say(MAIN_MENU)
    }

    fn section(&mut self, title: &str) -> Result<(), MenuError> {
        if self.options.clear_screen {
            self.console.clear()?;
        }
        self.console.say(title)
    }

    fn pause(&mut self) -> Result<(), MenuError> {
        if self.options.pause_between_commands {
            self.console.prompt("\nPress Enter to continue...")?;
        }
        Ok(())
    }

    fn reject(&mut self, error: &InputError, message: &str) -> Result<(), MenuError> {
        debug!(error = %error, "Rejected input");
        self.console.say(message)
    }

    fn report(&mut self, error: &ShopError) -> Result<(), MenuError> {
        debug!(error = %error, "Shop operation refused");
        let message = match error {
            ShopError::ProductNotFound(_) => "\nProduct not found!",
            ShopError::OrderNotFound(_) => "\nOrder not found!",
            ShopError::ProductNotInOrder(_) => "\nProduct not found in order!",
        };
        self.console.say(message)
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (Shop, W) {
        (self.shop, self.console.into_output())
    }
}

//! Menu-driven terminal session.
//!
//! The [`App`] reads operator input line by line and writes screens to any
//! `Write`, so scripted sessions can drive it from a byte buffer.

use std::io::{BufRead, Write};
use std::str::FromStr;

use common::{OrderNumber, ProductId};
use domain::{
    DomainError, Location, OrderError, PlaceOrder, ReceiveStock, ShipOrder, WarehouseService,
};
use journal::{InMemoryJournal, Journal, JournalQuery};
use metrics_exporter_prometheus::PrometheusHandle;

use crate::config::Config;
use crate::error::Result;

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

const ORDER_REJECTED: &str =
    "Not enough stock or location already emptied by other orders. Order creation failed.";

/// What the session does after a screen returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Stay,
    Back,
    Quit,
}

/// Interactive warehouse session.
pub struct App<R, W, J: Journal = InMemoryJournal> {
    service: WarehouseService<J>,
    input: R,
    output: W,
    config: Config,
    metrics: Option<PrometheusHandle>,
}

impl<R: BufRead, W: Write> App<R, W> {
    /// Creates a session over an empty warehouse with an in-memory journal.
    pub fn new(input: R, output: W, config: Config) -> Self {
        Self {
            service: WarehouseService::new(InMemoryJournal::new()),
            input,
            output,
            config,
            metrics: None,
        }
    }
}

impl<R: BufRead, W: Write, J: Journal> App<R, W, J> {
    /// Attaches the Prometheus handle rendered by the metrics report.
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }

    /// Returns the warehouse service.
    pub fn service(&self) -> &WarehouseService<J> {
        &self.service
    }

    /// Consumes the session and returns its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the main menu until the operator exits or input ends.
    #[tracing::instrument(skip(self))]
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.clear()?;
            self.write_menu("Main Menu", &["Receiving", "Shipping", "Reports", "Exit"])?;

            let flow = match self.prompt_choice()? {
                None | Some(4) => Flow::Quit,
                Some(1) => self.receiving()?,
                Some(2) => self.shipping()?,
                Some(3) => self.reports()?,
                Some(_) => self.notify("Invalid choice.")?,
            };

            if flow == Flow::Quit {
                writeln!(self.output, "Exiting the program. Goodbye!")?;
                self.output.flush()?;
                tracing::info!("session ended");
                return Ok(());
            }
        }
    }

    fn receiving(&mut self) -> Result<Flow> {
        loop {
            self.clear()?;
            self.write_menu(
                "Receiving Menu",
                &["Add Product", "Display Inventory", "Back to Main Menu"],
            )?;

            let flow = match self.prompt_choice()? {
                None => Flow::Quit,
                Some(1) => self.add_product()?,
                Some(2) => self.display_inventory()?,
                Some(3) => Flow::Back,
                Some(_) => self.notify("Invalid choice.")?,
            };

            if flow != Flow::Stay {
                return Ok(flow.leave_submenu());
            }
        }
    }

    fn shipping(&mut self) -> Result<Flow> {
        loop {
            self.clear()?;
            self.write_menu(
                "Shipping Menu",
                &[
                    "Display Orders",
                    "Ship Product by Order Number",
                    "Create Order",
                    "Back to Main Menu",
                ],
            )?;

            let flow = match self.prompt_choice()? {
                None => Flow::Quit,
                Some(1) => self.display_orders()?,
                Some(2) => self.ship_order()?,
                Some(3) => self.create_order()?,
                Some(4) => Flow::Back,
                Some(_) => self.notify("Invalid choice.")?,
            };

            if flow != Flow::Stay {
                return Ok(flow.leave_submenu());
            }
        }
    }

    fn reports(&mut self) -> Result<Flow> {
        loop {
            self.clear()?;
            self.write_menu("Reports Menu", &["Activity Log", "Metrics", "Back to Main Menu"])?;

            let flow = match self.prompt_choice()? {
                None => Flow::Quit,
                Some(1) => self.activity_log()?,
                Some(2) => self.metrics_report()?,
                Some(3) => Flow::Back,
                Some(_) => self.notify("Invalid choice.")?,
            };

            if flow != Flow::Stay {
                return Ok(flow.leave_submenu());
            }
        }
    }

    fn add_product(&mut self) -> Result<Flow> {
        self.clear()?;
        let Some(product_id) = self.prompt_number::<ProductId>("Enter product ID: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(quantity) = self.prompt_number::<u32>("Enter product quantity: ")? else {
            return Ok(Flow::Quit);
        };

        let location = loop {
            let Some(line) = self.prompt("Enter product location: ")? else {
                return Ok(Flow::Quit);
            };
            let location = Location::new(line.trim());
            match self.service.validate_location(&location) {
                Ok(()) => break location,
                Err(_) => writeln!(
                    self.output,
                    "Invalid location. Please enter a non-blank and non-repeated location."
                )?,
            }
        };

        match self.service.receive_stock(ReceiveStock::new(product_id, quantity, location)) {
            Ok(_) => self.notify("Product added to the inventory."),
            Err(err) => self.notify(&err.to_string()),
        }
    }

    fn display_inventory(&mut self) -> Result<Flow> {
        writeln!(self.output, "Inventory:")?;
        for record in self.service.list_inventory() {
            writeln!(
                self.output,
                "ID: {}, Quantity: {}, Location: {}",
                record.product_id, record.quantity, record.location
            )?;
        }
        self.pause("Press enter to go back.")
    }

    fn display_orders(&mut self) -> Result<Flow> {
        writeln!(self.output, "Orders:")?;
        for order in self.service.list_orders() {
            let products: Vec<String> = order
                .line_items()
                .map(|item| format!("ID: {}, Quantity: {}", item.product_id, item.quantity))
                .collect();
            let locations: Vec<&str> = order.source_locations().map(Location::as_str).collect();

            writeln!(
                self.output,
                "Order Number: {}, Products: {}; Shipped From Locations: {}",
                order.number(),
                products.join("; "),
                locations.join(", ")
            )?;
        }
        self.pause("Press enter to go back.")
    }

    fn ship_order(&mut self) -> Result<Flow> {
        self.clear()?;
        let Some(order_number) = self.prompt_number::<OrderNumber>("Enter order number to ship: ")?
        else {
            return Ok(Flow::Quit);
        };

        match self.service.ship_order(ShipOrder::new(order_number)) {
            Ok(shipment) => {
                for line in &shipment.lines {
                    writeln!(
                        self.output,
                        "{} units shipped from location {}.",
                        line.quantity, line.location
                    )?;
                }
                if shipment.short_quantity() > 0 {
                    writeln!(
                        self.output,
                        "{} units could not be found and were not shipped.",
                        shipment.short_quantity()
                    )?;
                }
                self.notify(&format!(
                    "Order number {order_number} has been shipped. Thank you!"
                ))
            }
            Err(DomainError::Order(OrderError::NotFound(_))) => self.notify("Order not found."),
            Err(err) => self.notify(&err.to_string()),
        }
    }

    fn create_order(&mut self) -> Result<Flow> {
        self.clear()?;
        let Some(product_id) = self.prompt_number::<ProductId>("Enter product ID for the order: ")?
        else {
            return Ok(Flow::Quit);
        };
        let Some(quantity) = self.prompt_number::<u32>("Enter quantity for the order: ")? else {
            return Ok(Flow::Quit);
        };

        match self.service.create_order(PlaceOrder::new(product_id, quantity)) {
            Ok(order) => self.notify(&format!("Order created. Order number: {}.", order.number())),
            Err(DomainError::Order(OrderError::InsufficientStock { .. })) => {
                self.notify(ORDER_REJECTED)
            }
            Err(err) => self.notify(&err.to_string()),
        }
    }

    fn activity_log(&mut self) -> Result<Flow> {
        writeln!(self.output, "Activity Log:")?;
        for entry in self.service.history(&JournalQuery::new())? {
            writeln!(
                self.output,
                "#{} {} {} {}",
                entry.sequence,
                entry.recorded_at.format("%Y-%m-%d %H:%M:%S"),
                entry.event_type,
                entry.payload
            )?;
        }

        let pending: Vec<String> = self
            .service
            .pending_products()
            .iter()
            .map(ToString::to_string)
            .collect();
        if pending.is_empty() {
            writeln!(self.output, "No products awaiting shipment.")?;
        } else {
            writeln!(
                self.output,
                "Products awaiting shipment: {}",
                pending.join(", ")
            )?;
        }
        self.pause("Press enter to go back.")
    }

    fn metrics_report(&mut self) -> Result<Flow> {
        writeln!(self.output, "Metrics:")?;
        match &self.metrics {
            Some(handle) => write!(self.output, "{}", handle.render())?,
            None => writeln!(self.output, "No metrics recorder installed.")?,
        }
        self.pause("Press enter to go back.")
    }

    fn write_menu(&mut self, title: &str, items: &[&str]) -> Result<()> {
        writeln!(self.output, "{title}")?;
        for (i, item) in items.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, item)?;
        }
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        if self.config.clear_screen {
            write!(self.output, "{CLEAR_SCREEN}")?;
        }
        Ok(())
    }

    /// Writes `message` and waits for enter when pauses are enabled.
    fn notify(&mut self, message: &str) -> Result<Flow> {
        if self.config.pause {
            self.pause(&format!("{message} Press enter."))
        } else {
            writeln!(self.output, "{message}")?;
            Ok(Flow::Stay)
        }
    }

    fn pause(&mut self, message: &str) -> Result<Flow> {
        if !self.config.pause {
            return Ok(Flow::Stay);
        }
        writeln!(self.output, "{message}")?;
        match self.read_line()? {
            Some(_) => Ok(Flow::Stay),
            None => Ok(Flow::Quit),
        }
    }

    fn prompt_choice(&mut self) -> Result<Option<u32>> {
        self.prompt_number("Enter your choice: ")
    }

    /// Prompts until the line parses as `T`. Returns `None` at end of input.
    fn prompt_number<T: FromStr>(&mut self, text: &str) -> Result<Option<T>> {
        loop {
            let Some(line) = self.prompt(text)? else {
                return Ok(None);
            };
            match line.trim().parse() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.output, "Please enter a number.")?,
            }
        }
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Reads one line; bytes that are not UTF-8 become replacement characters.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&bytes);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

impl Flow {
    /// Submenus return to the main menu unless the session is over.
    fn leave_submenu(self) -> Flow {
        match self {
            Flow::Quit => Flow::Quit,
            _ => Flow::Stay,
        }
    }
}

//! Menu-driven console controller
//!
//! [`App`] wires the collaborators together (catalog, order book, pricing
//! engine, file store) and owns the interactive loop. Domain rules live
//! below this layer; the console validates prompt input, relays errors,
//! and prints results. Domain failures are printed and the menu loop
//! continues; only real I/O errors on the prompts propagate out.

mod input;

use shared::AppResult;
use shared::models::catalog::{BeverageSize, CatalogEntry, EntryKind};
use shared::models::order::{MAX_QUANTITY, Order};

use crate::catalog::Catalog;
use crate::core::Config;
use crate::orders::OrderBook;
use crate::persistence::FileStore;
use crate::pricing::PricingEngine;
use crate::pricing::money::{format_percent, format_rupiah};
use crate::receipt::ReceiptRenderer;
use crate::utils::validation::{
    self, MAX_DESCRIPTION_LEN, MAX_LABEL_LEN, MAX_NAME_LEN, MAX_TAG_LEN,
};

/// Upper bound for price and amount prompts
const MAX_PRICE_INPUT: f64 = 1_000_000.0;

/// The interactive application
pub struct App {
    config: Config,
    catalog: Catalog,
    book: OrderBook,
    engine: PricingEngine,
    store: FileStore,
}

impl App {
    /// Load state from disk and wire up the collaborators
    pub fn bootstrap(config: Config) -> Self {
        let store = FileStore::from_config(&config);
        let load = store.load_catalog(&config.restaurant_name);
        if load.defaulted {
            println!("No menu file found; starting with the built-in menu.");
        } else if load.skipped > 0 {
            println!(
                "Menu loaded with {} unreadable record(s) skipped.",
                load.skipped
            );
        }

        let book = OrderBook::new(config.tax_rate, config.service_fee);
        let engine = PricingEngine::new(config.discount_policy);
        Self {
            config,
            catalog: load.catalog,
            book,
            engine,
            store,
        }
    }

    /// Run the main menu loop until the user exits
    pub fn run(&mut self) -> AppResult<()> {
        loop {
            println!("\n===== {} =====", self.config.restaurant_name);
            println!("1. View menu");
            println!("2. Manage menu");
            println!("3. Take an order");
            println!("4. Completed orders");
            println!("5. Files & data");
            println!("0. Exit");
            match input::read_i32_in("Choose: ", 0, 5)? {
                1 => self.view_menu(),
                2 => self.manage_menu()?,
                3 => self.order_menu()?,
                4 => self.completed_menu()?,
                5 => self.files_menu()?,
                0 => {
                    self.save_menu_on_exit();
                    println!("Goodbye!");
                    return Ok(());
                }
                _ => {}
            }
        }
    }

    /// Save the menu before quitting; a failure is reported but never
    /// blocks the exit.
    fn save_menu_on_exit(&self) {
        match self.store.save_catalog(&self.catalog) {
            Ok(()) => println!("Menu saved."),
            Err(e) => {
                tracing::warn!(error = %e, "Menu save failed on exit");
                println!("Warning: the menu could not be saved ({e}).");
            }
        }
    }

    // ==================== Menu display ====================

    fn view_menu(&self) {
        if self.catalog.is_empty() {
            println!("The menu is empty.");
            return;
        }

        let foods = self.catalog.foods();
        if !foods.is_empty() {
            println!("\n--- FOOD ---");
            for entry in foods {
                println!("  {}", describe(entry));
            }
        }
        let beverages = self.catalog.beverages();
        if !beverages.is_empty() {
            println!("\n--- BEVERAGES ---");
            for entry in beverages {
                println!("  {}", describe(entry));
            }
        }
        let discounts = self.catalog.discounts();
        if !discounts.is_empty() {
            println!("\n--- DISCOUNTS ---");
            for entry in discounts {
                println!("  {}", describe(entry));
            }
        }
    }

    // ==================== Manage menu ====================

    fn manage_menu(&mut self) -> AppResult<()> {
        loop {
            println!("\n===== MANAGE MENU =====");
            println!("1. Add food");
            println!("2. Add beverage");
            println!("3. Add discount");
            println!("4. Edit entry");
            println!("5. Toggle discount active");
            println!("6. Remove entry");
            println!("7. Find entry");
            println!("8. Sort entries");
            println!("9. Statistics");
            println!("0. Back");
            match input::read_i32_in("Choose: ", 0, 9)? {
                1 => self.add_food()?,
                2 => self.add_beverage()?,
                3 => self.add_discount()?,
                4 => self.edit_entry()?,
                5 => self.toggle_discount()?,
                6 => self.remove_entry()?,
                7 => self.find_entry()?,
                8 => self.sort_entries()?,
                9 => self.show_statistics(),
                0 => return Ok(()),
                _ => {}
            }
        }
    }

    fn add_food(&mut self) -> AppResult<()> {
        let name = read_valid_text("Name: ", "name", MAX_NAME_LEN)?;
        let price = input::read_f64_in("Price: ", 0.0, MAX_PRICE_INPUT)?;
        let category =
            read_valid_text_or("Category (Enter for 'food'): ", "food", "category", MAX_TAG_LEN)?;
        let subtype = read_valid_text_or(
            "Subtype (Enter for 'main'): ",
            "main",
            "subtype",
            MAX_TAG_LEN,
        )?;
        let spice = read_valid_text_or(
            "Spice level (Enter for 'none'): ",
            "none",
            "spice level",
            MAX_TAG_LEN,
        )?;

        match self.catalog.add_food(name, price, category, subtype, spice) {
            Ok(entry) => println!("Added: {}", describe(entry)),
            Err(e) => println!("Error: {e}"),
        }
        Ok(())
    }

    fn add_beverage(&mut self) -> AppResult<()> {
        let name = read_valid_text("Name: ", "name", MAX_NAME_LEN)?;
        let price = input::read_f64_in("Price: ", 0.0, MAX_PRICE_INPUT)?;
        let category = read_valid_text_or(
            "Category (Enter for 'beverage'): ",
            "beverage",
            "category",
            MAX_TAG_LEN,
        )?;
        let subtype = read_valid_text_or(
            "Subtype (Enter for 'normal'): ",
            "normal",
            "subtype",
            MAX_TAG_LEN,
        )?;
        let size = BeverageSize::parse_lenient(&input::read_line_or(
            "Size (small/medium/large, Enter for medium): ",
            "medium",
        )?);
        let sweetened = input::read_bool("Sweetened? (y/n): ")?;

        match self
            .catalog
            .add_beverage(name, price, category, subtype, size, sweetened)
        {
            Ok(entry) => println!("Added: {}", describe(entry)),
            Err(e) => println!("Error: {e}"),
        }
        Ok(())
    }

    fn add_discount(&mut self) -> AppResult<()> {
        let name = read_valid_text("Name: ", "name", MAX_NAME_LEN)?;
        let category = read_valid_text_or(
            "Category (Enter for 'discount'): ",
            "discount",
            "category",
            MAX_TAG_LEN,
        )?;
        let rate = input::read_f64_in("Discount rate in percent (0-100): ", 0.0, 100.0)? / 100.0;
        let min_purchase =
            input::read_f64_in("Minimum purchase (0 for none): ", 0.0, MAX_PRICE_INPUT)?;
        let condition = read_optional_text("Condition (Enter for none): ", "condition")?;
        let active = input::read_bool("Active right away? (y/n): ")?;

        match self.catalog.add_discount(
            name,
            category,
            rate,
            min_purchase,
            condition.unwrap_or_default(),
            active,
        ) {
            Ok(entry) => println!("Added: {}", describe(entry)),
            Err(e) => println!("Error: {e}"),
        }
        Ok(())
    }

    /// Edit an entry's name and price together, applying both only after
    /// confirmation. Empty answers keep the current values; discount
    /// entries have no price to edit.
    fn edit_entry(&mut self) -> AppResult<()> {
        let id = input::read_u32("Entry id: ")?;
        let Some(entry) = self.catalog.find_by_id(id) else {
            println!("No menu entry with id {id}.");
            return Ok(());
        };
        println!("Editing: {}", describe(entry));
        let has_price = !entry.is_discount();

        let name = loop {
            let raw = input::read_line("New name (Enter to keep): ")?;
            if raw.is_empty() {
                break None;
            }
            match validation::validate_required_text(&raw, "name", MAX_NAME_LEN) {
                Ok(()) => break Some(raw),
                Err(e) => println!("{e}"),
            }
        };
        let price = if has_price {
            loop {
                let raw = input::read_line("New price (Enter to keep): ")?;
                if raw.is_empty() {
                    break None;
                }
                match raw.parse::<f64>() {
                    Ok(v) if v.is_finite() && (0.0..=MAX_PRICE_INPUT).contains(&v) => {
                        break Some(v);
                    }
                    _ => println!("Enter an amount between 0 and {MAX_PRICE_INPUT}."),
                }
            }
        } else {
            None
        };

        if name.is_none() && price.is_none() {
            println!("Nothing to change.");
            return Ok(());
        }
        if !input::read_bool("Apply the changes? (y/n): ")? {
            println!("No changes made.");
            return Ok(());
        }

        if let Some(name) = name {
            match self.catalog.update_name(id, name) {
                Ok(()) => println!("Name updated."),
                Err(e) => println!("Error: {e}"),
            }
        }
        if let Some(price) = price {
            match self.catalog.update_price(id, price) {
                Ok(()) => println!("Price updated."),
                Err(e) => println!("Error: {e}"),
            }
        }
        Ok(())
    }

    fn toggle_discount(&mut self) -> AppResult<()> {
        let id = input::read_u32("Discount entry id: ")?;
        let active = match self.catalog.find_by_id(id) {
            Some(CatalogEntry {
                kind: EntryKind::Discount { active, .. },
                ..
            }) => *active,
            Some(_) => {
                println!("Entry {id} is not a discount.");
                return Ok(());
            }
            None => {
                println!("No menu entry with id {id}.");
                return Ok(());
            }
        };

        match self.catalog.set_discount_active(id, !active) {
            Ok(()) => println!(
                "Discount {id} is now {}.",
                if active { "inactive" } else { "active" }
            ),
            Err(e) => println!("Error: {e}"),
        }
        Ok(())
    }

    fn remove_entry(&mut self) -> AppResult<()> {
        let id = input::read_u32("Entry id: ")?;
        if self.catalog.remove(id) {
            println!("Entry {id} removed.");
        } else {
            println!("No menu entry with id {id}.");
        }
        Ok(())
    }

    fn find_entry(&self) -> AppResult<()> {
        let name = input::read_line("Name to find: ")?;
        match self.catalog.find_by_name(&name) {
            Some(entry) => println!("Found: {}", describe(entry)),
            None => println!("No entry named '{name}'."),
        }
        Ok(())
    }

    fn sort_entries(&mut self) -> AppResult<()> {
        println!("1. By price");
        println!("2. By name");
        match input::read_i32_in("Sort: ", 1, 2)? {
            1 => {
                self.catalog.sort_by_price();
                println!("Sorted by price.");
            }
            2 => {
                self.catalog.sort_by_name();
                println!("Sorted by name.");
            }
            _ => {}
        }
        self.view_menu();
        Ok(())
    }

    fn show_statistics(&self) {
        let stats = self.catalog.statistics();
        println!("\n===== STATISTICS =====");
        println!(
            "Entries: {} ({} food, {} beverages, {} discounts)",
            stats.total, stats.foods, stats.beverages, stats.discounts
        );
        println!("Sellable menu value: {}", format_rupiah(stats.total_value));

        let revenue = self
            .engine
            .revenue_statistics(self.book.completed(), &self.catalog);
        println!("Completed orders: {}", revenue.orders);
        if revenue.orders > 0 {
            println!("Total revenue: {}", format_rupiah(revenue.revenue));
            println!("Average per order: {}", format_rupiah(revenue.average));
        }
    }

    // ==================== Order menu ====================

    fn order_menu(&mut self) -> AppResult<()> {
        if self.book.active().is_none() {
            let customer = read_valid_text_or(
                "Customer name (Enter for walk-in): ",
                "Walk-in",
                "customer name",
                MAX_LABEL_LEN,
            )?;
            let table = read_valid_text_or(
                "Table (Enter for take-away): ",
                "Take Away",
                "table",
                MAX_LABEL_LEN,
            )?;
            match self.book.start_order(customer, table) {
                Ok(order) => println!("Order #{} opened for {}.", order.id(), order.customer()),
                Err(e) => {
                    println!("Error: {e}");
                    return Ok(());
                }
            }
        }

        loop {
            println!("\n===== ORDER =====");
            println!("1. View menu");
            println!("2. Add item");
            println!("3. Change quantity");
            println!("4. Remove item");
            println!("5. View order");
            println!("6. Checkout");
            println!("7. Cancel order");
            println!("0. Back (order stays open)");
            match input::read_i32_in("Choose: ", 0, 7)? {
                1 => self.view_menu(),
                2 => self.add_order_item()?,
                3 => self.change_order_quantity()?,
                4 => self.remove_order_item()?,
                5 => self.view_active_order(),
                6 => {
                    if self.checkout()? {
                        return Ok(());
                    }
                }
                7 => {
                    if self.cancel_order()? {
                        return Ok(());
                    }
                }
                0 => return Ok(()),
                _ => {}
            }
        }
    }

    fn add_order_item(&mut self) -> AppResult<()> {
        let id = input::read_u32("Menu entry id: ")?;
        let Some(entry) = self.catalog.find_by_id(id) else {
            println!("No menu entry with id {id}.");
            return Ok(());
        };

        let quantity = input::read_i32_in("Quantity: ", 1, MAX_QUANTITY)?;
        let note_raw = input::read_line("Note (Enter for none): ")?;
        let note = if note_raw.is_empty() {
            None
        } else {
            Some(note_raw)
        };

        let Some(order) = self.book.active_mut() else {
            println!("No order in progress.");
            return Ok(());
        };
        match order.add_item(entry, quantity, note) {
            Ok(line) => println!("{} x {} on the order.", line.quantity, line.name),
            Err(e) => println!("Error: {e}"),
        }
        Ok(())
    }

    fn change_order_quantity(&mut self) -> AppResult<()> {
        let Some(order) = self.book.active_mut() else {
            println!("No order in progress.");
            return Ok(());
        };
        let id = input::read_u32("Menu entry id: ")?;
        let quantity = input::read_i32_in("New quantity (0 removes): ", 0, MAX_QUANTITY)?;
        match order.set_quantity(id, quantity) {
            Ok(true) if quantity == 0 => println!("Item removed."),
            Ok(true) => println!("Quantity updated."),
            Ok(false) => println!("That entry is not on the order."),
            Err(e) => println!("Error: {e}"),
        }
        Ok(())
    }

    fn remove_order_item(&mut self) -> AppResult<()> {
        let Some(order) = self.book.active_mut() else {
            println!("No order in progress.");
            return Ok(());
        };
        let id = input::read_u32("Menu entry id: ")?;
        match order.remove_item(id) {
            Ok(true) => println!("Item removed."),
            Ok(false) => println!("That entry is not on the order."),
            Err(e) => println!("Error: {e}"),
        }
        Ok(())
    }

    fn view_active_order(&self) {
        let Some(order) = self.book.active() else {
            println!("No order in progress.");
            return;
        };

        let breakdown = self.engine.price(order, &self.catalog);
        println!(
            "\nOrder #{} - {} (table {})",
            order.id(),
            order.customer(),
            order.table()
        );
        if breakdown.lines.is_empty() {
            println!("  (no items yet)");
        }
        for line in &breakdown.lines {
            println!(
                "  {} x {} = {}",
                line.quantity,
                line.name,
                format_rupiah(line.line_total)
            );
            if let Some(note) = &line.note {
                println!("      Note: {note}");
            }
        }
        println!("  Subtotal     : {}", format_rupiah(breakdown.subtotal));
        println!(
            "  Tax ({}%)   : {}",
            format_percent(breakdown.tax_rate),
            format_rupiah(breakdown.tax)
        );
        println!("  Service fee  : {}", format_rupiah(breakdown.service_fee));
        if breakdown.has_discount() {
            println!(
                "  Discount     : -{}",
                format_rupiah(breakdown.discount_amount)
            );
        }
        println!("  Projected    : {}", format_rupiah(breakdown.total));
    }

    /// Finalize, price, print the receipt, log history, archive.
    /// Returns `false` when checkout could not start (the order stays open).
    fn checkout(&mut self) -> AppResult<bool> {
        let order = match self.book.finalize_active() {
            Ok(order) => order,
            Err(e) => {
                println!("Cannot check out: {e}");
                return Ok(false);
            }
        };

        let breakdown = self.engine.price(&order, &self.catalog);
        let receipt = ReceiptRenderer::new(
            &order,
            &breakdown,
            &self.config.restaurant_name,
            self.config.receipt_width,
        )
        .render();
        println!("\n{receipt}");

        if let Err(e) = self.store.append_order_history(&order, &breakdown) {
            tracing::warn!(
                order_id = order.id(),
                error = %e,
                "History append failed during checkout"
            );
            println!("Warning: the order could not be written to the history log ({e}).");
        }

        self.book.archive(order);
        println!("Order completed.");
        Ok(true)
    }

    fn cancel_order(&mut self) -> AppResult<bool> {
        if !input::read_bool("Cancel this order? (y/n): ")? {
            return Ok(false);
        }
        if let Some(order) = self.book.cancel_active() {
            println!("Order #{} cancelled.", order.id());
        }
        Ok(true)
    }

    // ==================== Completed orders ====================

    fn completed_menu(&mut self) -> AppResult<()> {
        loop {
            println!("\n===== COMPLETED ORDERS =====");
            println!("1. List");
            println!("2. Detail by id");
            println!("0. Back");
            match input::read_i32_in("Choose: ", 0, 2)? {
                1 => self.list_completed(),
                2 => self.completed_detail()?,
                0 => return Ok(()),
                _ => {}
            }
        }
    }

    fn list_completed(&self) {
        if self.book.completed().is_empty() {
            println!("No completed orders yet.");
            return;
        }
        for order in self.book.completed() {
            println!(
                "  #{} {} (table {}) - {} item(s)",
                order.id(),
                order.customer(),
                order.table(),
                order.total_quantity()
            );
        }
    }

    fn completed_detail(&self) -> AppResult<()> {
        let id = input::read_u32("Order id: ")?;
        let Some(order) = self.book.find_completed(id) else {
            println!("No completed order with id {id}.");
            return Ok(());
        };
        print_order_detail(order);
        Ok(())
    }

    // ==================== Files & data ====================

    fn files_menu(&mut self) -> AppResult<()> {
        loop {
            println!("\n===== FILES & DATA =====");
            println!("1. Save menu");
            println!("2. Reload menu");
            println!("3. View order history");
            println!("4. Clear order history");
            println!("5. Backup");
            println!("6. Export CSV");
            println!("7. File status");
            println!("0. Back");
            match input::read_i32_in("Choose: ", 0, 7)? {
                1 => match self.store.save_catalog(&self.catalog) {
                    Ok(()) => println!("Menu saved."),
                    Err(e) => println!("Error: {e}"),
                },
                2 => self.reload_menu(),
                3 => self.view_history(),
                4 => self.clear_history()?,
                5 => match self.store.backup(&self.catalog, self.book.completed()) {
                    Ok(()) => println!("Backup written."),
                    Err(e) => println!("Error: {e}"),
                },
                6 => match self.store.export_csv(&self.catalog) {
                    Ok(()) => println!("CSV export written."),
                    Err(e) => println!("Error: {e}"),
                },
                7 => self.file_status(),
                0 => return Ok(()),
                _ => {}
            }
        }
    }

    fn reload_menu(&mut self) {
        let load = self.store.load_catalog(&self.config.restaurant_name);
        if load.defaulted {
            println!("Menu file unavailable; the built-in menu is now active.");
        } else {
            println!(
                "Menu reloaded: {} entries ({} skipped).",
                load.catalog.len(),
                load.skipped
            );
        }
        self.catalog = load.catalog;
    }

    fn view_history(&self) {
        match self.store.read_order_history() {
            Ok(Some(raw)) => println!("\n{raw}"),
            Ok(None) => println!("No order history yet."),
            Err(e) => println!("Error: {e}"),
        }
    }

    fn clear_history(&mut self) -> AppResult<()> {
        if !input::read_bool("Really clear the order history? (y/n): ")? {
            return Ok(());
        }
        match self.store.clear_order_history() {
            Ok(true) => println!("Order history cleared."),
            Ok(false) => println!("There was no order history to clear."),
            Err(e) => println!("Error: {e}"),
        }
        Ok(())
    }

    fn file_status(&self) {
        println!("\n===== FILE STATUS =====");
        for status in self.store.file_summary() {
            if status.exists {
                println!(
                    "  {:<11} {} ({} bytes)",
                    status.label,
                    status.path.display(),
                    status.size_bytes
                );
            } else {
                println!("  {:<11} {} (missing)", status.label, status.path.display());
            }
        }
    }
}

/// One display line for a catalog entry
fn describe(entry: &CatalogEntry) -> String {
    match &entry.kind {
        EntryKind::Food {
            subtype,
            spice_level,
        } => format!(
            "[{}] {} - {} ({subtype}, spice: {spice_level})",
            entry.id,
            entry.name,
            format_rupiah(entry.price)
        ),
        EntryKind::Beverage {
            subtype,
            size,
            sweetened,
        } => format!(
            "[{}] {} - {} ({subtype}, {}, {})",
            entry.id,
            entry.name,
            format_rupiah(entry.price),
            size.label(),
            if *sweetened { "sweetened" } else { "unsweetened" }
        ),
        EntryKind::Discount {
            rate,
            min_purchase,
            condition,
            active,
        } => {
            let state = if *active { "active" } else { "inactive" };
            let mut text = format!(
                "[{}] {} - {}% off min {} [{state}]",
                entry.id,
                entry.name,
                format_percent(*rate),
                format_rupiah(*min_purchase)
            );
            if !condition.is_empty() {
                text.push_str(&format!(" ({condition})"));
            }
            text
        }
    }
}

fn print_order_detail(order: &Order) {
    println!(
        "\nOrder #{} - {} (table {})",
        order.id(),
        order.customer(),
        order.table()
    );
    println!("Opened {}", order.created_at().format("%d-%m-%Y %H:%M:%S"));
    for item in order.items() {
        println!(
            "  {} x {} @ {}",
            item.quantity,
            item.name,
            format_rupiah(item.unit_price)
        );
        if let Some(note) = &item.note {
            println!("      Note: {note}");
        }
    }
}

/// Prompt until the text passes the required-field validation
fn read_valid_text(prompt: &str, field: &str, max_len: usize) -> AppResult<String> {
    loop {
        let value = input::read_line(prompt)?;
        match validation::validate_required_text(&value, field, max_len) {
            Ok(()) => return Ok(value),
            Err(e) => println!("{e}"),
        }
    }
}

/// Prompt with a default until the text passes the required-field validation
fn read_valid_text_or(
    prompt: &str,
    default: &str,
    field: &str,
    max_len: usize,
) -> AppResult<String> {
    loop {
        let value = input::read_line_or(prompt, default)?;
        match validation::validate_required_text(&value, field, max_len) {
            Ok(()) => return Ok(value),
            Err(e) => println!("{e}"),
        }
    }
}

/// Prompt for optional text, re-prompting while it fails validation
fn read_optional_text(prompt: &str, field: &str) -> AppResult<Option<String>> {
    loop {
        let raw = input::read_line(prompt)?;
        let value = if raw.is_empty() { None } else { Some(raw) };
        match validation::validate_optional_text(&value, field, MAX_DESCRIPTION_LEN) {
            Ok(()) => return Ok(value),
            Err(e) => println!("{e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::pricing::DiscountPolicy;

    fn test_config(dir: &std::path::Path) -> Config {
        Config {
            restaurant_name: "Test Warung".into(),
            menu_file: dir.join("menu.txt").display().to_string(),
            history_file: dir.join("history.txt").display().to_string(),
            backup_file: dir.join("backup.json").display().to_string(),
            csv_file: dir.join("export.csv").display().to_string(),
            tax_rate: 0.10,
            service_fee: 20000.0,
            discount_policy: DiscountPolicy::EntryDriven,
            receipt_width: 65,
            log_level: "info".into(),
            log_dir: dir.join("logs").display().to_string(),
        }
    }

    fn create_test_app(config: Config) -> App {
        let store = FileStore::from_config(&config);
        let book = OrderBook::new(config.tax_rate, config.service_fee);
        let engine = PricingEngine::new(config.discount_policy);
        App {
            catalog: Catalog::new(&config.restaurant_name),
            config,
            book,
            engine,
            store,
        }
    }

    #[test]
    fn test_exit_save_persists_menu_edits() {
        let dir = tempdir().unwrap();
        let mut app = create_test_app(test_config(dir.path()));
        app.catalog
            .add_food("Coto Makassar", 42000.0, "food", "main", "medium")
            .unwrap();

        app.save_menu_on_exit();

        let reloaded = app.store.load_catalog("Test Warung");
        assert!(!reloaded.defaulted);
        assert_eq!(reloaded.catalog.len(), 1);
        assert_eq!(reloaded.catalog.entries()[0].name, "Coto Makassar");
    }

    #[test]
    fn test_exit_save_failure_reports_and_continues() {
        let dir = tempdir().unwrap();
        let mut config = test_config(dir.path());
        // a target inside a directory that does not exist cannot be written
        config.menu_file = dir.path().join("missing/menu.txt").display().to_string();
        let app = create_test_app(config);

        app.save_menu_on_exit();
        assert!(!dir.path().join("missing/menu.txt").exists());
    }
}

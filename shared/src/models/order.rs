//! Order and line-item model
//!
//! An order collects line items against catalog entries while `Open`, then
//! becomes immutable once `Finalized`. Every mutating method enforces the
//! open-state guard; the transition is one-way.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::catalog::CatalogEntry;

/// Tax rate applied to new orders unless overridden
pub const DEFAULT_TAX_RATE: f64 = 0.10;
/// Flat service fee applied to new orders unless overridden
pub const DEFAULT_SERVICE_FEE: f64 = 20000.0;
/// Upper bound for a single line's quantity
pub const MAX_QUANTITY: i32 = 9999;
/// Upper bound for a line note, in characters
pub const MAX_NOTE_LEN: usize = 120;

/// Lifecycle of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Open,
    Finalized,
}

/// One ordered row: a catalog entry reference plus quantity and note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Catalog entry this line refers to
    pub entry_id: u32,
    /// Entry name captured when the line was added
    pub name: String,
    /// Entry base price captured when the line was added; display only,
    /// line totals are recomputed from the catalog at pricing time
    pub unit_price: f64,
    pub quantity: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A customer order: line items plus per-order tax rate and service fee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    id: u32,
    customer: String,
    table: String,
    created_at: DateTime<Local>,
    items: Vec<LineItem>,
    tax_rate: f64,
    service_fee: f64,
    status: OrderStatus,
}

impl Order {
    /// Create an empty open order; the timestamp is injected by the caller
    pub fn new(
        id: u32,
        customer: impl Into<String>,
        table: impl Into<String>,
        created_at: DateTime<Local>,
    ) -> Self {
        Self {
            id,
            customer: customer.into(),
            table: table.into(),
            created_at,
            items: Vec::new(),
            tax_rate: DEFAULT_TAX_RATE,
            service_fee: DEFAULT_SERVICE_FEE,
            status: OrderStatus::Open,
        }
    }

    // ==================== Accessors ====================

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn tax_rate(&self) -> f64 {
        self.tax_rate
    }

    pub fn service_fee(&self) -> f64 {
        self.service_fee
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn is_open(&self) -> bool {
        self.status == OrderStatus::Open
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all line quantities
    pub fn total_quantity(&self) -> i32 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    // ==================== Mutations (open orders only) ====================

    fn ensure_open(&self) -> AppResult<()> {
        if self.status != OrderStatus::Open {
            return Err(AppError::invalid_input(format!(
                "order #{} is finalized and read-only",
                self.id
            )));
        }
        Ok(())
    }

    /// Add an entry to the order, merging with an existing line for the
    /// same entry id. Merging keeps the original line's note; the incoming
    /// note is dropped.
    pub fn add_item(
        &mut self,
        entry: &CatalogEntry,
        quantity: i32,
        note: Option<String>,
    ) -> AppResult<&LineItem> {
        self.ensure_open()?;
        if entry.is_discount() {
            return Err(AppError::invalid_input(format!(
                "'{}' is a discount and cannot be ordered",
                entry.name
            )));
        }
        if quantity <= 0 {
            return Err(AppError::invalid_input("quantity must be at least 1"));
        }
        if quantity > MAX_QUANTITY {
            return Err(AppError::invalid_input(format!(
                "quantity must not exceed {MAX_QUANTITY}"
            )));
        }
        let note = clean_note(note)?;

        match self.items.iter().position(|line| line.entry_id == entry.id) {
            Some(pos) => {
                let merged = self.items[pos].quantity.saturating_add(quantity);
                if merged > MAX_QUANTITY {
                    return Err(AppError::invalid_input(format!(
                        "line quantity would exceed {MAX_QUANTITY}"
                    )));
                }
                self.items[pos].quantity = merged;
                Ok(&self.items[pos])
            }
            None => {
                self.items.push(LineItem {
                    entry_id: entry.id,
                    name: entry.name.clone(),
                    unit_price: entry.price,
                    quantity,
                    note,
                });
                let pos = self.items.len() - 1;
                Ok(&self.items[pos])
            }
        }
    }

    /// Remove the first line referencing `entry_id`; `Ok(false)` when absent
    pub fn remove_item(&mut self, entry_id: u32) -> AppResult<bool> {
        self.ensure_open()?;
        match self.items.iter().position(|line| line.entry_id == entry_id) {
            Some(pos) => {
                self.items.remove(pos);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Change a line's quantity in place; zero or less removes the line
    pub fn set_quantity(&mut self, entry_id: u32, new_quantity: i32) -> AppResult<bool> {
        self.ensure_open()?;
        if new_quantity <= 0 {
            return self.remove_item(entry_id);
        }
        if new_quantity > MAX_QUANTITY {
            return Err(AppError::invalid_input(format!(
                "quantity must not exceed {MAX_QUANTITY}"
            )));
        }
        match self.items.iter_mut().find(|line| line.entry_id == entry_id) {
            Some(line) => {
                line.quantity = new_quantity;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Override the tax rate for this order
    pub fn set_tax_rate(&mut self, rate: f64) -> AppResult<()> {
        self.ensure_open()?;
        if !rate.is_finite() || !(0.0..=1.0).contains(&rate) {
            return Err(AppError::invalid_input(
                "tax rate must be between 0.0 and 1.0",
            ));
        }
        self.tax_rate = rate;
        Ok(())
    }

    /// Override the flat service fee for this order
    pub fn set_service_fee(&mut self, fee: f64) -> AppResult<()> {
        self.ensure_open()?;
        if !fee.is_finite() || fee < 0.0 {
            return Err(AppError::invalid_input("service fee must not be negative"));
        }
        self.service_fee = fee;
        Ok(())
    }

    /// Transition `Open` to `Finalized`; empty orders are rejected and the
    /// order stays open
    pub fn finalize(&mut self) -> AppResult<()> {
        if self.status == OrderStatus::Finalized {
            return Err(AppError::invalid_input(format!(
                "order #{} is already finalized",
                self.id
            )));
        }
        if self.items.is_empty() {
            return Err(AppError::invalid_input("cannot finalize an empty order"));
        }
        self.status = OrderStatus::Finalized;
        Ok(())
    }
}

fn clean_note(note: Option<String>) -> AppResult<Option<String>> {
    match note {
        Some(raw) => {
            let trimmed = raw.trim();
            let len = trimmed.chars().count();
            if len > MAX_NOTE_LEN {
                return Err(AppError::invalid_input(format!(
                    "note too long ({len} chars, max {MAX_NOTE_LEN})"
                )));
            }
            if trimmed.is_empty() {
                Ok(None)
            } else {
                Ok(Some(trimmed.to_string()))
            }
        }
        None => Ok(None),
    }
}

//! Order lifecycle
//!
//! At most one order is open at a time. Orders move from the active slot
//! through finalization into the completed list; a cancelled order is
//! dropped without leaving a trace.

use chrono::Local;
use shared::models::order::Order;
use shared::{AppError, AppResult};

use crate::utils::IdAllocator;

/// Tracks the single active order and the completed ones
#[derive(Debug)]
pub struct OrderBook {
    ids: IdAllocator,
    active: Option<Order>,
    completed: Vec<Order>,
    tax_rate: f64,
    service_fee: f64,
}

impl OrderBook {
    /// The given tax rate and service fee are stamped onto each new order
    pub fn new(tax_rate: f64, service_fee: f64) -> Self {
        Self {
            ids: IdAllocator::new(),
            active: None,
            completed: Vec::new(),
            tax_rate,
            service_fee,
        }
    }

    /// Open a new order. Fails while another order is in progress.
    pub fn start_order(
        &mut self,
        customer: impl Into<String>,
        table: impl Into<String>,
    ) -> AppResult<&Order> {
        if self.active.is_some() {
            return Err(AppError::invalid_input(
                "an order is already in progress; finish or cancel it first",
            ));
        }

        let id = self.ids.next_id();
        let mut order = Order::new(id, customer, table, Local::now());
        order.set_tax_rate(self.tax_rate)?;
        order.set_service_fee(self.service_fee)?;

        tracing::info!(order_id = id, "Order opened");
        Ok(self.active.insert(order))
    }

    pub fn active(&self) -> Option<&Order> {
        self.active.as_ref()
    }

    pub fn active_mut(&mut self) -> Option<&mut Order> {
        self.active.as_mut()
    }

    /// Drop the active order without persisting anything
    pub fn cancel_active(&mut self) -> Option<Order> {
        let order = self.active.take();
        if let Some(order) = &order {
            tracing::info!(order_id = order.id(), "Order cancelled");
        }
        order
    }

    /// Finalize and detach the active order. On failure (no order in
    /// progress, or an empty one) the order stays active and open.
    pub fn finalize_active(&mut self) -> AppResult<Order> {
        let Some(mut order) = self.active.take() else {
            return Err(AppError::invalid_input("no order is in progress"));
        };
        if let Err(e) = order.finalize() {
            self.active = Some(order);
            return Err(e);
        }
        tracing::info!(order_id = order.id(), "Order finalized");
        Ok(order)
    }

    /// Park a checked-out order on the completed list
    pub fn archive(&mut self, order: Order) {
        self.completed.push(order);
    }

    pub fn completed(&self) -> &[Order] {
        &self.completed
    }

    pub fn find_completed(&self, id: u32) -> Option<&Order> {
        self.completed.iter().find(|order| order.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use shared::models::catalog::CatalogEntry;
    use shared::models::order::OrderStatus;

    use super::*;

    fn create_test_entry() -> CatalogEntry {
        CatalogEntry::food(1, "Coto Makassar", 42000.0, "food", "main", "medium").unwrap()
    }

    #[test]
    fn test_start_order_rejects_second_active() {
        let mut book = OrderBook::new(0.10, 20000.0);
        book.start_order("Budi", "12").unwrap();

        let err = book.start_order("Sari", "5").unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(book.active().unwrap().customer(), "Budi");
    }

    #[test]
    fn test_order_ids_keep_counting_after_cancel() {
        let mut book = OrderBook::new(0.10, 20000.0);
        assert_eq!(book.start_order("Budi", "12").unwrap().id(), 1);
        book.cancel_active().unwrap();
        assert_eq!(book.start_order("Sari", "5").unwrap().id(), 2);
    }

    #[test]
    fn test_start_order_applies_configured_rates() {
        let mut book = OrderBook::new(0.11, 5000.0);
        let order = book.start_order("Budi", "12").unwrap();
        assert_eq!(order.tax_rate(), 0.11);
        assert_eq!(order.service_fee(), 5000.0);
    }

    #[test]
    fn test_finalize_empty_order_keeps_it_active() {
        let mut book = OrderBook::new(0.10, 20000.0);
        book.start_order("Budi", "12").unwrap();

        let err = book.finalize_active().unwrap_err();
        assert!(err.is_invalid_input());
        let active = book.active().unwrap();
        assert!(active.is_open());

        book.active_mut()
            .unwrap()
            .add_item(&create_test_entry(), 1, None)
            .unwrap();
        let order = book.finalize_active().unwrap();
        assert_eq!(order.status(), OrderStatus::Finalized);
        assert!(book.active().is_none());
    }

    #[test]
    fn test_finalize_without_active_order_fails() {
        let mut book = OrderBook::new(0.10, 20000.0);
        assert!(book.finalize_active().is_err());
    }

    #[test]
    fn test_cancel_clears_the_slot() {
        let mut book = OrderBook::new(0.10, 20000.0);
        book.start_order("Budi", "12").unwrap();

        let cancelled = book.cancel_active().unwrap();
        assert_eq!(cancelled.id(), 1);
        assert!(book.active().is_none());
        assert!(book.cancel_active().is_none());
    }

    #[test]
    fn test_archive_and_find_completed() {
        let mut book = OrderBook::new(0.10, 20000.0);
        book.start_order("Budi", "12").unwrap();
        book.active_mut()
            .unwrap()
            .add_item(&create_test_entry(), 2, None)
            .unwrap();
        let order = book.finalize_active().unwrap();
        book.archive(order);

        assert_eq!(book.completed().len(), 1);
        assert_eq!(book.find_completed(1).unwrap().customer(), "Budi");
        assert!(book.find_completed(9).is_none());
    }
}

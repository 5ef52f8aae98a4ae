//! Pricing engine
//!
//! Turns an order plus the current catalog into a complete [`PriceBreakdown`]:
//!
//! 1. per-line totals from the referenced entries' current prices, with
//!    beverage size multipliers applied at this point rather than at add time
//! 2. subtotal, then tax from the order's tax rate
//! 3. pre-discount total = subtotal + tax + service fee
//! 4. discount per the configured [`DiscountPolicy`]
//! 5. final total, clamped at zero
//!
//! Pricing is a pure computation: nothing here mutates the order or the
//! catalog, so the same order can be re-priced while it is being composed
//! and once more at checkout.

pub mod money;
mod strategy;

pub use strategy::{DiscountOutcome, DiscountPolicy};

use rust_decimal::Decimal;
use shared::models::catalog::EntryKind;
use shared::models::order::{LineItem, Order};

use crate::catalog::Catalog;
use money::{round_money, to_decimal, to_f64};

/// One priced order line
#[derive(Debug, Clone, PartialEq)]
pub struct PricedLine {
    pub name: String,
    pub quantity: i32,
    /// Unit price captured when the line was added (receipt unit column)
    pub unit_price: f64,
    /// Quantity times the entry's current effective price
    pub line_total: f64,
    pub note: Option<String>,
}

/// Complete computed totals for one order
#[derive(Debug, Clone, PartialEq)]
pub struct PriceBreakdown {
    pub lines: Vec<PricedLine>,
    pub subtotal: f64,
    pub tax_rate: f64,
    pub tax: f64,
    pub service_fee: f64,
    /// Subtotal + tax + service fee, before any discount
    pub pre_discount_total: f64,
    pub discount_amount: f64,
    pub discount_label: Option<String>,
    pub discount_info: Option<String>,
    pub bonus_note: Option<String>,
    /// Final amount payable, never negative
    pub total: f64,
}

impl PriceBreakdown {
    pub fn has_discount(&self) -> bool {
        self.discount_amount > 0.0
    }
}

/// Takings aggregate over a set of completed orders
#[derive(Debug, Clone, PartialEq)]
pub struct RevenueStatistics {
    pub orders: usize,
    /// Sum of final payable totals
    pub revenue: f64,
    /// Revenue divided by the order count; zero when there are no orders
    pub average: f64,
}

/// Order pricing with a selectable discount policy
#[derive(Debug, Clone, Copy)]
pub struct PricingEngine {
    policy: DiscountPolicy,
}

impl PricingEngine {
    pub fn new(policy: DiscountPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> DiscountPolicy {
        self.policy
    }

    /// Price an order against the current catalog
    pub fn price(&self, order: &Order, catalog: &Catalog) -> PriceBreakdown {
        let mut lines = Vec::with_capacity(order.items().len());
        let mut subtotal = Decimal::ZERO;

        for item in order.items() {
            let unit = effective_unit_price(item, catalog);
            let line_total = round_money(unit * Decimal::from(item.quantity));
            subtotal += line_total;
            lines.push(PricedLine {
                name: item.name.clone(),
                quantity: item.quantity,
                unit_price: item.unit_price,
                line_total: to_f64(line_total),
                note: item.note.clone(),
            });
        }

        let tax = round_money(subtotal * to_decimal(order.tax_rate()));
        let service_fee = to_decimal(order.service_fee());
        let pre_discount = round_money(subtotal + tax + service_fee);

        let outcome = strategy::evaluate(self.policy, order, catalog, pre_discount);
        let total = (pre_discount - outcome.amount).max(Decimal::ZERO);

        PriceBreakdown {
            lines,
            subtotal: to_f64(subtotal),
            tax_rate: order.tax_rate(),
            tax: to_f64(tax),
            service_fee: to_f64(service_fee),
            pre_discount_total: to_f64(pre_discount),
            discount_amount: to_f64(outcome.amount),
            discount_label: outcome.label,
            discount_info: outcome.info,
            bonus_note: outcome.bonus_note,
            total: to_f64(total),
        }
    }

    /// Count, total takings, and average per order over completed orders,
    /// each re-priced against the current catalog
    pub fn revenue_statistics(&self, orders: &[Order], catalog: &Catalog) -> RevenueStatistics {
        let mut revenue = Decimal::ZERO;
        for order in orders {
            revenue += to_decimal(self.price(order, catalog).total);
        }
        let average = if orders.is_empty() {
            Decimal::ZERO
        } else {
            round_money(revenue / Decimal::from(orders.len() as u64))
        };

        RevenueStatistics {
            orders: orders.len(),
            revenue: to_f64(revenue),
            average: to_f64(average),
        }
    }
}

/// Current per-unit price for a line: the referenced entry's stored price
/// with the beverage size multiplier applied. When the entry no longer
/// exists the price captured at add time is used unchanged.
fn effective_unit_price(item: &LineItem, catalog: &Catalog) -> Decimal {
    match catalog.find_by_id(item.entry_id) {
        Some(entry) => match &entry.kind {
            EntryKind::Beverage { size, .. } => {
                to_decimal(entry.price) * to_decimal(size.multiplier())
            }
            _ => to_decimal(entry.price),
        },
        None => to_decimal(item.unit_price),
    }
}

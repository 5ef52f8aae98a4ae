//! Checkout discount policies
//!
//! Two policies exist side by side and are selected by configuration:
//!
//! - [`DiscountPolicy::EntryDriven`] scans the catalog's discount entries and
//!   applies the single best qualifying one.
//! - [`DiscountPolicy::FlatWithBonus`] is the legacy promo: a flat 10% cut
//!   above a fixed threshold, plus a buy-one-get-one note for the cheapest
//!   beverage on large orders.
//!
//! Both evaluate against the pre-discount total (subtotal + tax + service
//! fee) and never produce a negative amount.

use rust_decimal::Decimal;
use shared::models::catalog::EntryKind;
use shared::models::order::Order;

use super::money::{format_percent, format_rupiah, round_money, to_decimal};
use crate::catalog::Catalog;

/// Pre-discount total above which the flat policy cuts 10%
pub const FLAT_DISCOUNT_THRESHOLD: f64 = 100_000.0;

/// Rate applied by the flat policy
pub const FLAT_DISCOUNT_RATE: f64 = 0.10;

/// Pre-discount total above which the flat policy grants a free beverage
pub const BONUS_THRESHOLD: f64 = 50_000.0;

/// Which discount rule set prices a checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiscountPolicy {
    /// Best qualifying discount entry from the catalog
    #[default]
    EntryDriven,
    /// Flat 10% over threshold plus a buy-one-get-one beverage note
    FlatWithBonus,
}

impl DiscountPolicy {
    /// Lenient parse for the `DISCOUNT_POLICY` configuration key.
    /// Unrecognized values fall back to [`DiscountPolicy::EntryDriven`].
    pub fn parse_lenient(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "flat" | "flat_bonus" | "bogo" => Self::FlatWithBonus,
            _ => Self::EntryDriven,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::EntryDriven => "entry",
            Self::FlatWithBonus => "flat",
        }
    }
}

/// What a policy decided for one checkout
#[derive(Debug, Clone, Default)]
pub struct DiscountOutcome {
    /// Amount subtracted from the pre-discount total, already rounded
    pub amount: Decimal,
    /// Short label for the receipt's discount row
    pub label: Option<String>,
    /// Longer message for the receipt trailer
    pub info: Option<String>,
    /// Non-monetary bonus line (buy one get one)
    pub bonus_note: Option<String>,
}

pub fn evaluate(
    policy: DiscountPolicy,
    order: &Order,
    catalog: &Catalog,
    pre_discount: Decimal,
) -> DiscountOutcome {
    match policy {
        DiscountPolicy::EntryDriven => entry_driven(catalog, pre_discount),
        DiscountPolicy::FlatWithBonus => flat_with_bonus(order, catalog, pre_discount),
    }
}

/// Scan active discount entries whose minimum purchase is met and keep the
/// one with the largest amount. Ties keep the earliest catalog entry.
fn entry_driven(catalog: &Catalog, pre_discount: Decimal) -> DiscountOutcome {
    let mut best: Option<(Decimal, &str, f64, f64)> = None;

    for entry in catalog.discounts() {
        let EntryKind::Discount {
            rate,
            min_purchase,
            active,
            ..
        } = &entry.kind
        else {
            continue;
        };
        if !active || pre_discount < to_decimal(*min_purchase) {
            continue;
        }

        let amount = pre_discount * to_decimal(*rate);
        let better = match &best {
            Some((best_amount, ..)) => amount > *best_amount,
            None => true,
        };
        if better {
            best = Some((amount, entry.name.as_str(), *rate, *min_purchase));
        }
    }

    match best {
        Some((amount, name, rate, min_purchase)) => DiscountOutcome {
            amount: round_money(amount),
            label: Some(name.to_string()),
            info: Some(format!(
                "{} - {}% OFF (min {})",
                name,
                format_percent(rate),
                format_rupiah(min_purchase)
            )),
            bonus_note: None,
        },
        None => DiscountOutcome::default(),
    }
}

/// Flat cut strictly above the threshold, plus a free-beverage note
/// strictly above the bonus threshold
fn flat_with_bonus(order: &Order, catalog: &Catalog, pre_discount: Decimal) -> DiscountOutcome {
    let mut outcome = DiscountOutcome::default();

    if pre_discount > to_decimal(FLAT_DISCOUNT_THRESHOLD) {
        outcome.amount = round_money(pre_discount * to_decimal(FLAT_DISCOUNT_RATE));
        outcome.label = Some(format!("{}%", format_percent(FLAT_DISCOUNT_RATE)));
    }

    if pre_discount > to_decimal(BONUS_THRESHOLD)
        && let Some(name) = cheapest_beverage_name(order, catalog)
    {
        outcome.bonus_note = Some(format!("{name} (Buy 1 Get 1 Free)"));
    }

    outcome
}

/// Cheapest beverage on the order by current effective unit price.
/// Ties keep the earliest line; lines whose entry was deleted are skipped.
fn cheapest_beverage_name(order: &Order, catalog: &Catalog) -> Option<String> {
    let mut best: Option<(Decimal, &str)> = None;

    for line in order.items() {
        let Some(entry) = catalog.find_by_id(line.entry_id) else {
            continue;
        };
        let EntryKind::Beverage { size, .. } = &entry.kind else {
            continue;
        };

        let price = to_decimal(entry.price) * to_decimal(size.multiplier());
        let cheaper = match &best {
            Some((best_price, _)) => price < *best_price,
            None => true,
        };
        if cheaper {
            best = Some((price, entry.name.as_str()));
        }
    }

    best.map(|(_, name)| name.to_string())
}

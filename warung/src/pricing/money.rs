//! Money arithmetic and formatting helpers
//!
//! The pricing pipeline runs on `Decimal` to avoid floating-point drift in
//! totals; `f64` appears only at the edges (model storage, display). Prices
//! are validated finite at the model boundary, so the converters treat a
//! non-finite input as a bug worth logging rather than a value to propagate.

use rust_decimal::prelude::*;

/// Rounding precision for monetary values (2 decimal places, half-up)
pub const DECIMAL_PLACES: u32 = 2;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    round_money(value)
        .to_f64()
        // SAFETY: a Decimal rounded to 2dp is always representable as f64
        .expect("Decimal rounded to 2dp is always representable as f64")
}

/// Round to monetary precision without leaving the Decimal domain
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Compare two monetary values for equality (within tolerance)
pub fn money_eq(a: f64, b: f64) -> bool {
    let diff = (to_decimal(a) - to_decimal(b)).abs();
    diff < MONEY_TOLERANCE
}

/// Format an amount in rupiah with two decimals, e.g. `Rp42000.00`
pub fn format_rupiah(value: f64) -> String {
    format!("Rp{value:.2}")
}

/// Format a fractional rate as a percent figure: `0.10` becomes `10`,
/// `0.075` becomes `7.5`
pub fn format_percent(rate: f64) -> String {
    let pct = rate * 100.0;
    if (pct - pct.round()).abs() < 1e-9 {
        format!("{pct:.0}")
    } else {
        format!("{pct:.1}")
    }
}

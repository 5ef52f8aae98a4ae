//! Catalog entry model
//!
//! A menu catalog holds three kinds of records behind one closed tagged union:
//! food dishes, beverages with size-adjusted pricing, and promotional discount
//! rules. Discount entries are catalog records only; they are never sold as
//! order lines and always carry a zero price.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Serving size of a beverage, with its price multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BeverageSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl BeverageSize {
    /// Multiplier applied to the base price at totaling time
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Small => 0.8,
            Self::Medium => 1.0,
            Self::Large => 1.2,
        }
    }

    /// Lenient parse used by the catalog file loader; unknown labels
    /// fall back to `Medium`
    pub fn parse_lenient(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "small" => Self::Small,
            "large" => Self::Large,
            _ => Self::Medium,
        }
    }

    /// Lowercase label as written to the catalog file
    pub fn label(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

/// Variant-specific attributes of a catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EntryKind {
    Food {
        subtype: String,
        spice_level: String,
    },
    Beverage {
        subtype: String,
        size: BeverageSize,
        sweetened: bool,
    },
    Discount {
        rate: f64,
        min_purchase: f64,
        condition: String,
        active: bool,
    },
}

impl EntryKind {
    /// Short label for grouping and export
    pub fn label(&self) -> &'static str {
        match self {
            Self::Food { .. } => "food",
            Self::Beverage { .. } => "beverage",
            Self::Discount { .. } => "discount",
        }
    }
}

/// One record in the menu catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Unique id, assigned once by the owning catalog's allocator
    pub id: u32,
    pub name: String,
    /// Base price; always 0.0 for discount entries
    pub price: f64,
    pub category: String,
    pub kind: EntryKind,
}

impl CatalogEntry {
    /// Create a food entry
    pub fn food(
        id: u32,
        name: impl Into<String>,
        price: f64,
        category: impl Into<String>,
        subtype: impl Into<String>,
        spice_level: impl Into<String>,
    ) -> AppResult<Self> {
        let name = require_text(name, "name")?;
        let category = require_text(category, "category")?;
        let subtype = optional_text(subtype, "subtype")?;
        let spice_level = optional_text(spice_level, "spice level")?;
        validate_price(price)?;
        Ok(Self {
            id,
            name,
            price,
            category,
            kind: EntryKind::Food {
                subtype,
                spice_level,
            },
        })
    }

    /// Create a beverage entry
    pub fn beverage(
        id: u32,
        name: impl Into<String>,
        price: f64,
        category: impl Into<String>,
        subtype: impl Into<String>,
        size: BeverageSize,
        sweetened: bool,
    ) -> AppResult<Self> {
        let name = require_text(name, "name")?;
        let category = require_text(category, "category")?;
        let subtype = optional_text(subtype, "subtype")?;
        validate_price(price)?;
        Ok(Self {
            id,
            name,
            price,
            category,
            kind: EntryKind::Beverage {
                subtype,
                size,
                sweetened,
            },
        })
    }

    /// Create a discount entry; the price field is forced to zero
    pub fn discount(
        id: u32,
        name: impl Into<String>,
        category: impl Into<String>,
        rate: f64,
        min_purchase: f64,
        condition: impl Into<String>,
        active: bool,
    ) -> AppResult<Self> {
        let name = require_text(name, "name")?;
        let category = require_text(category, "category")?;
        let condition = optional_text(condition, "condition")?;
        if !rate.is_finite() || !(0.0..=1.0).contains(&rate) {
            return Err(AppError::invalid_input(
                "discount rate must be between 0.0 and 1.0",
            ));
        }
        if !min_purchase.is_finite() || min_purchase < 0.0 {
            return Err(AppError::invalid_input(
                "minimum purchase must not be negative",
            ));
        }
        Ok(Self {
            id,
            name,
            price: 0.0,
            category,
            kind: EntryKind::Discount {
                rate,
                min_purchase,
                condition,
                active,
            },
        })
    }

    // ==================== Queries ====================

    pub fn is_food(&self) -> bool {
        matches!(self.kind, EntryKind::Food { .. })
    }

    pub fn is_beverage(&self) -> bool {
        matches!(self.kind, EntryKind::Beverage { .. })
    }

    pub fn is_discount(&self) -> bool {
        matches!(self.kind, EntryKind::Discount { .. })
    }

    /// Price a buyer pays for one unit right now; beverages apply their
    /// size multiplier to the base price
    pub fn effective_unit_price(&self) -> f64 {
        match &self.kind {
            EntryKind::Beverage { size, .. } => self.price * size.multiplier(),
            _ => self.price,
        }
    }

    // ==================== Mutations ====================

    /// Replace the name; the construction-time name rules apply unchanged
    pub fn set_name(&mut self, name: impl Into<String>) -> AppResult<()> {
        self.name = require_text(name, "name")?;
        Ok(())
    }

    /// Replace the base price; rejected for discount entries, which stay at zero
    pub fn set_price(&mut self, price: f64) -> AppResult<()> {
        if self.is_discount() {
            return Err(AppError::invalid_input("discount entries carry no price"));
        }
        validate_price(price)?;
        self.price = price;
        Ok(())
    }

    /// Switch a discount entry on or off
    pub fn set_active(&mut self, value: bool) -> AppResult<()> {
        match &mut self.kind {
            EntryKind::Discount { active, .. } => {
                *active = value;
                Ok(())
            }
            _ => Err(AppError::invalid_input(format!(
                "'{}' is not a discount entry",
                self.name
            ))),
        }
    }
}

fn require_text(value: impl Into<String>, field: &str) -> AppResult<String> {
    let value = value.into().trim().to_string();
    if value.is_empty() {
        return Err(AppError::invalid_input(format!("{field} must not be empty")));
    }
    wire_safe(&value, field)?;
    Ok(value)
}

fn optional_text(value: impl Into<String>, field: &str) -> AppResult<String> {
    let value = value.into().trim().to_string();
    wire_safe(&value, field)?;
    Ok(value)
}

// Free text ends up in the pipe-delimited catalog file, so the delimiter
// and line breaks are rejected at construction.
fn wire_safe(value: &str, field: &str) -> AppResult<()> {
    if value.contains('|') || value.contains('\n') || value.contains('\r') {
        return Err(AppError::invalid_input(format!(
            "{field} must not contain '|' or line breaks"
        )));
    }
    Ok(())
}

fn validate_price(price: f64) -> AppResult<()> {
    if !price.is_finite() {
        return Err(AppError::invalid_input("price must be a finite number"));
    }
    if price < 0.0 {
        return Err(AppError::invalid_input("price must not be negative"));
    }
    Ok(())
}

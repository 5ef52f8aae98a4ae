//! Menu catalog management
//!
//! The catalog owns every menu record (foods, beverages, discount rules) and
//! the id allocator that numbers them. Lookups return borrows; mutations go
//! through validated methods so the stored entries always satisfy the model
//! invariants.

mod defaults;

pub use defaults::default_catalog;

use rust_decimal::Decimal;
use shared::models::catalog::{BeverageSize, CatalogEntry, EntryKind};
use shared::{AppError, AppResult};

use crate::pricing::money::{to_decimal, to_f64};
use crate::utils::IdAllocator;

/// Aggregate figures for the statistics screen
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogStatistics {
    pub total: usize,
    pub foods: usize,
    pub beverages: usize,
    pub discounts: usize,
    /// Sum of all sellable prices; discount entries are excluded
    pub total_value: f64,
}

/// The menu catalog: entries plus their id allocator
#[derive(Debug, Clone)]
pub struct Catalog {
    name: String,
    entries: Vec<CatalogEntry>,
    ids: IdAllocator,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
            ids: IdAllocator::new(),
        }
    }

    // ==================== Accessors ====================

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in catalog order
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn find_by_id(&self, id: u32) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Case-insensitive exact name match
    pub fn find_by_name(&self, name: &str) -> Option<&CatalogEntry> {
        let wanted = name.trim();
        self.entries
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(wanted))
    }

    /// Case-insensitive category filter, in catalog order
    pub fn by_category(&self, category: &str) -> Vec<&CatalogEntry> {
        let wanted = category.trim();
        self.entries
            .iter()
            .filter(|entry| entry.category.eq_ignore_ascii_case(wanted))
            .collect()
    }

    pub fn foods(&self) -> Vec<&CatalogEntry> {
        self.entries.iter().filter(|e| e.is_food()).collect()
    }

    pub fn beverages(&self) -> Vec<&CatalogEntry> {
        self.entries.iter().filter(|e| e.is_beverage()).collect()
    }

    /// Discount entries in catalog order; the order drives the
    /// first-match tie-break during discount selection
    pub fn discounts(&self) -> Vec<&CatalogEntry> {
        self.entries.iter().filter(|e| e.is_discount()).collect()
    }

    // ==================== Mutations ====================

    /// Add a food entry, assigning the next id
    pub fn add_food(
        &mut self,
        name: impl Into<String>,
        price: f64,
        category: impl Into<String>,
        subtype: impl Into<String>,
        spice_level: impl Into<String>,
    ) -> AppResult<&CatalogEntry> {
        let id = self.ids.next_id();
        let entry = CatalogEntry::food(id, name, price, category, subtype, spice_level)?;
        self.entries.push(entry);
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Add a beverage entry, assigning the next id
    pub fn add_beverage(
        &mut self,
        name: impl Into<String>,
        price: f64,
        category: impl Into<String>,
        subtype: impl Into<String>,
        size: BeverageSize,
        sweetened: bool,
    ) -> AppResult<&CatalogEntry> {
        let id = self.ids.next_id();
        let entry = CatalogEntry::beverage(id, name, price, category, subtype, size, sweetened)?;
        self.entries.push(entry);
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Add a discount entry, assigning the next id
    pub fn add_discount(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
        rate: f64,
        min_purchase: f64,
        condition: impl Into<String>,
        active: bool,
    ) -> AppResult<&CatalogEntry> {
        let id = self.ids.next_id();
        let entry =
            CatalogEntry::discount(id, name, category, rate, min_purchase, condition, active)?;
        self.entries.push(entry);
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Remove an entry by id; `false` when no entry matches
    pub fn remove(&mut self, id: u32) -> bool {
        match self.entries.iter().position(|entry| entry.id == id) {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Rename an entry; the construction-time name rules apply
    pub fn update_name(&mut self, id: u32, name: impl Into<String>) -> AppResult<()> {
        match self.entries.iter_mut().find(|entry| entry.id == id) {
            Some(entry) => entry.set_name(name),
            None => Err(AppError::not_found(format!("catalog entry {id}"))),
        }
    }

    /// Change an entry's base price
    pub fn update_price(&mut self, id: u32, price: f64) -> AppResult<()> {
        match self.entries.iter_mut().find(|entry| entry.id == id) {
            Some(entry) => entry.set_price(price),
            None => Err(AppError::not_found(format!("catalog entry {id}"))),
        }
    }

    /// Switch a discount entry on or off
    pub fn set_discount_active(&mut self, id: u32, active: bool) -> AppResult<()> {
        match self.entries.iter_mut().find(|entry| entry.id == id) {
            Some(entry) => entry.set_active(active),
            None => Err(AppError::not_found(format!("catalog entry {id}"))),
        }
    }

    /// Sort entries by ascending price (stable)
    pub fn sort_by_price(&mut self) {
        self.entries.sort_by(|a, b| a.price.total_cmp(&b.price));
    }

    /// Sort entries by name, ignoring case (stable)
    pub fn sort_by_name(&mut self) {
        self.entries.sort_by_key(|entry| entry.name.to_lowercase());
    }

    // ==================== Aggregates ====================

    /// Per-kind counts and the total sellable value
    pub fn statistics(&self) -> CatalogStatistics {
        let mut foods = 0;
        let mut beverages = 0;
        let mut discounts = 0;
        let mut value = Decimal::ZERO;

        for entry in &self.entries {
            match entry.kind {
                EntryKind::Food { .. } => foods += 1,
                EntryKind::Beverage { .. } => beverages += 1,
                EntryKind::Discount { .. } => discounts += 1,
            }
            if !entry.is_discount() {
                value += to_decimal(entry.price);
            }
        }

        CatalogStatistics {
            total: self.entries.len(),
            foods,
            beverages,
            discounts,
            total_value: to_f64(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        let mut catalog = Catalog::new("Test Warung");
        catalog
            .add_food("Coto Makassar", 42000.0, "food", "main", "medium")
            .unwrap();
        catalog
            .add_beverage(
                "Es Pisang Ijo",
                20000.0,
                "beverage",
                "cold",
                BeverageSize::Medium,
                true,
            )
            .unwrap();
        catalog
            .add_discount("Member Discount", "discount", 0.10, 50000.0, "", true)
            .unwrap();
        catalog
    }

    #[test]
    fn test_add_assigns_sequential_ids() {
        let catalog = sample_catalog();
        let ids: Vec<u32> = catalog.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_find_by_name_is_case_insensitive() {
        let catalog = sample_catalog();
        let entry = catalog.find_by_name("  coto MAKASSAR ").unwrap();
        assert_eq!(entry.id, 1);
        assert!(catalog.find_by_name("Sup Konro").is_none());
    }

    #[test]
    fn test_by_category_is_case_insensitive() {
        let catalog = sample_catalog();
        assert_eq!(catalog.by_category("FOOD").len(), 1);
        assert_eq!(catalog.by_category("beverage").len(), 1);
        assert!(catalog.by_category("dessert").is_empty());
    }

    #[test]
    fn test_remove_reports_result() {
        let mut catalog = sample_catalog();
        assert!(catalog.remove(2));
        assert!(!catalog.remove(2));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_removed_ids_are_not_reused() {
        let mut catalog = sample_catalog();
        catalog.remove(3);
        let new_id = catalog
            .add_food("Jagung Bose", 20000.0, "food", "side", "none")
            .unwrap()
            .id;
        assert_eq!(new_id, 4);
    }

    #[test]
    fn test_update_name_reports_missing_entry() {
        let mut catalog = sample_catalog();
        catalog.update_name(1, "Coto Kuda").unwrap();
        assert_eq!(catalog.find_by_id(1).unwrap().name, "Coto Kuda");

        let err = catalog.update_name(99, "Ghost Dish").unwrap_err();
        assert!(err.is_not_found());
        assert!(catalog.update_name(1, "   ").unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_update_price_reports_missing_entry() {
        let mut catalog = sample_catalog();
        catalog.update_price(1, 45000.0).unwrap();
        assert_eq!(catalog.find_by_id(1).unwrap().price, 45000.0);

        let err = catalog.update_price(99, 1000.0).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_set_discount_active_rejects_other_kinds() {
        let mut catalog = sample_catalog();
        catalog.set_discount_active(3, false).unwrap();
        assert!(
            catalog
                .set_discount_active(1, false)
                .unwrap_err()
                .is_invalid_input()
        );
    }

    #[test]
    fn test_sort_by_price_is_ascending() {
        let mut catalog = sample_catalog();
        catalog.sort_by_price();
        let prices: Vec<f64> = catalog.entries().iter().map(|e| e.price).collect();
        assert_eq!(prices, vec![0.0, 20000.0, 42000.0]);
    }

    #[test]
    fn test_sort_by_name_ignores_case() {
        let mut catalog = Catalog::new("Test");
        catalog
            .add_food("sate Ayam", 25000.0, "food", "main", "medium")
            .unwrap();
        catalog
            .add_food("Ayam Taliwang", 45000.0, "food", "main", "hot")
            .unwrap();
        catalog.sort_by_name();
        let names: Vec<&str> = catalog.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Ayam Taliwang", "sate Ayam"]);
    }

    #[test]
    fn test_statistics_exclude_discount_value() {
        let catalog = sample_catalog();
        let stats = catalog.statistics();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.foods, 1);
        assert_eq!(stats.beverages, 1);
        assert_eq!(stats.discounts, 1);
        // only the food and beverage prices count
        assert_eq!(stats.total_value, 62000.0);
    }
}

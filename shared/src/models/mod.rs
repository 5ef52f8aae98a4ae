//! Domain models

pub mod catalog;
pub mod order;

pub use catalog::{BeverageSize, CatalogEntry, EntryKind};
pub use order::{LineItem, Order, OrderStatus};

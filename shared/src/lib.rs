//! Shared domain types for the warung workspace
//!
//! ```text
//! shared
//! ├── error        AppError / AppResult taxonomy
//! └── models
//!     ├── catalog  CatalogEntry tagged union (food / beverage / discount)
//!     └── order    Order, LineItem, open/finalized lifecycle
//! ```
//!
//! This crate holds pure domain state and rules only; no I/O, no
//! presentation, no pricing arithmetic.

pub mod error;
pub mod models;

pub use error::{AppError, AppResult};
pub use models::catalog::{BeverageSize, CatalogEntry, EntryKind};
pub use models::order::{LineItem, Order, OrderStatus};

//! Utility modules
//!
//! - [`ids`] - sequential id allocation for catalog entries and orders
//! - [`logger`] - tracing setup (rolling file or stdout)
//! - [`validation`] - text length limits for console input

pub mod ids;
pub mod logger;
pub mod validation;

pub use ids::IdAllocator;

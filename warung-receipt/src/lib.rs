//! # warung-receipt
//!
//! Fixed-width plain-text ticket layout - line building only.
//!
//! ## Scope
//!
//! This crate handles HOW ticket text is laid out:
//! - Fluent line building (separators, centering, left/right pairs)
//! - Character-width padding and truncation
//!
//! Business logic (WHAT goes on a ticket) should stay in application code:
//! - Receipt content → the console application's renderer
//! - History log blocks → the persistence gateway
//!
//! ## Example
//!
//! ```
//! use warung_receipt::TicketBuilder;
//!
//! let mut b = TicketBuilder::new(30);
//! b.eq_sep();
//! b.center("PAYMENT RECEIPT");
//! b.eq_sep();
//! b.pair("Subtotal", "Rp100000.00");
//! let ticket = b.finalize();
//! assert!(ticket.starts_with("=============================="));
//! ```

mod builder;
mod text;

// Re-exports
pub use builder::TicketBuilder;
pub use text::{pad_text, text_width, truncate_text};

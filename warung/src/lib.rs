//! # Warung
//!
//! Console restaurant ordering: menu catalog management, order entry,
//! tax/service-fee/discount pricing, receipt printing, and text-file
//! persistence.
//!
//! The heart of the crate is the pricing pipeline: line items are totaled
//! from the catalog's current prices, tax and the service fee are added,
//! the configured discount policy is applied, and the resulting breakdown
//! drives both the printed receipt and the order history log.
//!
//! # Module layout
//!
//! ```text
//! warung/src/
//! ├── core/          # Environment-driven configuration
//! ├── catalog/       # Menu catalog manager + built-in default menu
//! ├── pricing/       # Money arithmetic, discount policies, breakdown
//! ├── receipt        # Receipt renderer over warung-receipt
//! ├── persistence/   # Catalog file, history log, backup, CSV export
//! ├── orders/        # Order lifecycle (active slot + completed list)
//! ├── console/       # Menu-driven interactive loop
//! └── utils/         # Id allocator, logger setup, validation helpers
//! ```

pub mod catalog;
pub mod console;
pub mod core;
pub mod orders;
pub mod persistence;
pub mod pricing;
pub mod receipt;
pub mod utils;

pub use catalog::Catalog;
pub use console::App;
pub use core::Config;
pub use orders::OrderBook;
pub use persistence::FileStore;
pub use pricing::{DiscountPolicy, PriceBreakdown, PricingEngine};
pub use receipt::ReceiptRenderer;

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Create the log directory and install the logger per the configuration.
/// Logs go to a daily-rolling file when the directory is usable, to the
/// console otherwise.
pub fn setup_environment(config: &Config) {
    let _ = std::fs::create_dir_all(&config.log_dir);
    init_logger_with_file(Some(&config.log_level), Some(&config.log_dir));
}

pub fn print_banner() {
    println!(
        r#"
__        __    _     ____   _   _  _   _   ____
\ \      / /   / \   |  _ \ | | | || \ | | / ___|
 \ \ /\ / /   / _ \  | |_) || | | ||  \| || |  _
  \ V  V /   / ___ \ |  _ < | |_| || |\  || |_| |
   \_/\_/   /_/   \_\|_| \_\ \___/ |_| \_| \____|
    "#
    );
}

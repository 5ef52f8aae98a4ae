//! Application configuration

use shared::models::order::{DEFAULT_SERVICE_FEE, DEFAULT_TAX_RATE};

use crate::pricing::DiscountPolicy;

/// Console application configuration
///
/// # Environment variables
///
/// Every field can be overridden through the environment:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | RESTAURANT_NAME | Restoran Nusantara | Name printed on receipts |
/// | MENU_FILE | menu_data.txt | Catalog file path |
/// | HISTORY_FILE | pesanan_data.txt | Order history log path |
/// | BACKUP_FILE | backup_restoran.json | JSON backup snapshot path |
/// | CSV_EXPORT_FILE | menu_export.csv | CSV export path |
/// | TAX_RATE | 0.10 | Tax rate applied to new orders (0.0 to 1.0) |
/// | SERVICE_FEE | 20000.0 | Flat service fee for new orders |
/// | DISCOUNT_POLICY | entry | `entry` (catalog discounts) or `flat` (10% + bonus) |
/// | RECEIPT_WIDTH | 65 | Receipt column width (40 to 120) |
/// | LOG_LEVEL | info | Tracing level |
/// | LOG_DIR | logs | Log directory (file logging when it exists) |
#[derive(Debug, Clone)]
pub struct Config {
    /// Restaurant name shown in menus and on receipts
    pub restaurant_name: String,
    /// Pipe-delimited catalog file
    pub menu_file: String,
    /// Append-only order history log
    pub history_file: String,
    /// JSON backup snapshot
    pub backup_file: String,
    /// CSV export target
    pub csv_file: String,
    /// Tax rate for new orders
    pub tax_rate: f64,
    /// Flat service fee for new orders
    pub service_fee: f64,
    /// Which discount strategy checkout applies
    pub discount_policy: DiscountPolicy,
    /// Receipt column width in characters
    pub receipt_width: usize,
    /// Tracing level name
    pub log_level: String,
    /// Directory for rolling log files
    pub log_dir: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparseable values fall back to the defaults; out-of-range
    /// numbers are treated as unset.
    pub fn from_env() -> Self {
        Self {
            restaurant_name: std::env::var("RESTAURANT_NAME")
                .unwrap_or_else(|_| "Restoran Nusantara".into()),
            menu_file: std::env::var("MENU_FILE").unwrap_or_else(|_| "menu_data.txt".into()),
            history_file: std::env::var("HISTORY_FILE")
                .unwrap_or_else(|_| "pesanan_data.txt".into()),
            backup_file: std::env::var("BACKUP_FILE")
                .unwrap_or_else(|_| "backup_restoran.json".into()),
            csv_file: std::env::var("CSV_EXPORT_FILE")
                .unwrap_or_else(|_| "menu_export.csv".into()),
            tax_rate: std::env::var("TAX_RATE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|rate: &f64| (0.0..=1.0).contains(rate))
                .unwrap_or(DEFAULT_TAX_RATE),
            service_fee: std::env::var("SERVICE_FEE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|fee: &f64| fee.is_finite() && *fee >= 0.0)
                .unwrap_or(DEFAULT_SERVICE_FEE),
            discount_policy: std::env::var("DISCOUNT_POLICY")
                .ok()
                .map(|v| DiscountPolicy::parse_lenient(&v))
                .unwrap_or_default(),
            receipt_width: std::env::var("RECEIPT_WIDTH")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|w| (40..=120).contains(w))
                .unwrap_or(65),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").unwrap_or_else(|_| "logs".into()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

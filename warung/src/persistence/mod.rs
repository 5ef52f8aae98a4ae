//! File persistence gateway
//!
//! Owns the four on-disk artifacts and every format detail that goes with
//! them:
//!
//! - the menu catalog file, pipe-delimited with the legacy record tags
//! - the append-only order history log
//! - the JSON backup snapshot
//! - the CSV catalog export
//!
//! Writes are whole-file rewrites or plain appends. Loading tolerates a
//! damaged catalog file: unparseable records are skipped with a warning,
//! and a missing file falls back to the built-in menu.

use std::fs::{self, OpenOptions};
use std::io::Write as _;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::Serialize;
use shared::models::catalog::{BeverageSize, CatalogEntry, EntryKind};
use shared::models::order::Order;
use shared::{AppError, AppResult};

use crate::catalog::{Catalog, default_catalog};
use crate::core::Config;
use crate::pricing::PriceBreakdown;
use crate::pricing::money::{format_percent, format_rupiah};

/// Legacy record tag for food entries
const TAG_FOOD: &str = "Makanan";
/// Legacy record tag for beverage entries
const TAG_BEVERAGE: &str = "Minuman";
/// Legacy record tag for discount entries
const TAG_DISCOUNT: &str = "Diskon";

/// Width of the rule under the menu file header
const MENU_RULE_WIDTH: usize = 50;
/// Width of the rules framing one history block
const HISTORY_RULE_WIDTH: usize = 70;

/// Result of loading the menu file
#[derive(Debug)]
pub struct CatalogLoad {
    pub catalog: Catalog,
    /// Records skipped because they would not parse
    pub skipped: usize,
    /// True when the file was missing or unreadable and the built-in
    /// menu was used instead
    pub defaulted: bool,
}

/// Existence and size of one data file
#[derive(Debug, Clone, PartialEq)]
pub struct FileStatus {
    pub label: &'static str,
    pub path: PathBuf,
    pub exists: bool,
    pub size_bytes: u64,
}

/// Serialized shape of the backup file
#[derive(Debug, Serialize)]
struct BackupSnapshot<'a> {
    restaurant: &'a str,
    created_at: DateTime<Local>,
    entries: &'a [CatalogEntry],
    completed_orders: &'a [Order],
}

/// Gateway to the on-disk data files
#[derive(Debug, Clone)]
pub struct FileStore {
    menu_path: PathBuf,
    history_path: PathBuf,
    backup_path: PathBuf,
    csv_path: PathBuf,
}

impl FileStore {
    pub fn new(
        menu_path: impl Into<PathBuf>,
        history_path: impl Into<PathBuf>,
        backup_path: impl Into<PathBuf>,
        csv_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            menu_path: menu_path.into(),
            history_path: history_path.into(),
            backup_path: backup_path.into(),
            csv_path: csv_path.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.menu_file,
            &config.history_file,
            &config.backup_file,
            &config.csv_file,
        )
    }

    // ==================== Menu catalog file ====================

    /// Rewrite the menu file: readable header, then one record per entry
    pub fn save_catalog(&self, catalog: &Catalog) -> AppResult<()> {
        let mut out = String::new();
        out.push_str(&format!("=== MENU {} ===\n", catalog.name().to_uppercase()));
        out.push_str(&format!("Total entries: {}\n", catalog.len()));
        out.push_str(&"=".repeat(MENU_RULE_WIDTH));
        out.push_str("\n\n");
        for entry in catalog.entries() {
            out.push_str(&entry_record(entry));
            out.push('\n');
        }

        fs::write(&self.menu_path, out).map_err(|e| {
            AppError::io(format!("writing menu file {}", self.menu_path.display()), e)
        })?;
        tracing::info!(
            path = %self.menu_path.display(),
            entries = catalog.len(),
            "Menu saved"
        );
        Ok(())
    }

    /// Load the menu file. Header lines and blanks (no `|`) are ignored;
    /// records that do not parse are skipped with a warning. A missing or
    /// unreadable file yields the built-in menu instead.
    pub fn load_catalog(&self, restaurant_name: &str) -> CatalogLoad {
        let raw = match fs::read_to_string(&self.menu_path) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(
                    path = %self.menu_path.display(),
                    error = %e,
                    "Menu file unavailable, using built-in menu"
                );
                return CatalogLoad {
                    catalog: default_catalog(restaurant_name),
                    skipped: 0,
                    defaulted: true,
                };
            }
        };

        let mut catalog = Catalog::new(restaurant_name);
        let mut skipped = 0;
        for line in raw.lines() {
            if !line.contains('|') {
                continue;
            }
            if let Err(reason) = parse_record(&mut catalog, line) {
                tracing::warn!(line, %reason, "Skipping unparseable menu record");
                skipped += 1;
            }
        }

        tracing::info!(
            path = %self.menu_path.display(),
            entries = catalog.len(),
            skipped,
            "Menu loaded"
        );
        CatalogLoad {
            catalog,
            skipped,
            defaulted: false,
        }
    }

    // ==================== Order history log ====================

    /// Append one finalized order with its computed totals to the history log
    pub fn append_order_history(
        &self,
        order: &Order,
        breakdown: &PriceBreakdown,
    ) -> AppResult<()> {
        let mut block = String::new();
        block.push_str(&"=".repeat(HISTORY_RULE_WIDTH));
        block.push('\n');
        block.push_str(&format!("ORDER #{}\n", order.id()));
        block.push_str(&format!("{:<9}: {}\n", "Customer", order.customer()));
        block.push_str(&format!("{:<9}: {}\n", "Table", order.table()));
        block.push_str(&format!(
            "{:<9}: {}\n",
            "Date",
            order.created_at().format("%d-%m-%Y %H:%M:%S")
        ));
        block.push_str(&"-".repeat(HISTORY_RULE_WIDTH));
        block.push('\n');
        for line in &breakdown.lines {
            block.push_str(&format!(
                "{}|{}|{:.2}|{}\n",
                line.name,
                line.quantity,
                line.line_total,
                line.note.as_deref().unwrap_or_default()
            ));
        }
        block.push_str(&format!("TOTAL|{:.2}\n\n", breakdown.total));

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.history_path)
            .map_err(|e| {
                AppError::io(
                    format!("opening history log {}", self.history_path.display()),
                    e,
                )
            })?;
        file.write_all(block.as_bytes()).map_err(|e| {
            AppError::io(
                format!("appending to history log {}", self.history_path.display()),
                e,
            )
        })?;

        tracing::info!(order_id = order.id(), "Order appended to history log");
        Ok(())
    }

    /// Entire history log contents; `None` when no log exists yet
    pub fn read_order_history(&self) -> AppResult<Option<String>> {
        match fs::read_to_string(&self.history_path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::io(
                format!("reading history log {}", self.history_path.display()),
                e,
            )),
        }
    }

    /// Delete the history log; `false` when there was nothing to delete
    pub fn clear_order_history(&self) -> AppResult<bool> {
        match fs::remove_file(&self.history_path) {
            Ok(()) => {
                tracing::info!(path = %self.history_path.display(), "History log cleared");
                Ok(true)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(AppError::io(
                format!("removing history log {}", self.history_path.display()),
                e,
            )),
        }
    }

    // ==================== Backup and export ====================

    /// Rewrite the backup file with a pretty-printed JSON snapshot of the
    /// catalog and the completed orders
    pub fn backup(&self, catalog: &Catalog, completed: &[Order]) -> AppResult<()> {
        let snapshot = BackupSnapshot {
            restaurant: catalog.name(),
            created_at: Local::now(),
            entries: catalog.entries(),
            completed_orders: completed,
        };
        let json = serde_json::to_string_pretty(&snapshot).map_err(|e| {
            AppError::io("encoding backup snapshot", std::io::Error::other(e))
        })?;

        fs::write(&self.backup_path, json).map_err(|e| {
            AppError::io(
                format!("writing backup file {}", self.backup_path.display()),
                e,
            )
        })?;
        tracing::info!(
            path = %self.backup_path.display(),
            entries = catalog.len(),
            orders = completed.len(),
            "Backup written"
        );
        Ok(())
    }

    /// Rewrite the CSV export: header row, then one row per catalog entry
    pub fn export_csv(&self, catalog: &Catalog) -> AppResult<()> {
        let mut out = String::from("ID,Name,Price,Category,Type,Details\n");
        for entry in catalog.entries() {
            let (kind, details) = match &entry.kind {
                EntryKind::Food {
                    subtype,
                    spice_level,
                } => (subtype.clone(), spice_level.clone()),
                EntryKind::Beverage {
                    subtype,
                    size,
                    sweetened,
                } => (
                    subtype.clone(),
                    format!(
                        "{} - {}",
                        size.label(),
                        if *sweetened { "Sweetened" } else { "Unsweetened" }
                    ),
                ),
                EntryKind::Discount {
                    rate,
                    min_purchase,
                    condition,
                    ..
                } => (
                    format!(
                        "{}% Off (Min: {})",
                        format_percent(*rate),
                        format_rupiah(*min_purchase)
                    ),
                    condition.clone(),
                ),
            };
            out.push_str(&format!(
                "{},{},{:.2},{},{},{}\n",
                entry.id,
                csv_field(&entry.name),
                entry.price,
                csv_field(&entry.category),
                csv_field(&kind),
                csv_field(&details)
            ));
        }

        fs::write(&self.csv_path, out).map_err(|e| {
            AppError::io(format!("writing CSV export {}", self.csv_path.display()), e)
        })?;
        tracing::info!(
            path = %self.csv_path.display(),
            entries = catalog.len(),
            "Catalog exported as CSV"
        );
        Ok(())
    }

    /// Existence and size for each data file
    pub fn file_summary(&self) -> Vec<FileStatus> {
        [
            ("menu", &self.menu_path),
            ("history", &self.history_path),
            ("backup", &self.backup_path),
            ("csv export", &self.csv_path),
        ]
        .into_iter()
        .map(|(label, path)| file_status(label, path))
        .collect()
    }
}

/// One pipe-delimited record for the menu file
fn entry_record(entry: &CatalogEntry) -> String {
    match &entry.kind {
        EntryKind::Food {
            subtype,
            spice_level,
        } => format!(
            "{TAG_FOOD}|{}|{:.2}|{}|{}|{}",
            entry.name, entry.price, entry.category, subtype, spice_level
        ),
        EntryKind::Beverage {
            subtype,
            size,
            sweetened,
        } => format!(
            "{TAG_BEVERAGE}|{}|{:.2}|{}|{}|{}|{}",
            entry.name,
            entry.price,
            entry.category,
            subtype,
            size.label(),
            sweetened
        ),
        EntryKind::Discount {
            rate,
            min_purchase,
            condition,
            active,
        } => format!(
            "{TAG_DISCOUNT}|{}|0.00|{}|{:.2}|{:.2}|{}|{}",
            entry.name, entry.category, rate, min_purchase, condition, active
        ),
    }
}

/// Parse one record line into the catalog. Missing optional trailing
/// fields take the documented defaults; anything else that fails to parse
/// is an error and the caller skips the line.
fn parse_record(catalog: &mut Catalog, line: &str) -> AppResult<()> {
    let fields: Vec<&str> = line.split('|').map(str::trim).collect();
    if fields.len() < 4 {
        return Err(AppError::invalid_input(format!(
            "expected at least 4 fields, got {}",
            fields.len()
        )));
    }

    let tag = fields[0];
    let name = fields[1];
    let price = parse_number(fields[2], "price")?;
    let category = fields[3];

    match tag {
        TAG_FOOD => {
            let subtype = field_or(&fields, 4, "general");
            let spice_level = field_or(&fields, 5, "none");
            catalog.add_food(name, price, category, subtype, spice_level)?;
        }
        TAG_BEVERAGE => {
            let subtype = field_or(&fields, 4, "normal");
            let size = BeverageSize::parse_lenient(field_or(&fields, 5, "medium"));
            let sweetened = fields.get(6).map(|f| parse_bool(f)).unwrap_or(true);
            catalog.add_beverage(name, price, category, subtype, size, sweetened)?;
        }
        TAG_DISCOUNT => {
            if fields.len() < 6 {
                return Err(AppError::invalid_input(
                    "discount records need rate and minimum purchase fields",
                ));
            }
            let rate = parse_number(fields[4], "rate")?;
            let min_purchase = parse_number(fields[5], "minimum purchase")?;
            let condition = field_or(&fields, 6, "");
            let active = fields.get(7).map(|f| parse_bool(f)).unwrap_or(true);
            catalog.add_discount(name, category, rate, min_purchase, condition, active)?;
        }
        other => {
            return Err(AppError::invalid_input(format!(
                "unknown record tag '{other}'"
            )));
        }
    }
    Ok(())
}

/// Optional trailing field with a default; an empty field counts as missing
fn field_or<'a>(fields: &[&'a str], index: usize, default: &'a str) -> &'a str {
    fields
        .get(index)
        .copied()
        .filter(|f| !f.is_empty())
        .unwrap_or(default)
}

fn parse_number(raw: &str, what: &str) -> AppResult<f64> {
    raw.parse::<f64>()
        .map_err(|_| AppError::invalid_input(format!("bad {what} '{raw}'")))
}

/// Legacy boolean parse: exactly `true` (any case) is true, all else false
fn parse_bool(raw: &str) -> bool {
    raw.eq_ignore_ascii_case("true")
}

/// Quote a CSV text field, doubling embedded quotes
fn csv_field(raw: &str) -> String {
    format!("\"{}\"", raw.replace('"', "\"\""))
}

fn file_status(label: &'static str, path: &Path) -> FileStatus {
    match fs::metadata(path) {
        Ok(meta) => FileStatus {
            label,
            path: path.to_path_buf(),
            exists: true,
            size_bytes: meta.len(),
        },
        Err(_) => FileStatus {
            label,
            path: path.to_path_buf(),
            exists: false,
            size_bytes: 0,
        },
    }
}

#[cfg(test)]
mod tests;

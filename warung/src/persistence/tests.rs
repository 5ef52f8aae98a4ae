//! Persistence gateway tests

use std::fs;
use std::path::Path;

use chrono::{Local, TimeZone};
use shared::models::catalog::{BeverageSize, EntryKind};
use shared::models::order::Order;
use tempfile::tempdir;

use super::FileStore;
use crate::catalog::Catalog;
use crate::pricing::{DiscountPolicy, PricingEngine};

fn store_in(dir: &Path) -> FileStore {
    FileStore::new(
        dir.join("menu_data.txt"),
        dir.join("pesanan_data.txt"),
        dir.join("backup_restoran.json"),
        dir.join("menu_export.csv"),
    )
}

fn sample_catalog() -> Catalog {
    let mut catalog = Catalog::new("Restoran Nusantara");
    catalog
        .add_food("Coto Makassar", 42000.0, "food", "main", "medium")
        .unwrap();
    catalog
        .add_beverage(
            "Es Pisang Ijo",
            20000.0,
            "beverage",
            "cold",
            BeverageSize::Large,
            true,
        )
        .unwrap();
    catalog
        .add_discount(
            "Weekend Special",
            "discount",
            0.15,
            100000.0,
            "Valid Saturday and Sunday",
            true,
        )
        .unwrap();
    catalog
}

#[test]
fn test_catalog_file_round_trip() {
    let dir = tempdir().unwrap();
    let store = store_in(dir.path());
    let original = sample_catalog();

    store.save_catalog(&original).unwrap();
    let load = store.load_catalog("Restoran Nusantara");

    assert!(!load.defaulted);
    assert_eq!(load.skipped, 0);
    // ids are reassigned in file order, which matches the original here
    assert_eq!(load.catalog.entries(), original.entries());
}

#[test]
fn test_menu_file_layout() {
    let dir = tempdir().unwrap();
    let store = store_in(dir.path());
    store.save_catalog(&sample_catalog()).unwrap();

    let raw = fs::read_to_string(dir.path().join("menu_data.txt")).unwrap();
    let lines: Vec<&str> = raw.lines().collect();
    assert_eq!(lines[0], "=== MENU RESTORAN NUSANTARA ===");
    assert_eq!(lines[1], "Total entries: 3");
    assert_eq!(lines[2], "=".repeat(50));
    assert_eq!(lines[3], "");
    assert_eq!(lines[4], "Makanan|Coto Makassar|42000.00|food|main|medium");
    assert_eq!(
        lines[5],
        "Minuman|Es Pisang Ijo|20000.00|beverage|cold|large|true"
    );
    assert_eq!(
        lines[6],
        "Diskon|Weekend Special|0.00|discount|0.15|100000.00|Valid Saturday and Sunday|true"
    );
}

#[test]
fn test_load_missing_file_falls_back_to_default_menu() {
    let dir = tempdir().unwrap();
    let store = store_in(dir.path());

    let load = store.load_catalog("Restoran Nusantara");
    assert!(load.defaulted);
    assert_eq!(load.skipped, 0);
    assert_eq!(load.catalog.len(), 22);
}

#[test]
fn test_loader_skips_bad_records_and_applies_defaults() {
    let dir = tempdir().unwrap();
    let store = store_in(dir.path());
    let raw = "\
=== MENU TEST ===
Total entries: broken header is ignored
==================================================

Makanan|Bakso|15000.00|food
Minuman|Es Teh|8000.00|beverage
Diskon|Promo|0.00|discount|0.10|50000.00
Makanan|Broken|abc|food
Aneh|Unknown|1.00|misc
Makanan|short
Diskon|NoRate|0.00|discount
";
    fs::write(dir.path().join("menu_data.txt"), raw).unwrap();

    let load = store.load_catalog("Restoran Nusantara");
    assert!(!load.defaulted);
    assert_eq!(load.skipped, 4);
    assert_eq!(load.catalog.len(), 3);

    let bakso = load.catalog.find_by_name("Bakso").unwrap();
    assert_eq!(
        bakso.kind,
        EntryKind::Food {
            subtype: "general".to_string(),
            spice_level: "none".to_string(),
        }
    );

    let es_teh = load.catalog.find_by_name("Es Teh").unwrap();
    assert_eq!(
        es_teh.kind,
        EntryKind::Beverage {
            subtype: "normal".to_string(),
            size: BeverageSize::Medium,
            sweetened: true,
        }
    );

    let promo = load.catalog.find_by_name("Promo").unwrap();
    assert_eq!(
        promo.kind,
        EntryKind::Discount {
            rate: 0.10,
            min_purchase: 50000.0,
            condition: String::new(),
            active: true,
        }
    );
}

#[test]
fn test_boolean_fields_parse_case_insensitively() {
    let dir = tempdir().unwrap();
    let store = store_in(dir.path());
    let raw = "\
Minuman|Es Jeruk|10000.00|beverage|cold|small|TRUE
Minuman|Kopi Pahit|12000.00|beverage|hot|small|nope
Diskon|Paused|0.00|discount|0.20|0.00|cond|False
";
    fs::write(dir.path().join("menu_data.txt"), raw).unwrap();

    let load = store.load_catalog("Restoran Nusantara");
    assert_eq!(load.skipped, 0);

    let jeruk = load.catalog.find_by_name("Es Jeruk").unwrap();
    assert!(matches!(
        jeruk.kind,
        EntryKind::Beverage {
            sweetened: true,
            ..
        }
    ));
    // anything but `true` reads as false, matching the old loader
    let kopi = load.catalog.find_by_name("Kopi Pahit").unwrap();
    assert!(matches!(
        kopi.kind,
        EntryKind::Beverage {
            sweetened: false,
            ..
        }
    ));
    let paused = load.catalog.find_by_name("Paused").unwrap();
    assert!(matches!(
        paused.kind,
        EntryKind::Discount { active: false, .. }
    ));
}

#[test]
fn test_history_append_read_and_clear() {
    let dir = tempdir().unwrap();
    let store = store_in(dir.path());

    let mut catalog = Catalog::new("Restoran Nusantara");
    let food = catalog
        .add_food("Se'i Sapi", 50000.0, "food", "main", "medium")
        .unwrap()
        .id;
    catalog
        .add_discount("Member Discount", "discount", 0.10, 100000.0, "", true)
        .unwrap();

    let created = Local.with_ymd_and_hms(2026, 8, 25, 14, 3, 22).unwrap();
    let mut order = Order::new(7, "Budi", "12", created);
    order
        .add_item(catalog.find_by_id(food).unwrap(), 2, Some("Dibungkus".into()))
        .unwrap();
    order.finalize().unwrap();

    let breakdown = PricingEngine::new(DiscountPolicy::EntryDriven).price(&order, &catalog);
    store.append_order_history(&order, &breakdown).unwrap();
    store.append_order_history(&order, &breakdown).unwrap();

    let raw = store.read_order_history().unwrap().unwrap();
    assert_eq!(raw.matches("ORDER #7").count(), 2);
    assert!(raw.starts_with(&"=".repeat(70)));
    assert!(raw.contains("Customer : Budi\n"));
    assert!(raw.contains("Table    : 12\n"));
    assert!(raw.contains("Date     : 25-08-2026 14:03:22\n"));
    assert!(raw.contains(&"-".repeat(70)));
    assert!(raw.contains("Se'i Sapi|2|100000.00|Dibungkus\n"));
    // the logged TOTAL is the payable amount, after the discount
    assert!(raw.contains("TOTAL|117000.00\n"));

    assert!(store.clear_order_history().unwrap());
    assert_eq!(store.read_order_history().unwrap(), None);
    assert!(!store.clear_order_history().unwrap());
}

#[test]
fn test_backup_snapshot_shape() {
    let dir = tempdir().unwrap();
    let store = store_in(dir.path());
    let catalog = sample_catalog();

    let created = Local.with_ymd_and_hms(2026, 8, 25, 12, 0, 0).unwrap();
    let mut order = Order::new(1, "Sari", "5", created);
    order
        .add_item(catalog.find_by_name("Coto Makassar").unwrap(), 1, None)
        .unwrap();
    order.finalize().unwrap();

    store.backup(&catalog, std::slice::from_ref(&order)).unwrap();

    let raw = fs::read_to_string(dir.path().join("backup_restoran.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["restaurant"], "Restoran Nusantara");
    assert_eq!(value["entries"].as_array().unwrap().len(), 3);
    assert_eq!(value["completed_orders"].as_array().unwrap().len(), 1);
    assert_eq!(value["completed_orders"][0]["customer"], "Sari");
    assert_eq!(value["completed_orders"][0]["status"], "FINALIZED");
}

#[test]
fn test_csv_export_quotes_text_fields() {
    let dir = tempdir().unwrap();
    let store = store_in(dir.path());

    let mut catalog = Catalog::new("Restoran Nusantara");
    catalog
        .add_food("Sate \"Madura\"", 30000.0, "food", "main", "medium")
        .unwrap();
    catalog
        .add_beverage(
            "Es Teh",
            8000.0,
            "beverage",
            "cold",
            BeverageSize::Small,
            false,
        )
        .unwrap();
    catalog
        .add_discount("Member Discount", "discount", 0.10, 50000.0, "Members", true)
        .unwrap();

    store.export_csv(&catalog).unwrap();

    let raw = fs::read_to_string(dir.path().join("menu_export.csv")).unwrap();
    let lines: Vec<&str> = raw.lines().collect();
    assert_eq!(lines[0], "ID,Name,Price,Category,Type,Details");
    assert_eq!(
        lines[1],
        "1,\"Sate \"\"Madura\"\"\",30000.00,\"food\",\"main\",\"medium\""
    );
    assert_eq!(
        lines[2],
        "2,\"Es Teh\",8000.00,\"beverage\",\"cold\",\"small - Unsweetened\""
    );
    assert_eq!(
        lines[3],
        "3,\"Member Discount\",0.00,\"discount\",\"10% Off (Min: Rp50000.00)\",\"Members\""
    );
}

#[test]
fn test_file_summary_reports_existence_and_size() {
    let dir = tempdir().unwrap();
    let store = store_in(dir.path());

    let before = store.file_summary();
    assert_eq!(before.len(), 4);
    assert!(before.iter().all(|status| !status.exists));

    store.save_catalog(&sample_catalog()).unwrap();

    let after = store.file_summary();
    let menu = after.iter().find(|status| status.label == "menu").unwrap();
    assert!(menu.exists);
    assert!(menu.size_bytes > 0);
    assert!(!after.iter().any(|status| status.label == "history" && status.exists));
}

//! Built-in menu used when no catalog file exists yet

use shared::models::catalog::BeverageSize;

use super::Catalog;

/// Build the starter catalog: ten foods, ten beverages and two discount
/// rules from the eastern-Indonesian house menu
pub fn default_catalog(restaurant_name: &str) -> Catalog {
    let mut catalog = Catalog::new(restaurant_name);
    seed_foods(&mut catalog);
    seed_beverages(&mut catalog);
    seed_discounts(&mut catalog);
    catalog
}

fn seed_foods(catalog: &mut Catalog) {
    let foods: [(&str, f64, &str, &str); 10] = [
        ("Papeda Ikan Kuah Kuning", 38000.0, "main", "medium"),
        ("Coto Makassar", 42000.0, "main", "medium"),
        ("Ayam Taliwang", 45000.0, "main", "hot"),
        ("Se'i Sapi", 50000.0, "main", "medium"),
        ("Tinutuan (Bubur Manado)", 28000.0, "main", "none"),
        ("Ikan Bakar Colo-Colo", 43000.0, "main", "hot"),
        ("Konro Bakar", 52000.0, "main", "hot"),
        ("Ayam Woku Belanga", 40000.0, "main", "hot"),
        ("Jagung Bose", 20000.0, "side", "none"),
        ("Ikan Parende", 36000.0, "main", "medium"),
    ];
    for (name, price, subtype, spice) in foods {
        if let Err(e) = catalog.add_food(name, price, "food", subtype, spice) {
            tracing::warn!(name, error = %e, "Skipping default food entry");
        }
    }
}

fn seed_beverages(catalog: &mut Catalog) {
    let beverages: [(&str, f64, &str, BeverageSize, bool); 10] = [
        ("Es Pisang Ijo", 20000.0, "cold", BeverageSize::Medium, true),
        ("Sarabba", 15000.0, "hot", BeverageSize::Small, true),
        ("Air Guraka", 14000.0, "warm", BeverageSize::Small, true),
        ("Es Brenebon", 18000.0, "cold", BeverageSize::Medium, true),
        ("Kopi Rarobang", 16000.0, "hot", BeverageSize::Medium, true),
        ("Es Palu Butung", 20000.0, "cold", BeverageSize::Medium, true),
        ("Jus Gandaria", 17000.0, "cold", BeverageSize::Large, true),
        ("Es Matoa", 19000.0, "cold", BeverageSize::Medium, true),
        ("Susu Kuda Liar", 25000.0, "cold", BeverageSize::Small, false),
        ("Es Markisa", 15000.0, "cold", BeverageSize::Medium, true),
    ];
    for (name, price, subtype, size, sweetened) in beverages {
        if let Err(e) = catalog.add_beverage(name, price, "beverage", subtype, size, sweetened) {
            tracing::warn!(name, error = %e, "Skipping default beverage entry");
        }
    }
}

fn seed_discounts(catalog: &mut Catalog) {
    let discounts: [(&str, f64, f64, &str); 2] = [
        ("Weekend Special", 0.15, 100000.0, "Valid Saturday and Sunday"),
        ("Member Discount", 0.10, 50000.0, "For registered members"),
    ];
    for (name, rate, min_purchase, condition) in discounts {
        if let Err(e) = catalog.add_discount(name, "discount", rate, min_purchase, condition, true)
        {
            tracing::warn!(name, error = %e, "Skipping default discount entry");
        }
    }
}

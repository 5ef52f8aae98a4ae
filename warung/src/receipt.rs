//! Receipt rendering
//!
//! Lays out one order plus its computed totals as a fixed-width text
//! ticket. Every figure comes from the [`PriceBreakdown`]; nothing is
//! recomputed here, so the printed receipt always matches what the
//! pricing engine charged.

use shared::models::order::Order;
use warung_receipt::{TicketBuilder, pad_text};

use crate::pricing::PriceBreakdown;
use crate::pricing::money::{format_percent, format_rupiah};

/// Width of the item name column
const NAME_COLS: usize = 32;

/// Renders an order and its price breakdown as receipt text
pub struct ReceiptRenderer<'a> {
    order: &'a Order,
    breakdown: &'a PriceBreakdown,
    restaurant_name: &'a str,
    width: usize,
}

impl<'a> ReceiptRenderer<'a> {
    pub fn new(
        order: &'a Order,
        breakdown: &'a PriceBreakdown,
        restaurant_name: &'a str,
        width: usize,
    ) -> Self {
        Self {
            order,
            breakdown,
            restaurant_name,
            width,
        }
    }

    /// Render the complete ticket
    pub fn render(&self) -> String {
        let mut ticket = TicketBuilder::new(self.width);

        self.header(&mut ticket);
        self.items(&mut ticket);
        self.totals(&mut ticket);
        self.trailer(&mut ticket);

        ticket.finalize()
    }

    fn header(&self, ticket: &mut TicketBuilder) {
        ticket
            .eq_sep()
            .center(&self.restaurant_name.to_uppercase())
            .center("PAYMENT RECEIPT")
            .eq_sep()
            .write_line(&format!("{:<9}: #{}", "Order", self.order.id()))
            .write_line(&format!("{:<9}: {}", "Customer", self.order.customer()))
            .write_line(&format!("{:<9}: {}", "Table", self.order.table()))
            .write_line(&format!(
                "{:<9}: {}",
                "Date",
                self.order.created_at().format("%d-%m-%Y %H:%M:%S")
            ))
            .dash_sep();
    }

    fn items(&self, ticket: &mut TicketBuilder) {
        for line in &self.breakdown.lines {
            ticket.write_line(&format!(
                "  {} {:>3} x {:>10} = {:>11}",
                pad_text(&line.name, NAME_COLS, false),
                line.quantity,
                format_rupiah(line.unit_price),
                format_rupiah(line.line_total),
            ));
            if let Some(note) = &line.note {
                ticket.write_line(&format!("      Note: {note}"));
            }
        }
        ticket.dash_sep();
    }

    fn totals(&self, ticket: &mut TicketBuilder) {
        ticket
            .line_lr("Subtotal", &format_rupiah(self.breakdown.subtotal))
            .line_lr(
                &format!("Tax ({}%)", format_percent(self.breakdown.tax_rate)),
                &format_rupiah(self.breakdown.tax),
            )
            .line_lr("Service Fee", &format_rupiah(self.breakdown.service_fee));

        if let Some(label) = &self.breakdown.discount_label {
            ticket.line_lr(
                &format!("Discount ({label})"),
                &format!("-{}", format_rupiah(self.breakdown.discount_amount)),
            );
        }

        ticket
            .eq_sep()
            .line_lr("TOTAL", &format_rupiah(self.breakdown.total))
            .eq_sep();
    }

    fn trailer(&self, ticket: &mut TicketBuilder) {
        if let Some(info) = &self.breakdown.discount_info {
            ticket.blank().write_line(&format!("Discount info: {info}"));
        }
        if let Some(bonus) = &self.breakdown.bonus_note {
            ticket
                .blank()
                .write_line("Special offer:")
                .write_line(&format!("  Bonus: {bonus}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Local, TimeZone};
    use shared::models::catalog::BeverageSize;
    use shared::models::order::Order;

    use super::*;
    use crate::catalog::Catalog;
    use crate::pricing::{DiscountPolicy, PricingEngine};

    const WIDTH: usize = 65;

    fn fixed_order(id: u32) -> Order {
        let created = Local.with_ymd_and_hms(2026, 8, 25, 14, 3, 22).unwrap();
        Order::new(id, "Budi", "12", created)
    }

    fn render(order: &Order, catalog: &Catalog, policy: DiscountPolicy) -> String {
        let breakdown = PricingEngine::new(policy).price(order, catalog);
        ReceiptRenderer::new(order, &breakdown, "Restoran Nusantara", WIDTH).render()
    }

    #[test]
    fn test_receipt_layout_entry_discount() {
        let mut catalog = Catalog::new("Restoran Nusantara");
        let food = catalog
            .add_food("Se'i Sapi", 50000.0, "food", "main", "medium")
            .unwrap()
            .id;
        catalog
            .add_discount("Member Discount", "discount", 0.10, 100000.0, "", true)
            .unwrap();

        let mut order = fixed_order(3);
        order
            .add_item(catalog.find_by_id(food).unwrap(), 2, None)
            .unwrap();

        let text = render(&order, &catalog, DiscountPolicy::EntryDriven);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "=".repeat(WIDTH));
        assert_eq!(lines[1].trim(), "RESTORAN NUSANTARA");
        assert_eq!(lines[2].trim(), "PAYMENT RECEIPT");
        assert_eq!(lines[3], "=".repeat(WIDTH));
        assert_eq!(lines[4], "Order    : #3");
        assert_eq!(lines[5], "Customer : Budi");
        assert_eq!(lines[6], "Table    : 12");
        assert_eq!(lines[7], "Date     : 25-08-2026 14:03:22");
        assert_eq!(lines[8], "-".repeat(WIDTH));
        assert_eq!(
            lines[9],
            format!(
                "  {:<32} {:>3} x {:>10} = {:>11}",
                "Se'i Sapi", 2, "Rp50000.00", "Rp100000.00"
            )
        );
        assert_eq!(lines[10], "-".repeat(WIDTH));

        let subtotal = lines[11];
        assert_eq!(subtotal.len(), WIDTH);
        assert!(subtotal.starts_with("Subtotal"));
        assert!(subtotal.ends_with("Rp100000.00"));

        let tax = lines[12];
        assert!(tax.starts_with("Tax (10%)"));
        assert!(tax.ends_with("Rp10000.00"));

        let fee = lines[13];
        assert!(fee.starts_with("Service Fee"));
        assert!(fee.ends_with("Rp20000.00"));

        let discount = lines[14];
        assert_eq!(discount.len(), WIDTH);
        assert!(discount.starts_with("Discount (Member Discount)"));
        assert!(discount.ends_with("-Rp13000.00"));

        assert_eq!(lines[15], "=".repeat(WIDTH));
        let total = lines[16];
        assert_eq!(total.len(), WIDTH);
        assert!(total.starts_with("TOTAL"));
        assert!(total.ends_with("Rp117000.00"));
        assert_eq!(lines[17], "=".repeat(WIDTH));

        assert_eq!(lines[18], "");
        assert_eq!(
            lines[19],
            "Discount info: Member Discount - 10% OFF (min Rp100000.00)"
        );
        assert_eq!(lines.len(), 20);
    }

    #[test]
    fn test_receipt_without_discount_omits_discount_rows() {
        let mut catalog = Catalog::new("Restoran Nusantara");
        let food = catalog
            .add_food("Jagung Bose", 20000.0, "food", "side", "none")
            .unwrap()
            .id;

        let mut order = fixed_order(1);
        order
            .add_item(catalog.find_by_id(food).unwrap(), 1, None)
            .unwrap();

        let text = render(&order, &catalog, DiscountPolicy::EntryDriven);
        assert!(!text.contains("Discount"));
        assert!(!text.contains("Special offer"));
        assert!(text.ends_with(&format!("{}\n", "=".repeat(WIDTH))));
    }

    #[test]
    fn test_receipt_note_line_is_indented() {
        let mut catalog = Catalog::new("Restoran Nusantara");
        let food = catalog
            .add_food("Ayam Taliwang", 45000.0, "food", "main", "hot")
            .unwrap()
            .id;

        let mut order = fixed_order(2);
        order
            .add_item(
                catalog.find_by_id(food).unwrap(),
                1,
                Some("Extra sambal".to_string()),
            )
            .unwrap();

        let text = render(&order, &catalog, DiscountPolicy::EntryDriven);
        assert!(text.contains("\n      Note: Extra sambal\n"));
    }

    #[test]
    fn test_receipt_bonus_trailer() {
        let mut catalog = Catalog::new("Restoran Nusantara");
        let bev = catalog
            .add_beverage(
                "Es Pisang Ijo",
                20000.0,
                "beverage",
                "cold",
                BeverageSize::Medium,
                true,
            )
            .unwrap()
            .id;

        let mut order = fixed_order(4);
        order
            .add_item(catalog.find_by_id(bev).unwrap(), 2, None)
            .unwrap();

        // 40000 + 4000 tax + 20000 fee = 64000, over the bonus threshold
        let text = render(&order, &catalog, DiscountPolicy::FlatWithBonus);
        assert!(text.contains("\nSpecial offer:\n"));
        assert!(text.contains("  Bonus: Es Pisang Ijo (Buy 1 Get 1 Free)\n"));
        assert!(!text.contains("Discount info"));
    }

    #[test]
    fn test_receipt_truncates_long_names() {
        let mut catalog = Catalog::new("Restoran Nusantara");
        let long_name = "Nasi Campur Spesial Komplit Ekstra Lauk Pauk Nusantara";
        let food = catalog
            .add_food(long_name, 60000.0, "food", "main", "medium")
            .unwrap()
            .id;

        let mut order = fixed_order(5);
        order
            .add_item(catalog.find_by_id(food).unwrap(), 1, None)
            .unwrap();

        let text = render(&order, &catalog, DiscountPolicy::EntryDriven);
        let truncated: String = long_name.chars().take(NAME_COLS).collect();
        assert!(text.contains(&truncated));
        assert!(!text.contains(long_name));
        // the row keeps its fixed width despite the long name
        let row = text
            .lines()
            .find(|l| l.starts_with("  Nasi Campur"))
            .unwrap();
        assert_eq!(row.chars().count(), WIDTH);
    }
}

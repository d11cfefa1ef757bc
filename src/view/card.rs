use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::format::{
    currency, days_open_label, days_since, full_date, money, short_date, signed_money,
    truncate_name,
};
use crate::links::{order_links, ExternalLink};
use crate::models::order::non_blank;
use crate::models::{Order, OrderStatus};
use crate::shipping::{RowCapabilities, ShipmentRow, ShippingTotals};

/// Shipping money line on a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShippingSummary {
    pub charge: String,
    pub cost: String,
    pub profit: String,
    pub grand_total: String,
    pub all_quoted: bool,
}

impl ShippingSummary {
    pub fn new(totals: &ShippingTotals, order_total: Option<Decimal>) -> Self {
        Self {
            charge: money(totals.customer_charge),
            cost: money(totals.quoted),
            profit: signed_money(totals.profit),
            grand_total: money(totals.grand_total(order_total)),
            all_quoted: totals.all_quoted,
        }
    }
}

/// Compact card shown in the order list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderCard {
    pub order_id: String,
    pub name: String,
    pub status: OrderStatus,
    pub status_label: &'static str,
    pub status_color: &'static str,
    pub location: Option<String>,
    pub warehouses: Vec<String>,
    pub order_date: String,
    pub days_open: i64,
    pub days_open_label: String,
    pub order_total: String,
    pub paid: bool,
    pub shipments: Vec<ShipmentRow>,
    pub shipping: Option<ShippingSummary>,
}

impl OrderCard {
    pub fn new(order: &Order, today: NaiveDate) -> Self {
        let days_open = order
            .days_open
            .unwrap_or_else(|| days_since(order.order_date.as_deref(), today));
        let status = order.status();
        Self {
            order_id: order.order_id.clone(),
            name: truncate_name(order.display_name()),
            status,
            status_label: status.label(),
            status_color: status.color(),
            location: order.location(),
            warehouses: order.warehouses().into_iter().map(String::from).collect(),
            order_date: short_date(order.order_date.as_deref()),
            days_open,
            days_open_label: days_open_label(days_open),
            order_total: currency(order.order_total),
            paid: order.is_paid(),
            shipments: order
                .shipments
                .iter()
                .map(|s| ShipmentRow::new(s, RowCapabilities::FULL))
                .collect(),
            shipping: ShippingTotals::for_shipments(&order.shipments)
                .map(|totals| ShippingSummary::new(&totals, order.order_total)),
        }
    }
}

/// Everything known about one order, for the detail panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderDetail {
    pub card: OrderCard,
    pub customer_name: Option<String>,
    pub company_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Vec<String>,
    pub order_date: String,
    pub shipping_cost: String,
    pub payment_amount: String,
    pub comments: Option<String>,
    pub notes: Option<String>,
    pub ai_summary: Option<String>,
    pub legacy_quote: Option<String>,
    pub legacy_tracking: Option<String>,
    pub links: Vec<ExternalLink>,
}

impl OrderDetail {
    pub fn new(order: &Order, today: NaiveDate) -> Self {
        let mut address: Vec<String> = [&order.street, &order.street2]
            .into_iter()
            .filter_map(non_blank)
            .map(String::from)
            .collect();
        let city_line = [&order.city, &order.state, &order.zip_code]
            .into_iter()
            .filter_map(non_blank)
            .collect::<Vec<_>>()
            .join(" ");
        if !city_line.is_empty() {
            address.push(city_line);
        }

        Self {
            card: OrderCard::new(order, today),
            customer_name: non_blank(&order.customer_name).map(String::from),
            company_name: non_blank(&order.company_name).map(String::from),
            email: non_blank(&order.email).map(String::from),
            phone: non_blank(&order.phone).map(String::from),
            address,
            order_date: full_date(order.order_date.as_deref()),
            shipping_cost: currency(order.shipping_cost),
            payment_amount: currency(order.payment_amount),
            comments: non_blank(&order.comments).map(String::from),
            notes: non_blank(&order.notes).map(String::from),
            ai_summary: non_blank(&order.ai_summary).map(String::from),
            legacy_quote: non_blank(&order.rl_quote_no).map(String::from),
            legacy_tracking: non_blank(&order.pro_number)
                .or_else(|| non_blank(&order.tracking))
                .map(String::from),
            links: order_links(&order.order_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ShipMethod, Shipment};
    use rust_decimal_macros::dec;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 20).unwrap()
    }

    fn order() -> Order {
        Order {
            order_id: "5124".into(),
            customer_name: Some("Pat Rivera".into()),
            company_name: Some("Rivera Builders and Remodeling Group".into()),
            city: Some("Macon".into()),
            state: Some("GA".into()),
            zip_code: Some("31201".into()),
            street: Some("12 Oak St".into()),
            order_date: Some("2024-12-13T15:04:05Z".into()),
            order_total: Some(dec!(4210.5)),
            payment_amount: Some(dec!(4210.5)),
            shipments: vec![Shipment {
                shipment_id: "5124-LI".into(),
                warehouse: "LI".into(),
                ship_method: Some(ShipMethod::Ltl),
                rl_quote_price: Some(dec!(179.38)),
                rl_customer_price: Some(dec!(229.38)),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn card_formats_header_and_totals() {
        let card = OrderCard::new(&order(), today());
        assert_eq!(card.name, "Rivera Builders and Remod...");
        assert_eq!(card.location.as_deref(), Some("Macon, GA"));
        assert_eq!(card.order_date, "Dec 13");
        assert_eq!(card.days_open_label, "7 Days");
        assert_eq!(card.order_total, "$4,210.50");
        assert!(card.paid);

        let shipping = card.shipping.unwrap();
        assert_eq!(shipping.charge, "$229.38");
        assert_eq!(shipping.profit, "+$50.00");
        assert_eq!(shipping.grand_total, "$4,439.88");
        assert!(shipping.all_quoted);
    }

    #[test]
    fn server_days_open_wins() {
        let mut order = order();
        order.days_open = Some(1);
        assert_eq!(OrderCard::new(&order, today()).days_open_label, "1 Day");
    }

    #[test]
    fn detail_collects_address_and_links() {
        let detail = OrderDetail::new(&order(), today());
        assert_eq!(detail.address, vec!["12 Oak St", "Macon GA 31201"]);
        assert_eq!(detail.order_date, "12/13/2024");
        assert_eq!(detail.links.len(), 2);
        assert_eq!(detail.shipping_cost, "");
    }
}

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{ShipMethod, Shipment};

/// Shipping money summed over an order's shipments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShippingTotals {
    /// What the business pays carriers.
    pub quoted: Decimal,
    /// What the customer is charged.
    pub customer_charge: Decimal,
    pub profit: Decimal,
    /// Every non-pickup shipment has a customer price.
    pub all_quoted: bool,
}

impl ShippingTotals {
    /// `None` when the order has no shipments yet.
    pub fn for_shipments(shipments: &[Shipment]) -> Option<Self> {
        if shipments.is_empty() {
            return None;
        }

        let mut quoted = Decimal::ZERO;
        let mut customer_charge = Decimal::ZERO;
        let mut all_quoted = true;

        for shipment in shipments {
            match shipment.customer_charge() {
                Some(charge) => customer_charge += charge,
                None if shipment.ship_method == Some(ShipMethod::Pickup) => {}
                None => all_quoted = false,
            }
            if let Some(cost) = shipment.quoted_cost() {
                quoted += cost;
            }
        }

        Some(Self {
            quoted,
            customer_charge,
            profit: customer_charge - quoted,
            all_quoted,
        })
    }

    /// Order total plus what the customer pays for shipping.
    pub fn grand_total(&self, order_total: Option<Decimal>) -> Decimal {
        order_total.unwrap_or_default() + self.customer_charge
    }
}

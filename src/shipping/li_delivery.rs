use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::client::ShipmentPatch;
use crate::format::fixed2;
use crate::models::{parse_decimal, Shipment};

pub const DEFAULT_LI_COST: Decimal = dec!(200);
pub const DEFAULT_LI_CHARGE: Decimal = dec!(250);

/// Cost and customer charge for a delivery handled by the Li warehouse.
/// Nothing is persisted until the operator saves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LiDeliveryPricing {
    cost: String,
    charge: String,
}

impl Default for LiDeliveryPricing {
    fn default() -> Self {
        Self {
            cost: DEFAULT_LI_COST.to_string(),
            charge: DEFAULT_LI_CHARGE.to_string(),
        }
    }
}

impl LiDeliveryPricing {
    /// Starts from the stored prices, or the defaults for a fresh shipment.
    pub fn for_shipment(shipment: &Shipment) -> Self {
        let defaults = Self::default();
        Self {
            cost: shipment
                .li_quote_price
                .map(|p| p.normalize().to_string())
                .unwrap_or(defaults.cost),
            charge: shipment
                .li_customer_price
                .map(|p| p.normalize().to_string())
                .unwrap_or(defaults.charge),
        }
    }

    pub fn set_cost(&mut self, raw: impl Into<String>) {
        self.cost = raw.into();
    }

    pub fn set_charge(&mut self, raw: impl Into<String>) {
        self.charge = raw.into();
    }

    pub fn cost_input(&self) -> &str {
        &self.cost
    }

    pub fn charge_input(&self) -> &str {
        &self.charge
    }

    pub fn cost(&self) -> Option<Decimal> {
        parse_decimal(&self.cost)
    }

    pub fn charge(&self) -> Option<Decimal> {
        parse_decimal(&self.charge)
    }

    /// Live profit; a blank or non-numeric field counts as zero.
    pub fn profit(&self) -> Decimal {
        self.charge().unwrap_or_default() - self.cost().unwrap_or_default()
    }

    /// Profit to two decimals, sign included when negative.
    pub fn profit_display(&self) -> String {
        fixed2(self.profit())
    }

    /// Partial update with whichever of cost and charge parse; `None` when
    /// neither does. Unparseable fields are left out, not reported.
    pub fn to_patch(&self) -> Option<ShipmentPatch> {
        let mut patch = ShipmentPatch::new();
        if let Some(cost) = self.cost() {
            patch = patch.li_quote_price(cost);
        }
        if let Some(charge) = self.charge() {
            patch = patch.li_customer_price(charge);
        }
        (!patch.is_empty()).then_some(patch)
    }
}

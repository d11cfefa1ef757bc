use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use super::order::non_blank;
use super::{id_string, lenient_decimal, lenient_enum, opt_id_string};

/// Shipment status enumeration
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ShipmentStatus {
    #[default]
    Pending,
    Quoted,
    Booked,
    Shipped,
    Delivered,
}

impl ShipmentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ShipmentStatus::Pending => "Pending",
            ShipmentStatus::Quoted => "Quoted",
            ShipmentStatus::Booked => "Booked",
            ShipmentStatus::Shipped => "Shipped",
            ShipmentStatus::Delivered => "Delivered",
        }
    }
}

/// Shipping method enumeration. An unset method is represented as `None`
/// wherever a method is optional.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum ShipMethod {
    #[serde(rename = "LTL")]
    #[strum(to_string = "LTL")]
    Ltl,
    Pirateship,
    Pickup,
    #[strum(to_string = "BoxTruck", serialize = "box-truck")]
    BoxTruck,
    #[strum(to_string = "LiDelivery", serialize = "li-delivery")]
    LiDelivery,
}

impl ShipMethod {
    pub fn label(&self) -> &'static str {
        match self {
            ShipMethod::Ltl => "LTL (RL Carriers)",
            ShipMethod::Pirateship => "Pirateship",
            ShipMethod::Pickup => "Pickup",
            ShipMethod::BoxTruck => "Box Truck",
            ShipMethod::LiDelivery => "Li Delivery",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ShipMethod::Ltl => "Freight shipping with quote",
            ShipMethod::Pirateship => "Parcel shipping",
            ShipMethod::Pickup => "Customer picks up",
            ShipMethod::BoxTruck => "Local delivery",
            ShipMethod::LiDelivery => "Li handles shipping",
        }
    }

    /// Methods whose row selection opens the shipping manager.
    pub fn opens_manager(&self) -> bool {
        !matches!(self, ShipMethod::Pickup)
    }

    /// Methods that never carry a tracking number on the row.
    pub fn tracks_shipments(&self) -> bool {
        !matches!(self, ShipMethod::Pickup | ShipMethod::LiDelivery)
    }
}

/// One warehouse leg of an order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    #[serde(default, deserialize_with = "id_string")]
    pub shipment_id: String,
    #[serde(default, deserialize_with = "opt_id_string")]
    pub order_id: Option<String>,
    #[serde(default, deserialize_with = "id_string")]
    pub warehouse: String,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub weight: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_enum")]
    pub status: Option<ShipmentStatus>,
    #[serde(default, deserialize_with = "lenient_enum")]
    pub ship_method: Option<ShipMethod>,
    #[serde(default, deserialize_with = "opt_id_string")]
    pub tracking_number: Option<String>,
    #[serde(default, deserialize_with = "opt_id_string")]
    pub tracking: Option<String>,
    #[serde(default, deserialize_with = "opt_id_string")]
    pub pro_number: Option<String>,
    #[serde(default, deserialize_with = "opt_id_string")]
    pub rl_quote_number: Option<String>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub rl_quote_price: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub rl_customer_price: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub li_quote_price: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub li_customer_price: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub quote_price: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub customer_price: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub ps_quote_price: Option<Decimal>,
}

impl Shipment {
    pub fn effective_status(&self) -> ShipmentStatus {
        self.status.unwrap_or_default()
    }

    /// Tracking or PRO number, whichever field the backend filled in.
    pub fn tracking_reference(&self) -> Option<&str> {
        non_blank(&self.tracking_number)
            .or_else(|| non_blank(&self.tracking))
            .or_else(|| non_blank(&self.pro_number))
    }

    pub fn has_quote_info(&self) -> bool {
        self.rl_quote_number.is_some()
            || self.rl_quote_price.is_some()
            || self.li_quote_price.is_some()
            || self.quote_price.is_some()
    }

    /// What the customer is charged for this leg, by method-specific
    /// precedence. `None` means not yet quoted.
    pub fn customer_charge(&self) -> Option<Decimal> {
        nonzero(self.rl_customer_price)
            .or(nonzero(self.li_customer_price))
            .or(nonzero(self.customer_price))
            .or(nonzero(self.ps_quote_price))
    }

    /// What the business pays the carrier for this leg.
    pub fn quoted_cost(&self) -> Option<Decimal> {
        nonzero(self.rl_quote_price)
            .or(nonzero(self.li_quote_price))
            .or(nonzero(self.quote_price))
            .or(nonzero(self.ps_quote_price))
    }
}

fn nonzero(value: Option<Decimal>) -> Option<Decimal> {
    value.filter(|v| !v.is_zero())
}

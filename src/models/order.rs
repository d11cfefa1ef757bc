use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

use super::{
    id_string, lenient_bool, lenient_decimal, lenient_enum, null_as_empty, opt_id_string,
    Destination, Shipment,
};

/// Order workflow status, in the order the business walks through it.
///
/// The server derives each status from a set of boolean milestone flags, so
/// moving an order to a status means writing the flags that status implies
/// (see [`OrderStatus::milestones`]). Any status may be chosen from any other.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    NeedsPaymentLink,
    AwaitingPayment,
    NeedsWarehouseOrder,
    AwaitingWarehouse,
    NeedsBol,
    AwaitingShipment,
    Complete,
}

impl OrderStatus {
    /// Numbered label used on cards and status selectors.
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::NeedsPaymentLink => "1-Need Invoice",
            OrderStatus::AwaitingPayment => "2-Awaiting Pay",
            OrderStatus::NeedsWarehouseOrder => "3-Need to Order",
            OrderStatus::AwaitingWarehouse => "4-At Warehouse",
            OrderStatus::NeedsBol => "5-Need BOL",
            OrderStatus::AwaitingShipment => "6-Ready Ship",
            OrderStatus::Complete => "Complete",
        }
    }

    /// Label used on the stats bar tiles.
    pub fn short_label(&self) -> &'static str {
        match self {
            OrderStatus::NeedsPaymentLink => "Need Invoice",
            OrderStatus::AwaitingPayment => "Awaiting Pay",
            OrderStatus::NeedsWarehouseOrder => "Need to Order",
            OrderStatus::AwaitingWarehouse => "At Warehouse",
            OrderStatus::NeedsBol => "Need BOL",
            OrderStatus::AwaitingShipment => "Ready Ship",
            OrderStatus::Complete => "Archived",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            OrderStatus::NeedsPaymentLink => "#f44336",
            OrderStatus::AwaitingPayment => "#ff9800",
            OrderStatus::NeedsWarehouseOrder => "#9c27b0",
            OrderStatus::AwaitingWarehouse => "#2196f3",
            OrderStatus::NeedsBol => "#00bcd4",
            OrderStatus::AwaitingShipment => "#4caf50",
            OrderStatus::Complete => "#9e9e9e",
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, OrderStatus::Complete)
    }

    /// Every status except `complete`, in workflow order.
    pub fn active() -> impl Iterator<Item = OrderStatus> {
        OrderStatus::iter().filter(|status| !status.is_complete())
    }

    /// Milestone flags the server expects when an order is moved here.
    pub fn milestones(&self) -> &'static [(Milestone, bool)] {
        use Milestone::*;
        match self {
            OrderStatus::NeedsPaymentLink => &[(PaymentLinkSent, false), (PaymentReceived, false)],
            OrderStatus::AwaitingPayment => &[(PaymentLinkSent, true), (PaymentReceived, false)],
            OrderStatus::NeedsWarehouseOrder => {
                &[(PaymentReceived, true), (SentToWarehouse, false)]
            }
            OrderStatus::AwaitingWarehouse => {
                &[(SentToWarehouse, true), (WarehouseConfirmed, false)]
            }
            OrderStatus::NeedsBol => &[(WarehouseConfirmed, true), (BolSent, false)],
            OrderStatus::AwaitingShipment => &[(BolSent, true), (IsComplete, false)],
            OrderStatus::Complete => &[(IsComplete, true)],
        }
    }
}

/// Boolean checkpoints the server keeps per order.
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
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Milestone {
    PaymentLinkSent,
    PaymentReceived,
    SentToWarehouse,
    WarehouseConfirmed,
    BolSent,
    IsComplete,
}

/// Partial order update sent as the JSON body of `PATCH /orders/{id}`.
/// Only fields that are set are serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_link_sent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_received: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sent_to_warehouse: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warehouse_confirmed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bol_sent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_complete: Option<bool>,
}

impl OrderPatch {
    pub fn notes(notes: impl Into<String>) -> Self {
        Self {
            notes: Some(notes.into()),
            ..Default::default()
        }
    }

    /// Flag updates that move an order to `status`.
    pub fn for_status(status: OrderStatus) -> Self {
        let mut patch = Self::default();
        for (milestone, value) in status.milestones() {
            patch.set_milestone(*milestone, *value);
        }
        patch
    }

    pub fn set_milestone(&mut self, milestone: Milestone, value: bool) {
        let slot = match milestone {
            Milestone::PaymentLinkSent => &mut self.payment_link_sent,
            Milestone::PaymentReceived => &mut self.payment_received,
            Milestone::SentToWarehouse => &mut self.sent_to_warehouse,
            Milestone::WarehouseConfirmed => &mut self.warehouse_confirmed,
            Milestone::BolSent => &mut self.bol_sent,
            Milestone::IsComplete => &mut self.is_complete,
        };
        *slot = Some(value);
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Order snapshot as returned by `GET /orders`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(default, deserialize_with = "id_string")]
    pub order_id: String,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "opt_id_string")]
    pub phone: Option<String>,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub street2: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "opt_id_string")]
    pub zip_code: Option<String>,
    #[serde(default)]
    pub order_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub order_total: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub shipping_cost: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub payment_amount: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_enum")]
    pub current_status: Option<OrderStatus>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub is_complete: bool,
    #[serde(default)]
    pub days_open: Option<i64>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub comments: Option<String>,
    #[serde(default)]
    pub ai_summary: Option<String>,
    #[serde(default)]
    pub warehouse_1: Option<String>,
    #[serde(default)]
    pub warehouse_2: Option<String>,
    #[serde(default)]
    pub warehouse_3: Option<String>,
    #[serde(default)]
    pub warehouse_4: Option<String>,
    #[serde(default, deserialize_with = "opt_id_string")]
    pub rl_quote_no: Option<String>,
    #[serde(default, deserialize_with = "opt_id_string")]
    pub pro_number: Option<String>,
    #[serde(default, deserialize_with = "opt_id_string")]
    pub tracking: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub shipments: Vec<Shipment>,
}

impl Order {
    /// Effective status: the server's completion flag wins over a stale
    /// status string, and a missing status reads as the first step.
    pub fn status(&self) -> OrderStatus {
        if self.is_complete {
            OrderStatus::Complete
        } else {
            self.current_status.unwrap_or_default()
        }
    }

    pub fn is_archived(&self) -> bool {
        self.status().is_complete()
    }

    /// Company first, then contact name.
    pub fn display_name(&self) -> &str {
        non_blank(&self.company_name)
            .or_else(|| non_blank(&self.customer_name))
            .unwrap_or("Unknown")
    }

    /// "City, ST" when both parts are known.
    pub fn location(&self) -> Option<String> {
        match (non_blank(&self.city), non_blank(&self.state)) {
            (Some(city), Some(state)) => Some(format!("{}, {}", city, state)),
            _ => None,
        }
    }

    pub fn warehouses(&self) -> Vec<&str> {
        [
            &self.warehouse_1,
            &self.warehouse_2,
            &self.warehouse_3,
            &self.warehouse_4,
        ]
        .into_iter()
        .filter_map(non_blank)
        .collect()
    }

    pub fn is_paid(&self) -> bool {
        self.payment_amount.map(|amount| !amount.is_zero()).unwrap_or(false)
    }

    pub fn shipment(&self, shipment_id: &str) -> Option<&Shipment> {
        self.shipments
            .iter()
            .find(|shipment| shipment.shipment_id == shipment_id)
    }

    /// Customer address block used by the parcel helper.
    pub fn ship_to(&self) -> Destination {
        let street = match (non_blank(&self.street), non_blank(&self.street2)) {
            (Some(street), Some(unit)) => Some(format!("{} {}", street, unit)),
            (Some(street), None) => Some(street.to_string()),
            _ => None,
        };
        Destination {
            name: Some(self.display_name().to_string()),
            street,
            city: self.city.clone(),
            state: self.state.clone(),
            zip: self.zip_code.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
        }
    }
}

pub(crate) fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

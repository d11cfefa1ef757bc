use serde::Serialize;

use super::router::tracking_patch;
use crate::client::ShipmentPatch;
use crate::models::order::non_blank;
use crate::models::{ShipMethod, Shipment, ShipmentStatus};

/// Which controls a shipment row offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RowCapabilities {
    pub status_select: bool,
    pub method_select: bool,
    pub manager_button: bool,
    pub tracking_entry: bool,
}

impl RowCapabilities {
    /// Everything enabled, as on the order card.
    pub const FULL: Self = Self {
        status_select: true,
        method_select: true,
        manager_button: true,
        tracking_entry: true,
    };
}

impl Default for RowCapabilities {
    fn default() -> Self {
        Self::FULL
    }
}

/// What a row action sends, and whether the shipping manager opens after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowAction {
    pub patch: ShipmentPatch,
    pub opens_manager: bool,
}

/// One rendered shipment line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShipmentRow {
    pub shipment_id: String,
    pub warehouse: String,
    pub status: ShipmentStatus,
    pub method: Option<ShipMethod>,
    pub quote_label: String,
    pub tracking_display: Option<String>,
    pub capabilities: RowCapabilities,
}

impl ShipmentRow {
    pub fn new(shipment: &Shipment, capabilities: RowCapabilities) -> Self {
        Self {
            shipment_id: shipment.shipment_id.clone(),
            warehouse: shipment.warehouse.clone(),
            status: shipment.effective_status(),
            method: shipment.ship_method,
            quote_label: quote_label(shipment),
            tracking_display: shipment.tracking_reference().map(tracking_tail),
            capabilities,
        }
    }

    pub fn method_label(&self) -> &'static str {
        self.method.map(|m| m.label()).unwrap_or("Select method")
    }

    /// Pickup and Li deliveries never take a tracking number.
    pub fn shows_tracking_entry(&self) -> bool {
        self.capabilities.tracking_entry && self.method.map_or(true, |m| m.tracks_shipments())
    }

    /// Every shipment can open the manager, pickups included.
    pub fn shows_manager_button(&self) -> bool {
        self.capabilities.manager_button
    }

    pub fn change_status(&self, status: ShipmentStatus) -> Option<RowAction> {
        self.capabilities.status_select.then(|| RowAction {
            patch: ShipmentPatch::new().status(status),
            opens_manager: false,
        })
    }

    /// Clearing the method or choosing pickup does not open the manager.
    pub fn change_method(&self, method: Option<ShipMethod>) -> Option<RowAction> {
        self.capabilities.method_select.then(|| RowAction {
            patch: ShipmentPatch::new().ship_method(method),
            opens_manager: method.map_or(false, |m| m.opens_manager()),
        })
    }

    /// `None` when entry is disabled or the input is blank.
    pub fn save_tracking(&self, raw: &str) -> Option<RowAction> {
        let tracking = raw.trim();
        if !self.shows_tracking_entry() || tracking.is_empty() {
            return None;
        }
        Some(RowAction {
            patch: tracking_patch(tracking),
            opens_manager: false,
        })
    }
}

/// Short price or quote reference shown beside the method.
pub fn quote_label(shipment: &Shipment) -> String {
    if let Some(number) = non_blank(&shipment.rl_quote_number) {
        return format!("Q:{}", number);
    }
    let price = shipment
        .li_quote_price
        .filter(|p| !p.is_zero())
        .or_else(|| shipment.quote_price.filter(|p| !p.is_zero()));
    match price {
        Some(price) => format!("${}", price.normalize()),
        None => "Quote".to_string(),
    }
}

/// Last six characters, enough to tell tracking numbers apart.
pub fn tracking_tail(tracking: &str) -> String {
    let chars: Vec<char> = tracking.trim().chars().collect();
    let start = chars.len().saturating_sub(6);
    chars[start..].iter().collect()
}

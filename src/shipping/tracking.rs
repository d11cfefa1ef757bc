use serde::Serialize;

use super::address::OrderContact;
use crate::links::encode_component;
use crate::models::{ShipMethod, Shipment};

const SIGNATURE: &str = "The Cabinets For Contractors Team";

/// Carrier inferred from the shipping method and tracking number shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Carrier {
    RlCarriers,
    Ups,
    Usps,
    Freight,
}

impl Carrier {
    pub fn detect(tracking: &str, method: Option<ShipMethod>) -> Self {
        let tracking = tracking.trim();
        if method == Some(ShipMethod::Ltl) {
            Carrier::RlCarriers
        } else if tracking.starts_with("1Z") {
            Carrier::Ups
        } else if matches!(tracking.len(), 22 | 26) {
            Carrier::Usps
        } else {
            Carrier::Freight
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Carrier::RlCarriers => "RL Carriers",
            Carrier::Ups => "UPS",
            Carrier::Usps => "USPS",
            Carrier::Freight => "Freight",
        }
    }

    pub fn tracking_url(&self, tracking: &str) -> Option<String> {
        let tracking = encode_component(tracking.trim());
        match self {
            Carrier::RlCarriers => Some(format!(
                "https://www.rlcarriers.com/freight/shipping/shipment-tracing?pro={}",
                tracking
            )),
            Carrier::Ups => Some(format!("https://www.ups.com/track?tracknum={}", tracking)),
            Carrier::Usps => Some(format!(
                "https://tools.usps.com/go/TrackConfirmAction?tLabels={}",
                tracking
            )),
            Carrier::Freight => None,
        }
    }
}

/// Shipping notification drafted for the customer's mail client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackingEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
    pub carrier: Carrier,
    pub tracking_url: Option<String>,
}

impl TrackingEmail {
    pub fn compose(contact: &OrderContact, tracking: &str, method: Option<ShipMethod>) -> Self {
        let tracking = tracking.trim();
        let carrier = Carrier::detect(tracking, method);
        let tracking_url = carrier.tracking_url(tracking);
        let order_id = &contact.order_id;

        let subject = format!(
            "{}, please see tracking information for order {}",
            contact.addressee(),
            order_id
        );

        let track_line = tracking_url
            .as_ref()
            .map(|url| format!("Track your shipment: {}", url))
            .unwrap_or_default();
        let body = format!(
            "Hey {},\n\nThank you for your business! Your order {} has been shipped.\n\n{} Tracking Number: {}\n{}\n\nThank you for your business,\n{}",
            contact.first_name(),
            order_id,
            carrier.name(),
            tracking,
            track_line,
            SIGNATURE
        );

        Self {
            to: contact.email.clone().unwrap_or_default(),
            subject,
            body,
            carrier,
            tracking_url,
        }
    }

    /// `mailto:` URL with percent-encoded subject and body.
    pub fn mailto_url(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.to.trim(),
            mail_encode(&self.subject),
            mail_encode(&self.body)
        )
    }
}

/// Form encoding writes spaces as `+`, which mail clients show literally.
fn mail_encode(raw: &str) -> String {
    encode_component(raw).replace('+', "%20")
}

/// Panel shown for Pickup and Box Truck shipments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackingPanel {
    pub method: Option<ShipMethod>,
    pub tracking_input: String,
}

impl TrackingPanel {
    pub fn new(shipment: &Shipment) -> Self {
        Self {
            method: shipment.ship_method,
            tracking_input: shipment.tracking_number.clone().unwrap_or_default(),
        }
    }

    pub fn instructions(&self) -> &'static str {
        match self.method {
            Some(ShipMethod::Pickup) => {
                "Customer will pick up from warehouse. Mark as complete when picked up."
            }
            Some(ShipMethod::BoxTruck) => "Enter tracking/reference number when shipped.",
            Some(ShipMethod::LiDelivery) => "Li handles delivery. No action needed.",
            _ => "",
        }
    }

    /// Only box truck deliveries take a reference number here.
    pub fn accepts_tracking(&self) -> bool {
        self.method == Some(ShipMethod::BoxTruck)
    }

    pub fn set_tracking(&mut self, tracking: impl Into<String>) {
        self.tracking_input = tracking.into();
    }

    /// Trimmed reference to persist on save, when one was entered.
    pub fn entered_tracking(&self) -> Option<&str> {
        if !self.accepts_tracking() {
            return None;
        }
        Some(self.tracking_input.trim()).filter(|t| !t.is_empty())
    }
}

use serde::Serialize;

use super::address::{destination_fields, CopyField};
use crate::links::{ExternalLink, PIRATESHIP_URL};
use crate::models::{Destination, Shipment};

/// Parcel label workflow: copy the ship-to address into Pirateship, buy
/// the label there, then paste the tracking number back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PirateshipHelper {
    ship_to: Destination,
    tracking_input: String,
}

impl PirateshipHelper {
    pub fn new(shipment: &Shipment, ship_to: Destination) -> Self {
        Self {
            ship_to,
            tracking_input: shipment.tracking_number.clone().unwrap_or_default(),
        }
    }

    pub fn address_fields(&self) -> Vec<CopyField> {
        destination_fields(&self.ship_to)
    }

    pub fn label_link(&self) -> ExternalLink {
        ExternalLink::new("Open Pirateship", PIRATESHIP_URL)
    }

    pub fn tracking_input(&self) -> &str {
        &self.tracking_input
    }

    pub fn set_tracking(&mut self, tracking: impl Into<String>) {
        self.tracking_input = tracking.into();
    }

    pub fn entered_tracking(&self) -> Option<&str> {
        Some(self.tracking_input.trim()).filter(|t| !t.is_empty())
    }
}

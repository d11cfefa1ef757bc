use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use tracing::{info, instrument, warn};

use super::address::{bill_to_fields, destination_fields, notification_emails, CopyField};
use crate::client::{OrdersApi, ShipmentPatch};
use crate::errors::ApiError;
use crate::format::money;
use crate::links::{ExternalLink, WindowGeometry, RL_QUOTE_WINDOW};
use crate::models::{parse_decimal, RlQuoteData};

/// Freight class used for every cabinet shipment.
pub const FREIGHT_CLASS: u32 = 85;

/// Flat amount added to the carrier quote to get the customer price.
pub const LTL_MARKUP: Decimal = dec!(50);

/// Customer price for a carrier quote typed by the operator; `None` when the
/// input is blank or not a number.
pub fn customer_price(raw_quote_price: &str) -> Option<Decimal> {
    parse_decimal(raw_quote_price).map(|price| price + LTL_MARKUP)
}

/// Operator input for a carrier quote.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QuoteEntry {
    pub quote_number: String,
    pub quote_price: String,
}

impl QuoteEntry {
    pub fn new(quote_number: impl Into<String>, quote_price: impl Into<String>) -> Self {
        Self {
            quote_number: quote_number.into(),
            quote_price: quote_price.into(),
        }
    }

    pub fn customer_price(&self) -> Option<Decimal> {
        customer_price(&self.quote_price)
    }

    /// Single partial update: blank number and blank price are left out, and
    /// the customer price is only sent when the price parses.
    pub fn to_patch(&self) -> ShipmentPatch {
        let mut patch = ShipmentPatch::new();
        let number = self.quote_number.trim();
        if !number.is_empty() {
            patch = patch.rl_quote_number(number);
        }
        let price = self.quote_price.trim();
        if !price.is_empty() {
            patch = patch.rl_quote_price(price);
        }
        if let Some(customer) = self.customer_price().filter(|p| !p.is_zero()) {
            patch = patch.rl_customer_price(customer);
        }
        patch
    }
}

/// Copy helpers for filling in the carrier's bill of lading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BolHelper {
    pub bill_to: Vec<CopyField>,
    pub notification_emails: String,
    pub customer_street: String,
    pub customer_city_state: String,
}

impl BolHelper {
    pub fn new(data: &RlQuoteData) -> Self {
        let destination = &data.destination;
        Self {
            bill_to: bill_to_fields(),
            notification_emails: notification_emails(destination.email.as_deref()),
            customer_street: destination.street.clone().unwrap_or_default(),
            customer_city_state: format!(
                "{}, {}",
                destination.city.as_deref().unwrap_or_default(),
                destination.state.as_deref().unwrap_or_default()
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum QuoteInputs {
    Pending,
    Loaded(Box<RlQuoteData>),
    Failed(String),
}

/// LTL freight quote workflow for one shipment.
#[derive(Debug, Clone, PartialEq)]
pub struct LtlQuoteHelper {
    shipment_id: String,
    inputs: QuoteInputs,
    entry: QuoteEntry,
    prefill: QuoteEntry,
    window: WindowGeometry,
}

impl LtlQuoteHelper {
    pub fn new(shipment_id: impl Into<String>, window: WindowGeometry) -> Self {
        Self {
            shipment_id: shipment_id.into(),
            inputs: QuoteInputs::Pending,
            entry: QuoteEntry::default(),
            prefill: QuoteEntry::default(),
            window,
        }
    }

    /// Fetches the quote inputs and prefills the entry from any stored quote.
    /// A failure is kept on the helper so the panel can offer to go back.
    #[instrument(skip(self, api), fields(shipment_id = %self.shipment_id))]
    pub async fn load(&mut self, api: &dyn OrdersApi) -> Result<(), ApiError> {
        match api.fetch_rl_quote_data(&self.shipment_id).await {
            Ok(data) => {
                let existing = &data.existing_quote;
                self.entry = QuoteEntry::new(
                    existing.quote_number.clone().unwrap_or_default(),
                    existing
                        .quote_price
                        .map(|p| p.normalize().to_string())
                        .unwrap_or_default(),
                );
                self.prefill = self.entry.clone();
                info!(oversized = data.oversized.detected, "Loaded freight quote inputs");
                self.inputs = QuoteInputs::Loaded(Box::new(data));
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "Failed to load freight quote inputs");
                self.inputs = QuoteInputs::Failed(err.to_string());
                Err(err)
            }
        }
    }

    pub fn shipment_id(&self) -> &str {
        &self.shipment_id
    }

    pub fn inputs(&self) -> &QuoteInputs {
        &self.inputs
    }

    pub fn data(&self) -> Option<&RlQuoteData> {
        match &self.inputs {
            QuoteInputs::Loaded(data) => Some(data.as_ref()),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match &self.inputs {
            QuoteInputs::Failed(reason) => Some(reason.as_str()),
            _ => None,
        }
    }

    pub fn entry(&self) -> &QuoteEntry {
        &self.entry
    }

    pub fn set_quote_number(&mut self, number: impl Into<String>) {
        self.entry.quote_number = number.into();
    }

    pub fn set_quote_price(&mut self, price: impl Into<String>) {
        self.entry.quote_price = price.into();
    }

    /// The operator changed the number or price since loading.
    pub fn is_dirty(&self) -> bool {
        self.entry != self.prefill
    }

    pub fn freight_class(&self) -> u32 {
        FREIGHT_CLASS
    }

    /// Customer price derived from the entered quote; the placeholder when
    /// the quote does not parse, matching what a save would send.
    pub fn customer_price_display(&self) -> String {
        self.entry
            .customer_price()
            .map(money)
            .unwrap_or_else(|| "Auto-calculated".to_string())
    }

    /// Carrier quote page, opened in the right half of the screen.
    pub fn quote_link(&self) -> Option<ExternalLink> {
        let url = self.data()?.rl_quote_url.clone()?;
        Some(ExternalLink::new("Open RL Quote Page", url).in_window(RL_QUOTE_WINDOW, self.window))
    }

    pub fn ship_to_fields(&self) -> Vec<CopyField> {
        self.data()
            .map(|d| destination_fields(&d.destination))
            .unwrap_or_default()
    }

    /// Items the operator must declare dimensions for.
    pub fn oversized_items(&self) -> &[String] {
        match self.data() {
            Some(data) if data.oversized.detected => data.oversized.items.as_slice(),
            _ => &[],
        }
    }

    /// Weight line, or a prompt to enter it on the carrier site.
    pub fn weight_display(&self) -> Option<String> {
        let weight = &self.data()?.weight;
        Some(match weight.value {
            Some(value) => match weight.note.as_deref() {
                Some(note) => format!("{} lbs ({})", value.normalize(), note),
                None => format!("{} lbs", value.normalize()),
            },
            None => weight
                .note
                .clone()
                .unwrap_or_else(|| "Enter weight manually on RL site".to_string()),
        })
    }

    pub fn bol(&self) -> Option<BolHelper> {
        self.data().map(BolHelper::new)
    }

    pub fn to_patch(&self) -> ShipmentPatch {
        self.entry.to_patch()
    }
}

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{id_string, lenient_bool, lenient_decimal, null_as_empty, opt_id_string};

/// Freight-quote inputs computed by the backend for one shipment
/// (`GET /shipments/{id}/rl-quote-data`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RlQuoteData {
    /// `"ok"` on success; anything else comes with a `message`.
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "id_string")]
    pub shipment_id: String,
    #[serde(default)]
    pub warehouse: Option<String>,
    #[serde(default, deserialize_with = "opt_id_string")]
    pub origin_zip: Option<String>,
    #[serde(default)]
    pub destination: Destination,
    #[serde(default)]
    pub weight: WeightEstimate,
    #[serde(default)]
    pub oversized: OversizeCheck,
    #[serde(default)]
    pub rl_quote_url: Option<String>,
    #[serde(default)]
    pub existing_quote: ExistingQuote,
}

impl RlQuoteData {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

/// Customer ship-to block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "opt_id_string")]
    pub zip: Option<String>,
    #[serde(default, deserialize_with = "opt_id_string")]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Computed shipment weight and where the number came from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeightEstimate {
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub value: Option<Decimal>,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OversizeCheck {
    #[serde(default, deserialize_with = "lenient_bool")]
    pub detected: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub items: Vec<String>,
}

/// Quote already stored on the shipment, used to prefill the entry form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExistingQuote {
    #[serde(default, deserialize_with = "opt_id_string")]
    pub quote_number: Option<String>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub quote_price: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub customer_price: Option<Decimal>,
}

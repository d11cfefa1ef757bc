use rust_decimal::Decimal;
use url::form_urlencoded;

use crate::models::{ShipMethod, ShipmentStatus};

/// Partial shipment update. The API takes these fields as query-string
/// parameters on `PATCH /shipments/{id}`, so the patch keeps them as ordered
/// key/value pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShipmentPatch {
    fields: Vec<(&'static str, String)>,
}

impl ShipmentPatch {
    pub fn new() -> Self {
        Self::default()
    }

    fn set(mut self, key: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((key, value)),
        }
        self
    }

    pub fn status(self, status: ShipmentStatus) -> Self {
        self.set("status", status.as_ref())
    }

    /// `None` clears the method on the server (sent as an empty value).
    pub fn ship_method(self, method: Option<ShipMethod>) -> Self {
        let value = method.map(|m| m.to_string()).unwrap_or_default();
        self.set("ship_method", value)
    }

    pub fn tracking_number(self, tracking: impl Into<String>) -> Self {
        self.set("tracking_number", tracking)
    }

    pub fn rl_quote_number(self, number: impl Into<String>) -> Self {
        self.set("rl_quote_number", number)
    }

    /// The carrier price is forwarded as the operator typed it.
    pub fn rl_quote_price(self, raw: impl Into<String>) -> Self {
        self.set("rl_quote_price", raw)
    }

    pub fn rl_customer_price(self, price: Decimal) -> Self {
        self.set("rl_customer_price", price.normalize().to_string())
    }

    pub fn li_quote_price(self, price: Decimal) -> Self {
        self.set("li_quote_price", price.normalize().to_string())
    }

    pub fn li_customer_price(self, price: Decimal) -> Self {
        self.set("li_customer_price", price.normalize().to_string())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.fields.iter().map(|(k, v)| (*k, v.as_str())))
            .finish()
    }
}

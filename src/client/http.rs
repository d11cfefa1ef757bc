use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, instrument, warn};
use url::Url;

use super::{OrdersApi, ShipmentPatch};
use crate::config::DashboardConfig;
use crate::errors::ApiError;
use crate::models::{Alert, Milestone, Order, OrderPatch, RlQuoteData};

/// Tag the backend records against checkpoint changes made here.
pub const CHECKPOINT_SOURCE: &str = "web_ui";

const MAX_ERROR_BODY: usize = 512;

/// reqwest-backed [`OrdersApi`].
#[derive(Clone, Debug)]
pub struct HttpOrdersApi {
    client: Client,
    base_url: Url,
}

impl HttpOrdersApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidInput(format!(
                "{} cannot be used as an API base URL",
                base_url
            )));
        }
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("cfc-orders/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &DashboardConfig) -> Result<Self, ApiError> {
        Self::new(&config.api_url, config.request_timeout())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        if let Some(blank) = segments.iter().find(|s| s.trim().is_empty()) {
            return Err(ApiError::InvalidInput(format!(
                "empty path segment {:?}",
                blank
            )));
        }
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidInput(format!("{} cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.client.request(method, url)
    }

    /// Sends the request and returns the parsed JSON body. Non-2xx responses
    /// and `{"status": "error"}` acknowledgements are both failures.
    async fn send(&self, request: RequestBuilder) -> Result<Value, ApiError> {
        let request = request.build()?;
        let path = request.url().path().to_string();
        debug!(method = %request.method(), path = %path, "Sending API request");

        let response = self.client.execute(request).await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(status = %status, path = %path, "API request failed");
            return Err(ApiError::Status {
                status,
                path,
                body: truncate_body(body),
            });
        }

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }

        let value: Value = serde_json::from_str(&body)?;
        if value.get("status").and_then(Value::as_str) == Some("error") {
            let message = error_message(&value).unwrap_or_else(|| "request rejected".to_string());
            warn!(path = %path, message = %message, "API rejected request");
            return Err(ApiError::Rejected(message));
        }
        Ok(value)
    }
}

fn truncate_body(body: String) -> String {
    if body.len() <= MAX_ERROR_BODY {
        return body;
    }
    let mut end = MAX_ERROR_BODY;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

fn error_message(value: &Value) -> Option<String> {
    ["message", "detail", "error"]
        .iter()
        .find_map(|key| value.get(*key))
        .map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
}

/// Pulls `key` out of a response envelope such as `{"orders": [...]}`.
fn envelope<T: DeserializeOwned>(mut value: Value, key: &str) -> Result<T, ApiError> {
    match value.get_mut(key).map(Value::take) {
        Some(inner) if !inner.is_null() => Ok(serde_json::from_value(inner)?),
        _ => Err(ApiError::Rejected(
            error_message(&value).unwrap_or_else(|| format!("response is missing `{}`", key)),
        )),
    }
}

#[async_trait]
impl OrdersApi for HttpOrdersApi {
    #[instrument(skip(self))]
    async fn fetch_orders(
        &self,
        limit: u32,
        include_complete: bool,
    ) -> Result<Vec<Order>, ApiError> {
        let mut url = self.endpoint(&["orders"])?;
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string())
            .append_pair("include_complete", if include_complete { "true" } else { "false" });

        let value = self.send(self.request(Method::GET, url)).await?;
        let orders: Vec<Order> = envelope(value, "orders")?;
        debug!(count = orders.len(), "Fetched orders");
        Ok(orders)
    }

    #[instrument(skip(self))]
    async fn fetch_order(&self, order_id: &str) -> Result<Order, ApiError> {
        let url = self.endpoint(&["orders", order_id])?;
        let value = self.send(self.request(Method::GET, url)).await?;
        // Detail comes back either bare or wrapped as {"order": {...}}.
        if value.get("order").map(Value::is_object).unwrap_or(false) {
            envelope(value, "order")
        } else {
            Ok(serde_json::from_value(value)?)
        }
    }

    #[instrument(skip(self))]
    async fn update_order(&self, order_id: &str, patch: &OrderPatch) -> Result<(), ApiError> {
        if patch.is_empty() {
            return Err(ApiError::InvalidInput("order patch has no fields".into()));
        }
        let url = self.endpoint(&["orders", order_id])?;
        self.send(self.request(Method::PATCH, url).json(patch)).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_order(&self, order_id: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&["orders", order_id])?;
        self.send(self.request(Method::DELETE, url)).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_checkpoint(
        &self,
        order_id: &str,
        checkpoint: Milestone,
    ) -> Result<(), ApiError> {
        let url = self.endpoint(&["orders", order_id, "checkpoint"])?;
        let body = json!({ "checkpoint": checkpoint, "source": CHECKPOINT_SOURCE });
        self.send(self.request(Method::PATCH, url).json(&body)).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn generate_summary(&self, order_id: &str, force: bool) -> Result<String, ApiError> {
        let mut url = self.endpoint(&["orders", order_id, "generate-summary"])?;
        url.query_pairs_mut()
            .append_pair("force", if force { "true" } else { "false" });
        let value = self.send(self.request(Method::POST, url)).await?;
        envelope(value, "summary")
    }

    #[instrument(skip(self))]
    async fn fetch_alerts(&self) -> Result<Vec<Alert>, ApiError> {
        let url = self.endpoint(&["alerts"])?;
        let value = self.send(self.request(Method::GET, url)).await?;
        envelope(value, "alerts")
    }

    #[instrument(skip(self))]
    async fn resolve_alert(&self, alert_id: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&["alerts", alert_id, "resolve"])?;
        self.send(self.request(Method::PATCH, url)).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_shipment(
        &self,
        shipment_id: &str,
        patch: &ShipmentPatch,
    ) -> Result<(), ApiError> {
        if patch.is_empty() {
            return Err(ApiError::InvalidInput("shipment patch has no fields".into()));
        }
        let mut url = self.endpoint(&["shipments", shipment_id])?;
        url.query_pairs_mut()
            .extend_pairs(patch.pairs().iter().map(|(k, v)| (*k, v.as_str())));
        self.send(self.request(Method::PATCH, url)).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn fetch_rl_quote_data(&self, shipment_id: &str) -> Result<RlQuoteData, ApiError> {
        let url = self.endpoint(&["shipments", shipment_id, "rl-quote-data"])?;
        let value = self.send(self.request(Method::GET, url)).await?;
        let data: RlQuoteData = serde_json::from_value(value)?;
        if !data.is_ok() {
            return Err(ApiError::Rejected(
                data.message
                    .unwrap_or_else(|| format!("quote data status `{}`", data.status)),
            ));
        }
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn api(base: &str) -> HttpOrdersApi {
        HttpOrdersApi::new(base, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn endpoint_joins_and_encodes_segments() {
        let api = api("https://cfc.example.test/");
        let url = api.endpoint(&["shipments", "5124-Cabinetry Dist", "rl-quote-data"]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://cfc.example.test/shipments/5124-Cabinetry%20Dist/rl-quote-data"
        );

        let nested = api_with_prefix();
        assert_eq!(
            nested.endpoint(&["orders"]).unwrap().as_str(),
            "https://cfc.example.test/api/orders"
        );
    }

    fn api_with_prefix() -> HttpOrdersApi {
        api("https://cfc.example.test/api")
    }

    #[test]
    fn blank_ids_are_rejected_before_sending() {
        let api = api("https://cfc.example.test");
        assert_matches!(api.endpoint(&["orders", " "]), Err(ApiError::InvalidInput(_)));
    }

    #[test]
    fn envelope_reports_server_message() {
        let value = json!({ "detail": "Order not found" });
        let result: Result<Vec<Order>, _> = envelope(value, "orders");
        assert_matches!(result, Err(ApiError::Rejected(msg)) if msg == "Order not found");
    }

    #[test]
    fn long_error_bodies_are_truncated() {
        let body = "x".repeat(MAX_ERROR_BODY + 10);
        assert_eq!(truncate_body(body).len(), MAX_ERROR_BODY + 3);
    }
}

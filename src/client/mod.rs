//! Order API client.
//!
//! [`OrdersApi`] is the seam between the dashboard and the remote order
//! service; [`HttpOrdersApi`] is the reqwest-backed implementation.

pub mod http;
pub mod patch;

pub use http::HttpOrdersApi;
pub use patch::ShipmentPatch;

use async_trait::async_trait;

use crate::errors::ApiError;
use crate::models::{Alert, Milestone, Order, OrderPatch, RlQuoteData};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrdersApi: Send + Sync {
    /// Full order and shipment snapshot.
    async fn fetch_orders(&self, limit: u32, include_complete: bool)
        -> Result<Vec<Order>, ApiError>;

    async fn fetch_order(&self, order_id: &str) -> Result<Order, ApiError>;

    /// Partial order update with a JSON body.
    async fn update_order(&self, order_id: &str, patch: &OrderPatch) -> Result<(), ApiError>;

    async fn delete_order(&self, order_id: &str) -> Result<(), ApiError>;

    /// Marks one milestone, tagged as coming from the dashboard.
    async fn update_checkpoint(&self, order_id: &str, checkpoint: Milestone)
        -> Result<(), ApiError>;

    /// Returns the AI summary text, regenerating it when `force` is set.
    async fn generate_summary(&self, order_id: &str, force: bool) -> Result<String, ApiError>;

    /// Unresolved alerts.
    async fn fetch_alerts(&self) -> Result<Vec<Alert>, ApiError>;

    async fn resolve_alert(&self, alert_id: &str) -> Result<(), ApiError>;

    /// Partial shipment update carried in the query string.
    async fn update_shipment(&self, shipment_id: &str, patch: &ShipmentPatch)
        -> Result<(), ApiError>;

    async fn fetch_rl_quote_data(&self, shipment_id: &str) -> Result<RlQuoteData, ApiError>;
}

//! Dashboard controller.
//!
//! Owns the API client, the in-memory order and alert collections and the
//! view state. Every mutating action sends its request, records the outcome
//! as a banner, then reloads the collection it touched exactly once, even
//! when the request failed. Nothing is patched locally; the server snapshot
//! always replaces what was held.

use chrono::{NaiveDate, Utc};
use std::fmt::Display;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use crate::client::{OrdersApi, ShipmentPatch};
use crate::config::DashboardConfig;
use crate::errors::{ApiError, DashboardError};
use crate::links::WindowGeometry;
use crate::models::{
    Alert, Milestone, Order, OrderPatch, OrderStatus, ShipMethod, Shipment, ShipmentStatus,
};
use crate::shipping::{
    OrderContact, RowCapabilities, SaveOutcome, ShipmentMethodRouter, ShipmentRow, TrackingEmail,
};
use crate::view::{
    AlertsPanel, Banner, OrderDetail, OrderFilter, OrderListView, Panel, StatusCounts, ViewState,
};

pub type ActionResult<T> = Result<T, DashboardError>;

/// Collection refreshed after a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reload {
    Orders,
    Alerts,
}

pub struct Dashboard {
    api: Arc<dyn OrdersApi>,
    config: DashboardConfig,
    state: ViewState,
    orders: Vec<Order>,
    alerts: Vec<Alert>,
    banner: Option<Banner>,
    router: Option<ShipmentMethodRouter>,
}

impl Dashboard {
    pub fn new(api: Arc<dyn OrdersApi>, config: DashboardConfig) -> Self {
        Self {
            api,
            config,
            state: ViewState::default(),
            orders: Vec::new(),
            alerts: Vec::new(),
            banner: None,
            router: None,
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn order(&self, order_id: &str) -> Option<&Order> {
        self.orders.iter().find(|order| order.order_id == order_id)
    }

    /// The shipment and the order it belongs to.
    pub fn find_shipment(&self, shipment_id: &str) -> Option<(&Order, &Shipment)> {
        self.orders
            .iter()
            .find_map(|order| order.shipment(shipment_id).map(|s| (order, s)))
    }

    /// The current banner, unless it has outlived the configured TTL.
    pub fn banner(&self) -> Option<&Banner> {
        let ttl = self.config.banner_ttl();
        self.banner
            .as_ref()
            .filter(|banner| !banner.is_expired(Utc::now(), ttl))
    }

    pub fn clear_banner(&mut self) {
        self.banner = None;
    }

    pub fn list_view(&self, today: NaiveDate) -> OrderListView {
        OrderListView::build(&self.orders, self.state.filter, today)
    }

    pub fn counts(&self) -> StatusCounts {
        StatusCounts::tally(&self.orders)
    }

    pub fn alerts_panel(&self) -> AlertsPanel {
        AlertsPanel::new(&self.alerts)
    }

    pub fn select_status(&mut self, status: OrderStatus) -> OrderFilter {
        self.state = self.state.with_filter(self.state.filter.select_status(status));
        self.state.filter
    }

    pub fn toggle_archived(&mut self) -> OrderFilter {
        self.state = self.state.with_filter(self.state.filter.toggle_archived());
        self.state.filter
    }

    pub fn show_alerts(&mut self) {
        self.state = self.state.with_panel(Panel::Alerts);
    }

    pub fn close_panel(&mut self) {
        self.state = self.state.close_panel();
        self.router = None;
    }

    /// Initial load of both collections.
    pub async fn load(&mut self) -> ActionResult<()> {
        let orders = self.reload_orders().await;
        let alerts = self.reload_alerts().await;
        orders.and(alerts).map(|_| ())
    }

    /// Replaces the order collection with a fresh snapshot. On failure the
    /// stale collection is kept.
    #[instrument(skip(self))]
    pub async fn reload_orders(&mut self) -> ActionResult<usize> {
        let limit = self.config.order_page_size;
        match self
            .api
            .fetch_orders(limit, self.config.include_complete)
            .await
        {
            Ok(orders) => {
                info!(count = orders.len(), "Orders loaded");
                self.orders = orders;
                Ok(self.orders.len())
            }
            Err(err) => {
                error!(error = %err, code = err.error_code(), "Failed to load orders");
                self.banner = Some(Banner::error(format!("Failed to load orders: {}", err)));
                Err(err.into())
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn reload_alerts(&mut self) -> ActionResult<usize> {
        match self.api.fetch_alerts().await {
            Ok(alerts) => {
                info!(count = alerts.len(), "Alerts loaded");
                self.alerts = alerts;
                Ok(self.alerts.len())
            }
            Err(err) => {
                error!(error = %err, code = err.error_code(), "Failed to load alerts");
                self.banner = Some(Banner::error(format!("Failed to load alerts: {}", err)));
                Err(err.into())
            }
        }
    }

    /// Records the outcome of a write, then reloads `reload` once.
    async fn finish_write<T>(
        &mut self,
        action: &str,
        result: Result<T, ApiError>,
        success: impl Display,
        reload: Reload,
    ) -> ActionResult<T> {
        match &result {
            Ok(_) => {
                info!(action, "{}", success);
                self.banner = Some(Banner::info(success.to_string()));
            }
            Err(err) => {
                warn!(action, error = %err, code = err.error_code(), "Action failed");
                self.banner = Some(Banner::error(format!("{} failed: {}", action, err)));
            }
        }

        let reloaded = match reload {
            Reload::Orders => self.reload_orders().await,
            Reload::Alerts => self.reload_alerts().await,
        };
        if let Err(err) = reloaded {
            warn!(action, error = %err, "Reload after write failed");
        }

        result.map_err(DashboardError::from)
    }

    /// Opens the detail panel and asks for the cached summary. Orders missing
    /// from the snapshot (archived ones when complete orders are excluded)
    /// are fetched individually.
    #[instrument(skip(self))]
    pub async fn open_order(&mut self, order_id: &str, today: NaiveDate) -> ActionResult<OrderDetail> {
        let mut order = match self.order(order_id) {
            Some(order) => order.clone(),
            None => self.api.fetch_order(order_id).await.map_err(|err| match err.status() {
                Some(status) if status == reqwest::StatusCode::NOT_FOUND => {
                    DashboardError::NotFound(format!("order {}", order_id))
                }
                _ => err.into(),
            })?,
        };
        self.state = self.state.with_panel(Panel::OrderDetail {
            order_id: order_id.to_string(),
        });

        match self.api.generate_summary(order_id, false).await {
            Ok(summary) if !summary.trim().is_empty() => order.ai_summary = Some(summary),
            Ok(_) => {}
            Err(err) => warn!(error = %err, "Summary unavailable"),
        }

        Ok(OrderDetail::new(&order, today))
    }

    /// Writes the milestone flags for `status`. Any status may follow any
    /// other.
    #[instrument(skip(self))]
    pub async fn set_order_status(&mut self, order_id: &str, status: OrderStatus) -> ActionResult<()> {
        let result = self
            .api
            .update_order(order_id, &OrderPatch::for_status(status))
            .await;
        let success = format!("Order {} moved to {}", order_id, status.label());
        self.finish_write("Status change", result, success, Reload::Orders)
            .await
    }

    #[instrument(skip(self))]
    pub async fn update_checkpoint(&mut self, order_id: &str, milestone: Milestone) -> ActionResult<()> {
        let result = self.api.update_checkpoint(order_id, milestone).await;
        let success = format!("Order {} checkpoint {} recorded", order_id, milestone);
        self.finish_write("Checkpoint update", result, success, Reload::Orders)
            .await
    }

    /// Saves notes, regenerates the summary from them, then reloads.
    #[instrument(skip(self, notes))]
    pub async fn save_notes(&mut self, order_id: &str, notes: &str) -> ActionResult<()> {
        let result = self.api.update_order(order_id, &OrderPatch::notes(notes)).await;
        if result.is_ok() {
            if let Err(err) = self.api.generate_summary(order_id, true).await {
                warn!(error = %err, "Summary regeneration after notes failed");
            }
        }
        self.finish_write(
            "Saving notes",
            result,
            format!("Notes saved for order {}", order_id),
            Reload::Orders,
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn refresh_summary(&mut self, order_id: &str) -> ActionResult<String> {
        let result = self.api.generate_summary(order_id, true).await;
        self.finish_write(
            "Summary refresh",
            result,
            format!("Summary regenerated for order {}", order_id),
            Reload::Orders,
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn delete_order(&mut self, order_id: &str) -> ActionResult<()> {
        let result = self.api.delete_order(order_id).await;
        if result.is_ok() && self.state.selected_order() == Some(order_id) {
            self.close_panel();
        }
        self.finish_write(
            "Delete",
            result,
            format!("Order {} deleted", order_id),
            Reload::Orders,
        )
        .await
    }

    fn shipment_row(&self, shipment_id: &str) -> ActionResult<ShipmentRow> {
        self.find_shipment(shipment_id)
            .map(|(_, shipment)| ShipmentRow::new(shipment, RowCapabilities::FULL))
            .ok_or_else(|| DashboardError::NotFound(format!("shipment {}", shipment_id)))
    }

    async fn patch_shipment(
        &mut self,
        action: &str,
        shipment_id: &str,
        patch: ShipmentPatch,
        success: String,
    ) -> ActionResult<()> {
        let result = self.api.update_shipment(shipment_id, &patch).await;
        self.finish_write(action, result, success, Reload::Orders)
            .await
    }

    #[instrument(skip(self))]
    pub async fn set_shipment_status(
        &mut self,
        shipment_id: &str,
        status: ShipmentStatus,
    ) -> ActionResult<()> {
        let row = self.shipment_row(shipment_id)?;
        let Some(action) = row.change_status(status) else {
            return Ok(());
        };
        let success = format!("Shipment {} is {}", shipment_id, status.label());
        self.patch_shipment("Shipment status", shipment_id, action.patch, success)
            .await
    }

    /// Row-level method change. Returns whether the shipping manager was
    /// opened for the new method.
    #[instrument(skip(self))]
    pub async fn set_shipment_method(
        &mut self,
        shipment_id: &str,
        method: Option<ShipMethod>,
    ) -> ActionResult<bool> {
        let row = self.shipment_row(shipment_id)?;
        let Some(action) = row.change_method(method) else {
            return Ok(false);
        };
        let label = method.map(|m| m.label()).unwrap_or("none");
        let success = format!("Shipment {} method set to {}", shipment_id, label);
        self.patch_shipment("Shipping method", shipment_id, action.patch, success)
            .await?;

        if action.opens_manager {
            self.open_shipping_manager(shipment_id).await?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Saves a tracking number typed on the row and drafts the customer
    /// notification. Blank input sends nothing.
    #[instrument(skip(self))]
    pub async fn save_tracking(
        &mut self,
        shipment_id: &str,
        tracking: &str,
    ) -> ActionResult<Option<TrackingEmail>> {
        let (contact, method, action) = {
            let (order, shipment) = self
                .find_shipment(shipment_id)
                .ok_or_else(|| DashboardError::NotFound(format!("shipment {}", shipment_id)))?;
            let row = ShipmentRow::new(shipment, RowCapabilities::FULL);
            (
                OrderContact::from_order(order),
                shipment.ship_method,
                row.save_tracking(tracking),
            )
        };
        let Some(action) = action else {
            return Ok(None);
        };

        let success = format!("Tracking saved for shipment {}", shipment_id);
        self.patch_shipment("Saving tracking", shipment_id, action.patch, success)
            .await?;
        Ok(Some(TrackingEmail::compose(&contact, tracking, method)))
    }

    /// Opens the shipping manager on a shipment from the current snapshot.
    #[instrument(skip(self))]
    pub async fn open_shipping_manager(&mut self, shipment_id: &str) -> ActionResult<()> {
        let window = WindowGeometry::half_screen(self.config.screen_width, self.config.screen_height);
        let (order_id, mut router) = {
            let (order, _) = self
                .find_shipment(shipment_id)
                .ok_or_else(|| DashboardError::NotFound(format!("shipment {}", shipment_id)))?;
            let router = ShipmentMethodRouter::for_order(order, shipment_id, window)
                .ok_or_else(|| DashboardError::NotFound(format!("shipment {}", shipment_id)))?;
            (order.order_id.clone(), router)
        };

        self.state = self.state.with_panel(Panel::ShippingManager {
            order_id,
            shipment_id: shipment_id.to_string(),
        });
        let mounted = router.mount(self.api.as_ref()).await;
        self.router = Some(router);

        if let Err(err) = &mounted {
            self.banner = Some(Banner::error(format!("Could not load shipping data: {}", err)));
        }
        mounted.map_err(DashboardError::from)
    }

    pub fn router(&self) -> Option<&ShipmentMethodRouter> {
        self.router.as_ref()
    }

    pub fn router_mut(&mut self) -> Option<&mut ShipmentMethodRouter> {
        self.router.as_mut()
    }

    fn active_router(&mut self) -> ActionResult<&mut ShipmentMethodRouter> {
        self.router
            .as_mut()
            .ok_or_else(|| DashboardError::NotFound("open shipping manager".into()))
    }

    /// Method choice inside the shipping manager. Navigation happens even
    /// when the save fails; the failure only shows as a banner naming the
    /// step that failed.
    #[instrument(skip(self))]
    pub async fn choose_method(&mut self, method: ShipMethod) -> ActionResult<()> {
        let api = Arc::clone(&self.api);
        let router = self.active_router()?;
        let result = router.select_method(api.as_ref(), method).await;
        if let Err(err) = &result {
            self.banner = Some(Banner::error(err.to_string()));
        }
        result.map_err(DashboardError::from)
    }

    /// Shows another method's helper without saving the method.
    #[instrument(skip(self))]
    pub async fn preview_method(&mut self, method: ShipMethod) -> ActionResult<()> {
        let api = Arc::clone(&self.api);
        let router = self.active_router()?;
        let result = router.preview_method(api.as_ref(), method).await;
        if let Err(err) = &result {
            self.banner = Some(Banner::error(format!("Could not load shipping data: {}", err)));
        }
        result.map_err(DashboardError::from)
    }

    pub fn change_method(&mut self) -> ActionResult<()> {
        self.active_router()?.change_method();
        Ok(())
    }

    /// "Save"/"Done" in the shipping manager: persists the helper's values,
    /// closes the panel and reloads orders once.
    #[instrument(skip(self))]
    pub async fn finish_shipping_manager(&mut self) -> ActionResult<SaveOutcome> {
        let api = Arc::clone(&self.api);
        let router = self.active_router()?;
        let shipment_id = router.shipment().shipment_id.clone();
        let result = router.save(api.as_ref()).await;

        self.router = None;
        self.state = self.state.close_panel();
        self.finish_write(
            "Shipping manager",
            result,
            format!("Shipment {} updated", shipment_id),
            Reload::Orders,
        )
        .await
    }

    /// Resolving reloads alerts only.
    #[instrument(skip(self))]
    pub async fn resolve_alert(&mut self, alert_id: &str) -> ActionResult<()> {
        let result = self.api.resolve_alert(alert_id).await;
        self.finish_write(
            "Resolve alert",
            result,
            format!("Alert {} resolved", alert_id),
            Reload::Alerts,
        )
        .await
    }
}

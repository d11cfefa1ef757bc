use serde::Serialize;

use crate::models::{Order, OrderStatus};

/// Which slice of the order collection is listed. The three views are
/// mutually exclusive: picking one replaces the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "view", content = "status", rename_all = "snake_case")]
pub enum OrderFilter {
    #[default]
    AllActive,
    Status(OrderStatus),
    Archived,
}

impl OrderFilter {
    /// Picking the status already shown goes back to all active orders.
    pub fn select_status(self, status: OrderStatus) -> Self {
        match self {
            OrderFilter::Status(current) if current == status => OrderFilter::AllActive,
            _ => OrderFilter::Status(status),
        }
    }

    pub fn toggle_archived(self) -> Self {
        match self {
            OrderFilter::Archived => OrderFilter::AllActive,
            _ => OrderFilter::Archived,
        }
    }

    pub fn matches(&self, order: &Order) -> bool {
        let status = order.status();
        match self {
            OrderFilter::AllActive => !status.is_complete(),
            OrderFilter::Status(wanted) => status == *wanted,
            OrderFilter::Archived => status.is_complete(),
        }
    }

    pub fn title(&self) -> String {
        match self {
            OrderFilter::AllActive => "Active Orders".to_string(),
            OrderFilter::Status(status) => status.label().to_string(),
            OrderFilter::Archived => "Archived Orders".to_string(),
        }
    }
}

/// Overlay currently shown above the list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "panel", rename_all = "snake_case")]
pub enum Panel {
    #[default]
    Closed,
    OrderDetail {
        order_id: String,
    },
    ShippingManager {
        order_id: String,
        shipment_id: String,
    },
    Alerts,
}

/// All view-level flags in one value, replaced wholesale on each transition.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ViewState {
    pub filter: OrderFilter,
    pub panel: Panel,
}

impl ViewState {
    pub fn with_filter(&self, filter: OrderFilter) -> Self {
        Self {
            filter,
            panel: self.panel.clone(),
        }
    }

    pub fn with_panel(&self, panel: Panel) -> Self {
        Self {
            filter: self.filter,
            panel,
        }
    }

    pub fn close_panel(&self) -> Self {
        self.with_panel(Panel::Closed)
    }

    pub fn selected_order(&self) -> Option<&str> {
        match &self.panel {
            Panel::OrderDetail { order_id } | Panel::ShippingManager { order_id, .. } => {
                Some(order_id)
            }
            _ => None,
        }
    }
}

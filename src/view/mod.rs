// Presentation state for the dashboard: filters, cards, alerts, banners
pub mod alerts;
pub mod banner;
pub mod card;
pub mod list;
pub mod state;

pub use alerts::{AlertRow, AlertsPanel};
pub use banner::{Banner, BannerKind};
pub use card::{OrderCard, OrderDetail, ShippingSummary};
pub use list::{filter_orders, OrderListView, StatusCounts};
pub use state::{OrderFilter, Panel, ViewState};

// Shipment workflows: method routing and the per-method helpers
pub mod address;
pub mod li_delivery;
pub mod ltl;
pub mod pirateship;
pub mod router;
pub mod row;
pub mod totals;
pub mod tracking;

pub use address::{CopyField, OrderContact};
pub use li_delivery::LiDeliveryPricing;
pub use ltl::{LtlQuoteHelper, QuoteEntry};
pub use pirateship::PirateshipHelper;
pub use router::{ManagerView, PanelHelper, SaveOutcome, ShipmentMethodRouter};
pub use row::{RowCapabilities, ShipmentRow};
pub use totals::ShippingTotals;
pub use tracking::{Carrier, TrackingEmail, TrackingPanel};

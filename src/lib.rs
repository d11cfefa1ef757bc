//! CFC order dashboard library
//!
//! Client for the Cabinets For Contractors order API together with the
//! dashboard logic built on top of it: order filtering and cards, the
//! shipment method router and its per-method helpers, and alerts.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod client;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod format;
pub mod links;
pub mod models;
pub mod session;
pub mod shipping;
pub mod view;

pub use client::{HttpOrdersApi, OrdersApi, ShipmentPatch};
pub use config::{load_config, DashboardConfig};
pub use dashboard::Dashboard;
pub use errors::{ApiError, DashboardError, MethodChoiceError};
pub use session::SessionStore;

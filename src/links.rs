//! Outbound links: carrier sites, the spreadsheet export and the supplier
//! sheet script. The dashboard only builds these URLs; opening them is left
//! to whatever front end shows them.

use serde::Serialize;
use url::form_urlencoded::byte_serialize;

pub const PIRATESHIP_URL: &str = "https://ship.pirateship.com/ship";
const EXPORT_BASE: &str = "https://www.cabinetsforcontractors.net/orders";
const SUPPLIER_SHEET_URL: &str = "https://script.google.com/macros/s/AKfycbzd5BMSeaizOeINTzw70qVzq768S7FMZeZ87NgSOYzc8h6wA4k089srS416Lz66cY7TWQ/exec";
/// Named window the freight quote page is reused in.
pub const RL_QUOTE_WINDOW: &str = "RLQuote";

pub(crate) fn encode_component(raw: &str) -> String {
    byte_serialize(raw.as_bytes()).collect()
}

/// Single-order spreadsheet download.
pub fn export_url(order_id: &str) -> String {
    format!("{}/{}/export_single.xlsx", EXPORT_BASE, encode_component(order_id))
}

/// Apps Script endpoint that builds the supplier sheet for an order.
pub fn supplier_sheet_url(order_id: &str) -> String {
    format!("{}?orderId={}", SUPPLIER_SHEET_URL, encode_component(order_id))
}

/// Popup window placement, rendered as a `window.open` feature string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WindowGeometry {
    pub width: u32,
    pub height: u32,
    pub left: u32,
    pub top: u32,
}

impl WindowGeometry {
    /// Right half of the screen, full height.
    pub fn half_screen(screen_width: u32, screen_height: u32) -> Self {
        let half = screen_width / 2;
        Self {
            width: half,
            height: screen_height,
            left: half,
            top: 0,
        }
    }

    pub fn features(&self) -> String {
        format!(
            "width={},height={},left={},top={},resizable=yes,scrollbars=yes",
            self.width, self.height, self.left, self.top
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExternalLink {
    pub label: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_features: Option<String>,
}

impl ExternalLink {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
            window_name: None,
            window_features: None,
        }
    }

    pub fn in_window(mut self, name: &str, geometry: WindowGeometry) -> Self {
        self.window_name = Some(name.to_string());
        self.window_features = Some(geometry.features());
        self
    }
}

/// Export and supplier sheet links shown on every order card.
pub fn order_links(order_id: &str) -> Vec<ExternalLink> {
    vec![
        ExternalLink::new("Download Excel", export_url(order_id)),
        ExternalLink::new("Create Supplier Sheet", supplier_sheet_url(order_id)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_links_embed_the_id() {
        assert_eq!(
            export_url("5124"),
            "https://www.cabinetsforcontractors.net/orders/5124/export_single.xlsx"
        );
        assert!(supplier_sheet_url("5124").ends_with("/exec?orderId=5124"));
        assert_eq!(order_links("5124").len(), 2);
    }

    #[test]
    fn half_screen_window_sits_on_the_right() {
        let geometry = WindowGeometry::half_screen(1920, 1080);
        assert_eq!(
            geometry.features(),
            "width=960,height=1080,left=960,top=0,resizable=yes,scrollbars=yes"
        );
    }
}

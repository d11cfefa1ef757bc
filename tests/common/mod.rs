#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use cfc_orders::{Dashboard, DashboardConfig, HttpOrdersApi};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Order API stand-in served by wiremock, plus clients pointed at it.
pub struct TestApi {
    pub server: MockServer,
}

impl TestApi {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    pub fn client(&self) -> HttpOrdersApi {
        HttpOrdersApi::new(&self.uri(), Duration::from_secs(5)).expect("client for mock server")
    }

    pub fn config(&self) -> DashboardConfig {
        DashboardConfig {
            api_url: self.uri(),
            request_timeout_secs: 5,
            ..DashboardConfig::default()
        }
    }

    pub fn dashboard(&self) -> Dashboard {
        Dashboard::new(Arc::new(self.client()), self.config())
    }

    /// `GET /orders` answering with `orders`, expected exactly `times` times.
    pub async fn expect_order_loads(&self, orders: Value, times: u64) {
        Mock::given(method("GET"))
            .and(path("/orders"))
            .and(query_param("limit", "200"))
            .and(query_param("include_complete", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "orders": orders })))
            .expect(times)
            .named("order snapshot")
            .mount(&self.server)
            .await;
    }

    pub async fn expect_alert_loads(&self, alerts: Value, times: u64) {
        Mock::given(method("GET"))
            .and(path("/alerts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "alerts": alerts })))
            .expect(times)
            .named("alert list")
            .mount(&self.server)
            .await;
    }
}

pub fn ok_body() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" }))
}

/// Two active orders and one archived, as the backend sends them.
pub fn sample_orders() -> Value {
    json!([
        {
            "order_id": 5124,
            "customer_name": "Pat Rivera",
            "company_name": "Rivera Builders",
            "email": "pat@rivera.test",
            "phone": "478-555-0101",
            "street": "12 Oak St",
            "city": "Macon",
            "state": "GA",
            "zip_code": "31201",
            "order_date": "2024-12-13T15:04:05Z",
            "order_total": "4210.50",
            "current_status": "needs_bol",
            "is_complete": false,
            "warehouse_1": "LI",
            "shipments": [
                {
                    "shipment_id": "5124-LI",
                    "order_id": 5124,
                    "warehouse": "LI",
                    "status": "quoted",
                    "ship_method": "LTL",
                    "rl_quote_number": "9680088",
                    "rl_quote_price": 179.38,
                    "rl_customer_price": "229.38"
                },
                {
                    "shipment_id": "5124-DL",
                    "order_id": 5124,
                    "warehouse": "DL",
                    "status": "pending",
                    "ship_method": "",
                    "tracking_number": null
                }
            ]
        },
        {
            "order_id": "5130",
            "customer_name": "Sam Okafor",
            "current_status": "awaiting_payment",
            "shipments": null
        },
        {
            "order_id": "5001",
            "company_name": "Old Job LLC",
            "current_status": "awaiting_shipment",
            "is_complete": true,
            "shipments": []
        }
    ])
}

pub fn sample_alerts() -> Value {
    json!([
        {
            "id": 31,
            "order_id": 5124,
            "alert_type": "bol_not_sent",
            "alert_message": "BOL not sent 2 days after warehouse confirmation",
            "is_resolved": false
        }
    ])
}

pub fn rl_quote_data() -> Value {
    json!({
        "status": "ok",
        "shipment_id": "5124-LI",
        "warehouse": "LI",
        "origin_zip": "30071",
        "destination": {
            "name": "Rivera Builders",
            "street": "12 Oak St",
            "city": "Macon",
            "state": "GA",
            "zip": "31201",
            "phone": "478-555-0101",
            "email": "pat@rivera.test"
        },
        "weight": { "value": 412.5, "note": "from 14 line items" },
        "oversized": { "detected": true, "items": ["PAN96 panel"] },
        "rl_quote_url": "https://www.rlcarriers.com/freight/shipping/rate-quote",
        "existing_quote": {
            "quote_number": "9680088",
            "quote_price": 179.38,
            "customer_price": 229.38
        }
    })
}

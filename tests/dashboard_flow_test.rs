mod common;

use assert_matches::assert_matches;
use cfc_orders::{
    models::{OrderStatus, ShipMethod, ShipmentStatus},
    shipping::ManagerView,
    view::{BannerKind, OrderFilter, Panel},
    ApiError, DashboardError,
};
use chrono::NaiveDate;
use common::{ok_body, rl_quote_data, sample_alerts, sample_orders, TestApi};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 20).unwrap()
}

#[tokio::test]
async fn initial_load_builds_views() {
    let api = TestApi::start().await;
    api.expect_order_loads(sample_orders(), 1).await;
    api.expect_alert_loads(sample_alerts(), 1).await;

    let mut dashboard = api.dashboard();
    dashboard.load().await.unwrap();

    let view = dashboard.list_view(today());
    assert_eq!(view.filter, OrderFilter::AllActive);
    assert_eq!(view.cards.len(), 2);
    assert_eq!(view.counts.total, 3);
    assert_eq!(view.counts.active, 2);

    let card = &view.cards[0];
    assert_eq!(card.name, "Rivera Builders");
    assert_eq!(card.shipments[0].quote_label, "Q:9680088");
    let shipping = card.shipping.as_ref().unwrap();
    assert!(!shipping.all_quoted);
    assert_eq!(shipping.profit, "+$50.00");

    dashboard.toggle_archived();
    let archived = dashboard.list_view(today());
    assert_eq!(archived.cards.len(), 1);
    assert_eq!(archived.cards[0].order_id, "5001");

    assert_eq!(dashboard.alerts_panel().count(), 1);
}

#[tokio::test]
async fn status_change_triggers_one_order_reload() {
    let api = TestApi::start().await;
    api.expect_order_loads(sample_orders(), 1).await;
    api.expect_alert_loads(sample_alerts(), 0).await;
    Mock::given(method("PATCH"))
        .and(path("/orders/5130"))
        .and(body_json(json!({ "payment_received": true, "sent_to_warehouse": false })))
        .respond_with(ok_body())
        .expect(1)
        .mount(&api.server)
        .await;

    let mut dashboard = api.dashboard();
    dashboard
        .set_order_status("5130", OrderStatus::NeedsWarehouseOrder)
        .await
        .unwrap();
    assert_eq!(dashboard.orders().len(), 3);
}

#[tokio::test]
async fn rejected_write_is_surfaced_and_still_reloads() {
    let api = TestApi::start().await;
    api.expect_order_loads(sample_orders(), 1).await;
    Mock::given(method("PATCH"))
        .and(path("/orders/5130"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "status": "error", "message": "order is locked" })),
        )
        .expect(1)
        .mount(&api.server)
        .await;

    let mut dashboard = api.dashboard();
    let result = dashboard.save_notes("5130", "hold until Monday").await;
    assert_matches!(result, Err(DashboardError::Api(ApiError::Rejected(_))));

    let banner = dashboard.banner().unwrap();
    assert_eq!(banner.kind, BannerKind::Error);
    assert!(banner.message.contains("order is locked"));
}

#[tokio::test]
async fn tracking_save_reloads_once_and_builds_mailto() {
    let api = TestApi::start().await;
    api.expect_order_loads(sample_orders(), 2).await;
    Mock::given(method("PATCH"))
        .and(path("/shipments/5124-DL"))
        .and(query_param("tracking_number", "9400111899223197428490"))
        .and(query_param("status", "shipped"))
        .respond_with(ok_body())
        .expect(1)
        .mount(&api.server)
        .await;

    let mut dashboard = api.dashboard();
    dashboard.reload_orders().await.unwrap();
    let email = dashboard
        .save_tracking("5124-DL", "9400111899223197428490")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(email.carrier.name(), "USPS");
    let mailto = email.mailto_url();
    assert!(mailto.starts_with("mailto:pat@rivera.test?subject=Rivera%20Builders%2C%20please"));
    assert!(!mailto.contains('+'));
}

#[tokio::test]
async fn resolving_alert_reloads_alerts_not_orders() {
    let api = TestApi::start().await;
    api.expect_order_loads(sample_orders(), 0).await;
    api.expect_alert_loads(json!([]), 1).await;
    Mock::given(method("PATCH"))
        .and(path("/alerts/31/resolve"))
        .respond_with(ok_body())
        .expect(1)
        .mount(&api.server)
        .await;

    let mut dashboard = api.dashboard();
    dashboard.resolve_alert("31").await.unwrap();
    assert!(dashboard.alerts_panel().is_empty());
}

#[tokio::test]
async fn freight_quote_flow_saves_single_patch() {
    let api = TestApi::start().await;
    api.expect_order_loads(sample_orders(), 2).await;
    Mock::given(method("GET"))
        .and(path("/shipments/5124-LI/rl-quote-data"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rl_quote_data()))
        .expect(1)
        .mount(&api.server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/shipments/5124-LI"))
        .and(query_param("rl_quote_number", "9700123"))
        .and(query_param("rl_quote_price", "201.10"))
        .and(query_param("rl_customer_price", "251.1"))
        .respond_with(ok_body())
        .expect(1)
        .mount(&api.server)
        .await;

    let mut dashboard = api.dashboard();
    dashboard.reload_orders().await.unwrap();
    dashboard.open_shipping_manager("5124-LI").await.unwrap();

    let router = dashboard.router_mut().unwrap();
    assert_eq!(router.view(), ManagerView::Rl);
    let ltl = router.ltl_mut().unwrap();
    assert_eq!(ltl.entry().quote_number, "9680088");
    ltl.set_quote_number("9700123");
    ltl.set_quote_price("201.10");
    assert_eq!(ltl.customer_price_display(), "$251.10");

    let outcome = dashboard.finish_shipping_manager().await.unwrap();
    assert!(outcome.patch.is_some());
    assert_eq!(dashboard.state().panel, Panel::Closed);
}

#[tokio::test]
async fn method_selection_navigates_even_when_save_fails() {
    let api = TestApi::start().await;
    api.expect_order_loads(sample_orders(), 1).await;
    Mock::given(method("PATCH"))
        .and(path("/shipments/5124-DL"))
        .and(query_param("ship_method", "BoxTruck"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&api.server)
        .await;

    let mut dashboard = api.dashboard();
    dashboard.reload_orders().await.unwrap();
    dashboard.open_shipping_manager("5124-DL").await.unwrap();
    assert_eq!(dashboard.router().unwrap().view(), ManagerView::Select);

    let result = dashboard.choose_method(ShipMethod::BoxTruck).await;
    assert!(result.is_err());
    assert_eq!(dashboard.router().unwrap().view(), ManagerView::Tracking);
    assert!(dashboard.banner().unwrap().is_error());
}

#[tokio::test]
async fn shipment_status_change_reloads_once() {
    let api = TestApi::start().await;
    api.expect_order_loads(sample_orders(), 2).await;
    Mock::given(method("PATCH"))
        .and(path("/shipments/5124-LI"))
        .and(query_param("status", "booked"))
        .respond_with(ok_body())
        .expect(1)
        .mount(&api.server)
        .await;

    let mut dashboard = api.dashboard();
    dashboard.reload_orders().await.unwrap();
    dashboard
        .set_shipment_status("5124-LI", ShipmentStatus::Booked)
        .await
        .unwrap();
}

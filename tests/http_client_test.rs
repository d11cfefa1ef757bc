mod common;

use assert_matches::assert_matches;
use cfc_orders::{
    models::{Milestone, OrderPatch, OrderStatus, ShipMethod, ShipmentStatus},
    ApiError, OrdersApi, ShipmentPatch,
};
use common::{ok_body, rl_quote_data, sample_alerts, sample_orders, TestApi};
use reqwest::StatusCode;
use rust_decimal_macros::dec;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn fetch_orders_reads_envelope_and_tolerates_loose_types() {
    let api = TestApi::start().await;
    api.expect_order_loads(sample_orders(), 1).await;

    let orders = api.client().fetch_orders(200, true).await.unwrap();
    assert_eq!(orders.len(), 3);

    let first = &orders[0];
    assert_eq!(first.order_id, "5124");
    assert_eq!(first.status(), OrderStatus::NeedsBol);
    assert_eq!(first.order_total, Some(dec!(4210.50)));
    assert_eq!(first.shipments[0].ship_method, Some(ShipMethod::Ltl));
    assert_eq!(first.shipments[0].rl_quote_price, Some(dec!(179.38)));
    assert_eq!(first.shipments[1].ship_method, None);

    assert!(orders[1].shipments.is_empty());
    assert_eq!(orders[2].status(), OrderStatus::Complete);
}

#[tokio::test]
async fn order_patch_is_sent_as_json_body() {
    let api = TestApi::start().await;
    Mock::given(method("PATCH"))
        .and(path("/orders/5124"))
        .and(body_json(json!({ "bol_sent": true, "is_complete": false })))
        .respond_with(ok_body())
        .expect(1)
        .mount(&api.server)
        .await;

    api.client()
        .update_order("5124", &OrderPatch::for_status(OrderStatus::AwaitingShipment))
        .await
        .unwrap();
}

#[tokio::test]
async fn checkpoint_carries_source_tag() {
    let api = TestApi::start().await;
    Mock::given(method("PATCH"))
        .and(path("/orders/5124/checkpoint"))
        .and(body_json(json!({ "checkpoint": "payment_received", "source": "web_ui" })))
        .respond_with(ok_body())
        .expect(1)
        .mount(&api.server)
        .await;

    api.client()
        .update_checkpoint("5124", Milestone::PaymentReceived)
        .await
        .unwrap();
}

#[tokio::test]
async fn shipment_patch_goes_in_query_string() {
    let api = TestApi::start().await;
    Mock::given(method("PATCH"))
        .and(path("/shipments/5124-LI"))
        .and(query_param("tracking_number", "1Z999AA10123456784"))
        .and(query_param("status", "shipped"))
        .respond_with(ok_body())
        .expect(1)
        .mount(&api.server)
        .await;

    let patch = ShipmentPatch::new()
        .tracking_number("1Z999AA10123456784")
        .status(ShipmentStatus::Shipped);
    api.client().update_shipment("5124-LI", &patch).await.unwrap();
}

#[tokio::test]
async fn empty_patches_never_reach_the_server() {
    let api = TestApi::start().await;
    let client = api.client();

    assert_matches!(
        client.update_shipment("5124-LI", &ShipmentPatch::new()).await,
        Err(ApiError::InvalidInput(_))
    );
    assert_matches!(
        client.update_order("5124", &OrderPatch::default()).await,
        Err(ApiError::InvalidInput(_))
    );
    assert!(api.server.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn summary_request_passes_force_flag() {
    let api = TestApi::start().await;
    Mock::given(method("POST"))
        .and(path("/orders/5124/generate-summary"))
        .and(query_param("force", "true"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "summary": "Waiting on BOL" })),
        )
        .expect(1)
        .mount(&api.server)
        .await;

    let summary = api.client().generate_summary("5124", true).await.unwrap();
    assert_eq!(summary, "Waiting on BOL");
}

#[tokio::test]
async fn alerts_and_resolve() {
    let api = TestApi::start().await;
    api.expect_alert_loads(sample_alerts(), 1).await;
    Mock::given(method("PATCH"))
        .and(path("/alerts/31/resolve"))
        .respond_with(ok_body())
        .expect(1)
        .mount(&api.server)
        .await;

    let client = api.client();
    let alerts = client.fetch_alerts().await.unwrap();
    assert_eq!(alerts[0].id, "31");
    assert_eq!(alerts[0].type_label(), "bol not_sent");
    client.resolve_alert("31").await.unwrap();
}

#[tokio::test]
async fn rl_quote_data_is_parsed() {
    let api = TestApi::start().await;
    Mock::given(method("GET"))
        .and(path("/shipments/5124-LI/rl-quote-data"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rl_quote_data()))
        .mount(&api.server)
        .await;

    let data = api.client().fetch_rl_quote_data("5124-LI").await.unwrap();
    assert_eq!(data.origin_zip.as_deref(), Some("30071"));
    assert_eq!(data.weight.value, Some(dec!(412.5)));
    assert_eq!(data.oversized.items, vec!["PAN96 panel".to_string()]);
    assert_eq!(data.existing_quote.customer_price, Some(dec!(229.38)));
}

#[tokio::test]
async fn quote_data_error_status_is_rejected() {
    let api = TestApi::start().await;
    Mock::given(method("GET"))
        .and(path("/shipments/5124-LI/rl-quote-data"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "error",
            "message": "Warehouse zip unknown"
        })))
        .mount(&api.server)
        .await;

    let err = api.client().fetch_rl_quote_data("5124-LI").await.unwrap_err();
    assert_matches!(err, ApiError::Rejected(ref message) if message == "Warehouse zip unknown");
    assert_eq!(err.error_code(), "REJECTED");
}

#[tokio::test]
async fn http_failures_keep_status_and_body() {
    let api = TestApi::start().await;
    Mock::given(method("GET"))
        .and(path("/orders/9999"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such order"))
        .mount(&api.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/alerts"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&api.server)
        .await;

    let client = api.client();
    let err = client.fetch_order("9999").await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    assert_eq!(err.error_code(), "NOT_FOUND");
    assert!(err.to_string().contains("no such order"));

    let err = client.fetch_alerts().await.unwrap_err();
    assert_eq!(err.error_code(), "SERVER_ERROR");
}

#[tokio::test]
async fn order_detail_accepts_wrapped_and_bare_bodies() {
    let api = TestApi::start().await;
    Mock::given(method("GET"))
        .and(path("/orders/5124"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "order": { "order_id": 5124, "is_complete": 1 } })),
        )
        .mount(&api.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/orders/5130"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "order_id": "5130", "notes": "rush" })),
        )
        .mount(&api.server)
        .await;

    let client = api.client();
    let wrapped = client.fetch_order("5124").await.unwrap();
    assert!(wrapped.is_archived());
    let bare = client.fetch_order("5130").await.unwrap();
    assert_eq!(bare.notes.as_deref(), Some("rush"));
}

#[tokio::test]
async fn delete_order_uses_delete_verb() {
    let api = TestApi::start().await;
    Mock::given(method("DELETE"))
        .and(path("/orders/5130"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&api.server)
        .await;

    api.client().delete_order("5130").await.unwrap();
}

#![allow(clippy::unwrap_used)]
// Integration tests for `RestClient` using wiremock.

use serde_json::json;
use url::Url;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use adlens_api::{CampaignChanges, Error, NewInventory, RestClient};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, RestClient) {
    let server = MockServer::start().await;
    let base = Url::parse(&server.uri()).unwrap();
    let client = RestClient::with_client(reqwest::Client::new(), base);
    (server, client)
}

fn campaign_row(id: &str, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "media_type": "Digital",
        "channel": "Google Ads",
        "start_date": "2024-06-01",
        "end_date": "2024-08-31",
        "status": "Active",
        "budget": 50000.0,
        "impressions": 1250000,
        "clicks": 25000,
        "reach": 850000,
        "roi": 3.2,
        "created_at": "2024-05-20T09:00:00Z",
        "updated_at": "2024-05-20T09:00:00Z"
    })
}

// ── List ────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_campaigns_requests_newest_first() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/campaigns"))
        .and(query_param("select", "*"))
        .and(query_param("order", "created_at.desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            campaign_row("2", "Billboard Downtown"),
            campaign_row("1", "Summer Fashion Campaign"),
        ])))
        .mount(&server)
        .await;

    let rows = client.list_campaigns().await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].name, "Billboard Downtown");
    assert_eq!(rows[1].id, "1");
}

#[tokio::test]
async fn list_inventory_maps_type_column() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/inventory"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "1",
            "type": "Billboard",
            "location": "Times Square, NYC",
            "media_owner": "Clear Channel",
            "size": "14x48 ft",
            "availability_start": "2024-11-01",
            "availability_end": "2024-12-31",
            "price": 85000.0,
            "status": "Available"
        }])))
        .mount(&server)
        .await;

    let rows = client.list_inventory().await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].kind, "Billboard");
    assert_eq!(rows[0].media_owner, "Clear Channel");
}

// ── Mutations ───────────────────────────────────────────────────────

#[tokio::test]
async fn create_inventory_unwraps_representation() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/inventory"))
        .and(body_partial_json(json!({"type": "Radio Spot"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([{
            "id": "9",
            "type": "Radio Spot",
            "location": "New York Metro",
            "media_owner": "iHeartRadio",
            "size": "60 seconds",
            "availability_start": "2024-10-01",
            "availability_end": "2024-12-31",
            "price": 8000.0,
            "status": "Available"
        }])))
        .mount(&server)
        .await;

    let new = NewInventory {
        kind: "Radio Spot".into(),
        location: "New York Metro".into(),
        media_owner: "iHeartRadio".into(),
        size: "60 seconds".into(),
        availability_start: "2024-10-01".into(),
        availability_end: "2024-12-31".into(),
        price: 8000.0,
        status: "Available".into(),
    };
    let created = client.create_inventory(&new).await.unwrap();
    assert_eq!(created.id, "9");
}

#[tokio::test]
async fn update_campaign_filters_by_id() {
    let (server, client) = setup().await;

    let mut updated = campaign_row("1", "Summer Fashion Campaign");
    updated["status"] = json!("Paused");

    Mock::given(method("PATCH"))
        .and(path("/rest/v1/campaigns"))
        .and(query_param("id", "eq.1"))
        .and(body_partial_json(json!({"status": "Paused"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([updated])))
        .mount(&server)
        .await;

    let changes = CampaignChanges {
        status: Some("Paused".into()),
        ..CampaignChanges::default()
    };
    let row = client.update_campaign("1", &changes).await.unwrap();
    assert_eq!(row.status, "Paused");
}

#[tokio::test]
async fn delete_campaign_succeeds_on_204() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/rest/v1/campaigns"))
        .and(query_param("id", "eq.3"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    client.delete_campaign("3").await.unwrap();
}

// ── Error mapping ───────────────────────────────────────────────────

#[tokio::test]
async fn unauthorized_maps_to_authentication_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/campaigns"))
        .respond_with(ResponseTemplate::new(401).set_body_string("JWT expired"))
        .mount(&server)
        .await;

    let result = client.list_campaigns().await;
    assert!(
        matches!(result, Err(Error::Authentication { .. })),
        "expected Authentication error, got: {result:?}"
    );
}

#[tokio::test]
async fn server_error_carries_status_and_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/inventory"))
        .respond_with(ResponseTemplate::new(500).set_body_string("relation does not exist"))
        .mount(&server)
        .await;

    match client.list_inventory().await {
        Err(Error::Api { status, message }) => {
            assert_eq!(status, 500);
            assert!(message.contains("relation"));
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn update_with_empty_result_is_deserialization_error() {
    let (server, client) = setup().await;

    Mock::given(method("PATCH"))
        .and(path("/rest/v1/campaigns"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let changes = CampaignChanges {
        budget: Some(1000.0),
        ..CampaignChanges::default()
    };
    let result = client.update_campaign("404", &changes).await;
    assert!(matches!(result, Err(Error::Deserialization { .. })));
}

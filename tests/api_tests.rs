//! HTTP tests for the public and admin routes, driven through
//! `tower::ServiceExt::oneshot` against an in-memory database.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::util::ServiceExt;
use vpnrank::{db::LazyDb, repository::VpnRepository};

mod common;
use common::{build_app_with_store, build_test_app};

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header("content-type", "application/json");
            Body::from(json.to_string())
        },
        None => Body::empty(),
    };

    let response = app.clone().oneshot(request.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into()))
    };
    (status, value)
}

fn payload(name: &str, slug: &str, sort_order: i32) -> Value {
    json!({
        "name": name,
        "slug": slug,
        "website": "https://example.com",
        "affiliateUrl": "https://example.com/?ref=vpnrank",
        "priceMonthly": "10.99",
        "priceYearly": "",
        "overallRating": 4.4,
        "servers": "1200",
        "featured": true,
        "sortOrder": sort_order,
        "pros": ["Fast"],
    })
}

#[tokio::test]
async fn health_is_ok() {
    let app = build_test_app().await;
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("ok".to_string()));
}

#[tokio::test]
async fn empty_database_serves_static_catalog() {
    let app = build_test_app().await;

    let (status, all) = send(&app, "GET", "/api/vpns", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().unwrap().len(), 6);
    assert_eq!(all[0]["slug"], "nordvpn");
    assert_eq!(all[0]["priceTwoYear"], 2.99);

    let (_, featured) = send(&app, "GET", "/api/vpns/featured", None).await;
    assert_eq!(featured.as_array().unwrap().len(), 5);

    let (status, nord) = send(&app, "GET", "/api/vpns/nordvpn", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(nord["name"], "NordVPN");
}

#[tokio::test]
async fn unknown_slug_is_404() {
    let app = build_test_app().await;
    let (status, body) = send(&app, "GET", "/api/vpns/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("nope"));
}

#[tokio::test]
async fn public_routes_survive_missing_database() {
    let store = Arc::new(VpnRepository::new(LazyDb::new(None)));
    let app = build_app_with_store(store, false);

    let (status, all) = send(&app, "GET", "/api/vpns", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().unwrap().len(), 6);

    // admin routes surface the misconfiguration instead of hiding it
    let (status, body) = send(&app, "GET", "/api/admin/vpns", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body["error"].as_str().unwrap().contains("DATABASE_URL"));
}

#[tokio::test]
async fn admin_crud_round_trip() {
    let app = build_test_app().await;

    let (status, created) =
        send(&app, "POST", "/api/admin/vpns", Some(payload("Atlas VPN", "atlas", 1))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["slug"], "atlas");
    assert_eq!(created["priceMonthly"], 10.99);
    assert_eq!(created["priceYearly"], Value::Null);
    assert_eq!(created["servers"], 1200);
    let id = created["id"].as_i64().unwrap();

    let (status, fetched) = send(&app, "GET", &format!("/api/admin/vpns/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    // live data now replaces the static catalog on public routes
    let (_, all) = send(&app, "GET", "/api/vpns", None).await;
    assert_eq!(all.as_array().unwrap().len(), 1);

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/api/admin/vpns/{id}"),
        Some(json!({ "priceMonthly": 8.49, "cons": ["Small network"] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["priceMonthly"], 8.49);
    assert_eq!(updated["pros"], json!(["Fast"]));
    assert_eq!(updated["cons"], json!(["Small network"]));

    let (status, deleted) = send(&app, "DELETE", &format!("/api/admin/vpns/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, json!({ "success": true, "deleted": true }));

    let (status, again) = send(&app, "DELETE", &format!("/api/admin/vpns/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(again, json!({ "success": true, "deleted": false }));

    let (status, _) = send(&app, "GET", &format!("/api/admin/vpns/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_rejects_invalid_payloads() {
    let app = build_test_app().await;

    let mut bad_rating = payload("Bad", "bad", 1);
    bad_rating["overallRating"] = json!(9);
    let (status, body) = send(&app, "POST", "/api/admin/vpns", Some(bad_rating)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, _) =
        send(&app, "POST", "/api/admin/vpns", Some(json!({ "name": "No price" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "POST", "/api/admin/vpns", Some(payload("Dup", "dup", 1))).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = send(&app, "POST", "/api/admin/vpns", Some(payload("Dup 2", "dup", 2))).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn update_of_unknown_id_is_404() {
    let app = build_test_app().await;
    let (status, _) =
        send(&app, "PUT", "/api/admin/vpns/4242", Some(json!({ "featured": false }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn count_and_seed() {
    let app = build_test_app().await;

    let (_, count) = send(&app, "GET", "/api/admin/vpns/count", None).await;
    assert_eq!(count, json!({ "count": 0, "canSeed": true }));

    let (status, seeded) = send(&app, "POST", "/api/admin/vpns/seed", None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(seeded, json!({ "seeded": 6 }));

    let (_, count) = send(&app, "GET", "/api/admin/vpns/count", None).await;
    assert_eq!(count, json!({ "count": 6, "canSeed": false }));

    let (status, _) = send(&app, "POST", "/api/admin/vpns/seed", None).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, admin_list) = send(&app, "GET", "/api/admin/vpns", None).await;
    assert_eq!(admin_list.as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn non_numeric_id_is_a_json_400() {
    let app = build_test_app().await;

    for method in ["GET", "DELETE"] {
        let (status, body) = send(&app, method, "/api/admin/vpns/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{method}");
        assert!(body["error"].is_string(), "{method}: {body}");
    }

    let (status, body) =
        send(&app, "PUT", "/api/admin/vpns/abc", Some(json!({ "featured": true }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn blank_required_text_in_update_is_rejected() {
    let app = build_test_app().await;
    let (_, created) =
        send(&app, "POST", "/api/admin/vpns", Some(payload("Keep", "keep", 1))).await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) =
        send(&app, "PUT", &format!("/api/admin/vpns/{id}"), Some(json!({ "name": "  " }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("name"));

    let (_, fetched) = send(&app, "GET", &format!("/api/admin/vpns/{id}"), None).await;
    assert_eq!(fetched["name"], "Keep");
}

#[tokio::test]
async fn featured_stays_within_live_catalog() {
    let app = build_test_app().await;
    let mut body = payload("Plain", "plain", 1);
    body["featured"] = json!(false);
    let (status, _) = send(&app, "POST", "/api/admin/vpns", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, all) = send(&app, "GET", "/api/vpns", None).await;
    let (_, featured) = send(&app, "GET", "/api/vpns/featured", None).await;
    assert_eq!(all.as_array().unwrap().len(), 1);
    assert_eq!(featured, json!([]));
}

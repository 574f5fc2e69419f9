//! Shared setup for integration tests: in-memory databases, repositories
//! and sample admin payloads.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use sea_orm::DatabaseConnection;
use vpnrank::{
    AppState,
    db::{self, LazyDb},
    models::NewVpn,
    repository::{VpnRepository, VpnStore},
    resolver::VpnResolver,
    routes,
};

/// Fresh in-memory SQLite database with all migrations applied.
pub async fn create_test_db() -> DatabaseConnection {
    db::connect_and_migrate("sqlite::memory:").await.expect("Failed to create test database")
}

pub async fn create_test_repo() -> (DatabaseConnection, VpnRepository) {
    let db = create_test_db().await;
    let repo = VpnRepository::new(LazyDb::from_connection(db.clone()));
    (db, repo)
}

/// Router over a fresh database, with fallback to static data enabled.
pub async fn build_test_app() -> Router {
    let (_, repo) = create_test_repo().await;
    build_app_with_store(Arc::new(repo), false)
}

pub fn build_app_with_store(store: Arc<dyn VpnStore>, build_phase: bool) -> Router {
    let resolver = Arc::new(VpnResolver::new(store.clone(), build_phase));
    routes::router(Arc::new(AppState { store, resolver }))
}

/// Minimal valid admin payload; optional fields take their defaults.
pub fn new_vpn(name: &str, slug: &str, sort_order: i32) -> NewVpn {
    serde_json::from_value(serde_json::json!({
        "name": name,
        "slug": slug,
        "website": format!("https://{slug}.example.com"),
        "affiliateUrl": format!("https://{slug}.example.com/?ref=test"),
        "priceMonthly": 9.99,
        "overallRating": 4.2,
        "sortOrder": sort_order,
    }))
    .expect("valid NewVpn payload")
}

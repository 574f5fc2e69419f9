use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    routing::{get, post},
};
use serde::Serialize;

use crate::{
    AppState,
    error::{AppError, AppResult},
    models::{NewVpn, VpnData, VpnPatch},
    static_data::static_vpns,
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/vpns", get(list_vpns))
        .route("/api/vpns/featured", get(featured_vpns))
        .route("/api/vpns/{slug}", get(vpn_by_slug))
        .route("/api/admin/vpns", get(admin_list).post(admin_create))
        .route("/api/admin/vpns/count", get(admin_count))
        .route("/api/admin/vpns/seed", post(admin_seed))
        .route("/api/admin/vpns/{id}", get(admin_get).put(admin_update).delete(admin_delete))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn list_vpns(State(state): State<Arc<AppState>>) -> Json<Vec<VpnData>> {
    Json(state.resolver.get_all_vpns().await)
}

async fn featured_vpns(State(state): State<Arc<AppState>>) -> Json<Vec<VpnData>> {
    Json(state.resolver.get_featured_vpns().await)
}

async fn vpn_by_slug(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> AppResult<Json<VpnData>> {
    state
        .resolver
        .get_vpn_by_slug(&slug)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("no VPN provider with slug {slug:?}")))
}

async fn admin_list(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<VpnData>>> {
    Ok(Json(state.store.all().await?))
}

async fn admin_get(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i32>, PathRejection>,
) -> AppResult<Json<VpnData>> {
    let id = admin_id(id)?;
    state
        .store
        .by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("VPN provider {id} not found")))
}

fn admin_id(id: Result<Path<i32>, PathRejection>) -> AppResult<i32> {
    id.map(|Path(id)| id).map_err(|e| AppError::Validation(e.body_text()))
}

async fn admin_create(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewVpn>, JsonRejection>,
) -> AppResult<(StatusCode, Json<VpnData>)> {
    let Json(input) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    let vpn = state.store.create(input).await?;
    Ok((StatusCode::CREATED, Json(vpn)))
}

async fn admin_update(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<VpnPatch>, JsonRejection>,
) -> AppResult<Json<VpnData>> {
    let id = admin_id(id)?;
    let Json(patch) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    Ok(Json(state.store.update(id, patch).await?))
}

#[derive(Debug, Serialize)]
struct DeleteResponse {
    success: bool,
    deleted: bool,
}

async fn admin_delete(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i32>, PathRejection>,
) -> AppResult<Json<DeleteResponse>> {
    let id = admin_id(id)?;
    let deleted = state.store.delete(id).await?;
    Ok(Json(DeleteResponse { success: true, deleted }))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CountResponse {
    count: u64,
    can_seed: bool,
}

async fn admin_count(State(state): State<Arc<AppState>>) -> AppResult<Json<CountResponse>> {
    let count = state.store.count().await?;
    Ok(Json(CountResponse { count, can_seed: count == 0 }))
}

#[derive(Debug, Serialize)]
struct SeedResponse {
    seeded: usize,
}

async fn admin_seed(
    State(state): State<Arc<AppState>>,
) -> AppResult<(StatusCode, Json<SeedResponse>)> {
    let seeded = state.store.seed(&static_vpns()).await?;
    Ok((StatusCode::CREATED, Json(SeedResponse { seeded })))
}

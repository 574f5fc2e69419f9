pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod form;
pub mod mapper;
pub mod models;
pub mod repository;
pub mod resolver;
pub mod routes;
pub mod static_data;

use std::sync::Arc;

use crate::{repository::VpnStore, resolver::VpnResolver};

#[derive(Clone)]
pub struct AppState {
    /// Direct store access for the admin API; errors propagate.
    pub store: Arc<dyn VpnStore>,
    /// Fallback-aware reads for the public API.
    pub resolver: Arc<VpnResolver>,
}

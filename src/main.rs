use std::sync::Arc;

use anyhow::Context;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use vpnrank::{
    AppState,
    config::Config,
    db::LazyDb,
    models::CatalogSnapshot,
    repository::{VpnRepository, VpnStore},
    resolver::VpnResolver,
    routes,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,vpnrank=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Config::from_env()?;

    let db = LazyDb::new(config.database_url.clone());
    if !db.is_configured() {
        tracing::warn!("DATABASE_URL is not set, reads will be served from static data");
    }
    let store: Arc<dyn VpnStore> = Arc::new(VpnRepository::new(db));
    let resolver = Arc::new(
        VpnResolver::new(store.clone(), config.build_phase)
            .fallback_on_empty(config.empty_db_fallback),
    );

    let mut args = std::env::args().skip(1);
    if let Some(command) = args.next() {
        anyhow::ensure!(command == "export", "unknown command {command:?}, expected `export`");
        return export(&resolver, args.next()).await;
    }

    let state = Arc::new(AppState { store, resolver });

    let app = routes::router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any)),
    );

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, build_phase = config.build_phase, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}

/// Resolves the catalog once and writes it as JSON, to `path` or stdout.
async fn export(resolver: &VpnResolver, path: Option<String>) -> anyhow::Result<()> {
    let snapshot = CatalogSnapshot {
        all: resolver.get_all_vpns().await,
        featured: resolver.get_featured_vpns().await,
    };
    let json = serde_json::to_string_pretty(&snapshot)?;

    match path {
        Some(path) => {
            tokio::fs::write(&path, json).await.with_context(|| format!("writing {path}"))?;
            tracing::info!(
                path = %path,
                providers = snapshot.all.len(),
                build_phase = resolver.is_build_phase(),
                "exported VPN catalog"
            );
        },
        None => println!("{json}"),
    }
    Ok(())
}

//! Service entrypoint: configuration, pool, routers, middleware.

use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use tablero_captacion::adapters::http::{
    catalogo_routes, reportes_routes, tablero_routes, CatalogoAppState, ReportesAppState,
    TableroAppState,
};
use tablero_captacion::adapters::{PostgresCatalogoReader, PostgresIndicadorReader};
use tablero_captacion::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        "iniciando tablero de captacion de gestantes"
    );

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .idle_timeout(config.database.idle_timeout())
        .max_lifetime(config.database.max_lifetime())
        .connect(&config.database.url)
        .await?;

    let catalogo = Arc::new(PostgresCatalogoReader::new(pool.clone()));
    let indicadores = Arc::new(PostgresIndicadorReader::new(pool.clone()));

    let app = Router::new()
        .merge(catalogo_routes(CatalogoAppState { catalogo }))
        .merge(tablero_routes(TableroAppState {
            indicadores: indicadores.clone(),
        }))
        .merge(reportes_routes(ReportesAppState { indicadores }))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors_layer(&config.server.cors_origins_list()));

    let listener = tokio::net::TcpListener::bind(config.server.socket_addr()).await?;
    tracing::info!(addr = %config.server.socket_addr(), "servidor escuchando");
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health() -> &'static str {
    "ok"
}

/// Permissive CORS when no origins are configured; the dashboard frontend is
/// served from another host during development.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers(Any);

    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|o| o.parse::<HeaderValue>().ok())
            .collect();
        layer.allow_origin(AllowOrigin::list(parsed))
    }
}

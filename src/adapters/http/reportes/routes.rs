//! HTTP routes for report downloads.

use axum::routing::get;
use axum::Router;

use super::handlers::{descargar_seguimiento, ReportesAppState};

/// Creates the reportes router with all routes.
pub fn reportes_routes(state: ReportesAppState) -> Router {
    Router::new()
        // GET /api/reportes/seguimiento.xlsx
        .route("/api/reportes/seguimiento.xlsx", get(descargar_seguimiento))
        .with_state(state)
}

//! HTTP routes for tablero endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{
    get_mensualizado, get_ranking_establecimientos, get_ranking_microredes, get_ranking_redes,
    get_seguimiento, get_variables, get_variables_detallado, get_velocimetro, TableroAppState,
};

/// Creates the tablero router with all routes.
pub fn tablero_routes(state: TableroAppState) -> Router {
    Router::new()
        // GET /api/tablero/velocimetro
        .route("/api/tablero/velocimetro", get(get_velocimetro))
        // GET /api/tablero/mensualizado
        .route("/api/tablero/mensualizado", get(get_mensualizado))
        // GET /api/tablero/variables
        .route("/api/tablero/variables", get(get_variables))
        // GET /api/tablero/variables/detalle
        .route("/api/tablero/variables/detalle", get(get_variables_detallado))
        // GET /api/tablero/ranking/{redes,microredes,establecimientos}
        .route("/api/tablero/ranking/redes", get(get_ranking_redes))
        .route("/api/tablero/ranking/microredes", get(get_ranking_microredes))
        .route(
            "/api/tablero/ranking/establecimientos",
            get(get_ranking_establecimientos),
        )
        // GET /api/tablero/seguimiento
        .route("/api/tablero/seguimiento", get(get_seguimiento))
        .with_state(state)
}

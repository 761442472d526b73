//! HTTP routes for catalogo endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{
    get_contexto, get_distritos, get_establecimientos, get_meses, get_microredes, get_provincias,
    get_redes, CatalogoAppState,
};

/// Creates the catalogo router with all routes.
pub fn catalogo_routes(state: CatalogoAppState) -> Router {
    Router::new()
        // GET /api/catalogo/contexto
        .route("/api/catalogo/contexto", get(get_contexto))
        // GET /api/catalogo/redes
        .route("/api/catalogo/redes", get(get_redes))
        // GET /api/catalogo/microredes
        .route("/api/catalogo/microredes", get(get_microredes))
        // GET /api/catalogo/establecimientos
        .route("/api/catalogo/establecimientos", get(get_establecimientos))
        // GET /api/catalogo/provincias
        .route("/api/catalogo/provincias", get(get_provincias))
        // GET /api/catalogo/distritos
        .route("/api/catalogo/distritos", get(get_distritos))
        // GET /api/catalogo/meses
        .route("/api/catalogo/meses", get(get_meses))
        .with_state(state)
}

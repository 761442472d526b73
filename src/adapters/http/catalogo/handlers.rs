//! HTTP handlers for catalogo endpoints.
//!
//! Only the filter context goes through an application handler; the cascading
//! dropdowns are single lookups and call the reader port directly.

use std::sync::Arc;

use axum::extract::{Json, Query, State};

use crate::application::handlers::{ContextoFiltrosHandler, ContextoFiltrosQuery};
use crate::domain::catalogo::FiltroEstablecimientos;
use crate::domain::foundation::Anio;
use crate::ports::CatalogoReader;

use super::super::error::ApiError;
use super::dto::{
    AnioParams, ContextoFiltros, Distrito, DistritosParams, Establecimiento,
    EstablecimientosParams, Microred, MicroredesParams, PeriodoMes, Provincia, Red,
};

/// Shared state for catalogo endpoints.
#[derive(Clone)]
pub struct CatalogoAppState {
    pub catalogo: Arc<dyn CatalogoReader>,
}

impl CatalogoAppState {
    pub fn contexto_filtros_handler(&self) -> ContextoFiltrosHandler {
        ContextoFiltrosHandler::new(self.catalogo.clone())
    }
}

/// GET /api/catalogo/contexto?anio=2025
///
/// Returns redes, provincias and months for the filter bar in one request.
pub async fn get_contexto(
    State(state): State<CatalogoAppState>,
    Query(params): Query<AnioParams>,
) -> Result<Json<ContextoFiltros>, ApiError> {
    let anio = Anio::parse(params.anio.as_deref());

    let handler = state.contexto_filtros_handler();
    let contexto = handler.handle(ContextoFiltrosQuery { anio }).await?;

    Ok(Json(contexto))
}

/// GET /api/catalogo/redes
pub async fn get_redes(
    State(state): State<CatalogoAppState>,
) -> Result<Json<Vec<Red>>, ApiError> {
    let redes = state.catalogo.listar_redes().await?;
    Ok(Json(redes))
}

/// GET /api/catalogo/microredes?red=1201
pub async fn get_microredes(
    State(state): State<CatalogoAppState>,
    Query(params): Query<MicroredesParams>,
) -> Result<Json<Vec<Microred>>, ApiError> {
    let microredes = state.catalogo.listar_microredes(&params.red).await?;
    Ok(Json(microredes))
}

/// GET /api/catalogo/establecimientos?red=1201&microred=120101
pub async fn get_establecimientos(
    State(state): State<CatalogoAppState>,
    Query(params): Query<EstablecimientosParams>,
) -> Result<Json<Vec<Establecimiento>>, ApiError> {
    let filtro = FiltroEstablecimientos {
        codigo_microred: normalizar(params.microred),
        codigo_red: normalizar(params.red),
        ubigueo: normalizar(params.ubigueo),
    };

    let establecimientos = state.catalogo.listar_establecimientos(&filtro).await?;
    Ok(Json(establecimientos))
}

/// GET /api/catalogo/provincias
pub async fn get_provincias(
    State(state): State<CatalogoAppState>,
) -> Result<Json<Vec<Provincia>>, ApiError> {
    let provincias = state.catalogo.listar_provincias().await?;
    Ok(Json(provincias))
}

/// GET /api/catalogo/distritos?provincia=1204
pub async fn get_distritos(
    State(state): State<CatalogoAppState>,
    Query(params): Query<DistritosParams>,
) -> Result<Json<Vec<Distrito>>, ApiError> {
    let distritos = state.catalogo.listar_distritos(&params.provincia).await?;
    Ok(Json(distritos))
}

/// GET /api/catalogo/meses?anio=2025
pub async fn get_meses(
    State(state): State<CatalogoAppState>,
    Query(params): Query<AnioParams>,
) -> Result<Json<Vec<PeriodoMes>>, ApiError> {
    let anio = Anio::parse(params.anio.as_deref());
    let meses = state.catalogo.listar_meses(anio).await?;
    Ok(Json(meses))
}

/// Empty query parameters count as absent.
fn normalizar(valor: Option<String>) -> Option<String> {
    valor
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

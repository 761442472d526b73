//! HTTP handlers for tablero endpoints.
//!
//! These handlers connect Axum routes to application layer query handlers.
//! Reader failures never surface here: the application layer already degrades
//! them to zeroed payloads, so the only client error is a bad month filter.

use std::sync::Arc;

use axum::extract::{Json, Query, State};

use crate::application::handlers::{
    GetMensualizadoHandler, GetMensualizadoQuery, GetRankingHandler, GetRankingQuery,
    GetSeguimientoHandler, GetSeguimientoQuery, GetVariablesDetalladoHandler,
    GetVariablesDetalladoQuery, GetVariablesHandler, GetVariablesQuery, GetVelocimetroHandler,
    GetVelocimetroQuery,
};
use crate::domain::indicadores::AmbitoRanking;
use crate::ports::IndicadorReader;

use super::super::error::ApiError;
use super::dto::{
    FiltroParams, GraficoMensualizado, Ranking, Seguimiento, VariableDetalleFila,
    VariablesTrimestrales, Velocimetro,
};

/// Shared state for tablero endpoints.
#[derive(Clone)]
pub struct TableroAppState {
    pub indicadores: Arc<dyn IndicadorReader>,
}

impl TableroAppState {
    pub fn velocimetro_handler(&self) -> GetVelocimetroHandler {
        GetVelocimetroHandler::new(self.indicadores.clone())
    }

    pub fn mensualizado_handler(&self) -> GetMensualizadoHandler {
        GetMensualizadoHandler::new(self.indicadores.clone())
    }

    pub fn variables_handler(&self) -> GetVariablesHandler {
        GetVariablesHandler::new(self.indicadores.clone())
    }

    pub fn variables_detallado_handler(&self) -> GetVariablesDetalladoHandler {
        GetVariablesDetalladoHandler::new(self.indicadores.clone())
    }

    pub fn ranking_handler(&self) -> GetRankingHandler {
        GetRankingHandler::new(self.indicadores.clone())
    }

    pub fn seguimiento_handler(&self) -> GetSeguimientoHandler {
        GetSeguimientoHandler::new(self.indicadores.clone())
    }
}

/// GET /api/tablero/velocimetro
pub async fn get_velocimetro(
    State(state): State<TableroAppState>,
    Query(params): Query<FiltroParams>,
) -> Result<Json<Velocimetro>, ApiError> {
    let filtro = params.into_filtro()?;
    let handler = state.velocimetro_handler();
    Ok(Json(handler.handle(GetVelocimetroQuery { filtro }).await))
}

/// GET /api/tablero/mensualizado
pub async fn get_mensualizado(
    State(state): State<TableroAppState>,
    Query(params): Query<FiltroParams>,
) -> Result<Json<GraficoMensualizado>, ApiError> {
    let filtro = params.into_filtro()?;
    let handler = state.mensualizado_handler();
    Ok(Json(handler.handle(GetMensualizadoQuery { filtro }).await))
}

/// GET /api/tablero/variables
pub async fn get_variables(
    State(state): State<TableroAppState>,
    Query(params): Query<FiltroParams>,
) -> Result<Json<VariablesTrimestrales>, ApiError> {
    let filtro = params.into_filtro()?;
    let handler = state.variables_handler();
    Ok(Json(handler.handle(GetVariablesQuery { filtro }).await))
}

/// GET /api/tablero/variables/detalle
pub async fn get_variables_detallado(
    State(state): State<TableroAppState>,
    Query(params): Query<FiltroParams>,
) -> Result<Json<Vec<VariableDetalleFila>>, ApiError> {
    let filtro = params.into_filtro()?;
    let handler = state.variables_detallado_handler();
    Ok(Json(
        handler.handle(GetVariablesDetalladoQuery { filtro }).await,
    ))
}

/// GET /api/tablero/ranking/redes
pub async fn get_ranking_redes(
    state: State<TableroAppState>,
    params: Query<FiltroParams>,
) -> Result<Json<Ranking>, ApiError> {
    get_ranking(AmbitoRanking::Redes, state, params).await
}

/// GET /api/tablero/ranking/microredes
pub async fn get_ranking_microredes(
    state: State<TableroAppState>,
    params: Query<FiltroParams>,
) -> Result<Json<Ranking>, ApiError> {
    get_ranking(AmbitoRanking::Microredes, state, params).await
}

/// GET /api/tablero/ranking/establecimientos
pub async fn get_ranking_establecimientos(
    state: State<TableroAppState>,
    params: Query<FiltroParams>,
) -> Result<Json<Ranking>, ApiError> {
    get_ranking(AmbitoRanking::Establecimientos, state, params).await
}

async fn get_ranking(
    ambito: AmbitoRanking,
    State(state): State<TableroAppState>,
    Query(params): Query<FiltroParams>,
) -> Result<Json<Ranking>, ApiError> {
    let filtro = params.into_filtro()?;
    let handler = state.ranking_handler();
    Ok(Json(handler.handle(GetRankingQuery { ambito, filtro }).await))
}

/// GET /api/tablero/seguimiento
pub async fn get_seguimiento(
    State(state): State<TableroAppState>,
    Query(params): Query<FiltroParams>,
) -> Result<Json<Seguimiento>, ApiError> {
    let filtro = params.into_filtro()?;
    let handler = state.seguimiento_handler();
    Ok(Json(handler.handle(GetSeguimientoQuery { filtro }).await))
}

//! HTTP handlers for report downloads.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, HeaderValue};
use axum::response::IntoResponse;

use crate::adapters::excel::{generar_reporte_seguimiento, ExcelError};
use crate::application::handlers::{GetSeguimientoHandler, GetSeguimientoQuery};
use crate::ports::IndicadorReader;

use super::super::error::ApiError;
use super::super::tablero::FiltroParams;

const CONTENT_TYPE_XLSX: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Shared state for report endpoints.
#[derive(Clone)]
pub struct ReportesAppState {
    pub indicadores: Arc<dyn IndicadorReader>,
}

impl ReportesAppState {
    pub fn seguimiento_handler(&self) -> GetSeguimientoHandler {
        GetSeguimientoHandler::new(self.indicadores.clone())
    }
}

impl From<ExcelError> for ApiError {
    fn from(error: ExcelError) -> Self {
        ApiError::Internal(error.to_string())
    }
}

/// GET /api/reportes/seguimiento.xlsx
///
/// Streams the follow-up listing as a styled workbook attachment.
pub async fn descargar_seguimiento(
    State(state): State<ReportesAppState>,
    Query(params): Query<FiltroParams>,
) -> Result<impl IntoResponse, ApiError> {
    let filtro = params.into_filtro()?;
    let periodo = filtro.etiqueta_periodo();

    let handler = state.seguimiento_handler();
    let seguimiento = handler.handle(GetSeguimientoQuery { filtro }).await;

    let bytes = generar_reporte_seguimiento(&seguimiento, &periodo)?;

    let nombre = format!(
        "seguimiento_captacion_{}.xlsx",
        periodo.replace(' ', "_").to_lowercase()
    );

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_XLSX));
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&format!("attachment; filename=\"{nombre}\""))
            .map_err(|e| ApiError::Internal(e.to_string()))?,
    );

    Ok((headers, bytes))
}

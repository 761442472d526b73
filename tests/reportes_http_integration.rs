//! Integration test for the XLSX report download.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use tower::util::ServiceExt;

use tablero_captacion::adapters::http::{reportes_routes, ReportesAppState};
use tablero_captacion::domain::indicadores::{
    AmbitoRanking, FiltroIndicador, GraficoMensualizado, Ranking, SeguimientoFila,
    VariableDetalleFila, VariablesTrimestrales, Velocimetro,
};
use tablero_captacion::ports::{IndicadorError, IndicadorReader};

use async_trait::async_trait;

struct MockIndicadorReader;

#[async_trait]
impl IndicadorReader for MockIndicadorReader {
    async fn velocimetro(&self, _filtro: &FiltroIndicador) -> Result<Velocimetro, IndicadorError> {
        unimplemented!()
    }

    async fn grafico_mensualizado(
        &self,
        _filtro: &FiltroIndicador,
    ) -> Result<GraficoMensualizado, IndicadorError> {
        unimplemented!()
    }

    async fn variables(
        &self,
        _filtro: &FiltroIndicador,
    ) -> Result<VariablesTrimestrales, IndicadorError> {
        unimplemented!()
    }

    async fn variables_detallado(
        &self,
        _filtro: &FiltroIndicador,
    ) -> Result<Vec<VariableDetalleFila>, IndicadorError> {
        unimplemented!()
    }

    async fn ranking(
        &self,
        _ambito: AmbitoRanking,
        _filtro: &FiltroIndicador,
    ) -> Result<Ranking, IndicadorError> {
        unimplemented!()
    }

    async fn seguimiento(
        &self,
        _filtro: &FiltroIndicador,
    ) -> Result<Vec<SeguimientoFila>, IndicadorError> {
        Ok(vec![SeguimientoFila {
            red: "RED SATIPO".to_string(),
            microred: "MR MAZAMARI".to_string(),
            establecimiento: "CS MAZAMARI".to_string(),
            numerador: 12,
            denominador: 48,
            avance: 25.0,
        }])
    }
}

#[tokio::test]
async fn seguimiento_xlsx_downloads_as_attachment() {
    let app = reportes_routes(ReportesAppState {
        indicadores: Arc::new(MockIndicadorReader),
    });

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/reportes/seguimiento.xlsx?anio=2025&mes_inicio=1&mes_fin=6")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert_eq!(
        content_type,
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );

    let disposition = response
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(disposition.starts_with("attachment;"));
    assert!(disposition.contains("enero_-_junio_2025"));

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    // An XLSX file is a ZIP container.
    assert_eq!(&bytes[..2], b"PK");
}

#[tokio::test]
async fn bad_month_filter_is_rejected_before_rendering() {
    let app = reportes_routes(ReportesAppState {
        indicadores: Arc::new(MockIndicadorReader),
    });

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/reportes/seguimiento.xlsx?mes_inicio=0")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

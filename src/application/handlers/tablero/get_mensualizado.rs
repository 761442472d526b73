//! GetMensualizadoHandler - query handler for the month-by-month bar chart.

use std::sync::Arc;

use crate::domain::indicadores::{FiltroIndicador, GraficoMensualizado};
use crate::ports::IndicadorReader;

#[derive(Debug, Clone)]
pub struct GetMensualizadoQuery {
    pub filtro: FiltroIndicador,
}

pub struct GetMensualizadoHandler {
    indicadores: Arc<dyn IndicadorReader>,
}

impl GetMensualizadoHandler {
    pub fn new(indicadores: Arc<dyn IndicadorReader>) -> Self {
        Self { indicadores }
    }

    pub async fn handle(&self, query: GetMensualizadoQuery) -> GraficoMensualizado {
        match self.indicadores.grafico_mensualizado(&query.filtro).await {
            Ok(grafico) => grafico,
            Err(err) => {
                tracing::error!(
                    %err,
                    anio = %query.filtro.anio,
                    "grafico mensualizado degradado a serie vacia"
                );
                GraficoMensualizado::default()
            }
        }
    }
}

//! GetVelocimetroHandler - query handler for the coverage gauge.

use std::sync::Arc;

use crate::domain::indicadores::{FiltroIndicador, Velocimetro};
use crate::ports::IndicadorReader;

/// Query for the gauge widget under the current filter selection.
#[derive(Debug, Clone)]
pub struct GetVelocimetroQuery {
    pub filtro: FiltroIndicador,
}

/// Handler for the velocímetro. Infallible by design: a failed query degrades
/// to the zeroed payload after logging.
pub struct GetVelocimetroHandler {
    indicadores: Arc<dyn IndicadorReader>,
}

impl GetVelocimetroHandler {
    pub fn new(indicadores: Arc<dyn IndicadorReader>) -> Self {
        Self { indicadores }
    }

    pub async fn handle(&self, query: GetVelocimetroQuery) -> Velocimetro {
        match self.indicadores.velocimetro(&query.filtro).await {
            Ok(velocimetro) => velocimetro,
            Err(err) => {
                tracing::error!(
                    %err,
                    anio = %query.filtro.anio,
                    red = query.filtro.red.as_deref().unwrap_or("-"),
                    "velocimetro degradado a valores en cero"
                );
                Velocimetro::default()
            }
        }
    }
}

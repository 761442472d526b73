//! Query handlers for the quarterly variables chart and its detail table.

use std::sync::Arc;

use crate::domain::indicadores::{FiltroIndicador, VariableDetalleFila, VariablesTrimestrales};
use crate::ports::IndicadorReader;

#[derive(Debug, Clone)]
pub struct GetVariablesQuery {
    pub filtro: FiltroIndicador,
}

pub struct GetVariablesHandler {
    indicadores: Arc<dyn IndicadorReader>,
}

impl GetVariablesHandler {
    pub fn new(indicadores: Arc<dyn IndicadorReader>) -> Self {
        Self { indicadores }
    }

    pub async fn handle(&self, query: GetVariablesQuery) -> VariablesTrimestrales {
        match self.indicadores.variables(&query.filtro).await {
            Ok(variables) => variables,
            Err(err) => {
                tracing::error!(
                    %err,
                    anio = %query.filtro.anio,
                    "variables trimestrales degradadas a serie vacia"
                );
                VariablesTrimestrales::default()
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct GetVariablesDetalladoQuery {
    pub filtro: FiltroIndicador,
}

pub struct GetVariablesDetalladoHandler {
    indicadores: Arc<dyn IndicadorReader>,
}

impl GetVariablesDetalladoHandler {
    pub fn new(indicadores: Arc<dyn IndicadorReader>) -> Self {
        Self { indicadores }
    }

    pub async fn handle(&self, query: GetVariablesDetalladoQuery) -> Vec<VariableDetalleFila> {
        match self.indicadores.variables_detallado(&query.filtro).await {
            Ok(filas) => filas,
            Err(err) => {
                tracing::error!(
                    %err,
                    anio = %query.filtro.anio,
                    "detalle de variables degradado a tabla vacia"
                );
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Anio, Avance};
    use crate::domain::indicadores::{
        AmbitoRanking, GraficoMensualizado, Ranking, SeguimientoFila, Velocimetro,
    };
    use crate::ports::IndicadorError;
    use async_trait::async_trait;

    struct MockIndicadorReader {
        should_fail: bool,
    }

    #[async_trait]
    impl IndicadorReader for MockIndicadorReader {
        async fn velocimetro(
            &self,
            _filtro: &FiltroIndicador,
        ) -> Result<Velocimetro, IndicadorError> {
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
            if self.should_fail {
                return Err(IndicadorError::Database("timeout".to_string()));
            }
            let mut variables = VariablesTrimestrales::default();
            variables.agregar_fila("I TRIM".to_string(), 90, 300, Avance::calcular(90, 300));
            Ok(variables)
        }

        async fn variables_detallado(
            &self,
            _filtro: &FiltroIndicador,
        ) -> Result<Vec<VariableDetalleFila>, IndicadorError> {
            if self.should_fail {
                return Err(IndicadorError::Database("timeout".to_string()));
            }
            Ok(vec![VariableDetalleFila {
                variable: "GESTANTES CAPTADAS".to_string(),
                mes: "ENERO".to_string(),
                valor: 40,
            }])
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
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn test_variables_handle_returns_series() {
        let handler = GetVariablesHandler::new(Arc::new(MockIndicadorReader {
            should_fail: false,
        }));

        let variables = handler
            .handle(GetVariablesQuery {
                filtro: FiltroIndicador::para_anio(Anio::default()),
            })
            .await;

        assert_eq!(variables.trimestres, vec!["I TRIM"]);
        assert_eq!(variables.avance, vec![30.0]);
    }

    #[tokio::test]
    async fn test_variables_handle_degrades_on_error() {
        let handler = GetVariablesHandler::new(Arc::new(MockIndicadorReader {
            should_fail: true,
        }));

        let variables = handler
            .handle(GetVariablesQuery {
                filtro: FiltroIndicador::para_anio(Anio::default()),
            })
            .await;

        assert!(variables.is_empty());
    }

    #[tokio::test]
    async fn test_detallado_handle_degrades_to_empty_table() {
        let handler = GetVariablesDetalladoHandler::new(Arc::new(MockIndicadorReader {
            should_fail: true,
        }));

        let filas = handler
            .handle(GetVariablesDetalladoQuery {
                filtro: FiltroIndicador::para_anio(Anio::default()),
            })
            .await;

        assert!(filas.is_empty());
    }
}

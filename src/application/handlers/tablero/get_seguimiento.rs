//! GetSeguimientoHandler - query handler for the nominal follow-up table.
//!
//! Fetches the flat facility listing and groups it into the
//! red -> microred -> establecimiento hierarchy the table and the XLSX
//! report consume.

use std::sync::Arc;

use crate::domain::indicadores::{agrupar_seguimiento, FiltroIndicador, Seguimiento};
use crate::ports::IndicadorReader;

#[derive(Debug, Clone)]
pub struct GetSeguimientoQuery {
    pub filtro: FiltroIndicador,
}

pub struct GetSeguimientoHandler {
    indicadores: Arc<dyn IndicadorReader>,
}

impl GetSeguimientoHandler {
    pub fn new(indicadores: Arc<dyn IndicadorReader>) -> Self {
        Self { indicadores }
    }

    pub async fn handle(&self, query: GetSeguimientoQuery) -> Seguimiento {
        match self.indicadores.seguimiento(&query.filtro).await {
            Ok(filas) => agrupar_seguimiento(&filas),
            Err(err) => {
                tracing::error!(
                    %err,
                    anio = %query.filtro.anio,
                    "seguimiento degradado a listado vacio"
                );
                Seguimiento::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Anio, Avance};
    use crate::domain::indicadores::{
        AmbitoRanking, GraficoMensualizado, Ranking, SeguimientoFila, VariableDetalleFila,
        VariablesTrimestrales, Velocimetro,
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
            if self.should_fail {
                return Err(IndicadorError::Database("timeout".to_string()));
            }
            Ok(vec![
                SeguimientoFila {
                    red: "RED JAUJA".to_string(),
                    microred: "MR ACOLLA".to_string(),
                    establecimiento: "CS ACOLLA".to_string(),
                    numerador: 30,
                    denominador: 50,
                    avance: Avance::calcular(30, 50).value(),
                },
                SeguimientoFila {
                    red: "RED JAUJA".to_string(),
                    microred: "MR ACOLLA".to_string(),
                    establecimiento: "PS PANCAN".to_string(),
                    numerador: 10,
                    denominador: 50,
                    avance: Avance::calcular(10, 50).value(),
                },
            ])
        }
    }

    #[tokio::test]
    async fn test_handle_groups_rows_and_totals() {
        let handler = GetSeguimientoHandler::new(Arc::new(MockIndicadorReader {
            should_fail: false,
        }));

        let seguimiento = handler
            .handle(GetSeguimientoQuery {
                filtro: FiltroIndicador::para_anio(Anio::default()),
            })
            .await;

        assert_eq!(seguimiento.redes.len(), 1);
        assert_eq!(seguimiento.redes[0].microredes[0].establecimientos.len(), 2);
        assert_eq!(seguimiento.total_numerador, 40);
        assert_eq!(seguimiento.total_denominador, 100);
        assert_eq!(seguimiento.total_avance, 40.0);
    }

    #[tokio::test]
    async fn test_handle_degrades_to_empty_listing_on_error() {
        let handler = GetSeguimientoHandler::new(Arc::new(MockIndicadorReader {
            should_fail: true,
        }));

        let seguimiento = handler
            .handle(GetSeguimientoQuery {
                filtro: FiltroIndicador::para_anio(Anio::default()),
            })
            .await;

        assert_eq!(seguimiento, Seguimiento::default());
    }
}

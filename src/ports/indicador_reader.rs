use async_trait::async_trait;

use crate::domain::indicadores::{
    AmbitoRanking, FiltroIndicador, GraficoMensualizado, Ranking, SeguimientoFila,
    VariableDetalleFila, VariablesTrimestrales, Velocimetro,
};

/// Read-only port over the eight PostgreSQL stored functions.
///
/// Implementations only marshal: call the function with the eight positional
/// filter arguments, reshape rows into the column-oriented payloads and cast
/// defensively. They never aggregate.
#[async_trait]
pub trait IndicadorReader: Send + Sync {
    /// Single aggregate row for the gauge (`fn_obtener_velocimetro`).
    async fn velocimetro(&self, filtro: &FiltroIndicador) -> Result<Velocimetro, IndicadorError>;

    /// Monthly evolution series (`fn_grafico_mensualizado`).
    async fn grafico_mensualizado(
        &self,
        filtro: &FiltroIndicador,
    ) -> Result<GraficoMensualizado, IndicadorError>;

    /// Quarterly aggregates (`fn_obtener_variables`).
    async fn variables(
        &self,
        filtro: &FiltroIndicador,
    ) -> Result<VariablesTrimestrales, IndicadorError>;

    /// Monthly detail per variable (`fn_obtener_variables_detallado`).
    async fn variables_detallado(
        &self,
        filtro: &FiltroIndicador,
    ) -> Result<Vec<VariableDetalleFila>, IndicadorError>;

    /// Ranking at one administrative level (`fn_grafico_redes`,
    /// `fn_grafico_microredes` or `fn_grafico_establecimientos`).
    async fn ranking(
        &self,
        ambito: AmbitoRanking,
        filtro: &FiltroIndicador,
    ) -> Result<Ranking, IndicadorError>;

    /// Flat follow-up listing (`fn_seguimiento_s11_captacion_gestante`).
    async fn seguimiento(
        &self,
        filtro: &FiltroIndicador,
    ) -> Result<Vec<SeguimientoFila>, IndicadorError>;
}

/// Errors that can occur while querying indicators.
#[derive(Debug, thiserror::Error)]
pub enum IndicadorError {
    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for IndicadorError {
    fn from(err: sqlx::Error) -> Self {
        IndicadorError::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockIndicadorReader;

    #[async_trait]
    impl IndicadorReader for MockIndicadorReader {
        async fn velocimetro(
            &self,
            _filtro: &FiltroIndicador,
        ) -> Result<Velocimetro, IndicadorError> {
            Ok(Velocimetro::default())
        }

        async fn grafico_mensualizado(
            &self,
            _filtro: &FiltroIndicador,
        ) -> Result<GraficoMensualizado, IndicadorError> {
            Ok(GraficoMensualizado::default())
        }

        async fn variables(
            &self,
            _filtro: &FiltroIndicador,
        ) -> Result<VariablesTrimestrales, IndicadorError> {
            Ok(VariablesTrimestrales::default())
        }

        async fn variables_detallado(
            &self,
            _filtro: &FiltroIndicador,
        ) -> Result<Vec<VariableDetalleFila>, IndicadorError> {
            Ok(vec![])
        }

        async fn ranking(
            &self,
            _ambito: AmbitoRanking,
            _filtro: &FiltroIndicador,
        ) -> Result<Ranking, IndicadorError> {
            Ok(Ranking::default())
        }

        async fn seguimiento(
            &self,
            _filtro: &FiltroIndicador,
        ) -> Result<Vec<SeguimientoFila>, IndicadorError> {
            Ok(vec![])
        }
    }

    #[test]
    fn test_reader_trait_is_object_safe() {
        let _reader: Box<dyn IndicadorReader> = Box::new(MockIndicadorReader);
    }

    #[test]
    fn test_error_conversion_from_sqlx() {
        let err: IndicadorError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, IndicadorError::Database(_)));
    }
}

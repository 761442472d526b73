//! HTTP DTOs for tablero endpoints.
//!
//! The chart payloads are already serialization-ready domain types, so only
//! the inbound filter parameters live here.

pub use crate::domain::indicadores::{
    GraficoMensualizado, Ranking, Seguimiento, VariableDetalleFila, VariablesTrimestrales,
    Velocimetro,
};

use serde::Deserialize;

use crate::domain::foundation::{Anio, Mes, MesInvalido};
use crate::domain::indicadores::FiltroIndicador;

/// The filter bar as it arrives in the query string. Every field is optional;
/// an invalid year falls back silently but an out-of-range month is rejected.
#[derive(Debug, Deserialize, Default)]
pub struct FiltroParams {
    pub anio: Option<String>,
    pub mes_inicio: Option<String>,
    pub mes_fin: Option<String>,
    pub red: Option<String>,
    pub microred: Option<String>,
    pub establecimiento: Option<String>,
    pub provincia: Option<String>,
    pub distrito: Option<String>,
}

impl FiltroParams {
    pub fn into_filtro(self) -> Result<FiltroIndicador, MesInvalido> {
        Ok(FiltroIndicador {
            anio: Anio::parse(self.anio.as_deref()),
            mes_inicio: Mes::parse_opcional(self.mes_inicio.as_deref())?,
            mes_fin: Mes::parse_opcional(self.mes_fin.as_deref())?,
            red: normalizar(self.red),
            microred: normalizar(self.microred),
            establecimiento: normalizar(self.establecimiento),
            provincia: normalizar(self.provincia),
            distrito: normalizar(self.distrito),
        })
    }
}

/// Empty query parameters count as absent.
fn normalizar(valor: Option<String>) -> Option<String> {
    valor
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_params_yield_default_filter() {
        let filtro = FiltroParams::default().into_filtro().unwrap();
        assert_eq!(filtro, FiltroIndicador::para_anio(Anio::default()));
    }

    #[test]
    fn test_full_params_are_carried_over() {
        let params = FiltroParams {
            anio: Some("2024".to_string()),
            mes_inicio: Some("1".to_string()),
            mes_fin: Some("6".to_string()),
            red: Some("RED JAUJA".to_string()),
            microred: Some(" MR ACOLLA ".to_string()),
            establecimiento: None,
            provincia: Some("".to_string()),
            distrito: None,
        };

        let filtro = params.into_filtro().unwrap();
        assert_eq!(filtro.anio.value(), 2024);
        assert_eq!(filtro.mes_inicio, Mes::try_new(1).ok());
        assert_eq!(filtro.mes_fin, Mes::try_new(6).ok());
        assert_eq!(filtro.red.as_deref(), Some("RED JAUJA"));
        assert_eq!(filtro.microred.as_deref(), Some("MR ACOLLA"));
        assert_eq!(filtro.provincia, None);
    }

    #[test]
    fn test_invalid_year_falls_back_but_invalid_month_errors() {
        let filtro = FiltroParams {
            anio: Some("1999".to_string()),
            ..Default::default()
        }
        .into_filtro()
        .unwrap();
        assert_eq!(filtro.anio, Anio::default());

        let err = FiltroParams {
            mes_fin: Some("13".to_string()),
            ..Default::default()
        }
        .into_filtro();
        assert!(err.is_err());
    }
}

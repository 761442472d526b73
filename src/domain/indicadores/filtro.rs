//! Common filter set shared by all indicator queries.

use crate::domain::foundation::{Anio, Mes};

/// The eight positional filters every stored function accepts, in call order:
/// year, month range, then the administrative hierarchy. Unset filters are
/// passed to PostgreSQL as NULL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FiltroIndicador {
    pub anio: Anio,
    pub mes_inicio: Option<Mes>,
    pub mes_fin: Option<Mes>,
    pub red: Option<String>,
    pub microred: Option<String>,
    pub establecimiento: Option<String>,
    pub provincia: Option<String>,
    pub distrito: Option<String>,
}

impl FiltroIndicador {
    /// Filter for a whole year with no territorial selection.
    pub fn para_anio(anio: Anio) -> Self {
        Self {
            anio,
            ..Default::default()
        }
    }

    /// Human-readable period label for report headers, e.g.
    /// `"ENERO - JUNIO 2025"` or just `"2025"` when no range is set.
    pub fn etiqueta_periodo(&self) -> String {
        match (self.mes_inicio, self.mes_fin) {
            (Some(inicio), Some(fin)) if inicio != fin => {
                format!("{} - {} {}", inicio.nombre(), fin.nombre(), self.anio)
            }
            (Some(mes), _) | (None, Some(mes)) => format!("{} {}", mes.nombre(), self.anio),
            (None, None) => self.anio.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mes(n: u8) -> Mes {
        Mes::try_new(n).unwrap()
    }

    #[test]
    fn etiqueta_periodo_without_months() {
        let filtro = FiltroIndicador::para_anio(Anio::default());
        assert_eq!(filtro.etiqueta_periodo(), "2025");
    }

    #[test]
    fn etiqueta_periodo_with_range() {
        let filtro = FiltroIndicador {
            mes_inicio: Some(mes(1)),
            mes_fin: Some(mes(6)),
            ..FiltroIndicador::para_anio(Anio::default())
        };
        assert_eq!(filtro.etiqueta_periodo(), "ENERO - JUNIO 2025");
    }

    #[test]
    fn etiqueta_periodo_with_single_month() {
        let filtro = FiltroIndicador {
            mes_inicio: Some(mes(3)),
            mes_fin: Some(mes(3)),
            ..FiltroIndicador::para_anio(Anio::default())
        };
        assert_eq!(filtro.etiqueta_periodo(), "MARZO 2025");

        let filtro = FiltroIndicador {
            mes_fin: Some(mes(4)),
            ..FiltroIndicador::para_anio(Anio::default())
        };
        assert_eq!(filtro.etiqueta_periodo(), "ABRIL 2025");
    }
}

//! Quarterly variables payload and its monthly detail listing.

use serde::Serialize;

use crate::domain::foundation::Avance;

/// Quarterly aggregate series returned by `fn_obtener_variables`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VariablesTrimestrales {
    pub trimestres: Vec<String>,
    pub numerador: Vec<i64>,
    pub denominador: Vec<i64>,
    pub avance: Vec<f64>,
}

impl VariablesTrimestrales {
    pub fn agregar_fila(
        &mut self,
        trimestre: String,
        numerador: i64,
        denominador: i64,
        avance: Avance,
    ) {
        self.trimestres.push(trimestre);
        self.numerador.push(numerador);
        self.denominador.push(denominador);
        self.avance.push(avance.value());
    }

    pub fn is_empty(&self) -> bool {
        self.trimestres.is_empty()
    }
}

/// One row of the detail listing (`fn_obtener_variables_detallado`): the raw
/// monthly value of one variable, kept row-oriented for the drill-down table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariableDetalleFila {
    pub variable: String,
    pub mes: String,
    pub valor: i64,
}

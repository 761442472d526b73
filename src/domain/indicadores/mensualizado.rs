//! Monthly evolution chart payload.

use serde::Serialize;

use crate::domain::foundation::Avance;

/// One series entry per month returned by `fn_grafico_mensualizado`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GraficoMensualizado {
    pub meses: Vec<String>,
    pub numerador: Vec<i64>,
    pub denominador: Vec<i64>,
    pub avance: Vec<f64>,
}

impl GraficoMensualizado {
    /// Appends one month row, keeping all four vectors in lockstep.
    pub fn agregar_fila(&mut self, mes: String, numerador: i64, denominador: i64, avance: Avance) {
        self.meses.push(mes);
        self.numerador.push(numerador);
        self.denominador.push(denominador);
        self.avance.push(avance.value());
    }

    pub fn len(&self) -> usize {
        self.meses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meses.is_empty()
    }
}

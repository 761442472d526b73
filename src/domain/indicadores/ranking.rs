//! Ranking chart payloads (one bar per red, microred or establecimiento).

use serde::Serialize;
use std::fmt;

use crate::domain::foundation::Avance;

/// Administrative level a ranking query runs at. Each maps to its own stored
/// function but shares the payload shape below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmbitoRanking {
    Redes,
    Microredes,
    Establecimientos,
}

impl fmt::Display for AmbitoRanking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AmbitoRanking::Redes => "redes",
            AmbitoRanking::Microredes => "microredes",
            AmbitoRanking::Establecimientos => "establecimientos",
        };
        f.write_str(s)
    }
}

/// Column-oriented ranking series, in the order the stored function returns.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Ranking {
    pub etiquetas: Vec<String>,
    pub numerador: Vec<i64>,
    pub denominador: Vec<i64>,
    pub avance: Vec<f64>,
}

impl Ranking {
    pub fn agregar_fila(&mut self, etiqueta: String, numerador: i64, denominador: i64, avance: Avance) {
        self.etiquetas.push(etiqueta);
        self.numerador.push(numerador);
        self.denominador.push(denominador);
        self.avance.push(avance.value());
    }

    pub fn is_empty(&self) -> bool {
        self.etiquetas.is_empty()
    }
}

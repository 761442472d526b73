//! Gauge widget payload (numerator / denominator / coverage).

use serde::Serialize;

use crate::domain::foundation::Avance;

/// Velocímetro payload. The frontend gauge expects single-element vectors,
/// a shape kept from the original charting contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Velocimetro {
    pub numerador: Vec<i64>,
    pub denominador: Vec<i64>,
    pub avance: Vec<f64>,
}

impl Velocimetro {
    /// Builds the payload from the single aggregate row the stored function
    /// returns.
    pub fn desde_fila(numerador: i64, denominador: i64, avance: Avance) -> Self {
        Self {
            numerador: vec![numerador],
            denominador: vec![denominador],
            avance: vec![avance.value()],
        }
    }
}

/// Zeroed shape substituted whenever the query degrades.
impl Default for Velocimetro {
    fn default() -> Self {
        Self::desde_fila(0, 0, Avance::ZERO)
    }
}

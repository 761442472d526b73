//! Avance value object (coverage percentage, 0-100+ scale).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coverage percentage (numerator / denominator x 100).
///
/// Unlike a plain percentage this can exceed 100 when captación surpasses the
/// programmed goal, so only negatives are clamped. Values are rounded to two
/// decimals, matching what the stored functions report.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Avance(f64);

impl Avance {
    /// Zero percent.
    pub const ZERO: Self = Self(0.0);

    /// Creates an Avance from a raw value, clamping negatives to zero.
    pub fn new(value: f64) -> Self {
        if value.is_finite() && value > 0.0 {
            Self(redondear(value))
        } else {
            Self::ZERO
        }
    }

    /// Computes coverage from a numerator/denominator pair.
    ///
    /// A zero denominator yields 0.0 rather than infinity.
    pub fn calcular(numerador: i64, denominador: i64) -> Self {
        if denominador == 0 {
            return Self::ZERO;
        }
        Self::new(numerador as f64 / denominador as f64 * 100.0)
    }

    /// Returns the value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }
}

fn redondear(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl Default for Avance {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Avance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.0)
    }
}

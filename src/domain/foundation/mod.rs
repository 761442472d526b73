//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects that form the vocabulary of the captación
//! dashboard: reporting year, month number and coverage percentage.

mod avance;
mod periodo;

pub use avance::Avance;
pub use periodo::{Anio, Mes, MesInvalido};

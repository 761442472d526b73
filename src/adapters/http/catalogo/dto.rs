//! HTTP DTOs for catalogo endpoints.
//!
//! The lookups are read-only and the domain rows are already designed for
//! serialization, so the responses reuse them directly.

pub use crate::domain::catalogo::{
    Actualizacion, ContextoFiltros, Distrito, Establecimiento, Microred, PeriodoMes, Provincia,
    Red,
};

use serde::Deserialize;

/// Query parameters for the year-scoped lookups (contexto, meses).
#[derive(Debug, Deserialize)]
pub struct AnioParams {
    pub anio: Option<String>,
}

/// Query parameters for the microredes dropdown.
#[derive(Debug, Deserialize)]
pub struct MicroredesParams {
    /// 4-character network code.
    pub red: String,
}

/// Query parameters for the facilities dropdown. All optional; the reader
/// narrows by whichever are present.
#[derive(Debug, Deserialize, Default)]
pub struct EstablecimientosParams {
    pub microred: Option<String>,
    pub red: Option<String>,
    pub ubigueo: Option<String>,
}

/// Query parameters for the districts dropdown.
#[derive(Debug, Deserialize)]
pub struct DistritosParams {
    /// 4-character ubigeo prefix of the province.
    pub provincia: String,
}

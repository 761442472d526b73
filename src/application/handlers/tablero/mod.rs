//! Tablero query handlers - one per dashboard widget.
//!
//! All of them apply the same policy on reader failure: log the incident and
//! answer the zeroed default shape instead of propagating, so the charts
//! always have something well-formed to draw.

mod get_mensualizado;
mod get_ranking;
mod get_seguimiento;
mod get_variables;
mod get_velocimetro;

pub use get_mensualizado::{GetMensualizadoHandler, GetMensualizadoQuery};
pub use get_ranking::{GetRankingHandler, GetRankingQuery};
pub use get_seguimiento::{GetSeguimientoHandler, GetSeguimientoQuery};
pub use get_variables::{
    GetVariablesDetalladoHandler, GetVariablesDetalladoQuery, GetVariablesHandler,
    GetVariablesQuery,
};
pub use get_velocimetro::{GetVelocimetroHandler, GetVelocimetroQuery};

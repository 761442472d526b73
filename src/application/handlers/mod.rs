//! Application handlers.
//!
//! One query handler per dashboard operation, each wrapping the reader port
//! it needs.

pub mod catalogo;
pub mod tablero;

pub use catalogo::{ContextoFiltrosHandler, ContextoFiltrosQuery};
pub use tablero::{
    GetMensualizadoHandler, GetMensualizadoQuery, GetRankingHandler, GetRankingQuery,
    GetSeguimientoHandler, GetSeguimientoQuery, GetVariablesDetalladoHandler,
    GetVariablesDetalladoQuery, GetVariablesHandler, GetVariablesQuery, GetVelocimetroHandler,
    GetVelocimetroQuery,
};

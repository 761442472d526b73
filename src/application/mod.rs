//! Application layer - query handlers.
//!
//! This layer orchestrates the reader ports per request. It is read-only
//! (the service never writes) and owns the uniform degrade policy: indicator
//! query failures are logged and replaced by the zeroed default shape so the
//! frontend always receives a well-shaped response.

pub mod handlers;

pub use handlers::{
    // Catalogo
    ContextoFiltrosHandler, ContextoFiltrosQuery,
    // Tablero
    GetMensualizadoHandler, GetMensualizadoQuery,
    GetRankingHandler, GetRankingQuery,
    GetSeguimientoHandler, GetSeguimientoQuery,
    GetVariablesDetalladoHandler, GetVariablesDetalladoQuery,
    GetVariablesHandler, GetVariablesQuery,
    GetVelocimetroHandler, GetVelocimetroQuery,
};

//! Catalogo HTTP adapter module.
//!
//! Dimension lookups behind the filter dropdowns.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::CatalogoAppState;
pub use routes::catalogo_routes;

//! Tablero HTTP adapter module.
//!
//! REST endpoints for the dashboard widgets.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::FiltroParams;
pub use handlers::TableroAppState;
pub use routes::tablero_routes;

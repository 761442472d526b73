//! HTTP adapters - REST API implementations.
//!
//! One slice per surface: catalogo lookups, tablero queries and the XLSX
//! report download. All of them share the error envelope in `error`.

pub mod catalogo;
pub mod error;
pub mod reportes;
pub mod tablero;

// Re-export key types for convenience
pub use catalogo::catalogo_routes;
pub use catalogo::CatalogoAppState;
pub use error::{ApiError, ErrorResponse};
pub use reportes::reportes_routes;
pub use reportes::ReportesAppState;
pub use tablero::tablero_routes;
pub use tablero::TableroAppState;

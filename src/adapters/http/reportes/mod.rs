//! Reportes HTTP adapter module.
//!
//! XLSX downloads built from the same queries the dashboard uses.

pub mod handlers;
pub mod routes;

pub use handlers::ReportesAppState;
pub use routes::reportes_routes;

//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `postgres` - Readers over the warehouse stored functions and dimensions
//! - `http` - REST surface for the dashboard frontend
//! - `excel` - XLSX report rendering

pub mod excel;
pub mod http;
pub mod postgres;

pub use postgres::{PostgresCatalogoReader, PostgresIndicadorReader};

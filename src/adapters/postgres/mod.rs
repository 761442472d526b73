//! PostgreSQL adapters - sqlx implementations of the reader ports.
//!
//! - `PostgresCatalogoReader` - dimension lookups over the facility master
//!   and period tables
//! - `PostgresIndicadorReader` - the eight stored-function indicator calls

mod catalogo_reader;
mod indicador_reader;

pub use catalogo_reader::PostgresCatalogoReader;
pub use indicador_reader::PostgresIndicadorReader;

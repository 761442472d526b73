//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between the
//! domain and the outside world. Adapters implement these ports.
//!
//! - `CatalogoReader` - dimension lookups for the cascading filter dropdowns
//! - `IndicadorReader` - the eight stored-function indicator queries

mod catalogo_reader;
mod indicador_reader;

pub use catalogo_reader::{CatalogoError, CatalogoReader};
pub use indicador_reader::{IndicadorError, IndicadorReader};

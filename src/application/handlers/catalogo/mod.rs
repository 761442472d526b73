//! Catalogo query handlers.

mod contexto_filtros;

pub use contexto_filtros::{ContextoFiltrosHandler, ContextoFiltrosQuery};

use async_trait::async_trait;

use crate::domain::catalogo::{
    Actualizacion, Distrito, Establecimiento, FiltroEstablecimientos, Microred, PeriodoMes,
    Provincia, Red,
};
use crate::domain::foundation::Anio;

/// Read-only port for the dimension lookups behind the filter dropdowns.
#[async_trait]
pub trait CatalogoReader: Send + Sync {
    /// Distinct health networks of the region.
    async fn listar_redes(&self) -> Result<Vec<Red>, CatalogoError>;

    /// Microredes belonging to one network.
    async fn listar_microredes(&self, codigo_red: &str) -> Result<Vec<Microred>, CatalogoError>;

    /// Facilities, optionally narrowed by microred, network or ubigeo prefix.
    async fn listar_establecimientos(
        &self,
        filtro: &FiltroEstablecimientos,
    ) -> Result<Vec<Establecimiento>, CatalogoError>;

    /// Distinct provinces of the region.
    async fn listar_provincias(&self) -> Result<Vec<Provincia>, CatalogoError>;

    /// Districts of one province (by 4-character ubigeo prefix).
    async fn listar_distritos(
        &self,
        ubigueo_provincia: &str,
    ) -> Result<Vec<Distrito>, CatalogoError>;

    /// Months with data loaded for a year, ordered numerically.
    async fn listar_meses(&self, anio: Anio) -> Result<Vec<PeriodoMes>, CatalogoError>;

    /// Most recent warehouse refresh, if any has been recorded.
    async fn ultima_actualizacion(&self) -> Result<Option<Actualizacion>, CatalogoError>;
}

/// Errors that can occur during dimension lookups.
#[derive(Debug, thiserror::Error)]
pub enum CatalogoError {
    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for CatalogoError {
    fn from(err: sqlx::Error) -> Self {
        CatalogoError::Database(err.to_string())
    }
}

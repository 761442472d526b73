//! ContextoFiltrosHandler - bundles everything the filter bar needs on load.
//!
//! One round of redes + provincias + meses plus the last warehouse refresh,
//! so the initial page render is a single request.

use std::sync::Arc;

use crate::domain::catalogo::ContextoFiltros;
use crate::domain::foundation::Anio;
use crate::ports::{CatalogoError, CatalogoReader};

/// Query for the initial filter context.
#[derive(Debug, Clone)]
pub struct ContextoFiltrosQuery {
    pub anio: Anio,
}

/// Handler that aggregates the dropdown sources for the initial page load.
pub struct ContextoFiltrosHandler {
    catalogo: Arc<dyn CatalogoReader>,
}

impl ContextoFiltrosHandler {
    pub fn new(catalogo: Arc<dyn CatalogoReader>) -> Self {
        Self { catalogo }
    }

    pub async fn handle(
        &self,
        query: ContextoFiltrosQuery,
    ) -> Result<ContextoFiltros, CatalogoError> {
        let redes = self.catalogo.listar_redes().await?;
        let provincias = self.catalogo.listar_provincias().await?;
        let meses = self.catalogo.listar_meses(query.anio).await?;

        // The refresh banner is cosmetic; its absence must not block the page.
        let actualizacion = match self.catalogo.ultima_actualizacion().await {
            Ok(actualizacion) => actualizacion,
            Err(err) => {
                tracing::warn!(%err, "no se pudo leer la ultima actualizacion");
                None
            }
        };

        Ok(ContextoFiltros {
            redes,
            provincias,
            meses,
            actualizacion,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalogo::{
        Actualizacion, Distrito, Establecimiento, FiltroEstablecimientos, Microred, PeriodoMes,
        Provincia, Red,
    };
    use async_trait::async_trait;

    struct MockCatalogoReader {
        falla_actualizacion: bool,
    }

    #[async_trait]
    impl CatalogoReader for MockCatalogoReader {
        async fn listar_redes(&self) -> Result<Vec<Red>, CatalogoError> {
            Ok(vec![Red {
                red: "RED JAUJA".to_string(),
                codigo_red: "1202".to_string(),
            }])
        }

        async fn listar_microredes(
            &self,
            _codigo_red: &str,
        ) -> Result<Vec<Microred>, CatalogoError> {
            Ok(vec![])
        }

        async fn listar_establecimientos(
            &self,
            _filtro: &FiltroEstablecimientos,
        ) -> Result<Vec<Establecimiento>, CatalogoError> {
            Ok(vec![])
        }

        async fn listar_provincias(&self) -> Result<Vec<Provincia>, CatalogoError> {
            Ok(vec![Provincia {
                provincia: "JAUJA".to_string(),
                ubigueo: "1204".to_string(),
            }])
        }

        async fn listar_distritos(
            &self,
            _ubigueo_provincia: &str,
        ) -> Result<Vec<Distrito>, CatalogoError> {
            Ok(vec![])
        }

        async fn listar_meses(&self, _anio: Anio) -> Result<Vec<PeriodoMes>, CatalogoError> {
            Ok(vec![PeriodoMes {
                mes: "Enero".to_string(),
                nro_mes: 1,
            }])
        }

        async fn ultima_actualizacion(&self) -> Result<Option<Actualizacion>, CatalogoError> {
            if self.falla_actualizacion {
                Err(CatalogoError::Database("timeout".to_string()))
            } else {
                Ok(None)
            }
        }
    }

    #[tokio::test]
    async fn test_contexto_bundles_all_sources() {
        let handler = ContextoFiltrosHandler::new(Arc::new(MockCatalogoReader {
            falla_actualizacion: false,
        }));

        let contexto = handler
            .handle(ContextoFiltrosQuery {
                anio: Anio::default(),
            })
            .await
            .unwrap();

        assert_eq!(contexto.redes.len(), 1);
        assert_eq!(contexto.provincias.len(), 1);
        assert_eq!(contexto.meses.len(), 1);
    }

    #[tokio::test]
    async fn test_actualizacion_failure_does_not_block_context() {
        let handler = ContextoFiltrosHandler::new(Arc::new(MockCatalogoReader {
            falla_actualizacion: true,
        }));

        let contexto = handler
            .handle(ContextoFiltrosQuery {
                anio: Anio::default(),
            })
            .await
            .unwrap();

        assert!(contexto.actualizacion.is_none());
        assert_eq!(contexto.redes.len(), 1);
    }
}

//! GetRankingHandler - query handler for the three territorial bar rankings.
//!
//! Redes, microredes and establecimientos share the shape and the policy;
//! the ambito selects which stored function the reader runs.

use std::sync::Arc;

use crate::domain::indicadores::{AmbitoRanking, FiltroIndicador, Ranking};
use crate::ports::IndicadorReader;

#[derive(Debug, Clone)]
pub struct GetRankingQuery {
    pub ambito: AmbitoRanking,
    pub filtro: FiltroIndicador,
}

pub struct GetRankingHandler {
    indicadores: Arc<dyn IndicadorReader>,
}

impl GetRankingHandler {
    pub fn new(indicadores: Arc<dyn IndicadorReader>) -> Self {
        Self { indicadores }
    }

    pub async fn handle(&self, query: GetRankingQuery) -> Ranking {
        match self
            .indicadores
            .ranking(query.ambito, &query.filtro)
            .await
        {
            Ok(ranking) => ranking,
            Err(err) => {
                tracing::error!(
                    %err,
                    ambito = %query.ambito,
                    anio = %query.filtro.anio,
                    "ranking degradado a serie vacia"
                );
                Ranking::default()
            }
        }
    }
}

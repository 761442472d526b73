//! PostgreSQL implementation of IndicadorReader.
//!
//! Each method calls one stored function with the same eight positional text
//! arguments and reshapes the rows into the column-oriented payloads. Column
//! order is the contract; values are extracted defensively because the
//! functions live outside this codebase and may return NULLs.

use async_trait::async_trait;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::Query;
use sqlx::{PgPool, Postgres, Row};

use crate::domain::foundation::Avance;
use crate::domain::indicadores::{
    AmbitoRanking, FiltroIndicador, GraficoMensualizado, Ranking, SeguimientoFila,
    VariableDetalleFila, VariablesTrimestrales, Velocimetro,
};
use crate::ports::{IndicadorError, IndicadorReader};

const SQL_VELOCIMETRO: &str = "SELECT * FROM fn_obtener_velocimetro($1, $2, $3, $4, $5, $6, $7, $8)";
const SQL_MENSUALIZADO: &str = "SELECT * FROM fn_grafico_mensualizado($1, $2, $3, $4, $5, $6, $7, $8)";
const SQL_VARIABLES: &str = "SELECT * FROM fn_obtener_variables($1, $2, $3, $4, $5, $6, $7, $8)";
const SQL_VARIABLES_DETALLADO: &str =
    "SELECT * FROM fn_obtener_variables_detallado($1, $2, $3, $4, $5, $6, $7, $8)";
const SQL_RANKING_REDES: &str = "SELECT * FROM fn_grafico_redes($1, $2, $3, $4, $5, $6, $7, $8)";
const SQL_RANKING_MICROREDES: &str =
    "SELECT * FROM fn_grafico_microredes($1, $2, $3, $4, $5, $6, $7, $8)";
const SQL_RANKING_ESTABLECIMIENTOS: &str =
    "SELECT * FROM fn_grafico_establecimientos($1, $2, $3, $4, $5, $6, $7, $8)";
const SQL_SEGUIMIENTO: &str =
    "SELECT * FROM fn_seguimiento_s11_captacion_gestante($1, $2, $3, $4, $5, $6, $7, $8)";

/// PostgreSQL implementation of IndicadorReader.
#[derive(Clone)]
pub struct PostgresIndicadorReader {
    pool: PgPool,
}

impl PostgresIndicadorReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Binds the eight positional filter arguments in call order. All are
    /// text; unset filters become SQL NULL.
    fn consulta<'q>(
        sql: &'q str,
        filtro: &FiltroIndicador,
    ) -> Query<'q, Postgres, PgArguments> {
        sqlx::query(sql)
            .bind(filtro.anio.to_string())
            .bind(filtro.mes_inicio.map(|m| m.numero().to_string()))
            .bind(filtro.mes_fin.map(|m| m.numero().to_string()))
            .bind(filtro.red.clone())
            .bind(filtro.microred.clone())
            .bind(filtro.establecimiento.clone())
            .bind(filtro.provincia.clone())
            .bind(filtro.distrito.clone())
    }
}

#[async_trait]
impl IndicadorReader for PostgresIndicadorReader {
    async fn velocimetro(&self, filtro: &FiltroIndicador) -> Result<Velocimetro, IndicadorError> {
        let fila = Self::consulta(SQL_VELOCIMETRO, filtro)
            .fetch_optional(&self.pool)
            .await?;

        match fila {
            Some(fila) => Ok(Velocimetro::desde_fila(
                entero(&fila, 0),
                entero(&fila, 1),
                Avance::new(decimal(&fila, 2)),
            )),
            None => {
                // The aggregation always yields one row; an empty result
                // means the warehouse has nothing loaded for the filter.
                tracing::warn!(anio = %filtro.anio, "velocimetro sin datos, se responde en cero");
                Ok(Velocimetro::default())
            }
        }
    }

    async fn grafico_mensualizado(
        &self,
        filtro: &FiltroIndicador,
    ) -> Result<GraficoMensualizado, IndicadorError> {
        let filas = Self::consulta(SQL_MENSUALIZADO, filtro)
            .fetch_all(&self.pool)
            .await?;

        let mut grafico = GraficoMensualizado::default();
        for fila in &filas {
            grafico.agregar_fila(
                texto(fila, 0),
                entero(fila, 1),
                entero(fila, 2),
                Avance::new(decimal(fila, 3)),
            );
        }
        Ok(grafico)
    }

    async fn variables(
        &self,
        filtro: &FiltroIndicador,
    ) -> Result<VariablesTrimestrales, IndicadorError> {
        let filas = Self::consulta(SQL_VARIABLES, filtro)
            .fetch_all(&self.pool)
            .await?;

        let mut variables = VariablesTrimestrales::default();
        for fila in &filas {
            variables.agregar_fila(
                texto(fila, 0),
                entero(fila, 1),
                entero(fila, 2),
                Avance::new(decimal(fila, 3)),
            );
        }
        Ok(variables)
    }

    async fn variables_detallado(
        &self,
        filtro: &FiltroIndicador,
    ) -> Result<Vec<VariableDetalleFila>, IndicadorError> {
        let filas = Self::consulta(SQL_VARIABLES_DETALLADO, filtro)
            .fetch_all(&self.pool)
            .await?;

        Ok(filas
            .iter()
            .map(|fila| VariableDetalleFila {
                variable: texto(fila, 0),
                mes: texto(fila, 1),
                valor: entero(fila, 2),
            })
            .collect())
    }

    async fn ranking(
        &self,
        ambito: AmbitoRanking,
        filtro: &FiltroIndicador,
    ) -> Result<Ranking, IndicadorError> {
        let sql = match ambito {
            AmbitoRanking::Redes => SQL_RANKING_REDES,
            AmbitoRanking::Microredes => SQL_RANKING_MICROREDES,
            AmbitoRanking::Establecimientos => SQL_RANKING_ESTABLECIMIENTOS,
        };

        let filas = Self::consulta(sql, filtro).fetch_all(&self.pool).await?;

        let mut ranking = Ranking::default();
        for fila in &filas {
            ranking.agregar_fila(
                texto(fila, 0),
                entero(fila, 1),
                entero(fila, 2),
                Avance::new(decimal(fila, 3)),
            );
        }
        Ok(ranking)
    }

    async fn seguimiento(
        &self,
        filtro: &FiltroIndicador,
    ) -> Result<Vec<SeguimientoFila>, IndicadorError> {
        let filas = Self::consulta(SQL_SEGUIMIENTO, filtro)
            .fetch_all(&self.pool)
            .await?;

        Ok(filas
            .iter()
            .map(|fila| SeguimientoFila {
                red: texto(fila, 0),
                microred: texto(fila, 1),
                establecimiento: texto(fila, 2),
                numerador: entero(fila, 3),
                denominador: entero(fila, 4),
                avance: Avance::new(decimal(fila, 5)).value(),
            })
            .collect())
    }
}

// Defensive positional extraction: NULLs and unexpected types degrade to the
// zero value instead of aborting the whole payload.

fn entero(fila: &PgRow, indice: usize) -> i64 {
    fila.try_get::<Option<i64>, _>(indice)
        .ok()
        .flatten()
        .unwrap_or(0)
}

fn decimal(fila: &PgRow, indice: usize) -> f64 {
    fila.try_get::<Option<f64>, _>(indice)
        .ok()
        .flatten()
        .unwrap_or(0.0)
}

fn texto(fila: &PgRow, indice: usize) -> String {
    fila.try_get::<Option<String>, _>(indice)
        .ok()
        .flatten()
        .unwrap_or_default()
}

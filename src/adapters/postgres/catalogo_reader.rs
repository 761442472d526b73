//! PostgreSQL implementation of CatalogoReader.
//!
//! Dimension lookups over `maestro_his_establecimiento` and `dim_periodo`.
//! Every query is `DISTINCT ... ORDER BY` name, restricted to the regional
//! government sector, matching how the dropdowns have always been populated.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder, Row};

use crate::domain::catalogo::{
    Actualizacion, Distrito, Establecimiento, FiltroEstablecimientos, Microred, PeriodoMes,
    Provincia, Red,
};
use crate::domain::foundation::Anio;
use crate::ports::{CatalogoError, CatalogoReader};

/// Only facilities run by the regional government are listed.
const SECTOR_GOBIERNO_REGIONAL: &str = "GOBIERNO REGIONAL";

/// Health directorate this deployment serves.
const DISA_JUNIN: &str = "JUNIN";

/// Network and province codes are the first 4 characters of the full code.
const LARGO_PREFIJO: i32 = 4;

/// PostgreSQL implementation of CatalogoReader.
#[derive(Clone)]
pub struct PostgresCatalogoReader {
    pool: PgPool,
}

impl PostgresCatalogoReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogoReader for PostgresCatalogoReader {
    async fn listar_redes(&self) -> Result<Vec<Red>, CatalogoError> {
        let rows = sqlx::query(
            r#"
            SELECT DISTINCT red, substr(codigo_red, 1, $3) AS codigo_red
            FROM maestro_his_establecimiento
            WHERE descripcion_sector = $1 AND disa = $2
            ORDER BY red
            "#,
        )
        .bind(SECTOR_GOBIERNO_REGIONAL)
        .bind(DISA_JUNIN)
        .bind(LARGO_PREFIJO)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| Red {
                red: row.get("red"),
                codigo_red: row.get("codigo_red"),
            })
            .collect())
    }

    async fn listar_microredes(&self, codigo_red: &str) -> Result<Vec<Microred>, CatalogoError> {
        let rows = sqlx::query(
            r#"
            SELECT DISTINCT microred, codigo_microred
            FROM maestro_his_establecimiento
            WHERE descripcion_sector = $1 AND disa = $2 AND codigo_red = $3
            ORDER BY microred
            "#,
        )
        .bind(SECTOR_GOBIERNO_REGIONAL)
        .bind(DISA_JUNIN)
        .bind(codigo_red)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| Microred {
                microred: row.get("microred"),
                codigo_microred: row.get("codigo_microred"),
            })
            .collect())
    }

    async fn listar_establecimientos(
        &self,
        filtro: &FiltroEstablecimientos,
    ) -> Result<Vec<Establecimiento>, CatalogoError> {
        let mut consulta = QueryBuilder::<Postgres>::new(
            "SELECT DISTINCT codigo_unico, nombre_establecimiento \
             FROM maestro_his_establecimiento \
             WHERE descripcion_sector = ",
        );
        consulta.push_bind(SECTOR_GOBIERNO_REGIONAL);
        consulta.push(" AND disa = ");
        consulta.push_bind(DISA_JUNIN);

        if let Some(codigo_microred) = &filtro.codigo_microred {
            consulta.push(" AND codigo_microred = ");
            consulta.push_bind(codigo_microred.clone());
        }
        if let Some(codigo_red) = &filtro.codigo_red {
            consulta.push(" AND codigo_red LIKE ");
            consulta.push_bind(format!("{codigo_red}%"));
        }
        if let Some(ubigueo) = &filtro.ubigueo {
            consulta.push(" AND ubigueo_establecimiento LIKE ");
            consulta.push_bind(format!("{ubigueo}%"));
        }
        consulta.push(" ORDER BY nombre_establecimiento");

        let rows = consulta.build().fetch_all(&self.pool).await?;

        Ok(rows
            .into_iter()
            .map(|row| Establecimiento {
                codigo_unico: row.get("codigo_unico"),
                nombre_establecimiento: row.get("nombre_establecimiento"),
            })
            .collect())
    }

    async fn listar_provincias(&self) -> Result<Vec<Provincia>, CatalogoError> {
        let rows = sqlx::query(
            r#"
            SELECT DISTINCT provincia, substr(ubigueo_establecimiento, 1, $2) AS ubigueo
            FROM maestro_his_establecimiento
            WHERE descripcion_sector = $1
            ORDER BY provincia
            "#,
        )
        .bind(SECTOR_GOBIERNO_REGIONAL)
        .bind(LARGO_PREFIJO)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| Provincia {
                provincia: row.get("provincia"),
                ubigueo: row.get("ubigueo"),
            })
            .collect())
    }

    async fn listar_distritos(
        &self,
        ubigueo_provincia: &str,
    ) -> Result<Vec<Distrito>, CatalogoError> {
        let rows = sqlx::query(
            r#"
            SELECT DISTINCT distrito, ubigueo_establecimiento AS ubigueo
            FROM maestro_his_establecimiento
            WHERE descripcion_sector = $1 AND ubigueo_establecimiento LIKE $2
            ORDER BY distrito
            "#,
        )
        .bind(SECTOR_GOBIERNO_REGIONAL)
        .bind(format!("{ubigueo_provincia}%"))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| Distrito {
                distrito: row.get("distrito"),
                ubigueo: row.get("ubigueo"),
            })
            .collect())
    }

    async fn listar_meses(&self, anio: Anio) -> Result<Vec<PeriodoMes>, CatalogoError> {
        // nro_mes is stored as text in the period dimension.
        let rows = sqlx::query(
            r#"
            SELECT DISTINCT mes, CAST(nro_mes AS integer) AS nro_mes
            FROM dim_periodo
            WHERE anio = $1
            ORDER BY nro_mes
            "#,
        )
        .bind(anio.to_string())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| PeriodoMes {
                mes: row.get("mes"),
                nro_mes: row.get("nro_mes"),
            })
            .collect())
    }

    async fn ultima_actualizacion(&self) -> Result<Option<Actualizacion>, CatalogoError> {
        let row = sqlx::query(
            r#"
            SELECT fecha_actualizacion, descripcion
            FROM actualizacion
            ORDER BY fecha_actualizacion DESC
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| Actualizacion {
            fecha: row.get("fecha_actualizacion"),
            descripcion: row.get("descripcion"),
        }))
    }
}

//! Dimension rows for the cascading filter dropdowns.
//!
//! Every type here is a read-only projection of the facility master
//! (`maestro_his_establecimiento`) or the period dimension (`dim_periodo`);
//! nothing is mutated by this service.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Health network (red) dropdown entry. The code is the 4-character prefix of
/// `codigo_red`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Red {
    pub red: String,
    pub codigo_red: String,
}

/// Microred dropdown entry, scoped to a network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Microred {
    pub microred: String,
    pub codigo_microred: String,
}

/// Health facility dropdown entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Establecimiento {
    pub codigo_unico: String,
    pub nombre_establecimiento: String,
}

/// Province dropdown entry. The code is the 4-character ubigeo prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Provincia {
    pub provincia: String,
    pub ubigueo: String,
}

/// District dropdown entry, scoped to a province.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Distrito {
    pub distrito: String,
    pub ubigueo: String,
}

/// Month available for a reporting year, ordered by `nro_mes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodoMes {
    pub mes: String,
    pub nro_mes: i32,
}

/// Last warehouse refresh, shown on the dashboard header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Actualizacion {
    pub fecha: DateTime<Utc>,
    pub descripcion: String,
}

/// Optional filters for the facility dropdown. `codigo_red` and `ubigueo`
/// match by prefix, `codigo_microred` matches exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FiltroEstablecimientos {
    pub codigo_microred: Option<String>,
    pub codigo_red: Option<String>,
    pub ubigueo: Option<String>,
}

/// Everything the initial page load needs to draw the filter bar.
#[derive(Debug, Clone, Serialize)]
pub struct ContextoFiltros {
    pub redes: Vec<Red>,
    pub provincias: Vec<Provincia>,
    pub meses: Vec<PeriodoMes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actualizacion: Option<Actualizacion>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contexto_serializes_without_missing_actualizacion() {
        let contexto = ContextoFiltros {
            redes: vec![Red {
                red: "RED VALLE DEL MANTARO".to_string(),
                codigo_red: "1201".to_string(),
            }],
            provincias: vec![],
            meses: vec![PeriodoMes {
                mes: "Enero".to_string(),
                nro_mes: 1,
            }],
            actualizacion: None,
        };

        let json = serde_json::to_value(&contexto).unwrap();
        assert!(json.get("actualizacion").is_none());
        assert_eq!(json["redes"][0]["codigo_red"], "1201");
        assert_eq!(json["meses"][0]["nro_mes"], 1);
    }
}

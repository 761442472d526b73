//! Reporting period primitives (year and month).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Years with data loaded in the warehouse.
const ANIOS_VALIDOS: [u16; 3] = [2024, 2025, 2026];

/// Year currently reported by default.
const ANIO_DEFECTO: u16 = 2025;

/// Reporting year, restricted to the range loaded in the warehouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Anio(u16);

impl Anio {
    /// Parses a year parameter the way the dashboard always has: anything
    /// outside the loaded range silently falls back to the current default.
    pub fn parse(valor: Option<&str>) -> Self {
        valor
            .and_then(|s| s.trim().parse::<u16>().ok())
            .filter(|a| ANIOS_VALIDOS.contains(a))
            .map(Self)
            .unwrap_or_default()
    }

    pub fn value(&self) -> u16 {
        self.0
    }
}

impl Default for Anio {
    fn default() -> Self {
        Self(ANIO_DEFECTO)
    }
}

impl fmt::Display for Anio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Month number (1-12).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mes(u8);

impl Mes {
    /// Creates a Mes, rejecting anything outside 1-12.
    pub fn try_new(numero: u8) -> Result<Self, MesInvalido> {
        if (1..=12).contains(&numero) {
            Ok(Self(numero))
        } else {
            Err(MesInvalido(numero.to_string()))
        }
    }

    /// Parses a month query parameter. Empty strings count as absent.
    pub fn parse_opcional(valor: Option<&str>) -> Result<Option<Self>, MesInvalido> {
        match valor.map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => s
                .parse::<u8>()
                .map_err(|_| MesInvalido(s.to_string()))
                .and_then(Self::try_new)
                .map(Some),
        }
    }

    pub fn numero(&self) -> u8 {
        self.0
    }

    /// Month name as shown on report headers.
    pub fn nombre(&self) -> &'static str {
        const NOMBRES: [&str; 12] = [
            "ENERO",
            "FEBRERO",
            "MARZO",
            "ABRIL",
            "MAYO",
            "JUNIO",
            "JULIO",
            "AGOSTO",
            "SETIEMBRE",
            "OCTUBRE",
            "NOVIEMBRE",
            "DICIEMBRE",
        ];
        NOMBRES[(self.0 - 1) as usize]
    }
}

impl fmt::Display for Mes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rejected month parameter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Mes fuera de rango (1-12): {0}")]
pub struct MesInvalido(pub String);

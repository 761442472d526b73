//! Nominal follow-up listing and its three-level grouping.
//!
//! `fn_seguimiento_s11_captacion_gestante` returns one flat row per facility.
//! The collapsible table and the XLSX report both consume the grouped form:
//! red -> microred -> establecimiento, with subtotals summed at each level and
//! coverage recomputed from the summed numerator/denominator (subtotal
//! coverage is never the average of child coverages).

use serde::Serialize;

use crate::domain::foundation::Avance;

/// Flat facility row as returned by the stored function.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeguimientoFila {
    pub red: String,
    pub microred: String,
    pub establecimiento: String,
    pub numerador: i64,
    pub denominador: i64,
    pub avance: f64,
}

/// Leaf level: one facility.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodoEstablecimiento {
    pub nombre: String,
    pub numerador: i64,
    pub denominador: i64,
    pub avance: f64,
}

/// Middle level: one microred with its facilities.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodoMicrored {
    pub nombre: String,
    pub numerador: i64,
    pub denominador: i64,
    pub avance: f64,
    pub establecimientos: Vec<NodoEstablecimiento>,
}

/// Top level: one red with its microredes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodoRed {
    pub nombre: String,
    pub numerador: i64,
    pub denominador: i64,
    pub avance: f64,
    pub microredes: Vec<NodoMicrored>,
}

/// Grouped follow-up payload plus the grand total.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Seguimiento {
    pub redes: Vec<NodoRed>,
    pub total_numerador: i64,
    pub total_denominador: i64,
    pub total_avance: f64,
}

/// Groups flat rows into the three-level hierarchy, preserving first-seen
/// order at every level (the stored function already sorts the listing).
pub fn agrupar_seguimiento(filas: &[SeguimientoFila]) -> Seguimiento {
    let mut redes: Vec<NodoRed> = Vec::new();

    for fila in filas {
        let red = match redes.iter_mut().find(|r| r.nombre == fila.red) {
            Some(red) => red,
            None => {
                redes.push(NodoRed {
                    nombre: fila.red.clone(),
                    numerador: 0,
                    denominador: 0,
                    avance: 0.0,
                    microredes: Vec::new(),
                });
                redes.last_mut().expect("recien insertado")
            }
        };
        red.numerador += fila.numerador;
        red.denominador += fila.denominador;

        let microred = match red
            .microredes
            .iter_mut()
            .find(|m| m.nombre == fila.microred)
        {
            Some(microred) => microred,
            None => {
                red.microredes.push(NodoMicrored {
                    nombre: fila.microred.clone(),
                    numerador: 0,
                    denominador: 0,
                    avance: 0.0,
                    establecimientos: Vec::new(),
                });
                red.microredes.last_mut().expect("recien insertado")
            }
        };
        microred.numerador += fila.numerador;
        microred.denominador += fila.denominador;

        microred.establecimientos.push(NodoEstablecimiento {
            nombre: fila.establecimiento.clone(),
            numerador: fila.numerador,
            denominador: fila.denominador,
            avance: fila.avance,
        });
    }

    let mut total_numerador = 0;
    let mut total_denominador = 0;
    for red in &mut redes {
        for microred in &mut red.microredes {
            microred.avance = Avance::calcular(microred.numerador, microred.denominador).value();
        }
        red.avance = Avance::calcular(red.numerador, red.denominador).value();
        total_numerador += red.numerador;
        total_denominador += red.denominador;
    }

    Seguimiento {
        redes,
        total_numerador,
        total_denominador,
        total_avance: Avance::calcular(total_numerador, total_denominador).value(),
    }
}

//! Column-oriented indicator payloads.
//!
//! Each stored function returns positional rows; these types are the
//! JSON-friendly struct-of-vectors shapes the charting frontend consumes,
//! together with their zeroed defaults. The invariant throughout: all vectors
//! of one payload have equal length.

mod filtro;
mod mensualizado;
mod ranking;
mod seguimiento;
mod variables;
mod velocimetro;

pub use filtro::FiltroIndicador;
pub use mensualizado::GraficoMensualizado;
pub use ranking::{AmbitoRanking, Ranking};
pub use seguimiento::{
    agrupar_seguimiento, NodoEstablecimiento, NodoMicrored, NodoRed, Seguimiento, SeguimientoFila,
};
pub use variables::{VariableDetalleFila, VariablesTrimestrales};
pub use velocimetro::Velocimetro;

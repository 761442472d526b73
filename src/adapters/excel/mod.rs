//! Excel adapters - XLSX report rendering.

pub mod reporte_seguimiento;

pub use reporte_seguimiento::{generar_reporte_seguimiento, ExcelError};

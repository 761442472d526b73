//! Domain layer containing the indicator vocabulary and payload shapes.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (year, month, coverage percentage)
//! - `catalogo` - Dimension rows used to populate the cascading filter dropdowns
//! - `indicadores` - Column-oriented metric payloads and the follow-up grouping

pub mod catalogo;
pub mod foundation;
pub mod indicadores;

//! Tablero de captación de gestantes - DIRESA Junín
//!
//! This crate exposes the regional maternal-health captación indicators as a
//! JSON API for the charting frontend, plus formatted XLSX report exports.
//! All aggregation runs inside PostgreSQL stored functions; this service is
//! the marshalling and presentation layer.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

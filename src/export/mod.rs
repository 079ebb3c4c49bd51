//! Export module for budget-projector
//!
//! Writes a computed projection in multiple formats:
//! - CSV: one row per month (spreadsheet-compatible)
//! - JSON: machine-readable projection with its inputs
//! - YAML: human-readable projection with its inputs

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::{export_projection_csv, CSV_HEADER};
pub use json::{export_projection_json, ProjectionExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_projection_yaml;

//! Tabular input and geometry extraction for the tabgeo engine.
//!
//! Responsibilities:
//! - Model column-oriented input where every column is identified by a role.
//! - Load datasets from JSON files.
//! - Classify each row by its type label and build validated geometry records.
//!
//! Boundaries:
//! - Geometry types, decoding and color rules live in `tabgeo-core`.
//! - Rendering, selection state and host integration are left to callers.
//!
//! Invariants:
//! - Row failures never abort a pass; they become diagnostics.
//! - No global mutable state. The decode cache is passed in by the caller.

#![forbid(unsafe_code)]

pub mod extract;
pub mod table;

pub use extract::{
    DEFAULT_PRECISION, Diagnostics, ExtractionReport, ExtractionSettings, MAX_PRECISION,
    RowDiagnostic, RowError, RowSelection, SURFACED_LIMIT, SelectionId, SelectionIdBuilder,
    SettingsError, TypeLabels, WARNING_TEXT_LIMIT, extract_geometries, extract_geometries_with,
};
pub use table::{
    CellValue, Column, ColumnRole, LoadTableError, Table, TableBuilder, load_table,
};

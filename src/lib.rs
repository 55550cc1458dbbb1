//! Facade crate for the tabgeo geometry extraction engine.
//!
//! This crate re-exports the core geometry, color and decoding types, and
//! exposes tabular input and extraction behind the `data` feature.

#![forbid(unsafe_code)]

pub use tabgeo_core::{
    ArcProperties, DecodeCache, FillProperties, Geometry, GeometryKind, GeometryRecord, LineData,
    PathData, Point, PolygonData, PolygonProperties, Rgba, Ring, ScatterData, ScatterProperties,
    StrokeProperties, bounds, close_ring, decode_floats, decode_floats_with_cache, decode_hex,
    encode_floats, with_opacity,
};

#[cfg(feature = "data")]
pub use tabgeo_data::{
    CellValue, ColumnRole, Diagnostics, ExtractionReport, ExtractionSettings, LoadTableError,
    RowError, SelectionId, SelectionIdBuilder, Table, TypeLabels, extract_geometries,
    extract_geometries_with, load_table,
};

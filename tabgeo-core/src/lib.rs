//! Core domain types for the tabgeo engine.
//!
//! The crate holds everything that does not touch tabular input: the typed
//! geometry records handed to renderers, the hex color codec used to resolve
//! per-row style overrides, and the compressed-coordinate decoder used for
//! path and polygon rows.
//!
//! Invariants:
//! - Coordinates are WGS84 degrees; conversions into `geo` use
//!   `x = longitude`, `y = latitude`.
//! - No I/O and no global mutable state. The decode cache is owned by the
//!   caller and passed explicitly.

#![forbid(unsafe_code)]

pub mod color;
pub mod geometry;
pub mod kind;
pub mod point;
pub mod polyline;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use color::{Rgba, decode_hex, with_opacity};
pub use geometry::{
    ArcProperties, FillProperties, Geometry, GeometryRecord, LineData, LineProperties, PathData,
    PathProperties, PolygonData, PolygonProperties, Ring, ScatterData, ScatterProperties,
    StrokeProperties, bounds, close_ring,
};
pub use kind::{GeometryKind, UnknownGeometryKind};
pub use point::{Point, PointError, valid_latitude, valid_longitude};
pub use polyline::{
    DecodeCache, RejectedTuple, Tuple, TupleRejection, decode_floats, decode_floats_inspect,
    decode_floats_with_cache, encode_floats,
};

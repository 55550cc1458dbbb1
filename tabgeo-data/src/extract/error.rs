//! Row-local extraction errors and settings validation errors.

use tabgeo_core::GeometryKind;
use thiserror::Error;

use super::settings::MAX_PRECISION;
use crate::ColumnRole;

/// Why a row produced no geometry, or lost part of it.
///
/// Every variant is local to one row; a pass never stops on these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    /// The type label matched none of the configured labels.
    #[error("invalid geometry type {label:?}")]
    UnknownType {
        /// The raw label found in the row.
        label: String,
    },
    /// A column the matched kind needs is absent from the table.
    #[error("{} (missing {})", missing_reason(.kind), role_list(.missing))]
    MissingColumns {
        /// Kind the row was classified as.
        kind: GeometryKind,
        /// Required roles absent from the table.
        missing: Vec<ColumnRole>,
    },
    /// A coordinate was missing, non-finite or outside its valid range.
    #[error("{}", range_reason(.kind))]
    OutOfRange {
        /// Kind the row was classified as.
        kind: GeometryKind,
    },
    /// One compressed-coordinate segment decoded to nothing.
    #[error("invalid decoded line coordinates in segment {segment}")]
    EmptySegment {
        /// Zero-based position of the segment within the cell.
        segment: usize,
    },
    /// No compressed-coordinate segment survived decoding.
    #[error("no linestrings found")]
    NoSegments,
}

impl RowError {
    /// Report whether this error dropped the whole row.
    ///
    /// [`RowError::EmptySegment`] only drops one segment.
    #[must_use]
    pub const fn rejects_row(&self) -> bool {
        !matches!(self, Self::EmptySegment { .. })
    }
}

fn missing_reason(kind: &GeometryKind) -> &'static str {
    match kind {
        GeometryKind::Scatter => "invalid point coordinates",
        GeometryKind::Line | GeometryKind::Arc => {
            "invalid line/arc coordinates (need point1 and point2 lat and lon)"
        }
        GeometryKind::Path | GeometryKind::Polygon => "invalid line/polygon coordinates",
    }
}

fn range_reason(kind: &GeometryKind) -> &'static str {
    match kind {
        GeometryKind::Scatter => "invalid point coordinates (lat or lon out of range)",
        GeometryKind::Line | GeometryKind::Arc => {
            "invalid line/arc coordinates (lat or lon out of range)"
        }
        GeometryKind::Path | GeometryKind::Polygon => {
            "invalid line/polygon coordinates (one or more coordinates out of range)"
        }
    }
}

fn role_list(roles: &[ColumnRole]) -> String {
    roles
        .iter()
        .map(|role| role.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Invalid [`super::ExtractionSettings`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// Precision exceeds the supported number of decimal digits.
    #[error("precision {precision} exceeds the maximum of {max}", max = MAX_PRECISION)]
    PrecisionOutOfRange {
        /// Rejected precision.
        precision: u8,
    },
}

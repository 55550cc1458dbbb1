//! Geometry kinds understood by the extractor.
//!
//! Declaration order doubles as the tie-break order when two configured
//! type labels collide.
//!
//! # Examples
//! ```
//! use tabgeo_core::GeometryKind;
//!
//! assert_eq!(GeometryKind::Polygon.as_str(), "polygon");
//! assert_eq!("ARC".parse::<GeometryKind>(), Ok(GeometryKind::Arc));
//! ```
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The five supported geometry kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GeometryKind {
    /// A single point with an optional radius.
    Scatter,
    /// A straight segment between two points.
    Line,
    /// A great-circle style arc between two points.
    Arc,
    /// An open polyline.
    Path,
    /// One or more closed rings.
    Polygon,
}

/// Error returned when parsing an unrecognised kind name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown geometry kind '{0}'")]
pub struct UnknownGeometryKind(pub String);

impl GeometryKind {
    /// Every kind in tie-break order.
    pub const ALL: [Self; 5] = [
        Self::Scatter,
        Self::Line,
        Self::Arc,
        Self::Path,
        Self::Polygon,
    ];

    /// Return the kind as its lowercase default label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scatter => "scatter",
            Self::Line => "line",
            Self::Arc => "arc",
            Self::Path => "path",
            Self::Polygon => "polygon",
        }
    }
}

impl std::fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for GeometryKind {
    type Err = UnknownGeometryKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalised)
            .ok_or_else(|| UnknownGeometryKind(s.to_owned()))
    }
}

//! Typed geometry records produced by extraction.
//!
//! A [`GeometryRecord`] carries exactly one [`Geometry`] variant, and each
//! variant pairs a payload with the property bag for that kind. The kind of a
//! record is derived from the variant, so a record can never hold another
//! kind's payload.
//!
//! Property fields are all optional: `None` means "use the type-level
//! default" configured by the renderer.

use geo::{Coord, Rect};
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{GeometryKind, Point};

/// Scatter payload: one position and an optional radius.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ScatterData {
    /// Marker position.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub point: Point,
    /// Radius in meters.
    pub radius: Option<f64>,
}

/// Two-point payload shared by lines and arcs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct LineData {
    /// Start of the segment, or arc source.
    pub point1: Point,
    /// End of the segment, or arc target.
    pub point2: Point,
}

/// Open polyline payload.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PathData {
    /// Ordered coordinates.
    pub coordinates: Vec<Point>,
}

/// One closed polygon boundary.
///
/// The first point always equals the last point for non-empty rings.
///
/// # Examples
/// ```
/// use tabgeo_core::{Point, Ring};
///
/// let a = Point { lat: 0.0, lon: 0.0 };
/// let b = Point { lat: 0.0, lon: 1.0 };
/// let c = Point { lat: 1.0, lon: 1.0 };
/// let ring = Ring::closed(vec![a, b, c]);
/// assert_eq!(ring.len(), 4);
/// assert_eq!(ring.points().last(), Some(&a));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Ring {
    coordinates: Vec<Point>,
}

impl Ring {
    /// Build a ring, appending the first point when the input is open.
    #[must_use]
    pub fn closed(mut coordinates: Vec<Point>) -> Self {
        close_ring(&mut coordinates);
        Self { coordinates }
    }

    /// Ring coordinates, first point repeated at the end.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.coordinates
    }

    /// Number of stored points, including the closing point.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    /// Report whether the ring has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Consume the ring and return its coordinates.
    #[must_use]
    pub fn into_inner(self) -> Vec<Point> {
        self.coordinates
    }
}

/// Polygon payload: rings in input order.
///
/// Outer boundaries and holes are not distinguished.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PolygonData {
    /// Closed rings.
    pub rings: Vec<Ring>,
}

/// Stroke overrides.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct StrokeProperties {
    /// Line width in meters.
    pub line_width: Option<f64>,
    /// Line color as hex text.
    pub line_color: Option<String>,
}

/// Fill overrides.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct FillProperties {
    /// Fill color as hex text.
    pub fill_color: Option<String>,
}

/// Line overrides.
pub type LineProperties = StrokeProperties;

/// Path overrides.
pub type PathProperties = StrokeProperties;

/// Scatter overrides: stroke and fill.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ScatterProperties {
    /// Outline overrides.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub stroke: StrokeProperties,
    /// Fill overrides.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub fill: FillProperties,
}

/// Polygon overrides: stroke, fill and extrusion.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PolygonProperties {
    /// Outline overrides.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub stroke: StrokeProperties,
    /// Fill overrides.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub fill: FillProperties,
    /// Extrusion height in meters.
    pub elevation: Option<f64>,
}

/// Arc overrides. Arcs blend from a source to a target color instead of
/// using a single line color.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ArcProperties {
    /// Line width in meters.
    pub line_width: Option<f64>,
    /// Color at `point1`, as hex text.
    pub source_color: Option<String>,
    /// Color at `point2`, as hex text.
    pub target_color: Option<String>,
}

/// Payload and property bag for one geometry kind.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum Geometry {
    /// A single point.
    Scatter {
        /// Position and radius.
        data: ScatterData,
        /// Style overrides.
        properties: ScatterProperties,
    },
    /// A straight segment.
    Line {
        /// Endpoints.
        data: LineData,
        /// Style overrides.
        properties: LineProperties,
    },
    /// An arc between two points.
    Arc {
        /// Endpoints.
        data: LineData,
        /// Style overrides.
        properties: ArcProperties,
    },
    /// An open polyline.
    Path {
        /// Coordinates.
        data: PathData,
        /// Style overrides.
        properties: PathProperties,
    },
    /// Closed rings.
    Polygon {
        /// Rings.
        data: PolygonData,
        /// Style overrides.
        properties: PolygonProperties,
    },
}

impl Geometry {
    /// Return the kind carried by this geometry.
    #[must_use]
    pub const fn kind(&self) -> GeometryKind {
        match self {
            Self::Scatter { .. } => GeometryKind::Scatter,
            Self::Line { .. } => GeometryKind::Line,
            Self::Arc { .. } => GeometryKind::Arc,
            Self::Path { .. } => GeometryKind::Path,
            Self::Polygon { .. } => GeometryKind::Polygon,
        }
    }

    /// Every position in the payload, in payload order.
    #[must_use]
    pub fn points(&self) -> Vec<Point> {
        match self {
            Self::Scatter { data, .. } => vec![data.point],
            Self::Line { data, .. } | Self::Arc { data, .. } => vec![data.point1, data.point2],
            Self::Path { data, .. } => data.coordinates.clone(),
            Self::Polygon { data, .. } => data
                .rings
                .iter()
                .flat_map(|ring| ring.points().iter().copied())
                .collect(),
        }
    }
}

/// One extracted row, ready for rendering.
///
/// `S` is the caller's selection identity. It is stored untouched.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct GeometryRecord<S> {
    /// Geometry identifier from the input row.
    pub id: String,
    /// Payload and style overrides.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub geometry: Geometry,
    /// Opaque selection identity.
    pub selection: S,
    /// Tooltip markup, passed through unparsed.
    pub tooltip_html: Option<String>,
}

impl<S> GeometryRecord<S> {
    /// Return the record's kind.
    #[must_use]
    pub const fn kind(&self) -> GeometryKind {
        self.geometry.kind()
    }

    /// Every position in the record, in payload order.
    #[must_use]
    pub fn points(&self) -> Vec<Point> {
        self.geometry.points()
    }
}

/// Close `ring` by appending its first point when first and last differ.
///
/// Already-closed and empty rings are left unchanged.
///
/// # Examples
/// ```
/// use tabgeo_core::{Point, close_ring};
///
/// let a = Point { lat: 0.0, lon: 0.0 };
/// let b = Point { lat: 1.0, lon: 1.0 };
/// let mut ring = vec![a, b];
/// close_ring(&mut ring);
/// close_ring(&mut ring);
/// assert_eq!(ring, vec![a, b, a]);
/// ```
pub fn close_ring(ring: &mut Vec<Point>) {
    let opening = match (ring.first(), ring.last()) {
        (Some(first), Some(last)) if first != last => Some(*first),
        _ => None,
    };
    if let Some(first) = opening {
        ring.push(first);
    }
}

/// Bounding box covering every point of `records`.
///
/// Returns `None` when the records contain no points.
#[must_use]
pub fn bounds<S>(records: &[GeometryRecord<S>]) -> Option<Rect<f64>> {
    records
        .iter()
        .flat_map(GeometryRecord::points)
        .map(Coord::<f64>::from)
        .fold(None, |acc: Option<Rect<f64>>, coord| {
            Some(acc.map_or_else(
                || Rect::new(coord, coord),
                |rect| {
                    Rect::new(
                        Coord {
                            x: rect.min().x.min(coord.x),
                            y: rect.min().y.min(coord.y),
                        },
                        Coord {
                            x: rect.max().x.max(coord.x),
                            y: rect.max().y.max(coord.y),
                        },
                    )
                },
            ))
        })
}

//! Validated WGS84 positions.

use geo::Coord;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A latitude/longitude pair in degrees.
///
/// Both values are finite and inside their valid domain when built through
/// [`Point::new`].
///
/// # Examples
/// ```
/// use tabgeo_core::Point;
///
/// # fn main() -> Result<(), tabgeo_core::PointError> {
/// let point = Point::new(51.5, -0.12)?;
/// assert_eq!(point.lat, 51.5);
/// assert!(Point::new(91.0, 0.0).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    /// Latitude in `[-90, 90]`.
    pub lat: f64,
    /// Longitude in `[-180, 180]`.
    pub lon: f64,
}

/// Errors returned by [`Point::new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PointError {
    /// Latitude was not finite or fell outside `[-90, 90]`.
    #[error("latitude {0} is not a finite value in [-90, 90]")]
    Latitude(f64),
    /// Longitude was not finite or fell outside `[-180, 180]`.
    #[error("longitude {0} is not a finite value in [-180, 180]")]
    Longitude(f64),
}

impl Point {
    /// Validate and construct a [`Point`].
    pub fn new(lat: f64, lon: f64) -> Result<Self, PointError> {
        if !valid_latitude(lat) {
            return Err(PointError::Latitude(lat));
        }
        if !valid_longitude(lon) {
            return Err(PointError::Longitude(lon));
        }
        Ok(Self { lat, lon })
    }

    /// Build a point from a decoded `[lon, lat]` tuple.
    ///
    /// Returns `None` when the tuple is shorter than two values or either
    /// value is out of range.
    #[must_use]
    pub fn from_lon_lat(tuple: &[f64]) -> Option<Self> {
        match tuple {
            [lon, lat, ..] => Self::new(*lat, *lon).ok(),
            _ => None,
        }
    }
}

impl From<Point> for Coord<f64> {
    fn from(point: Point) -> Self {
        Self {
            x: point.lon,
            y: point.lat,
        }
    }
}

/// Report whether `lat` is a finite latitude in `[-90, 90]`.
#[must_use]
pub fn valid_latitude(lat: f64) -> bool {
    lat.is_finite() && (-90.0..=90.0).contains(&lat)
}

/// Report whether `lon` is a finite longitude in `[-180, 180]`.
#[must_use]
pub fn valid_longitude(lon: f64) -> bool {
    lon.is_finite() && (-180.0..=180.0).contains(&lon)
}

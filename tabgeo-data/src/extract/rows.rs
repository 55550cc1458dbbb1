//! Per-kind extraction for a single row.

use tabgeo_core::{
    ArcProperties, DecodeCache, FillProperties, Geometry, GeometryKind, LineData, PathData, Point,
    PolygonData, PolygonProperties, Ring, ScatterData, ScatterProperties, StrokeProperties,
    decode_floats_with_cache,
};

use super::{Diagnostics, RowError};
use crate::{CellValue, Column, ColumnRole, Table};

/// Column lookups shared by every row of a pass.
pub(super) struct RowColumns<'t> {
    table: &'t Table,
}

impl<'t> RowColumns<'t> {
    pub(super) const fn resolve(table: &'t Table) -> Self {
        Self { table }
    }

    fn get(&self, role: ColumnRole) -> Option<Column<'t>> {
        self.table.column(role)
    }

    fn number(&self, role: ColumnRole, row: usize) -> Option<f64> {
        self.get(role).and_then(|column| column.cell(row).as_number())
    }

    fn text(&self, role: ColumnRole, row: usize) -> Option<String> {
        self.get(role).and_then(|column| column.cell(row).as_text())
    }

    fn cell(&self, role: ColumnRole, row: usize) -> Option<&'t CellValue> {
        self.get(role).map(|column| column.cell(row))
    }

    pub(super) fn tooltip(&self, row: usize) -> Option<String> {
        self.text(ColumnRole::TooltipHtml, row)
    }

    /// Ensure every role in `required` is present.
    fn require(&self, kind: GeometryKind, required: &[ColumnRole]) -> Result<(), RowError> {
        let missing: Vec<ColumnRole> = required
            .iter()
            .copied()
            .filter(|role| self.get(*role).is_none())
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(RowError::MissingColumns { kind, missing })
        }
    }
}

const POINT1: [ColumnRole; 2] = [ColumnRole::Point1Latitude, ColumnRole::Point1Longitude];
const POINTS: [ColumnRole; 4] = [
    ColumnRole::Point1Latitude,
    ColumnRole::Point1Longitude,
    ColumnRole::Point2Latitude,
    ColumnRole::Point2Longitude,
];

/// One row being extracted.
pub(super) struct RowContext<'r, 't> {
    pub(super) row: usize,
    pub(super) geometry_id: &'r str,
    pub(super) columns: &'r RowColumns<'t>,
    pub(super) precision: u32,
}

impl RowContext<'_, '_> {
    /// Build the geometry for `kind`.
    ///
    /// `Ok(None)` marks a path or polygon row whose coordinate cell is null,
    /// which is skipped without a diagnostic. Segment-level problems that keep the row alive are
    /// pushed onto `diagnostics`.
    pub(super) fn extract(
        &self,
        kind: GeometryKind,
        cache: &mut DecodeCache,
        diagnostics: &mut Diagnostics,
    ) -> Result<Option<Geometry>, RowError> {
        match kind {
            GeometryKind::Scatter => self.scatter().map(Some),
            GeometryKind::Line | GeometryKind::Arc => self.line_or_arc(kind).map(Some),
            GeometryKind::Path | GeometryKind::Polygon => {
                self.path_or_polygon(kind, cache, diagnostics)
            }
        }
    }

    fn scatter(&self) -> Result<Geometry, RowError> {
        let kind = GeometryKind::Scatter;
        self.columns.require(kind, &POINT1)?;
        let point = self.point(kind, ColumnRole::Point1Latitude, ColumnRole::Point1Longitude)?;
        let row = self.row;
        Ok(Geometry::Scatter {
            data: ScatterData {
                point,
                radius: self.columns.number(ColumnRole::ScatterRadius, row),
            },
            properties: ScatterProperties {
                stroke: StrokeProperties {
                    line_width: self.columns.number(ColumnRole::ScatterLineWidth, row),
                    line_color: self.columns.text(ColumnRole::ScatterLineColor, row),
                },
                fill: FillProperties {
                    fill_color: self.columns.text(ColumnRole::ScatterFillColor, row),
                },
            },
        })
    }

    fn line_or_arc(&self, kind: GeometryKind) -> Result<Geometry, RowError> {
        self.columns.require(kind, &POINTS)?;
        let data = LineData {
            point1: self.point(kind, ColumnRole::Point1Latitude, ColumnRole::Point1Longitude)?,
            point2: self.point(kind, ColumnRole::Point2Latitude, ColumnRole::Point2Longitude)?,
        };
        let row = self.row;
        Ok(if kind == GeometryKind::Arc {
            Geometry::Arc {
                data,
                properties: ArcProperties {
                    line_width: self.columns.number(ColumnRole::ArcLineWidth, row),
                    source_color: self.columns.text(ColumnRole::ArcSourceColor, row),
                    target_color: self.columns.text(ColumnRole::ArcTargetColor, row),
                },
            }
        } else {
            Geometry::Line {
                data,
                properties: StrokeProperties {
                    line_width: self.columns.number(ColumnRole::LineLineWidth, row),
                    line_color: self.columns.text(ColumnRole::LineLineColor, row),
                },
            }
        })
    }

    fn path_or_polygon(
        &self,
        kind: GeometryKind,
        cache: &mut DecodeCache,
        diagnostics: &mut Diagnostics,
    ) -> Result<Option<Geometry>, RowError> {
        self.columns.require(kind, &[ColumnRole::LineCoordinates])?;
        let Some(cell) = self
            .columns
            .cell(ColumnRole::LineCoordinates, self.row)
            .filter(|value| !value.is_null())
        else {
            return Ok(None);
        };
        // Non-text cells decode from their display form; "" still yields one segment.
        let encoded = cell.to_display();
        let segments = self.decode_segments(kind, &encoded, cache, diagnostics)?;
        let row = self.row;
        let stroke = |width, color| StrokeProperties {
            line_width: self.columns.number(width, row),
            line_color: self.columns.text(color, row),
        };

        Ok(Some(if kind == GeometryKind::Polygon {
            Geometry::Polygon {
                data: PolygonData {
                    rings: segments.into_iter().map(Ring::closed).collect(),
                },
                properties: PolygonProperties {
                    stroke: stroke(ColumnRole::PolygonLineWidth, ColumnRole::PolygonLineColor),
                    fill: FillProperties {
                        fill_color: self.columns.text(ColumnRole::PolygonFillColor, row),
                    },
                    elevation: self.columns.number(ColumnRole::PolygonExtrudeElevation, row),
                },
            }
        } else {
            Geometry::Path {
                data: PathData {
                    coordinates: segments.into_iter().flatten().collect(),
                },
                properties: stroke(ColumnRole::PathWidth, ColumnRole::PathColor),
            }
        }))
    }

    /// Decode every comma-separated segment of `encoded`.
    ///
    /// Each segment is cached under `"{geometry_id}#{segment}"` so segments of
    /// one row never share an entry.
    fn decode_segments(
        &self,
        kind: GeometryKind,
        encoded: &str,
        cache: &mut DecodeCache,
        diagnostics: &mut Diagnostics,
    ) -> Result<Vec<Vec<Point>>, RowError> {
        let precisions = [self.precision, self.precision];
        let mut decoded = Vec::new();
        for (segment, text) in encoded.split(',').enumerate() {
            let key = format!("{}#{segment}", self.geometry_id);
            let tuples = decode_floats_with_cache(&key, cache, text, &precisions, true);
            if tuples.is_empty() {
                diagnostics.push(
                    self.row,
                    self.geometry_id,
                    RowError::EmptySegment { segment },
                );
                continue;
            }
            decoded.push(tuples.to_vec());
        }

        // Cached entries may come from an unchecked decode.
        let segments = decoded
            .iter()
            .map(|tuples| {
                tuples
                    .iter()
                    .map(|tuple| match tuple.as_slice() {
                        [lon, lat] => Point::new(*lat, *lon).ok(),
                        _ => None,
                    })
                    .collect::<Option<Vec<Point>>>()
            })
            .collect::<Option<Vec<_>>>()
            .ok_or(RowError::OutOfRange { kind })?;

        if segments.is_empty() {
            return Err(RowError::NoSegments);
        }
        Ok(segments)
    }

    /// Missing, unparsable and out-of-range values all read as out of range.
    fn point(
        &self,
        kind: GeometryKind,
        lat_role: ColumnRole,
        lon_role: ColumnRole,
    ) -> Result<Point, RowError> {
        let coordinates = self
            .columns
            .number(lat_role, self.row)
            .zip(self.columns.number(lon_role, self.row));
        coordinates
            .and_then(|(lat, lon)| Point::new(lat, lon).ok())
            .ok_or(RowError::OutOfRange { kind })
    }
}

//! Column-oriented tabular input.
//!
//! A [`Table`] maps each [`ColumnRole`] to the cells of that column. Absent
//! columns are first-class: every role is optional and extraction decides
//! which ones a row needs.

mod cell;
mod load;

use std::{collections::HashMap, fmt};

use serde::{Deserialize, Serialize};

pub use cell::CellValue;
pub use load::{LoadTableError, load_table};

static NULL_CELL: CellValue = CellValue::Null;

/// The role a column plays in geometry extraction.
///
/// Serialized names are camelCase, for example `point1Latitude`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColumnRole {
    /// Stable identifier of the row's geometry.
    GeometryId,
    /// Type label used to classify the row.
    GeometryType,
    /// Compressed coordinates for path and polygon rows.
    LineCoordinates,
    /// Latitude of the first point.
    Point1Latitude,
    /// Longitude of the first point.
    Point1Longitude,
    /// Latitude of the second point.
    Point2Latitude,
    /// Longitude of the second point.
    Point2Longitude,
    /// Scatter radius in meters.
    ScatterRadius,
    /// Polygon extrusion height in meters.
    PolygonExtrudeElevation,
    /// Scatter outline color.
    ScatterLineColor,
    /// Scatter outline width.
    ScatterLineWidth,
    /// Scatter fill color.
    ScatterFillColor,
    /// Line width.
    LineLineWidth,
    /// Line color.
    LineLineColor,
    /// Path width.
    PathWidth,
    /// Path color.
    PathColor,
    /// Polygon outline color.
    PolygonLineColor,
    /// Polygon outline width.
    PolygonLineWidth,
    /// Polygon fill color.
    PolygonFillColor,
    /// Arc width.
    ArcLineWidth,
    /// Arc color at the first point.
    ArcSourceColor,
    /// Arc color at the second point.
    ArcTargetColor,
    /// Pass-through tooltip markup.
    TooltipHtml,
}

impl ColumnRole {
    /// The serialized role name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GeometryId => "geometryId",
            Self::GeometryType => "geometryType",
            Self::LineCoordinates => "lineCoordinates",
            Self::Point1Latitude => "point1Latitude",
            Self::Point1Longitude => "point1Longitude",
            Self::Point2Latitude => "point2Latitude",
            Self::Point2Longitude => "point2Longitude",
            Self::ScatterRadius => "scatterRadius",
            Self::PolygonExtrudeElevation => "polygonExtrudeElevation",
            Self::ScatterLineColor => "scatterLineColor",
            Self::ScatterLineWidth => "scatterLineWidth",
            Self::ScatterFillColor => "scatterFillColor",
            Self::LineLineWidth => "lineLineWidth",
            Self::LineLineColor => "lineLineColor",
            Self::PathWidth => "pathWidth",
            Self::PathColor => "pathColor",
            Self::PolygonLineColor => "polygonLineColor",
            Self::PolygonLineWidth => "polygonLineWidth",
            Self::PolygonFillColor => "polygonFillColor",
            Self::ArcLineWidth => "arcLineWidth",
            Self::ArcSourceColor => "arcSourceColor",
            Self::ArcTargetColor => "arcTargetColor",
            Self::TooltipHtml => "tooltipHtml",
        }
    }
}

impl fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Column-oriented input for one extraction pass.
///
/// # Examples
/// ```
/// use tabgeo_data::{CellValue, ColumnRole, Table};
///
/// let table = Table::builder()
///     .column(ColumnRole::GeometryId, ["g1", "g2"])
///     .column(ColumnRole::Point1Latitude, [10.0])
///     .build();
///
/// assert_eq!(table.row_count(), 2);
/// let latitude = table.column(ColumnRole::Point1Latitude).expect("column present");
/// // Cells past the end of a short column read as null.
/// assert_eq!(latitude.cell(1), &CellValue::Null);
/// assert!(table.column(ColumnRole::Point2Latitude).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    columns: HashMap<ColumnRole, Vec<CellValue>>,
}

impl Table {
    /// Start building a table.
    #[must_use]
    pub fn builder() -> TableBuilder {
        TableBuilder::default()
    }

    /// Borrow the column for `role`, if the table has one.
    #[must_use]
    pub fn column(&self, role: ColumnRole) -> Option<Column<'_>> {
        self.columns.get(&role).map(|cells| Column { role, cells })
    }

    /// Number of rows, taken from the geometry-id column.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.column(ColumnRole::GeometryId)
            .map_or(0, |column| column.len())
    }

    /// Roles present in the table, in declaration order.
    #[must_use]
    pub fn roles(&self) -> Vec<ColumnRole> {
        let mut roles: Vec<ColumnRole> = self.columns.keys().copied().collect();
        roles.sort_unstable();
        roles
    }

    /// Find the first column whose length differs from the row count.
    ///
    /// Returns the role and its length.
    #[must_use]
    pub fn ragged_column(&self) -> Option<(ColumnRole, usize)> {
        let rows = self.row_count();
        self.roles().into_iter().find_map(|role| {
            let len = self.columns.get(&role).map_or(0, Vec::len);
            (len != rows).then_some((role, len))
        })
    }
}

/// Builder for [`Table`].
#[derive(Debug, Clone, Default)]
pub struct TableBuilder {
    columns: HashMap<ColumnRole, Vec<CellValue>>,
}

impl TableBuilder {
    /// Set the cells of `role`, replacing any earlier column for it.
    #[must_use]
    pub fn column<I, V>(mut self, role: ColumnRole, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        self.columns
            .insert(role, values.into_iter().map(Into::into).collect());
        self
    }

    /// Finish the table.
    #[must_use]
    pub fn build(self) -> Table {
        Table {
            columns: self.columns,
        }
    }
}

/// A borrowed view of one column.
#[derive(Debug, Clone, Copy)]
pub struct Column<'a> {
    role: ColumnRole,
    cells: &'a [CellValue],
}

impl<'a> Column<'a> {
    /// The role of this column.
    #[must_use]
    pub const fn role(&self) -> ColumnRole {
        self.role
    }

    /// Cell at `row`. Rows past the end of the column read as null.
    #[must_use]
    pub fn cell(&self, row: usize) -> &'a CellValue {
        self.cells.get(row).unwrap_or(&NULL_CELL)
    }

    /// Number of stored cells.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.cells.len()
    }

    /// Report whether the column stores no cells.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

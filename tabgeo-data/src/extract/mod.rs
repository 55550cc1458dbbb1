//! Row classification and geometry extraction.
//!
//! One pass visits every row of a [`Table`], classifies it by its type label
//! and builds a [`GeometryRecord`] or a [`RowDiagnostic`]. Records keep input
//! row order regardless of kind.

mod diagnostics;
mod error;
mod rows;
mod settings;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use tabgeo_core::{DecodeCache, GeometryRecord};

use crate::{ColumnRole, Table};

pub use diagnostics::{Diagnostics, RowDiagnostic, SURFACED_LIMIT, WARNING_TEXT_LIMIT};
pub use error::{RowError, SettingsError};
pub use settings::{
    DEFAULT_PRECISION, ExtractionSettings, MAX_PRECISION, TypeLabels,
};

use rows::{RowColumns, RowContext};
use settings::LabelMatcher;

/// Default selection identity: the row index and the geometry id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionId {
    /// Zero-based input row.
    pub row: usize,
    /// Geometry id of the row.
    pub geometry_id: String,
}

/// Builds the opaque selection token attached to each record.
///
/// Closures taking `(row, geometry_id)` implement this trait.
pub trait SelectionIdBuilder {
    /// Token type stored in [`GeometryRecord::selection`].
    type Id;

    /// Build the token for an accepted row.
    fn selection_id(&self, row: usize, geometry_id: &str) -> Self::Id;
}

/// Builder producing [`SelectionId`] values.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowSelection;

impl SelectionIdBuilder for RowSelection {
    type Id = SelectionId;

    fn selection_id(&self, row: usize, geometry_id: &str) -> Self::Id {
        SelectionId {
            row,
            geometry_id: geometry_id.to_owned(),
        }
    }
}

impl<F, S> SelectionIdBuilder for F
where
    F: Fn(usize, &str) -> S,
{
    type Id = S;

    fn selection_id(&self, row: usize, geometry_id: &str) -> Self::Id {
        self(row, geometry_id)
    }
}

/// Result of one extraction pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionReport<S> {
    /// Accepted records in input row order.
    pub records: Vec<GeometryRecord<S>>,
    /// Row-local failures.
    pub diagnostics: Diagnostics,
}

impl<S> ExtractionReport<S> {
    const fn empty() -> Self {
        Self {
            records: Vec::new(),
            diagnostics: Diagnostics::new(),
        }
    }
}

/// Extract geometry records from `table`, tagging each with a
/// [`SelectionId`].
///
/// `cache` memoises decoded coordinates for path and polygon rows. Use a fresh
/// cache per pass, or clear it, when the data behind a geometry id may change.
///
/// Decoded tuples dropped by the longitude/latitude check while the rest of
/// their segment survives are reported through `log` only, not through
/// [`ExtractionReport::diagnostics`].
///
/// # Examples
/// ```
/// use tabgeo_core::{DecodeCache, GeometryKind};
/// use tabgeo_data::{ColumnRole, ExtractionSettings, Table, extract_geometries};
///
/// let table = Table::builder()
///     .column(ColumnRole::GeometryId, ["g1"])
///     .column(ColumnRole::GeometryType, ["scatter"])
///     .column(ColumnRole::Point1Latitude, [10.0])
///     .column(ColumnRole::Point1Longitude, [20.0])
///     .build();
///
/// let mut cache = DecodeCache::new();
/// let report = extract_geometries(&table, &ExtractionSettings::default(), &mut cache);
/// assert_eq!(report.records.len(), 1);
/// assert_eq!(report.records[0].kind(), GeometryKind::Scatter);
/// assert!(report.diagnostics.is_empty());
/// ```
#[must_use]
pub fn extract_geometries(
    table: &Table,
    settings: &ExtractionSettings,
    cache: &mut DecodeCache,
) -> ExtractionReport<SelectionId> {
    extract_geometries_with(table, settings, cache, &RowSelection)
}

/// Extract geometry records, building selection tokens with `builder`.
///
/// A table without a geometry-id or geometry-type column yields an empty
/// report.
#[must_use]
pub fn extract_geometries_with<B>(
    table: &Table,
    settings: &ExtractionSettings,
    cache: &mut DecodeCache,
    builder: &B,
) -> ExtractionReport<B::Id>
where
    B: SelectionIdBuilder + ?Sized,
{
    let mut report = ExtractionReport::empty();
    let (Some(ids), Some(types)) = (
        table.column(ColumnRole::GeometryId),
        table.column(ColumnRole::GeometryType),
    ) else {
        debug!("Table lacks geometry id or type column; nothing to extract");
        return report;
    };

    let matcher = LabelMatcher::new(settings.labels());
    let columns = RowColumns::resolve(table);
    let precision = u32::from(settings.precision());

    for row in 0..ids.len() {
        let geometry_id = ids.cell(row).to_display();
        let label = types.cell(row).to_display();
        let Some(kind) = matcher.classify(&label) else {
            report.diagnostics.push(
                row,
                &geometry_id,
                RowError::UnknownType {
                    label: label.into_owned(),
                },
            );
            continue;
        };

        let context = RowContext {
            row,
            geometry_id: &geometry_id,
            columns: &columns,
            precision,
        };
        match context.extract(kind, cache, &mut report.diagnostics) {
            Ok(Some(geometry)) => report.records.push(GeometryRecord {
                id: geometry_id.to_string(),
                geometry,
                selection: builder.selection_id(row, &geometry_id),
                tooltip_html: columns.tooltip(row),
            }),
            Ok(None) => debug!("Geometry {geometry_id}: no geometry in row {row}; skipped"),
            Err(error) => report.diagnostics.push(row, &geometry_id, error),
        }
    }

    if !report.diagnostics.is_empty() {
        warn!("Data parsing error.\n{}", report.diagnostics.warning_text());
    }
    debug!(
        "Extracted {} records from {} rows ({} rejected)",
        report.records.len(),
        ids.len(),
        report.diagnostics.rejected_rows()
    );
    report
}

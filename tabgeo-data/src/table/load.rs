//! Loading tables from JSON datasets on disk.

use std::io::BufReader;

use camino::{Utf8Path, Utf8PathBuf};
use log::debug;
use tabgeo_fs::open_utf8_file;
use thiserror::Error;

use super::{ColumnRole, Table};

/// Errors raised while loading a dataset file.
#[derive(Debug, Error)]
pub enum LoadTableError {
    /// The dataset file could not be opened.
    #[error("failed to open dataset at {path:?}: {source}")]
    Open {
        /// Dataset path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// The dataset was not a valid table document.
    #[error("failed to parse dataset JSON at {path:?}: {source}")]
    Parse {
        /// Dataset path.
        path: Utf8PathBuf,
        /// Underlying decoding failure.
        #[source]
        source: serde_json::Error,
    },
    /// A column's length differs from the geometry-id column's.
    #[error("column {role} in {path:?} has {found} cells but the table has {expected} rows")]
    RaggedColumn {
        /// Dataset path.
        path: Utf8PathBuf,
        /// Offending column.
        role: ColumnRole,
        /// Row count taken from the geometry-id column.
        expected: usize,
        /// Cells in the offending column.
        found: usize,
    },
}

/// Load a table from a JSON document of the form
/// `{ "columns": { "<role>": [cells...] } }`.
///
/// Files are strict: every column must have one cell per row.
///
/// # Errors
/// Returns [`LoadTableError`] when the file cannot be opened, is not a table
/// document, or has ragged columns.
///
/// # Examples
/// ```no_run
/// use camino::Utf8Path;
/// use tabgeo_data::load_table;
///
/// # fn main() -> Result<(), tabgeo_data::LoadTableError> {
/// let table = load_table(Utf8Path::new("dataset.json"))?;
/// println!("rows: {}", table.row_count());
/// # Ok(())
/// # }
/// ```
pub fn load_table(path: &Utf8Path) -> Result<Table, LoadTableError> {
    let file = open_utf8_file(path).map_err(|source| LoadTableError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let table: Table =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| LoadTableError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    if let Some((role, found)) = table.ragged_column() {
        return Err(LoadTableError::RaggedColumn {
            path: path.to_path_buf(),
            role,
            expected: table.row_count(),
            found,
        });
    }
    debug!("Loaded {} rows from {path}", table.row_count());
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use std::fs;
    use tempfile::TempDir;

    #[fixture]
    fn workspace() -> (TempDir, Utf8PathBuf) {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 tempdir");
        (dir, root)
    }

    #[rstest]
    fn loads_well_formed_dataset(workspace: (TempDir, Utf8PathBuf)) {
        let (_dir, root) = workspace;
        let path = root.join("dataset.json");
        fs::write(
            &path,
            r#"{"columns": {
                "geometryId": ["g1", "g2"],
                "geometryType": ["scatter", "line"],
                "point1Latitude": [10, null]
            }}"#,
        )
        .expect("write dataset");

        let table = load_table(&path).expect("dataset loads");
        assert_eq!(table.row_count(), 2);
        let latitude = table
            .column(ColumnRole::Point1Latitude)
            .expect("latitude column");
        assert_eq!(latitude.cell(0).as_number(), Some(10.0));
        assert!(latitude.cell(1).is_null());
    }

    #[rstest]
    fn missing_file_reports_open_error(workspace: (TempDir, Utf8PathBuf)) {
        let (_dir, root) = workspace;
        let path = root.join("absent.json");
        match load_table(&path) {
            Err(LoadTableError::Open { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected open error, got {other:?}"),
        }
    }

    #[rstest]
    #[case(r#"{"columns": {"notARole": []}}"#)]
    #[case("[1, 2, 3]")]
    fn malformed_documents_report_parse_error(
        workspace: (TempDir, Utf8PathBuf),
        #[case] contents: &str,
    ) {
        let (_dir, root) = workspace;
        let path = root.join("broken.json");
        fs::write(&path, contents).expect("write dataset");
        assert!(matches!(
            load_table(&path),
            Err(LoadTableError::Parse { .. })
        ));
    }

    #[rstest]
    fn ragged_columns_are_rejected(workspace: (TempDir, Utf8PathBuf)) {
        let (_dir, root) = workspace;
        let path = root.join("ragged.json");
        fs::write(
            &path,
            r#"{"columns": {"geometryId": ["g1", "g2"], "geometryType": ["scatter"]}}"#,
        )
        .expect("write dataset");
        match load_table(&path) {
            Err(LoadTableError::RaggedColumn {
                role,
                expected,
                found,
                ..
            }) => {
                assert_eq!(role, ColumnRole::GeometryType);
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            }
            other => panic!("expected ragged column error, got {other:?}"),
        }
    }
}

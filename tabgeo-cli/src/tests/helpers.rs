//! Test helpers for writing datasets and reading command output.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tabgeo_core::Point;
use tabgeo_core::test_support::{closed_square, encode_points};
use tempfile::TempDir;

/// Write `contents` to `path`, creating parent directories as needed.
pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent directories");
    }
    fs::write(path, contents).expect("write test file");
}

/// A temporary workspace rooted at a UTF-8 path.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }
}

/// A dataset with one valid scatter row, one polygon row and one row with an
/// unknown type label.
pub(super) fn mixed_dataset() -> String {
    let ring: Vec<Point> = closed_square(45.0, 7.0);
    let encoded = encode_points(&ring, 6);
    serde_json::json!({
        "columns": {
            "geometryId": ["g1", "g2", "g3"],
            "geometryType": ["scatter", "polygon", "hexagon"],
            "point1Latitude": [10, null, null],
            "point1Longitude": [20, null, null],
            "lineCoordinates": [null, encoded, null],
            "scatterFillColor": ["#ff0000", null, null]
        }
    })
    .to_string()
}

/// Parse the JSON document produced by the extract command.
pub(super) fn parse_output(bytes: &[u8]) -> serde_json::Value {
    serde_json::from_slice(bytes).expect("output should be JSON")
}

//! Terrain (ground-truth path) loading.
//!
//! The terrain source is a JSON document with a `terrain` list of waypoint
//! objects, read once at run start:
//!
//! ```json
//! { "terrain": [ { "latitude": 40.0, "longitude": -75.0 } ] }
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::Coordinate;
use crate::error::NavError;

/// On-disk schema of the terrain document.
#[derive(Debug, Deserialize)]
struct TerrainDocument {
    #[serde(default)]
    terrain: Vec<Coordinate>,
}

/// Reads the ground-truth path from a terrain document.
///
/// A missing or empty `terrain` list yields an empty path, which downstream
/// stages treat as a valid zero-waypoint run.
///
/// # Errors
/// * [`NavError::SourceUnavailable`] if the file cannot be opened.
/// * [`NavError::MalformedInput`] if the document is not structurally valid
///   JSON matching the schema.
///
/// # Example
/// ```
/// let truth = navfuse::terrain::load_terrain("./data/terrain.json")
///     .expect("failed to read terrain document");
/// assert!(!truth.is_empty());
/// ```
pub fn load_terrain<P: AsRef<Path>>(path: P) -> Result<Vec<Coordinate>, NavError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| NavError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let document: TerrainDocument = serde_json::from_reader(BufReader::new(file))?;
    Ok(document.terrain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_document(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("terrain.json");
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn test_load_terrain_parses_waypoints_in_order() {
        let (_dir, path) = write_document(
            r#"{"terrain": [
                {"latitude": 40.0, "longitude": -75.0},
                {"latitude": 40.001, "longitude": -75.0015}
            ]}"#,
        );
        let truth = load_terrain(&path).unwrap();
        assert_eq!(truth.len(), 2);
        assert_eq!(truth[0], Coordinate::new(40.0, -75.0));
        assert_eq!(truth[1], Coordinate::new(40.001, -75.0015));
    }

    #[test]
    fn test_missing_file_is_source_unavailable() {
        let result = load_terrain("/nonexistent/terrain.json");
        assert!(matches!(result, Err(NavError::SourceUnavailable { .. })));
    }

    #[test]
    fn test_empty_terrain_list_yields_an_empty_path() {
        let (_dir, path) = write_document(r#"{"terrain": []}"#);
        assert!(load_terrain(&path).unwrap().is_empty());
    }

    #[test]
    fn test_missing_terrain_key_yields_an_empty_path() {
        let (_dir, path) = write_document(r#"{}"#);
        assert!(load_terrain(&path).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_document_is_rejected() {
        let (_dir, path) = write_document(r#"{"terrain": [{"latitude": "north"}]}"#);
        assert!(matches!(load_terrain(&path), Err(NavError::MalformedInput(_))));
    }

    #[test]
    fn test_bundled_sample_terrain_loads() {
        let truth = load_terrain("./data/terrain.json").expect("failed to read data/terrain.json");
        assert!(!truth.is_empty());
    }
}

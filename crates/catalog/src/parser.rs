//! Parsers for the JSON documents the app exchanges with its stores.
//!
//! - catalog: array of product objects
//! - preferences: `{ "styles": [], "colors": [], "brands": [], "size": "" }`
//! - liked ids: array of product id strings

use crate::error::{CatalogError, Result};
use crate::types::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Read a file into a string, mapping a missing file to `FileNotFound`.
fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CatalogError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => CatalogError::IoError(e),
    })
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Decode a JSON document, tagging errors with the file name.
pub(crate) fn parse_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = read_document(path)?;
    serde_json::from_str(&content).map_err(|source| CatalogError::JsonError {
        file: file_label(path),
        source,
    })
}

/// Encode a value as pretty JSON and write it to `path`.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value).map_err(|source| CatalogError::JsonError {
        file: file_label(path),
        source,
    })?;
    fs::write(path, content)?;
    Ok(())
}

/// Parse a catalog snapshot.
///
/// Order is preserved exactly as it appears in the file; it is the order the
/// feed is displayed in.
pub fn parse_catalog(path: &Path) -> Result<Vec<Product>> {
    parse_json(path)
}

/// Parse a stored preference record.
pub fn parse_preferences(path: &Path) -> Result<UserPreferences> {
    parse_json(path)
}

/// Parse a stored list of liked product ids.
///
/// Duplicate entries collapse into one.
pub fn parse_liked_ids(path: &Path) -> Result<LikedIds> {
    let ids: Vec<ProductId> = parse_json(path)?;
    Ok(ids.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_parse_catalog_keeps_order() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "catalog.json",
            r#"[
                {"id": "3", "brand": "Nike"},
                {"id": "1", "brand": "Zara", "ecoFriendly": false},
                {"id": "2", "style": "boho", "color": "cream"}
            ]"#,
        );

        let products = parse_catalog(&path).unwrap();
        let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_parse_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = parse_catalog(&dir.path().join("nope.json"));
        assert!(matches!(result, Err(CatalogError::FileNotFound { .. })));
    }

    #[test]
    fn test_parse_malformed_json() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "user_preferences.json", "{ not json");

        match parse_preferences(&path) {
            Err(CatalogError::JsonError { file, .. }) => assert_eq!(file, "user_preferences.json"),
            other => panic!("expected JsonError, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_liked_ids_dedupes() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "liked_ids.json", r#"["4", "9", "4"]"#);

        let liked = parse_liked_ids(&path).unwrap();
        assert_eq!(liked.len(), 2);
        assert!(liked.contains("4"));
        assert!(liked.contains("9"));
    }

    #[test]
    fn test_write_then_parse_preferences() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("user_preferences.json");
        let mut prefs = UserPreferences::default();
        prefs.brands.insert("Pact".to_string());
        prefs.size = "S".to_string();

        write_json(&path, &prefs).unwrap();
        assert_eq!(parse_preferences(&path).unwrap(), prefs);
    }
}

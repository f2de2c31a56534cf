//! JSON import/export for question catalogs.
//! Catalogs are authored outside the scheduler; it only ever reads them.

use crate::error::DrillResult;
use crate::models::Catalog;
use std::fs::File;
use std::io::{Read, Write};

/// Exports a catalog to a JSON file at the specified path.
/// Returns an error if file creation or writing fails.
pub fn export_catalog_to_path(catalog: &Catalog, path: &str) -> DrillResult<()> {
    let json_string = serde_json::to_string_pretty(catalog)?;
    let mut file = File::create(path)?;
    file.write_all(json_string.as_bytes())?;
    Ok(())
}

/// Imports a catalog from a JSON file.
/// Returns an error if the file doesn't exist or contains invalid JSON.
pub fn import_catalog(filename: &str) -> DrillResult<Catalog> {
    let mut file = File::open(filename)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    let catalog: Catalog = serde_json::from_str(&contents)?;
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Question;
    use std::fs;

    fn create_test_catalog() -> Catalog {
        Catalog {
            name: "Chemistry Drill".to_string(),
            questions: vec![
                Question {
                    prompt: "Define an isotope.".to_string(),
                    total_points: 1.0,
                    marking_points: vec![
                        "Atoms of the same element with different mass numbers".to_string(),
                    ],
                },
                Question {
                    prompt: "State two uses of chlorine.".to_string(),
                    total_points: 2.0,
                    marking_points: vec![
                        "Water treatment".to_string(),
                        "Manufacture of bleach".to_string(),
                    ],
                },
            ],
        }
    }

    #[test]
    fn test_export_catalog_to_path() {
        let catalog = create_test_catalog();
        let test_file = "test_catalog_export.json";

        let result = export_catalog_to_path(&catalog, test_file);
        assert!(result.is_ok());
        assert!(fs::metadata(test_file).is_ok(), "File should exist");

        let _ = fs::remove_file(test_file);
    }

    #[test]
    fn test_import_catalog() {
        let json_content = r#"{
  "name": "Import Test Catalog",
  "questions": [
    {
      "prompt": "Name the gas produced.",
      "total_points": 1.0,
      "marking_points": ["Hydrogen"]
    }
  ]
}"#;

        let test_file = "test_catalog_import.json";
        fs::write(test_file, json_content).unwrap();

        let catalog = import_catalog(test_file).unwrap();
        assert_eq!(catalog.name, "Import Test Catalog");
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.questions[0].marking_points, vec!["Hydrogen"]);

        let _ = fs::remove_file(test_file);
    }

    #[test]
    fn test_export_and_import_round_trip() {
        let original = create_test_catalog();
        let test_file = "test_catalog_roundtrip.json";

        export_catalog_to_path(&original, test_file).unwrap();
        let imported = import_catalog(test_file).unwrap();

        assert_eq!(original.name, imported.name);
        assert_eq!(original.len(), imported.len());
        assert_eq!(original.total_points(), imported.total_points());

        let _ = fs::remove_file(test_file);
    }

    #[test]
    fn test_import_nonexistent_file() {
        let result = import_catalog("nonexistent_catalog_xyz123.json");
        assert!(result.is_err());
    }

    #[test]
    fn test_import_invalid_json() {
        let test_file = "test_catalog_invalid.json";
        fs::write(test_file, "{ this is not valid json }").unwrap();

        let result = import_catalog(test_file);
        assert!(result.is_err());

        let _ = fs::remove_file(test_file);
    }
}

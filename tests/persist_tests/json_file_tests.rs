//! Tests for JsonFile
//!
//! These tests verify:
//! - Missing file loads as empty
//! - Save/load round trip for both schemas
//! - Absent values stay distinct from zero
//! - Missing keys read as absent
//! - Overwrite semantics and directory creation
//! - Errors on malformed documents and unwritable targets

use std::fs;

use listings::persist::JsonFile;
use listings::record::{AreaListing, RoomListing};
use listings::ListingError;
use tempfile::TempDir;

// =============================================================================
// Load Tests
// =============================================================================

#[test]
fn test_load_missing_file_returns_empty() {
    let temp_dir = TempDir::new().unwrap();
    let file = JsonFile::new(temp_dir.path().join("nope.json"), true);

    let records: Vec<RoomListing> = file.load().unwrap();

    assert!(records.is_empty());
}

#[test]
fn test_load_missing_keys_are_absent() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("properties.json");
    fs::write(&path, r#"[{"name": "Bare"}]"#).unwrap();

    let records: Vec<AreaListing> = JsonFile::new(&path, true).load().unwrap();

    assert_eq!(records, vec![AreaListing::new("Bare")]);
}

#[test]
fn test_load_malformed_document() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("properties.json");
    fs::write(&path, r#"[{"name": "A", "bedrooms": "two"}]"#).unwrap();

    let result: listings::Result<Vec<RoomListing>> = JsonFile::new(&path, true).load();

    assert!(matches!(result, Err(ListingError::Serialization(_))));
}

#[test]
fn test_load_accepts_original_layout() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("properties.json");
    fs::write(
        &path,
        r#"[{"name": "Flat 4", "total_sqft": 1200.0, "bath": 2.0, "price": 85.5, "bhk": 3}]"#,
    )
    .unwrap();

    let records: Vec<AreaListing> = JsonFile::new(&path, false).load().unwrap();

    assert_eq!(
        records,
        vec![AreaListing::new("Flat 4")
            .with_total_sqft(1200.0)
            .with_bath(2.0)
            .with_price(85.5)
            .with_bhk(3)]
    );
}

// =============================================================================
// Save Tests
// =============================================================================

#[test]
fn test_save_load_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let file = JsonFile::new(temp_dir.path().join("properties.json"), true);
    let records = vec![
        RoomListing::new("A")
            .with_bedrooms(2)
            .with_bathrooms(1)
            .with_price(100000.0),
        RoomListing::new("B").with_bedrooms(0),
    ];

    file.save(&records).unwrap();
    let loaded: Vec<RoomListing> = file.load().unwrap();

    assert_eq!(loaded, records);
}

#[test]
fn test_absent_is_distinct_from_zero() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("properties.json");
    let file = JsonFile::new(&path, false);

    file.save(&[RoomListing::new("Z").with_bedrooms(0)]).unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains(r#""bedrooms":0"#));
    assert!(raw.contains(r#""bathrooms":null"#));

    let loaded: Vec<RoomListing> = file.load().unwrap();
    assert_eq!(loaded[0].bedrooms, Some(0));
    assert_eq!(loaded[0].bathrooms, None);
}

#[test]
fn test_save_overwrites_whole_document() {
    let temp_dir = TempDir::new().unwrap();
    let file = JsonFile::new(temp_dir.path().join("properties.json"), true);

    file.save(&[RoomListing::new("A"), RoomListing::new("B")]).unwrap();
    file.save(&[RoomListing::new("C")]).unwrap();

    let loaded: Vec<RoomListing> = file.load().unwrap();
    assert_eq!(loaded, vec![RoomListing::new("C")]);
}

#[test]
fn test_save_creates_parent_directory() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("dir").join("properties.json");
    let file = JsonFile::new(&path, true);

    file.save(&[RoomListing::new("A")]).unwrap();

    assert!(path.exists());
}

#[test]
fn test_save_leaves_no_temp_file() {
    let temp_dir = TempDir::new().unwrap();
    let file = JsonFile::new(temp_dir.path().join("properties.json"), true);

    file.save(&[RoomListing::new("A")]).unwrap();

    let entries: Vec<_> = fs::read_dir(temp_dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_save_to_directory_path_fails() {
    let temp_dir = TempDir::new().unwrap();
    // The target itself is a directory, so the rename cannot succeed
    let path = temp_dir.path().join("taken");
    fs::create_dir(&path).unwrap();
    fs::write(path.join("keep"), "x").unwrap();

    let result = JsonFile::new(&path, true).save(&[RoomListing::new("A")]);

    assert!(matches!(result, Err(ListingError::Io(_))));
    assert!(!temp_dir.path().join("taken.tmp").exists());
    assert!(path.join("keep").exists());
}

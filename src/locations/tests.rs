use crate::locations::{CatalogError, LocationCatalog};
use std::io::Cursor;
use std::path::Path;

const CATALOG: &str = r#"{"coordinates": {"latitude": 48.8584, "longitude": 2.2945}, "country": "France", "city": "Paris", "hint": "Iron lattice tower", "imageUrl": "https://example.com/eiffel.jpg"}

{"coordinates": {"lat": 27.1751, "lng": 78.0421}, "country": "India", "city": "Agra"}
{"coordinates": {"lat": -13.1631, "lng": -72.5450}, "country": "Peru", "city": "Cusco", "hint": "Citadel in the clouds"}
"#;

#[test]
fn test_parse_catalog() {
    let catalog = LocationCatalog::from_reader(Cursor::new(CATALOG), Some(7))
        .expect("Failed to parse catalog.");

    assert_eq!(catalog.len(), 3);
    assert!(!catalog.is_empty());
}

#[test]
fn test_missing_optional_fields_default_to_empty() {
    let catalog = LocationCatalog::from_reader(Cursor::new(CATALOG), Some(7))
        .expect("Failed to parse catalog.");

    let agra = (0..200)
        .map(|_| catalog.pick_random())
        .find(|location| location.city == "Agra")
        .expect("Agra was never drawn.");
    assert_eq!(agra.hint, "");
    assert_eq!(agra.image_url, "");
}

#[test]
fn test_seeded_catalog_is_deterministic() {
    let first = LocationCatalog::from_reader(Cursor::new(CATALOG), Some(42))
        .expect("Failed to parse catalog.");
    let second = LocationCatalog::from_reader(Cursor::new(CATALOG), Some(42))
        .expect("Failed to parse catalog.");

    for _ in 0..20 {
        assert_eq!(first.pick_random(), second.pick_random());
    }
}

#[test]
fn test_empty_catalog_is_rejected() {
    let result = LocationCatalog::from_reader(Cursor::new("\n\n"), None);
    assert!(matches!(result, Err(CatalogError::Empty)));
}

#[test]
fn test_malformed_line_reports_line_number() {
    let raw = format!("{CATALOG}not json\n");
    let result = LocationCatalog::from_reader(Cursor::new(raw), None);
    assert!(matches!(result, Err(CatalogError::Parse { line: 5, .. })));
}

#[test]
fn test_out_of_range_coordinates_are_rejected() {
    let raw = r#"{"coordinates": {"lat": 91.0, "lng": 0.0}, "country": "Nowhere", "city": "Nowhere"}"#;
    let result = LocationCatalog::from_reader(Cursor::new(raw), None);
    assert!(matches!(result, Err(CatalogError::InvalidCoordinate { line: 1 })));
}

#[test]
fn test_example_catalog_loads() {
    let catalog = LocationCatalog::load(Path::new("landmarks.example.ndjson"), None)
        .expect("Failed to load the example catalog.");
    assert!(catalog.len() >= 10);
}

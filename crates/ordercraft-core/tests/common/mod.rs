use std::path::PathBuf;

use ordercraft_core::{Session, SessionBuilder};
use tempfile::TempDir;

/// A two-product catalog with one add-on, distinct from the built-in one.
pub const TEST_CATALOG: &str = r#"{
    "products": [
        {
            "id": "hosting",
            "name": "Hosting",
            "plans": [
                { "id": "hosting-small", "name": "Small", "default_price": 10, "price_interval": "mo" },
                { "id": "hosting-large", "name": "Large", "default_price": 45.5, "price_interval": "mo" }
            ]
        },
        {
            "id": "backup",
            "name": "Backup",
            "plans": [
                { "id": "backup-yearly", "name": "Backup Yearly", "default_price": 100, "price_interval": "yr" }
            ]
        }
    ],
    "add_ons": [
        { "id": "ssl", "name": "SSL Certificate", "price": 5, "price_label": "$5/mo" }
    ]
}"#;

/// Writes `json` into a fresh temp dir and returns the catalog path.
pub fn write_catalog(json: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("catalog.json");
    std::fs::write(&path, json).expect("Failed to write catalog");
    (temp_dir, path)
}

/// Helper function to create a session over the test catalog
pub fn create_test_session() -> (TempDir, Session) {
    let (temp_dir, path) = write_catalog(TEST_CATALOG);
    let session = SessionBuilder::new()
        .with_catalog_path(Some(&path))
        .build()
        .expect("Failed to create session");
    (temp_dir, session)
}

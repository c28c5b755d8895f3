// Catalog construction and index invariant guard rails.
#[path = "support/common.rs"]
mod common;

use anyhow::Result;
use extatlas::{ExtensionId, ExtensionIndex};
use serde_json::json;
use std::io::Write;
use tempfile::NamedTempFile;

use common::{catalog_value, load_index, record_value};

#[test]
fn builtin_catalog_smoke() {
    let index = ExtensionIndex::builtin();
    assert_eq!(index.key().0, "php_extensions_v1");
    assert!(!index.records().is_empty());
    assert!(!index.categories().is_empty());
}

#[test]
fn every_name_resolves_to_its_own_record() {
    // Name-is-key law: looking a name up returns the record carrying it.
    let index = ExtensionIndex::builtin();
    for name in index.names() {
        let rec = index.extension(name).expect("name resolves");
        assert_eq!(&rec.name, name);
    }
}

#[test]
fn popularity_stays_in_range() {
    for rec in ExtensionIndex::builtin().records() {
        assert!(
            (1..=10).contains(&rec.popularity),
            "{} has popularity {}",
            rec.name,
            rec.popularity
        );
    }
}

#[test]
fn unknown_name_resolves_to_nothing() {
    let index = ExtensionIndex::builtin();
    assert!(index.extension(&ExtensionId("not_a_real_ext".into())).is_none());
}

#[test]
fn index_enforces_schema_version() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    serde_json::to_writer(
        &mut file,
        &json!({
            "schema_version": "unexpected",
            "catalog": {"key": "fixture_catalog_v1", "title": "fixture"},
            "extensions": [record_value("curl", 10, &["All"], "Networking")]
        }),
    )?;
    file.flush()?;
    assert!(ExtensionIndex::load(file.path()).is_err());
    Ok(())
}

#[test]
fn index_rejects_duplicate_names() {
    let doc = catalog_value(
        vec![
            record_value("curl", 10, &["All"], "Networking"),
            record_value("curl", 9, &["All"], "Networking"),
        ],
        &[],
    );
    assert!(load_index(&doc).is_err());
}

#[test]
fn index_rejects_popularity_out_of_range() {
    for bad in [0u8, 11] {
        let doc = catalog_value(vec![record_value("curl", bad, &["All"], "Networking")], &[]);
        assert!(load_index(&doc).is_err(), "popularity {bad} should fail");
    }
}

#[test]
fn index_rejects_empty_catalog() {
    let doc = catalog_value(vec![], &[]);
    assert!(load_index(&doc).is_err());
}

#[test]
fn category_index_may_reference_missing_records() -> Result<()> {
    // Dangling identifiers in the category index are contract, not error.
    let doc = catalog_value(
        vec![record_value("pdo", 9, &["Laravel"], "Database")],
        &[("Database", &["pdo", "mysqli", "pgsql"])],
    );
    let index = load_index(&doc)?;
    assert_eq!(index.categories()["Database"].len(), 3);
    Ok(())
}

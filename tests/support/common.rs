#![allow(dead_code)]

use anyhow::{Context, Result};
use extatlas::ExtensionIndex;
use serde_json::{Value, json};
use std::collections::BTreeMap;
use std::io::Write;
use tempfile::NamedTempFile;

/// Minimal record value with the given name, popularity, frameworks and
/// category; the remaining fields get fixture filler.
pub fn record_value(name: &str, popularity: u8, frameworks: &[&str], category: &str) -> Value {
    json!({
        "name": name,
        "display_name": format!("Fixture {name}"),
        "description": format!("fixture record for {name}"),
        "category": category,
        "icon": "·",
        "use_cases": [format!("{name} things")],
        "frameworks": frameworks,
        "dependencies": [],
        "conflicts": [],
        "php_versions": "PHP 7.0+",
        "performance": "medium",
        "security": "safe",
        "size": "small",
        "popularity": popularity,
        "documentation": format!("https://example.test/{name}"),
        "examples": [],
        "tips": []
    })
}

/// Build a catalog document from record values and a category index.
pub fn catalog_value(extensions: Vec<Value>, categories: &[(&str, &[&str])]) -> Value {
    let index: BTreeMap<&str, Vec<&str>> = categories
        .iter()
        .map(|(label, names)| (*label, names.to_vec()))
        .collect();
    json!({
        "schema_version": "php_extension_catalog_v1",
        "catalog": {"key": "fixture_catalog_v1", "title": "fixture catalog"},
        "extensions": extensions,
        "categories": index
    })
}

/// Round-trip a catalog document through a temp file and the loader, the way
/// consumers with their own catalogs do.
pub fn load_index(document: &Value) -> Result<ExtensionIndex> {
    let mut file = NamedTempFile::new()?;
    serde_json::to_writer(&mut file, document)?;
    file.flush()?;
    ExtensionIndex::load(file.path()).context("failed to load fixture catalog")
}

/// Convenience: a validated index from (name, popularity, frameworks,
/// category) tuples, with no category index.
pub fn sample_index(entries: &[(&str, u8, &[&str], &str)]) -> Result<ExtensionIndex> {
    let extensions = entries
        .iter()
        .map(|(name, popularity, frameworks, category)| {
            record_value(name, *popularity, frameworks, category)
        })
        .collect();
    load_index(&catalog_value(extensions, &[]))
}

/// Names of a result set, for order assertions.
pub fn names(records: &[&extatlas::ExtensionRecord]) -> Vec<String> {
    records.iter().map(|rec| rec.name.0.clone()).collect()
}

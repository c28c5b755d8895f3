//! JSON Schema contract for catalog documents.
//!
//! The schema ships with the crate and is compiled from an embedded static,
//! so validation needs no repository paths. Schema validation is stricter
//! than serde parsing (enum values, popularity bounds, required fields) and
//! is what the `extatlas validate` subcommand and the contract tests run.

use anyhow::{Context, Result, bail};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::sync::LazyLock;

/// Raw JSON Schema for extension catalog documents.
pub const CATALOG_SCHEMA_JSON: &str = include_str!("../schema/extension_catalog.schema.json");

static CATALOG_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    serde_json::from_str(CATALOG_SCHEMA_JSON)
        .expect("bundled schema parses; pinned by tests/schema.rs")
});

/// Validate a catalog document against the bundled schema.
///
/// Collects every violation into one error so curation mistakes surface in a
/// single pass, and additionally enforces the allowed `schema_version` set.
pub fn validate_catalog_document(input: &Value) -> Result<()> {
    let compiled =
        JSONSchema::compile(&CATALOG_SCHEMA).context("compiling bundled catalog schema")?;
    if let Err(errors) = compiled.validate(input) {
        let details = errors.map(|e| e.to_string()).collect::<Vec<_>>().join("\n");
        bail!("catalog failed schema validation:\n{}", details);
    }

    let allowed = crate::catalog::index::allowed_schema_versions();
    let version = input
        .get("schema_version")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    if !allowed.contains(&version) {
        bail!(
            "catalog schema_version '{}' not in allowed set {:?}",
            version,
            allowed
        );
    }
    Ok(())
}

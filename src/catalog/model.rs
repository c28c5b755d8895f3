//! Serde data model for extension catalog files.
//!
//! A catalog file carries its own `schema_version`, a metadata block, the
//! extension records in their canonical order, and the category index. The
//! model is deliberately permissive about cross-references: the category
//! index may list identifiers with no matching record, and a record's
//! `category` label need not appear verbatim among the index keys. Resolution
//! happens lazily in the query layer, which skips what it cannot resolve.

use crate::catalog::{CatalogKey, ExtensionId, Footprint, Performance, SecurityRating};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Everything the catalog knows about one PHP extension.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ExtensionRecord {
    /// Canonical lowercase identifier; unique across the catalog.
    pub name: ExtensionId,
    pub display_name: String,
    pub description: String,
    /// Single coarse grouping label, e.g. "Graphics & Media".
    pub category: String,
    /// Short decorative glyph for presentation layers.
    pub icon: String,
    #[serde(default)]
    pub use_cases: Vec<String>,
    /// Frameworks known to use this extension, or the literal `"All"`.
    #[serde(default)]
    pub frameworks: Vec<String>,
    /// External system requirements, empty when the extension is self-contained.
    #[serde(default)]
    pub dependencies: Vec<String>,
    /// Identifiers of extensions that cannot coexist with this one.
    #[serde(default)]
    pub conflicts: Vec<ExtensionId>,
    /// Free-text version constraint, e.g. "PHP 5.0+".
    pub php_versions: String,
    pub performance: Performance,
    pub security: SecurityRating,
    /// Relative footprint.
    pub size: Footprint,
    /// Subjective ranking in 1..=10, higher is more popular.
    pub popularity: u8,
    /// URL of the reference documentation.
    pub documentation: String,
    /// Illustrative snippets; opaque text, never executed.
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(default)]
    pub tips: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
/// Metadata block identifying a catalog file.
pub struct CatalogMetadata {
    pub key: CatalogKey,
    pub title: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
/// A full catalog document: records in canonical order plus the category index.
pub struct ExtensionCatalog {
    pub schema_version: String,
    pub catalog: CatalogMetadata,
    /// Insertion order here is the canonical iteration order for queries.
    pub extensions: Vec<ExtensionRecord>,
    /// Category label to ordered identifier list. Identifiers may dangle.
    #[serde(default)]
    pub categories: BTreeMap<String, Vec<ExtensionId>>,
}

/// Parse a catalog document from disk. Structural validation only; invariant
/// checks live in [`crate::catalog::ExtensionIndex`].
pub fn load_catalog_from_path(path: &Path) -> Result<ExtensionCatalog> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading catalog {}", path.display()))?;
    let catalog: ExtensionCatalog = serde_json::from_str(&data)
        .with_context(|| format!("parsing catalog {}", path.display()))?;
    Ok(catalog)
}

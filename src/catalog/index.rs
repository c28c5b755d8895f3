//! Indexed view of an extension catalog instance.
//!
//! The index enforces the expected catalog schema version and the record
//! invariants (unique names, popularity range), and provides fast lookup by
//! extension name. It does not cross-check the category index against the
//! record set: catalogs are curated by hand and the index is allowed to list
//! identifiers that have no record yet. Queries skip those silently.

use crate::catalog::load_catalog_from_path;
use crate::catalog::{CatalogKey, CatalogMetadata, ExtensionCatalog, ExtensionId, ExtensionRecord};
use anyhow::{Context, Result, bail};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::LazyLock;

// The crate ships a single bundled catalog; reject unexpected versions rather
// than risk answering queries against mismatched data. Callers can widen the
// accepted set via env while keeping a sane default.
const DEFAULT_SCHEMA_VERSION: &str = "php_extension_catalog_v1";
const ENV_ALLOWED_SCHEMA_VERSIONS: &str = "EXTATLAS_ALLOWED_CATALOG_SCHEMAS";

/// Raw JSON of the bundled catalog, compiled into the binary.
pub const BUILTIN_CATALOG_JSON: &str = include_str!("../../catalogs/php_extensions_v1.json");

static BUILTIN: LazyLock<ExtensionIndex> = LazyLock::new(|| {
    let catalog: ExtensionCatalog = serde_json::from_str(BUILTIN_CATALOG_JSON)
        .expect("bundled catalog parses; pinned by tests/catalog.rs");
    ExtensionIndex::from_catalog(catalog)
        .expect("bundled catalog passes validation; pinned by tests/catalog.rs")
});

#[derive(Debug)]
/// Extension catalog plus a derived index keyed by extension name.
pub struct ExtensionIndex {
    catalog_key: CatalogKey,
    catalog: ExtensionCatalog,
    by_name: BTreeMap<ExtensionId, usize>,
}

impl ExtensionIndex {
    /// The bundled catalog, parsed and validated once per process.
    pub fn builtin() -> &'static ExtensionIndex {
        &BUILTIN
    }

    /// Load and validate a catalog from disk.
    ///
    /// Validates the schema version and metadata, checks record invariants,
    /// and builds a deterministic name index for fast lookups.
    pub fn load(path: &Path) -> Result<Self> {
        let catalog =
            load_catalog_from_path(path).with_context(|| format!("loading {}", path.display()))?;
        Self::from_catalog(catalog)
    }

    /// Validate an already-parsed catalog and index it.
    pub fn from_catalog(catalog: ExtensionCatalog) -> Result<Self> {
        validate_schema_version(&catalog.schema_version)?;
        validate_catalog_metadata(&catalog.catalog)?;
        let by_name = build_index(&catalog)?;
        Ok(Self {
            catalog_key: catalog.catalog.key.clone(),
            catalog,
            by_name,
        })
    }

    /// The catalog key declared in the loaded document.
    pub fn key(&self) -> &CatalogKey {
        &self.catalog_key
    }

    /// Resolve an extension by name.
    ///
    /// Returns `None` instead of erroring; dangling references in the
    /// category index resolve to nothing by contract.
    pub fn extension(&self, name: &ExtensionId) -> Option<&ExtensionRecord> {
        self.by_name
            .get(name)
            .map(|&pos| &self.catalog.extensions[pos])
    }

    /// All records in canonical (insertion) order.
    pub fn records(&self) -> &[ExtensionRecord] {
        &self.catalog.extensions
    }

    /// Iterates extension names in canonical (insertion) order.
    pub fn names(&self) -> impl Iterator<Item = &ExtensionId> {
        self.catalog.extensions.iter().map(|rec| &rec.name)
    }

    /// The category index: label to ordered identifier list.
    pub fn categories(&self) -> &BTreeMap<String, Vec<ExtensionId>> {
        &self.catalog.categories
    }

    /// Access the underlying catalog document.
    pub fn catalog(&self) -> &ExtensionCatalog {
        &self.catalog
    }
}

fn validate_schema_version(schema_version: &str) -> Result<()> {
    if schema_version.is_empty() {
        bail!("schema_version must not be empty");
    }

    if !schema_version
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
    {
        bail!(
            "schema_version must match ^[A-Za-z0-9_.-]+$, got {}",
            schema_version
        );
    }

    let allowed = allowed_schema_versions();
    if !allowed.contains(schema_version) {
        bail!(
            "schema_version '{}' not in allowed set {:?}",
            schema_version,
            allowed
        );
    }

    Ok(())
}

pub fn allowed_schema_versions() -> BTreeSet<String> {
    let mut versions: BTreeSet<String> = BTreeSet::new();
    versions.insert(DEFAULT_SCHEMA_VERSION.to_string());
    if let Ok(raw) = std::env::var(ENV_ALLOWED_SCHEMA_VERSIONS) {
        for v in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            versions.insert(v.to_string());
        }
    }
    versions
}

fn validate_catalog_metadata(meta: &CatalogMetadata) -> Result<()> {
    validate_catalog_key(&meta.key)?;
    if meta.title.trim().is_empty() {
        bail!("catalog.title must not be empty");
    }
    Ok(())
}

fn validate_catalog_key(key: &CatalogKey) -> Result<()> {
    if key.0.is_empty() {
        bail!("catalog.key must not be empty");
    }

    if !key
        .0
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
    {
        bail!("catalog.key must match ^[A-Za-z0-9_.-]+$, got {}", key.0);
    }

    Ok(())
}

fn build_index(catalog: &ExtensionCatalog) -> Result<BTreeMap<ExtensionId, usize>> {
    if catalog.extensions.is_empty() {
        bail!("catalog contains no extensions");
    }

    let mut map = BTreeMap::new();
    for (pos, rec) in catalog.extensions.iter().enumerate() {
        if rec.name.0.trim().is_empty() {
            bail!("encountered extension with no name");
        }
        if !(1..=10).contains(&rec.popularity) {
            bail!(
                "extension {} popularity {} outside 1..=10",
                rec.name,
                rec.popularity
            );
        }
        if map.insert(rec.name.clone(), pos).is_some() {
            bail!("duplicate extension name {}", rec.name);
        }
    }
    Ok(map)
}

//! Reference catalog of PHP extensions.
//!
//! The crate bundles a curated dataset describing common PHP extensions
//! (descriptions, use cases, framework compatibility, dependencies,
//! conflicts, ratings) and exposes four query operations over it: category
//! lookup, free-text search, popularity ranking, and framework filtering.
//! Everything is an in-memory scan over an immutable catalog; there is no
//! I/O at query time and no mutation API.
//!
//! Start from [`ExtensionIndex::builtin`] for the bundled data, or
//! [`ExtensionIndex::load`] for a catalog file of your own that follows
//! `schema/extension_catalog.schema.json`.

pub mod catalog;
pub mod schema;

pub use catalog::{
    BUILTIN_CATALOG_JSON, CatalogKey, CatalogMetadata, ExtensionCatalog, ExtensionId,
    ExtensionIndex, ExtensionRecord, FRAMEWORK_ALL, Footprint, POPULAR_LIMIT, Performance,
    SecurityRating, load_catalog_from_path,
};
pub use schema::{CATALOG_SCHEMA_JSON, validate_catalog_document};

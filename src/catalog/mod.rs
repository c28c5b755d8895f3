//! Extension catalog wiring.
//!
//! This module wraps extension catalogs (the bundled
//! `catalogs/php_extensions_v1.json` plus any file with the same shape) so
//! consumers can work with a validated snapshot and consistent identifiers.
//! Types in `model` mirror the document fields; `ExtensionIndex` adds the
//! name-keyed lookup and the query operations.

pub mod identity;
pub mod index;
pub mod model;
pub mod query;

pub use identity::{CatalogKey, ExtensionId, Footprint, Performance, SecurityRating};
pub use index::{BUILTIN_CATALOG_JSON, ExtensionIndex};
pub use model::{CatalogMetadata, ExtensionCatalog, ExtensionRecord};
pub use query::{FRAMEWORK_ALL, POPULAR_LIMIT};

pub use model::load_catalog_from_path;

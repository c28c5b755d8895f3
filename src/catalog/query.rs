//! Query operations over an indexed catalog.
//!
//! All four queries are total: unknown labels and unresolvable identifiers
//! produce smaller (possibly empty) result vectors, never errors. Results
//! borrow from the index and preserve the catalog's canonical order unless a
//! query explicitly re-ranks (popularity).

use crate::catalog::{ExtensionIndex, ExtensionRecord};

/// Sentinel framework label meaning "applies to every framework".
pub const FRAMEWORK_ALL: &str = "All";

/// Maximum number of records returned by [`ExtensionIndex::popular`].
pub const POPULAR_LIMIT: usize = 10;

impl ExtensionIndex {
    /// Records listed under a category label, resolved through the category
    /// index.
    ///
    /// The label is matched case-sensitively against the index keys.
    /// Identifiers that have no record in the catalog are skipped; an
    /// unknown label yields an empty vector. Result order follows the
    /// identifier list, not the catalog.
    pub fn by_category(&self, category: &str) -> Vec<&ExtensionRecord> {
        let Some(names) = self.categories().get(category) else {
            return Vec::new();
        };
        names
            .iter()
            .filter_map(|name| self.extension(name))
            .collect()
    }

    /// Case-insensitive substring search over name, display name,
    /// description, use cases, and framework labels.
    ///
    /// The empty query is a substring of every string, so it returns the
    /// whole catalog. That quirk is part of the contract; presentation
    /// layers that want different empty-input behavior handle it themselves.
    pub fn search(&self, query: &str) -> Vec<&ExtensionRecord> {
        let needle = query.to_lowercase();
        self.records()
            .iter()
            .filter(|rec| record_matches(rec, &needle))
            .collect()
    }

    /// The catalog's most popular extensions, at most [`POPULAR_LIMIT`].
    ///
    /// Sorted by popularity descending; ties keep their catalog order, so
    /// the ranking is deterministic across calls.
    pub fn popular(&self) -> Vec<&ExtensionRecord> {
        let mut ranked: Vec<&ExtensionRecord> = self.records().iter().collect();
        // Vec::sort_by is stable, which is what keeps tied records in
        // catalog order.
        ranked.sort_by(|a, b| b.popularity.cmp(&a.popularity));
        ranked.truncate(POPULAR_LIMIT);
        ranked
    }

    /// Records relevant to a framework: either they list the label verbatim
    /// (case-sensitive) or they carry the universal [`FRAMEWORK_ALL`]
    /// sentinel.
    ///
    /// Because universal records match any label, querying an unknown
    /// framework returns exactly the universal subset.
    pub fn by_framework(&self, framework: &str) -> Vec<&ExtensionRecord> {
        self.records()
            .iter()
            .filter(|rec| {
                rec.frameworks
                    .iter()
                    .any(|fw| fw == framework || fw == FRAMEWORK_ALL)
            })
            .collect()
    }
}

fn record_matches(rec: &ExtensionRecord, needle: &str) -> bool {
    if rec.name.as_str().to_lowercase().contains(needle)
        || rec.display_name.to_lowercase().contains(needle)
        || rec.description.to_lowercase().contains(needle)
    {
        return true;
    }
    rec.use_cases
        .iter()
        .chain(rec.frameworks.iter())
        .any(|text| text.to_lowercase().contains(needle))
}

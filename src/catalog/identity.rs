//! Identifier newtypes and closed rating enums for the extension catalog.
//!
//! Extension names and catalog keys travel through a lot of JSON and CLI
//! plumbing; the newtypes keep them from being confused with the many other
//! plain strings in the data model. The three rating enums are closed sets by
//! contract and reject anything else at parse time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical lowercase identifier of a PHP extension (`"curl"`, `"gd"`).
///
/// Doubles as the lookup key in [`crate::catalog::ExtensionIndex`]; a
/// record's `name` field and its index key are the same value.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct ExtensionId(pub String);

impl ExtensionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExtensionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identity of a catalog file, declared inside the file itself.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct CatalogKey(pub String);

impl fmt::Display for CatalogKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Relative runtime cost impact of enabling an extension.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Performance {
    Low,
    Medium,
    High,
}

/// Relative security risk classification.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SecurityRating {
    Safe,
    Caution,
    Risk,
}

/// Relative installed footprint. Serialized under the `size` field.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Footprint {
    Small,
    Medium,
    Large,
}

use serde::{Deserialize, Serialize};

use super::SemanticVersion;
use super::deserialize_whole_number;

/// One immutable schema definition registered under a subject.
///
/// Identified globally by `id`, or by the `(subject, version)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(deserialize_with = "deserialize_whole_number")]
    pub id: i64,
    pub subject: String,
    pub version: SemanticVersion,
    /// Raw definition text.
    pub schema: String,
}

/// Identifier assigned by a successful registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaId {
    #[serde(deserialize_with = "deserialize_whole_number")]
    pub id: i64,
}

/// Outcome of a compatibility check against registered schema(s).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compatibility {
    #[serde(rename = "isCompatible")]
    pub is_compatible: bool,
}

//! Value types exchanged with the registry.
//!
//! Every type is an immutable value once returned; state changes on the
//! server are observed by fetching a new value.

mod config;
mod schema;
mod semver;
mod subject;

pub use config::{CompatibilityType, ConfigEntry, Property, RegistryConfig};
pub use schema::{Compatibility, Schema, SchemaId};
pub use semver::{
    SemanticVersion, VersionSelector, is_major_version, is_semantic_version, parse_major_version,
};
pub use subject::Subject;

use serde::{Deserialize, Deserializer};

use crate::validate::whole_number;

/// Deserialize an `i64` from any whole JSON number (`1` or `1.0`).
pub(crate) fn deserialize_whole_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = serde_json::Number::deserialize(deserializer)?;
    whole_number(&number)
        .ok_or_else(|| serde::de::Error::custom(format!("expected an integer, got {number}")))
}

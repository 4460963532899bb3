use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownValueError;

/// Compatibility policy applied when new schemas are registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CompatibilityType {
    Full,
    Backward,
    Forward,
    None,
}

impl CompatibilityType {
    pub const ALL: [Self; 4] = [Self::Full, Self::Backward, Self::Forward, Self::None];

    /// Wire names, in the order of [`Self::ALL`].
    pub const NAMES: &'static [&'static str] = &["FULL", "BACKWARD", "FORWARD", "NONE"];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Full => "FULL",
            Self::Backward => "BACKWARD",
            Self::Forward => "FORWARD",
            Self::None => "NONE",
        }
    }
}

impl fmt::Display for CompatibilityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompatibilityType {
    type Err = UnknownValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownValueError {
                kind: "compatibility",
                value: s.to_string(),
                expected: Self::NAMES.join(", "),
            })
    }
}

/// Per-subject (or global) registry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    pub compatibility: CompatibilityType,
}

impl RegistryConfig {
    #[must_use]
    pub const fn new(compatibility: CompatibilityType) -> Self {
        Self { compatibility }
    }
}

/// Individually addressable field of [`RegistryConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Property {
    Compatibility,
}

impl Property {
    pub const ALL: [Self; 1] = [Self::Compatibility];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compatibility => "compatibility",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Compatibility => {
                "compatibility policy for new schemas: one of FULL, BACKWARD, FORWARD, NONE"
            }
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Property {
    type Err = UnknownValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownValueError {
                kind: "property",
                value: s.to_string(),
                expected: Self::ALL.map(Self::as_str).join(", "),
            })
    }
}

/// A scoped override of one [`RegistryConfig`] property for a subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigEntry {
    pub subject: String,
    pub property: Property,
    pub value: String,
}

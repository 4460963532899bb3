//! Semantic versions of schemas registered under a subject.
//!
//! The canonical text form is `v{major}.{minor}.{patch}`. Components are
//! non-negative decimal integers without leading zeros (a lone `0` is fine).
//! A major-only token `v{major}` addresses the newest schema within that
//! major version.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::VersionFormatError;

/// `vMAJOR.MINOR.PATCH` identifier of a schema within a subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SemanticVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl SemanticVersion {
    #[must_use]
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse `vMAJOR.MINOR.PATCH`.
    ///
    /// # Errors
    ///
    /// Returns [`VersionFormatError::Semantic`] when the `v` prefix is missing,
    /// there are not exactly three components, a component has a leading zero
    /// or a non-digit, or a component does not fit in `u32`.
    pub fn parse(text: &str) -> Result<Self, VersionFormatError> {
        let invalid = || VersionFormatError::Semantic(text.to_string());

        let rest = text.strip_prefix('v').ok_or_else(invalid)?;
        let mut parts = rest.split('.');
        let (Some(major), Some(minor), Some(patch), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };

        Ok(Self {
            major: parse_component(major).ok_or_else(invalid)?,
            minor: parse_component(minor).ok_or_else(invalid)?,
            patch: parse_component(patch).ok_or_else(invalid)?,
        })
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for SemanticVersion {
    type Err = VersionFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for SemanticVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SemanticVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

/// Whether `text` is a well-formed `vMAJOR.MINOR.PATCH`.
#[must_use]
pub fn is_semantic_version(text: &str) -> bool {
    SemanticVersion::parse(text).is_ok()
}

/// Whether `text` is a well-formed major-only token `vMAJOR`.
#[must_use]
pub fn is_major_version(text: &str) -> bool {
    parse_major_version(text).is_ok()
}

/// Parse a major-only token `vMAJOR`.
///
/// # Errors
///
/// Returns [`VersionFormatError::Major`] if `text` is not `v` followed by a
/// single component.
pub fn parse_major_version(text: &str) -> Result<u32, VersionFormatError> {
    text.strip_prefix('v')
        .and_then(parse_component)
        .ok_or_else(|| VersionFormatError::Major(text.to_string()))
}

/// `0` or a non-zero digit followed by digits.
fn parse_component(text: &str) -> Option<u32> {
    let well_formed = !text.is_empty()
        && text.bytes().all(|b| b.is_ascii_digit())
        && (text == "0" || !text.starts_with('0'));
    if well_formed { text.parse().ok() } else { None }
}

/// Which schema version an operation addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionSelector {
    /// The newest version under the subject.
    Latest,
    /// The newest version within a major version.
    Major(u32),
    /// One exact version.
    Exact(SemanticVersion),
}

impl VersionSelector {
    /// Path segment addressing this selector under `/versions/`.
    #[must_use]
    pub fn path_segment(&self) -> String {
        match self {
            Self::Latest => String::from("latest"),
            Self::Major(major) => format!("v{major}"),
            Self::Exact(version) => version.to_string(),
        }
    }
}

impl fmt::Display for VersionSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path_segment())
    }
}

impl FromStr for VersionSelector {
    type Err = VersionFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "latest" {
            return Ok(Self::Latest);
        }
        if let Ok(major) = parse_major_version(s) {
            return Ok(Self::Major(major));
        }
        SemanticVersion::parse(s)
            .map(Self::Exact)
            .map_err(|_| VersionFormatError::Selector(s.to_string()))
    }
}

impl From<SemanticVersion> for VersionSelector {
    fn from(version: SemanticVersion) -> Self {
        Self::Exact(version)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("v0.0.0", SemanticVersion::new(0, 0, 0))]
    #[case("v1.2.3", SemanticVersion::new(1, 2, 3))]
    #[case("v10.0.20", SemanticVersion::new(10, 0, 20))]
    #[case("v4294967295.0.1", SemanticVersion::new(u32::MAX, 0, 1))]
    fn parses_valid_versions(#[case] text: &str, #[case] expected: SemanticVersion) {
        assert_eq!(SemanticVersion::parse(text).unwrap(), expected);
        assert_eq!(expected.to_string(), text);
    }

    #[rstest]
    #[case("")]
    #[case("v")]
    #[case("v1")]
    #[case("v1.2")]
    #[case("2.3.1")]
    #[case("V1.2.3")]
    #[case("v1.2.3.4")]
    #[case("v01.2.3")]
    #[case("v1.02.3")]
    #[case("v1.2.00")]
    #[case("v-1.0.0")]
    #[case("v+1.0.0")]
    #[case("v1..3")]
    #[case("v1.2.3 ")]
    #[case("v1.2.x")]
    #[case("v4294967296.0.0")]
    fn rejects_malformed_versions(#[case] text: &str) {
        let err = SemanticVersion::parse(text).unwrap_err();
        assert_eq!(err, VersionFormatError::Semantic(text.to_string()));
    }

    #[rstest]
    fn format_then_parse_is_identity(
        #[values(0, 1, 9, 10, u32::MAX)] major: u32,
        #[values(0, 1, 9, 10, u32::MAX)] minor: u32,
        #[values(0, 1, 9, 10, u32::MAX)] patch: u32,
    ) {
        let version = SemanticVersion::new(major, minor, patch);
        let text = version.to_string();
        assert!(is_semantic_version(&text), "{text}");
        assert_eq!(SemanticVersion::parse(&text).unwrap(), version);
    }

    #[test]
    fn major_only_tokens_are_a_separate_grammar() {
        assert!(is_major_version("v0"));
        assert!(is_major_version("v12"));
        assert!(!is_major_version("v012"));
        assert!(!is_major_version("v1.0.0"));
        assert!(!is_semantic_version("v1"));
        assert_eq!(parse_major_version("v3").unwrap(), 3);
        assert_eq!(
            parse_major_version("3").unwrap_err(),
            VersionFormatError::Major("3".into())
        );
    }

    #[test]
    fn orders_by_major_minor_patch() {
        let mut versions = vec![
            SemanticVersion::new(2, 0, 0),
            SemanticVersion::new(1, 0, 1),
            SemanticVersion::new(1, 10, 0),
            SemanticVersion::new(1, 0, 0),
        ];
        versions.sort();
        assert_eq!(
            versions,
            vec![
                SemanticVersion::new(1, 0, 0),
                SemanticVersion::new(1, 0, 1),
                SemanticVersion::new(1, 10, 0),
                SemanticVersion::new(2, 0, 0),
            ]
        );
    }

    #[test]
    fn serializes_as_wire_string() {
        let version = SemanticVersion::new(1, 0, 2);
        assert_eq!(serde_json::to_string(&version).unwrap(), r#""v1.0.2""#);
        let parsed: SemanticVersion = serde_json::from_str(r#""v1.0.2""#).unwrap();
        assert_eq!(parsed, version);
        assert!(serde_json::from_str::<SemanticVersion>(r#""1.0.2""#).is_err());
    }

    #[rstest]
    #[case("latest", VersionSelector::Latest)]
    #[case("v2", VersionSelector::Major(2))]
    #[case("v2.1.0", VersionSelector::Exact(SemanticVersion::new(2, 1, 0)))]
    fn selector_parses_and_renders_path_segment(
        #[case] text: &str,
        #[case] expected: VersionSelector,
    ) {
        let selector: VersionSelector = text.parse().unwrap();
        assert_eq!(selector, expected);
        assert_eq!(selector.path_segment(), text);
    }

    #[test]
    fn selector_rejects_unknown_forms() {
        let err = "newest".parse::<VersionSelector>().unwrap_err();
        assert_eq!(err, VersionFormatError::Selector("newest".into()));
        assert!("v1.0".parse::<VersionSelector>().is_err());
    }
}

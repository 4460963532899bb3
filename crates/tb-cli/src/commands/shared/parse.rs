use tb_client::{Property, VersionSelector};

/// Parse `--version`; absent means the latest schema.
pub fn parse_selector(raw: Option<&str>) -> anyhow::Result<VersionSelector> {
    raw.filter(|raw| !raw.is_empty())
        .map_or(Ok(VersionSelector::Latest), |raw| {
            raw.parse().map_err(anyhow::Error::from)
        })
}

pub fn parse_property(raw: &str) -> anyhow::Result<Property> {
    raw.parse().map_err(anyhow::Error::from)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tb_client::SemanticVersion;

    use super::*;

    #[test]
    fn selector_defaults_to_latest() {
        assert_eq!(parse_selector(None).unwrap(), VersionSelector::Latest);
        assert_eq!(parse_selector(Some("")).unwrap(), VersionSelector::Latest);
    }

    #[test]
    fn selector_accepts_major_and_semantic_versions() {
        assert_eq!(parse_selector(Some("v2")).unwrap(), VersionSelector::Major(2));
        assert_eq!(
            parse_selector(Some("v1.0.3")).unwrap(),
            VersionSelector::Exact(SemanticVersion::new(1, 0, 3))
        );
    }

    #[test]
    fn selector_rejects_other_forms() {
        let err = parse_selector(Some("1.0")).unwrap_err();
        assert!(err.to_string().contains("1.0"));
    }

    #[test]
    fn property_names_are_checked() {
        assert_eq!(parse_property("compatibility").unwrap(), Property::Compatibility);
        assert!(parse_property("retention").is_err());
    }
}

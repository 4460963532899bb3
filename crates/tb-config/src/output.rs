//! Output rendering settings.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_indent() -> usize {
    2
}

const MAX_INDENT: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Spaces per level when pretty-printing schema definitions.
    #[serde(default = "default_indent")]
    pub indent: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            indent: default_indent(),
        }
    }
}

impl OutputConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when the indent is out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.indent > MAX_INDENT {
            return Err(ConfigError::invalid(
                "output.indent",
                format!("{} exceeds the maximum of {MAX_INDENT}", self.indent),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        assert_eq!(OutputConfig::default().indent, 2);
        assert!(OutputConfig { indent: 17 }.validate().is_err());
        assert!(OutputConfig { indent: 0 }.validate().is_ok());
    }
}

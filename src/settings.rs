//! Parser settings.

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

/// Tunable behaviour of a [`Parser`](crate::Parser).
///
/// Deserializable so a host program can embed it in its own configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserSettings {
    /// Separates a token's name from its value (default: `=`).
    pub value_separator: String,
}

impl Default for ParserSettings {
    fn default() -> Self {
        Self {
            value_separator: default_value_separator(),
        }
    }
}

fn default_value_separator() -> String {
    "=".to_string()
}

impl ParserSettings {
    /// Validates the settings.
    ///
    /// Checks:
    /// - The separator is non-empty
    /// - The separator contains no whitespace
    pub fn validate(&self) -> Result<(), SettingsError> {
        let separator = &self.value_separator;
        if separator.is_empty() || separator.chars().any(char::is_whitespace) {
            return Err(SettingsError::InvalidSeparator {
                separator: separator.clone(),
            });
        }
        Ok(())
    }
}

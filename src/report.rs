//! Structured error envelope for machine-readable diagnostics.

use serde::{Deserialize, Serialize};

use crate::error::{ParseError, RegistrationError, SettingsError};

/// `{ "ok": false, "error": { "code", "message", "names"? } }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Always `false`.
    pub ok: bool,
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Snake_case code from `error_type()`.
    pub code: String,
    /// The error's display text.
    pub message: String,
    /// Offending parameter names of a batched validation error.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub names: Option<Vec<String>>,
}

impl ErrorReport {
    fn new(code: &str, message: String, names: Option<&[String]>) -> Self {
        Self {
            ok: false,
            error: ErrorDetail {
                code: code.to_owned(),
                message,
                names: names.map(<[String]>::to_vec),
            },
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl From<&ParseError> for ErrorReport {
    fn from(err: &ParseError) -> Self {
        Self::new(err.error_type(), err.to_string(), err.names())
    }
}

impl From<&RegistrationError> for ErrorReport {
    fn from(err: &RegistrationError) -> Self {
        Self::new(err.error_type(), err.to_string(), None)
    }
}

impl From<&SettingsError> for ErrorReport {
    fn from(err: &SettingsError) -> Self {
        Self::new(err.error_type(), err.to_string(), None)
    }
}

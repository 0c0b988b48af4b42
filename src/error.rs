//! Error types for registration, settings and parsing.
//!
//! Registration and settings errors are programming mistakes in the
//! declaration; [`ParseError`] covers everything that can go wrong with an
//! actual invocation. Every variant carries a stable machine code through
//! `error_type()`.

use thiserror::Error;

use crate::semantic::SemanticTag;
use crate::value::ValueKind;

/// Errors raised while declaring parameters.
///
/// A failed call leaves the parser exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// Short or full name is empty
    #[error("Parameter name must not be empty")]
    EmptyName,

    /// Name contains whitespace
    #[error("Parameter name '{name}' must not contain whitespace")]
    NameContainsWhitespace { name: String },

    /// Short and full name are equal
    #[error("Parameter '{name}' uses the same short and full name")]
    SameShortAndFull { name: String },

    /// Name already belongs to another parameter
    #[error("Parameter name '{name}' is already registered")]
    DuplicateName { name: String },

    /// `necessary()` after `default_value()`
    #[error("Parameter '{name}' has a default value, it cannot be necessary")]
    NecessaryWithDefault { name: String },

    /// `default_value()` after `necessary()`
    #[error("Parameter '{name}' is necessary, it cannot have a default value")]
    DefaultWithNecessary { name: String },

    /// Default on a flag
    #[error("Parameter '{name}' takes no value, it cannot have a default value")]
    DefaultOnFlag { name: String },

    /// Default does not fit the declared kind
    #[error("Default value for parameter '{name}' must be {expected}, got {actual}")]
    DefaultKindMismatch {
        name: String,
        expected: ValueKind,
        actual: ValueKind,
    },

    /// String default contains whitespace
    #[error("Default value '{value}' of parameter '{name}' must not contain whitespace")]
    DefaultContainsWhitespace { name: String, value: String },

    /// Semantic tag on a non-string parameter
    #[error("Semantic check '{tag}' on parameter '{name}' requires a string value")]
    SemanticRequiresString { name: String, tag: SemanticTag },

    /// Order 0
    #[error("Order of parameter '{name}' must be at least 1")]
    InvalidOrder { name: String },

    /// Order on a flag
    #[error("Parameter '{name}' takes no value, it cannot be positional")]
    OrderOnFlag { name: String },

    /// Another parameter already holds this order
    #[error("Order {order} of parameter '{name}' is already taken by '{existing}'")]
    DuplicateOrder {
        name: String,
        order: usize,
        existing: String,
    },
}

impl RegistrationError {
    pub fn error_type(&self) -> &'static str {
        match self {
            RegistrationError::EmptyName => "empty_name",
            RegistrationError::NameContainsWhitespace { .. } => "name_contains_whitespace",
            RegistrationError::SameShortAndFull { .. } => "same_short_and_full",
            RegistrationError::DuplicateName { .. } => "duplicate_name",
            RegistrationError::NecessaryWithDefault { .. } => "necessary_with_default",
            RegistrationError::DefaultWithNecessary { .. } => "default_with_necessary",
            RegistrationError::DefaultOnFlag { .. } => "default_on_flag",
            RegistrationError::DefaultKindMismatch { .. } => "default_kind_mismatch",
            RegistrationError::DefaultContainsWhitespace { .. } => "default_contains_whitespace",
            RegistrationError::SemanticRequiresString { .. } => "semantic_requires_string",
            RegistrationError::InvalidOrder { .. } => "invalid_order",
            RegistrationError::OrderOnFlag { .. } => "order_on_flag",
            RegistrationError::DuplicateOrder { .. } => "duplicate_order",
        }
    }
}

/// Errors in parser settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// Separator is empty or contains whitespace
    #[error("Value separator '{separator}' must be non-empty and contain no whitespace")]
    InvalidSeparator { separator: String },
}

impl SettingsError {
    pub fn error_type(&self) -> &'static str {
        match self {
            SettingsError::InvalidSeparator { .. } => "invalid_separator",
        }
    }
}

/// Failures of the validation pipeline, in pipeline order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Tokens supplied to an empty registry
    #[error("Parameters supplied, but none are registered")]
    NothingRegistered,

    /// More tokens than registered parameters
    #[error("{supplied} parameters supplied, but only {registered} registered")]
    Redundant { supplied: usize, registered: usize },

    /// Names matching no parameter
    #[error("{}", batch(names, "is unknown", "are unknown"))]
    Unknown { names: Vec<String> },

    /// Parameters supplied more than once, by short name
    #[error("{}", batch(names, "is repeated", "are repeated"))]
    Repeated { names: Vec<String> },

    /// Necessary parameters not supplied
    #[error("{}", batch(names, "is necessary, but missing", "are necessary, but missing"))]
    MissingNecessary { names: Vec<String> },

    /// Flag given a value
    #[error("Parameter '{name}' takes no value")]
    UnexpectedValue { name: String },

    /// Valued parameter given no value, or an empty one
    #[error("Parameter '{name}' requires a value")]
    MissingValue { name: String },
}

impl ValidationError {
    pub fn error_type(&self) -> &'static str {
        match self {
            ValidationError::NothingRegistered => "nothing_registered",
            ValidationError::Redundant { .. } => "redundant",
            ValidationError::Unknown { .. } => "unknown_parameter",
            ValidationError::Repeated { .. } => "repetition",
            ValidationError::MissingNecessary { .. } => "missing_necessary",
            ValidationError::UnexpectedValue { .. } => "unexpected_value",
            ValidationError::MissingValue { .. } => "missing_value",
        }
    }

    /// Names listed by a batched error.
    pub fn names(&self) -> Option<&[String]> {
        match self {
            ValidationError::Unknown { names }
            | ValidationError::Repeated { names }
            | ValidationError::MissingNecessary { names } => Some(names),
            _ => None,
        }
    }
}

/// A semantic validator rejected a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Parameter '{name}' has invalid {tag} value '{value}': {reason}")]
pub struct SemanticError {
    pub name: String,
    pub tag: SemanticTag,
    pub value: String,
    pub reason: String,
}

/// Errors that terminate a `parse` call. No callback has run when one is
/// returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Separator occurs more than once in a token
    #[error("Name-value separator repeated in '{token}'")]
    AmbiguousToken { token: String },

    /// Unnamed token at a position no parameter claims
    #[error("Unnamed value '{token}' at position {position}, but no parameter has that order")]
    UnresolvedPositional { token: String, position: usize },

    /// A validation check failed
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Value text does not convert to the declared kind
    #[error("Parameter '{name}' expects {expected}, got '{received}'")]
    TypeMismatch {
        name: String,
        expected: ValueKind,
        received: String,
    },

    /// A semantic validator rejected a value
    #[error(transparent)]
    Semantic(#[from] SemanticError),
}

impl ParseError {
    pub fn error_type(&self) -> &'static str {
        match self {
            ParseError::AmbiguousToken { .. } => "ambiguous_token",
            ParseError::UnresolvedPositional { .. } => "unresolved_positional",
            ParseError::Validation(err) => err.error_type(),
            ParseError::TypeMismatch { .. } => "type_mismatch",
            ParseError::Semantic(_) => "semantic_error",
        }
    }

    /// Names listed by a batched validation error.
    pub fn names(&self) -> Option<&[String]> {
        match self {
            ParseError::Validation(err) => err.names(),
            _ => None,
        }
    }
}

/// "Parameter 'a' is x" or "Parameters 'a', 'b' are y".
fn batch(names: &[String], one: &str, many: &str) -> String {
    let quoted = names
        .iter()
        .map(|n| format!("'{n}'"))
        .collect::<Vec<_>>()
        .join(", ");
    if names.len() == 1 {
        format!("Parameter {quoted} {one}")
    } else {
        format!("Parameters {quoted} {many}")
    }
}

//! A single declared command-line parameter.

use std::fmt;

use crate::cell::ValueCell;
use crate::error::RegistrationError;
use crate::semantic::SemanticTag;
use crate::value::{Value, ValueKind};

/// Short and optional full name of a parameter (e.g. `-c` / `--count`).
///
/// Built from a single name (`"--version"`) or a `(short, full)` pair. An
/// empty full name in a pair means the single-name form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterNames {
    short: String,
    full: Option<String>,
}

impl ParameterNames {
    /// The canonical name, used in error messages and as identity.
    pub fn short(&self) -> &str {
        &self.short
    }

    pub fn full(&self) -> Option<&str> {
        self.full.as_deref()
    }

    /// Check whether `name` is either alias.
    pub fn matches(&self, name: &str) -> bool {
        self.short == name || self.full.as_deref() == Some(name)
    }

    /// Both names, short first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.short.as_str()).chain(self.full.as_deref())
    }

    pub(crate) fn validate(&self) -> Result<(), RegistrationError> {
        for name in self.iter() {
            if name.is_empty() {
                return Err(RegistrationError::EmptyName);
            }
            if name.chars().any(char::is_whitespace) {
                return Err(RegistrationError::NameContainsWhitespace {
                    name: name.to_owned(),
                });
            }
        }
        if self.full.as_deref() == Some(self.short.as_str()) {
            return Err(RegistrationError::SameShortAndFull {
                name: self.short.clone(),
            });
        }
        Ok(())
    }
}

impl From<&str> for ParameterNames {
    fn from(name: &str) -> Self {
        Self {
            short: name.to_owned(),
            full: None,
        }
    }
}

impl From<String> for ParameterNames {
    fn from(name: String) -> Self {
        Self {
            short: name,
            full: None,
        }
    }
}

impl From<(&str, &str)> for ParameterNames {
    fn from((short, full): (&str, &str)) -> Self {
        Self {
            short: short.to_owned(),
            full: (!full.is_empty()).then(|| full.to_owned()),
        }
    }
}

impl From<(String, String)> for ParameterNames {
    fn from((short, full): (String, String)) -> Self {
        Self {
            short,
            full: (!full.is_empty()).then_some(full),
        }
    }
}

impl fmt::Display for ParameterNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.full {
            Some(full) => write!(f, "{}, {}", self.short, full),
            None => f.write_str(&self.short),
        }
    }
}

/// What a parameter does when dispatched.
pub(crate) enum Action {
    /// Takes no value.
    Flag(Box<dyn Fn()>),
    /// Takes exactly one value of the cell's kind.
    Valued(ValueCell),
}

/// One registered command-line parameter.
///
/// Obtained read-only through `Parser::parameters()`; configured through
/// the `ParameterHandle` returned at registration.
pub struct Parameter {
    names: ParameterNames,
    necessary: bool,
    semantic: SemanticTag,
    order: Option<usize>,
    action: Action,
}

impl Parameter {
    pub(crate) fn new(names: ParameterNames, action: Action) -> Self {
        Self {
            names,
            necessary: false,
            semantic: SemanticTag::None,
            order: None,
            action,
        }
    }

    pub fn names(&self) -> &ParameterNames {
        &self.names
    }

    pub fn short_name(&self) -> &str {
        self.names.short()
    }

    pub fn is_necessary(&self) -> bool {
        self.necessary
    }

    pub fn has_default(&self) -> bool {
        self.default_value().is_some()
    }

    /// The stored default, already of [`Self::value_kind`].
    pub fn default_value(&self) -> Option<Value> {
        match &self.action {
            Action::Flag(_) => None,
            Action::Valued(cell) => cell.default_value(),
        }
    }

    /// `None` for a parameter that takes no value.
    pub fn value_kind(&self) -> Option<ValueKind> {
        match &self.action {
            Action::Flag(_) => None,
            Action::Valued(cell) => Some(cell.kind()),
        }
    }

    pub fn takes_value(&self) -> bool {
        matches!(self.action, Action::Valued(_))
    }

    pub fn semantic(&self) -> SemanticTag {
        self.semantic
    }

    /// 1-based positional slot, if any.
    pub fn order(&self) -> Option<usize> {
        self.order
    }

    pub(crate) fn action(&self) -> &Action {
        &self.action
    }

    pub(crate) fn mark_necessary(&mut self) -> Result<(), RegistrationError> {
        if self.has_default() {
            return Err(RegistrationError::NecessaryWithDefault {
                name: self.short_name().to_owned(),
            });
        }
        self.necessary = true;
        Ok(())
    }

    pub(crate) fn set_default(&mut self, value: Value) -> Result<(), RegistrationError> {
        let name = self.short_name().to_owned();
        if self.necessary {
            return Err(RegistrationError::DefaultWithNecessary { name });
        }
        let Action::Valued(cell) = &mut self.action else {
            return Err(RegistrationError::DefaultOnFlag { name });
        };
        let expected = cell.kind();
        if let (ValueKind::Str, Value::Str(text)) = (expected, &value) {
            if text.chars().any(char::is_whitespace) {
                return Err(RegistrationError::DefaultContainsWhitespace {
                    name,
                    value: text.clone(),
                });
            }
        }
        cell.set_default(value)
            .map_err(|rejected| RegistrationError::DefaultKindMismatch {
                name,
                expected,
                actual: rejected.kind(),
            })
    }

    pub(crate) fn set_semantic(&mut self, tag: SemanticTag) -> Result<(), RegistrationError> {
        if tag != SemanticTag::None && self.value_kind() != Some(ValueKind::Str) {
            return Err(RegistrationError::SemanticRequiresString {
                name: self.short_name().to_owned(),
                tag,
            });
        }
        self.semantic = tag;
        Ok(())
    }

    /// Caller checks uniqueness of `order` across the registry.
    pub(crate) fn set_order(&mut self, order: usize) -> Result<(), RegistrationError> {
        let name = self.short_name().to_owned();
        if order == 0 {
            return Err(RegistrationError::InvalidOrder { name });
        }
        if !self.takes_value() {
            return Err(RegistrationError::OrderOnFlag { name });
        }
        self.order = Some(order);
        Ok(())
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parameter")
            .field("names", &self.names)
            .field("kind", &self.value_kind())
            .field("necessary", &self.necessary)
            .field("default", &self.default_value())
            .field("semantic", &self.semantic)
            .field("order", &self.order)
            .finish()
    }
}

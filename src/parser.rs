//! The parser: registration, then any number of parses.

use crate::dispatch::dispatch;
use crate::error::{ParseError, RegistrationError, SettingsError};
use crate::extract::Extractor;
use crate::parameter::{Action, Parameter, ParameterNames};
use crate::pipeline::{self, CheckContext};
use crate::positional;
use crate::registry::{ParameterHandle, Registry};
use crate::semantic::{SemanticTag, SemanticValidators};
use crate::settings::ParserSettings;
use crate::value::ArgValue;

/// Binds command-line tokens to typed callbacks.
///
/// Registration needs `&mut self` and parsing `&self`, so no parameter can
/// change while a parse is running.
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// use argbind::Parser;
///
/// let seen = Rc::new(Cell::new(0));
/// let sink = Rc::clone(&seen);
///
/// let mut parser = Parser::new();
/// parser.add_parameter(("-n", "--num"), move |n: i32| sink.set(n)).unwrap();
/// parser.parse(["--num=42"]).unwrap();
/// assert_eq!(seen.get(), 42);
/// ```
#[derive(Debug, Default)]
pub struct Parser {
    registry: Registry,
    settings: ParserSettings,
    validators: SemanticValidators,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: ParserSettings) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self {
            settings,
            ..Self::default()
        })
    }

    pub fn settings(&self) -> &ParserSettings {
        &self.settings
    }

    /// Replace the name-value separator. On error the old one stays.
    pub fn set_value_separator(&mut self, separator: &str) -> Result<(), SettingsError> {
        let settings = ParserSettings {
            value_separator: separator.to_owned(),
        };
        settings.validate()?;
        self.settings = settings;
        Ok(())
    }

    /// Install or replace the validator for `tag`.
    pub fn set_semantic_validator<F>(&mut self, tag: SemanticTag, validator: F)
    where
        F: Fn(&str) -> Result<(), String> + 'static,
    {
        self.validators.insert(tag, validator);
    }

    /// Register a parameter that takes no value.
    pub fn add_flag<F>(
        &mut self,
        names: impl Into<ParameterNames>,
        callback: F,
    ) -> Result<ParameterHandle<'_>, RegistrationError>
    where
        F: Fn() + 'static,
    {
        self.register(names.into(), Action::Flag(Box::new(callback)))
    }

    /// Register a parameter whose value is converted to `T`.
    pub fn add_parameter<T, F>(
        &mut self,
        names: impl Into<ParameterNames>,
        callback: F,
    ) -> Result<ParameterHandle<'_>, RegistrationError>
    where
        T: ArgValue,
        F: Fn(T) + 'static,
    {
        self.register(names.into(), Action::Valued(T::into_cell(Box::new(callback))))
    }

    fn register(
        &mut self,
        names: ParameterNames,
        action: Action,
    ) -> Result<ParameterHandle<'_>, RegistrationError> {
        let index = self.registry.insert(Parameter::new(names, action))?;
        Ok(ParameterHandle::new(&mut self.registry, index))
    }

    /// Registered parameters in registration order.
    pub fn parameters(&self) -> impl Iterator<Item = &Parameter> {
        self.registry.iter()
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Validate `tokens` as a whole and, only if that succeeds, run the
    /// callbacks.
    ///
    /// Each call is independent: nothing from a previous parse is
    /// remembered.
    pub fn parse<I, S>(&self, tokens: I) -> Result<(), ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let raw: Vec<String> = tokens.into_iter().map(|t| t.as_ref().to_owned()).collect();
        tracing::debug!(tokens = raw.len(), parameters = self.registry.len(), "parsing");

        let extractor = Extractor::new(&self.settings.value_separator);
        let tokens = positional::tokenize(&self.registry, extractor, &raw)?;
        pipeline::validate(&CheckContext::new(&self.registry, &tokens, &self.validators))?;
        dispatch(&self.registry, &tokens)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn custom_separator() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut parser = Parser::with_settings(ParserSettings {
            value_separator: ":".into(),
        })
        .unwrap();
        parser
            .add_parameter(("-k", "--key"), move |v: String| sink.borrow_mut().push(v))
            .unwrap();

        parser.parse(["--key:a=b"]).unwrap();
        assert_eq!(*seen.borrow(), vec!["a=b"]);

        let err = parser.parse(["--key=a"]).unwrap_err();
        assert!(matches!(err, ParseError::Validation(ValidationError::Unknown { .. })));
    }

    #[test]
    fn invalid_separator_keeps_previous() {
        let mut parser = Parser::new();
        assert!(parser.set_value_separator(" ").is_err());
        assert!(parser.set_value_separator("").is_err());
        assert_eq!(parser.settings().value_separator, "=");
        parser.set_value_separator("::").unwrap();
        assert_eq!(parser.settings().value_separator, "::");
    }

    #[test]
    fn failed_registration_adds_nothing() {
        let mut parser = Parser::new();
        parser.add_flag("-h", || {}).unwrap();
        assert!(parser.add_flag(("-h", "--host"), || {}).is_err());
        assert_eq!(parser.parameters().count(), 1);
    }

    #[test]
    fn custom_semantic_validator_replaces_builtin() {
        let mut parser = Parser::new();
        parser.set_semantic_validator(SemanticTag::Ipv4, |v| {
            if v == "localhost" {
                Ok(())
            } else {
                Err("only localhost".into())
            }
        });
        parser
            .add_parameter("-a", |_: String| {})
            .unwrap()
            .check_semantic(SemanticTag::Ipv4)
            .unwrap();

        assert!(parser.parse(["-a=localhost"]).is_ok());
        assert!(matches!(parser.parse(["-a=127.0.0.1"]), Err(ParseError::Semantic(_))));
    }
}

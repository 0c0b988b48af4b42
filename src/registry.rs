//! Parameter registry, the one store of declared parameters.

use std::collections::HashMap;

use crate::error::RegistrationError;
use crate::parameter::Parameter;
use crate::semantic::SemanticTag;
use crate::value::Value;

/// Insertion-ordered collection of parameters with a global name index.
///
/// Short and full names share one namespace: no name may belong to two
/// parameters.
#[derive(Debug, Default)]
pub struct Registry {
    parameters: Vec<Parameter>,
    by_name: HashMap<String, usize>,
}

impl Registry {
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Parameters in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Parameter> {
        self.parameters.get(index)
    }

    /// Look up a parameter by short or full name.
    pub fn find(&self, name: &str) -> Option<(usize, &Parameter)> {
        let index = *self.by_name.get(name)?;
        Some((index, &self.parameters[index]))
    }

    /// The parameter registered at positional slot `order`.
    pub fn by_order(&self, order: usize) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.order() == Some(order))
    }

    /// Whether any parameter accepts unnamed tokens.
    pub fn has_positional(&self) -> bool {
        self.parameters.iter().any(|p| p.order().is_some())
    }

    /// Add a parameter whose names are not yet taken. On error nothing is
    /// added.
    pub(crate) fn insert(&mut self, parameter: Parameter) -> Result<usize, RegistrationError> {
        parameter.names().validate()?;
        if let Some(taken) = parameter
            .names()
            .iter()
            .find(|name| self.by_name.contains_key(*name))
        {
            return Err(RegistrationError::DuplicateName {
                name: taken.to_owned(),
            });
        }

        let index = self.parameters.len();
        for name in parameter.names().iter() {
            self.by_name.insert(name.to_owned(), index);
        }
        tracing::debug!(parameter = %parameter.names(), kind = ?parameter.value_kind(), "registered parameter");
        self.parameters.push(parameter);
        Ok(index)
    }
}

/// Configures a freshly registered parameter.
///
/// Every method validates before changing anything, so a failed call leaves
/// the parameter in its previous state. Methods consume and return the
/// handle for chaining with `?`:
///
/// ```
/// use argbind::{Parser, SemanticTag};
///
/// # fn main() -> Result<(), argbind::RegistrationError> {
/// let mut parser = Parser::new();
/// parser
///     .add_parameter(("-c", "--config"), |path: String| drop(path))?
///     .default_value("/etc")?
///     .check_semantic(SemanticTag::Path)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ParameterHandle<'a> {
    registry: &'a mut Registry,
    index: usize,
}

impl<'a> ParameterHandle<'a> {
    pub(crate) fn new(registry: &'a mut Registry, index: usize) -> Self {
        Self { registry, index }
    }

    /// The parameter as configured so far.
    pub fn parameter(&self) -> &Parameter {
        &self.registry.parameters[self.index]
    }

    fn parameter_mut(&mut self) -> &mut Parameter {
        &mut self.registry.parameters[self.index]
    }

    /// Require the parameter in every invocation.
    pub fn necessary(mut self) -> Result<Self, RegistrationError> {
        self.parameter_mut().mark_necessary()?;
        Ok(self)
    }

    /// Value delivered to the callback when the parameter is absent.
    ///
    /// The value must be of the declared kind or widen to it without loss.
    pub fn default_value(mut self, value: impl Into<Value>) -> Result<Self, RegistrationError> {
        self.parameter_mut().set_default(value.into())?;
        Ok(self)
    }

    /// Validate the (string) value with the validator for `tag`.
    pub fn check_semantic(mut self, tag: SemanticTag) -> Result<Self, RegistrationError> {
        self.parameter_mut().set_semantic(tag)?;
        Ok(self)
    }

    /// Accept an unnamed token at 1-based position `order` as this
    /// parameter's value.
    pub fn order(mut self, order: usize) -> Result<Self, RegistrationError> {
        if let Some(existing) = self
            .registry
            .by_order(order)
            .filter(|p| p.short_name() != self.parameter().short_name())
        {
            return Err(RegistrationError::DuplicateOrder {
                name: self.parameter().short_name().to_owned(),
                order,
                existing: existing.short_name().to_owned(),
            });
        }
        self.parameter_mut().set_order(order)?;
        Ok(self)
    }
}

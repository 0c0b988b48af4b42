//! Value checks: shape, then semantics.

use super::CheckContext;
use crate::error::{ParseError, SemanticError, ValidationError};
use crate::semantic::SemanticTag;
use crate::value::Value;

/// A flag carries no value; a valued parameter carries one non-empty value.
pub(super) fn shape(ctx: &CheckContext<'_>) -> Result<(), ParseError> {
    for (token, _, parameter) in ctx.matched() {
        let name = token.name.clone();
        match (parameter.takes_value(), token.value.as_deref()) {
            (false, Some(_)) => return Err(ValidationError::UnexpectedValue { name }.into()),
            (true, None | Some("")) => return Err(ValidationError::MissingValue { name }.into()),
            _ => {}
        }
    }
    Ok(())
}

/// Supplied values first, in token order; then string defaults of absent
/// parameters, in registration order.
pub(super) fn semantic(ctx: &CheckContext<'_>) -> Result<(), ParseError> {
    for (token, _, parameter) in ctx.matched() {
        if let Some(value) = &token.value {
            check(ctx, &token.name, parameter.semantic(), value)?;
        }
    }

    for (index, parameter) in ctx.registry.iter().enumerate() {
        if parameter.semantic() == SemanticTag::None || ctx.supplied(index) {
            continue;
        }
        if let Some(Value::Str(default)) = parameter.default_value() {
            check(ctx, parameter.short_name(), parameter.semantic(), &default)?;
        }
    }
    Ok(())
}

fn check(ctx: &CheckContext<'_>, name: &str, tag: SemanticTag, value: &str) -> Result<(), SemanticError> {
    ctx.validators
        .validate(tag, value)
        .map_err(|reason| SemanticError {
            name: name.to_owned(),
            tag,
            value: value.to_owned(),
            reason,
        })
}

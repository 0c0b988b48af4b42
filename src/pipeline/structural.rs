//! Structural checks: counts and name matching.

use super::CheckContext;
use crate::error::{ParseError, ValidationError};

/// Tokens were supplied but nothing is registered.
pub(super) fn existence(ctx: &CheckContext<'_>) -> Result<(), ParseError> {
    if ctx.registry.is_empty() && !ctx.tokens.is_empty() {
        return Err(ValidationError::NothingRegistered.into());
    }
    Ok(())
}

/// Each parameter may appear at most once, so more tokens than parameters
/// can never be valid.
pub(super) fn redundancy(ctx: &CheckContext<'_>) -> Result<(), ParseError> {
    let supplied = ctx.tokens.len();
    let registered = ctx.registry.len();
    if supplied > registered {
        return Err(ValidationError::Redundant {
            supplied,
            registered,
        }
        .into());
    }
    Ok(())
}

pub(super) fn unknown(ctx: &CheckContext<'_>) -> Result<(), ParseError> {
    let mut names: Vec<String> = Vec::new();
    for token in ctx.unmatched() {
        if !names.iter().any(|n| *n == token.name) {
            names.push(token.name.clone());
        }
    }
    if !names.is_empty() {
        return Err(ValidationError::Unknown { names }.into());
    }
    Ok(())
}

/// Two tokens naming the same parameter, through either alias.
pub(super) fn repetition(ctx: &CheckContext<'_>) -> Result<(), ParseError> {
    let mut seen = vec![false; ctx.registry.len()];
    let mut names: Vec<String> = Vec::new();

    for (_, index, parameter) in ctx.matched() {
        if !std::mem::replace(&mut seen[index], true) {
            continue;
        }
        let name = parameter.short_name();
        if !names.iter().any(|n| n == name) {
            names.push(name.to_owned());
        }
    }

    if !names.is_empty() {
        return Err(ValidationError::Repeated { names }.into());
    }
    Ok(())
}

pub(super) fn necessity(ctx: &CheckContext<'_>) -> Result<(), ParseError> {
    let names: Vec<String> = ctx
        .registry
        .iter()
        .enumerate()
        .filter(|(index, parameter)| parameter.is_necessary() && !ctx.supplied(*index))
        .map(|(_, parameter)| parameter.short_name().to_owned())
        .collect();

    if !names.is_empty() {
        return Err(ValidationError::MissingNecessary { names }.into());
    }
    Ok(())
}

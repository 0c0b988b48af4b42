//! Validation pipeline, run before any callback.
//!
//! ```text
//! Existence → Redundancy → Unknown → Repetition → Necessity → Value shape → Semantic
//! ```
//!
//! Each stage is a pure function over the whole registry and the whole
//! token list. The first failing stage ends the parse; later stages never
//! run. Structural checks come first, value checks after, and semantic
//! validators (which may touch the filesystem) last.

mod structural;
mod values;

use crate::error::ParseError;
use crate::extract::Token;
use crate::parameter::Parameter;
use crate::registry::Registry;
use crate::semantic::SemanticValidators;

/// Everything a check can see.
pub(crate) struct CheckContext<'a> {
    pub registry: &'a Registry,
    pub tokens: &'a [Token],
    pub validators: &'a SemanticValidators,
    /// Registry index each token resolves to, by token position.
    resolved: Vec<Option<usize>>,
}

impl<'a> CheckContext<'a> {
    pub fn new(
        registry: &'a Registry,
        tokens: &'a [Token],
        validators: &'a SemanticValidators,
    ) -> Self {
        let resolved = tokens
            .iter()
            .map(|token| registry.find(&token.name).map(|(index, _)| index))
            .collect();
        Self {
            registry,
            tokens,
            validators,
            resolved,
        }
    }

    /// Tokens paired with the parameter they name, skipping unknown names.
    pub fn matched(&self) -> impl Iterator<Item = (&'a Token, usize, &'a Parameter)> + '_ {
        let registry = self.registry;
        self.tokens
            .iter()
            .zip(&self.resolved)
            .filter_map(move |(token, index)| {
                let index = (*index)?;
                registry.get(index).map(|parameter| (token, index, parameter))
            })
    }

    /// Tokens whose name matches no parameter.
    pub fn unmatched(&self) -> impl Iterator<Item = &'a Token> + '_ {
        self.tokens
            .iter()
            .zip(&self.resolved)
            .filter(|(_, index)| index.is_none())
            .map(|(token, _)| token)
    }

    /// Whether some token resolves to the parameter at `index`.
    pub fn supplied(&self, index: usize) -> bool {
        self.resolved.contains(&Some(index))
    }
}

type Check = fn(&CheckContext<'_>) -> Result<(), ParseError>;

/// Stages in the order they run.
const CHECKS: &[(&str, Check)] = &[
    ("existence", structural::existence),
    ("redundancy", structural::redundancy),
    ("unknown", structural::unknown),
    ("repetition", structural::repetition),
    ("necessity", structural::necessity),
    ("value_shape", values::shape),
    ("semantic", values::semantic),
];

/// Run every stage, stopping at the first failure.
pub(crate) fn validate(ctx: &CheckContext<'_>) -> Result<(), ParseError> {
    for (name, check) in CHECKS {
        if let Err(err) = check(ctx) {
            tracing::debug!(check = name, error = %err, "validation failed");
            return Err(err);
        }
        tracing::trace!(check = name, "check passed");
    }
    Ok(())
}

//! Unnamed tokens, resolved to named ones by position.

use crate::error::ParseError;
use crate::extract::{Extractor, Token};
use crate::registry::Registry;

/// Split every raw token, resolving unnamed ones by position.
///
/// A token is unnamed when at least one parameter declares an `order`, the
/// token holds no separator, and it is not a registered name. Its position
/// is its 1-based index among unnamed tokens, not among all tokens: in
/// `-v a b`, `a` is position 1. Without any ordered
/// parameter, unmatched tokens pass through untouched for the
/// unknown-parameter check to report.
pub(crate) fn tokenize(
    registry: &Registry,
    extractor: Extractor<'_>,
    raw_tokens: &[String],
) -> Result<Vec<Token>, ParseError> {
    let positional_enabled = registry.has_positional();
    let mut position = 0;

    raw_tokens
        .iter()
        .map(|raw| {
            if positional_enabled
                && !extractor.contains_separator(raw)
                && registry.find(raw).is_none()
            {
                position += 1;
                resolve(registry, raw, position)
            } else {
                extractor.split(raw)
            }
        })
        .collect()
}

fn resolve(registry: &Registry, raw: &str, position: usize) -> Result<Token, ParseError> {
    let Some(parameter) = registry.by_order(position) else {
        return Err(ParseError::UnresolvedPositional {
            token: raw.to_owned(),
            position,
        });
    };
    tracing::trace!(token = raw, position, parameter = parameter.short_name(), "resolved unnamed token");
    Ok(Token {
        raw: raw.to_owned(),
        name: parameter.short_name().to_owned(),
        value: Some(raw.to_owned()),
    })
}

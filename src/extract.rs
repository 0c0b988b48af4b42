//! Name/value extraction: raw token to name and optional value.

use crate::error::ParseError;

/// An input token split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token as supplied.
    pub raw: String,
    /// Name part, or the resolved parameter name for an unnamed token.
    pub name: String,
    /// Value part; `Some("")` when the separator is present with nothing
    /// after it.
    pub value: Option<String>,
}

/// Splits tokens on the configured separator.
#[derive(Debug, Clone, Copy)]
pub struct Extractor<'a> {
    separator: &'a str,
}

impl<'a> Extractor<'a> {
    pub fn new(separator: &'a str) -> Self {
        Self { separator }
    }

    pub fn contains_separator(&self, raw: &str) -> bool {
        raw.contains(self.separator)
    }

    /// Split `raw` into name and value.
    ///
    /// - no separator: the whole token is the name
    /// - one separator: name on the left, value on the right (either may be
    ///   empty)
    /// - more: [`ParseError::AmbiguousToken`]
    pub fn split(&self, raw: &str) -> Result<Token, ParseError> {
        let (name, value) = match raw.split_once(self.separator) {
            None => (raw, None),
            Some((_, value)) if value.contains(self.separator) => {
                return Err(ParseError::AmbiguousToken {
                    token: raw.to_owned(),
                });
            }
            Some((name, value)) => (name, Some(value.to_owned())),
        };
        tracing::trace!(token = raw, name, value = ?value, "extracted token");
        Ok(Token {
            raw: raw.to_owned(),
            name: name.to_owned(),
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(raw: &str) -> Result<Token, ParseError> {
        Extractor::new("=").split(raw)
    }

    #[test]
    fn no_separator_is_whole_name() {
        let token = split("--help").unwrap();
        assert_eq!(token.name, "--help");
        assert_eq!(token.value, None);
    }

    #[test]
    fn one_separator_splits() {
        let token = split("--count=10").unwrap();
        assert_eq!(token.name, "--count");
        assert_eq!(token.value.as_deref(), Some("10"));
        assert_eq!(token.raw, "--count=10");
    }

    #[test]
    fn empty_halves_are_defined() {
        let token = split("-c=").unwrap();
        assert_eq!(token.name, "-c");
        assert_eq!(token.value.as_deref(), Some(""));

        let token = split("=5").unwrap();
        assert_eq!(token.name, "");
        assert_eq!(token.value.as_deref(), Some("5"));
    }

    #[test]
    fn repeated_separator_is_ambiguous() {
        assert_eq!(
            split("-x=1=2"),
            Err(ParseError::AmbiguousToken {
                token: "-x=1=2".into()
            })
        );
        assert!(split("-x==").is_err());
    }

    #[test]
    fn multi_char_separator() {
        let extractor = Extractor::new("::");
        let token = extractor.split("-p::8080").unwrap();
        assert_eq!(token.name, "-p");
        assert_eq!(token.value.as_deref(), Some("8080"));
        assert!(extractor.contains_separator("a::b"));
        assert!(!extractor.contains_separator("a:b"));
        assert!(extractor.split("a::b::c").is_err());
    }
}

//! Semantic checks on string values.
//!
//! A parameter tagged with a [`SemanticTag`] has its value (or its string
//! default) handed to the validator registered for that tag before any
//! callback runs. The built-in validators live in [`builtin`]; callers can
//! swap any of them through [`SemanticValidators::insert`].

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Domain rule applied to a string value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticTag {
    #[default]
    None,
    /// Value must name an existing filesystem path.
    Path,
    Ipv4,
    Ipv6,
    /// Either an IPv4 or an IPv6 address.
    Ip,
}

impl SemanticTag {
    pub fn name(self) -> &'static str {
        match self {
            SemanticTag::None => "none",
            SemanticTag::Path => "path",
            SemanticTag::Ipv4 => "ipv4",
            SemanticTag::Ipv6 => "ipv6",
            SemanticTag::Ip => "ip",
        }
    }
}

impl fmt::Display for SemanticTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A validator: `Ok(())` accepts the value, `Err(reason)` rejects it.
pub type Validator = Box<dyn Fn(&str) -> Result<(), String>>;

/// Mapping from semantic tag to validator.
pub struct SemanticValidators {
    validators: HashMap<SemanticTag, Validator>,
}

impl SemanticValidators {
    /// A mapping with no validators installed.
    pub fn empty() -> Self {
        Self {
            validators: HashMap::new(),
        }
    }

    /// Install `validator` for `tag`, returning the one it replaces.
    ///
    /// The `None` tag is never consulted, so installing for it is a no-op.
    pub fn insert<F>(&mut self, tag: SemanticTag, validator: F) -> Option<Validator>
    where
        F: Fn(&str) -> Result<(), String> + 'static,
    {
        if tag == SemanticTag::None {
            return None;
        }
        self.validators.insert(tag, Box::new(validator))
    }

    /// Run the validator for `tag` on `value`.
    ///
    /// `None` always passes. A tag without an installed validator fails, so
    /// a missing collaborator never silently accepts input.
    pub fn validate(&self, tag: SemanticTag, value: &str) -> Result<(), String> {
        if tag == SemanticTag::None {
            return Ok(());
        }
        match self.validators.get(&tag) {
            Some(validator) => validator(value),
            None => Err(format!("no validator installed for '{tag}'")),
        }
    }
}

impl Default for SemanticValidators {
    fn default() -> Self {
        let mut validators = Self::empty();
        validators.insert(SemanticTag::Path, builtin::path_exists);
        validators.insert(SemanticTag::Ipv4, builtin::ipv4);
        validators.insert(SemanticTag::Ipv6, builtin::ipv6);
        validators.insert(SemanticTag::Ip, builtin::ip);
        validators
    }
}

impl fmt::Debug for SemanticValidators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tags: Vec<_> = self.validators.keys().map(|t| t.name()).collect();
        tags.sort_unstable();
        f.debug_struct("SemanticValidators")
            .field("tags", &tags)
            .finish()
    }
}

/// Built-in validators backed by the filesystem and `std::net`.
pub mod builtin {
    use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
    use std::path::Path;

    pub fn path_exists(value: &str) -> Result<(), String> {
        if Path::new(value).exists() {
            Ok(())
        } else {
            Err("no such path".to_string())
        }
    }

    pub fn ipv4(value: &str) -> Result<(), String> {
        value
            .parse::<Ipv4Addr>()
            .map(|_| ())
            .map_err(|_| "not an IPv4 address".to_string())
    }

    pub fn ipv6(value: &str) -> Result<(), String> {
        value
            .parse::<Ipv6Addr>()
            .map(|_| ())
            .map_err(|_| "not an IPv6 address".to_string())
    }

    pub fn ip(value: &str) -> Result<(), String> {
        value
            .parse::<IpAddr>()
            .map(|_| ())
            .map_err(|_| "neither IPv4 nor IPv6".to_string())
    }
}

//! Value kinds and typed values.
//!
//! Every valued parameter is bound to exactly one [`ValueKind`]. The set is
//! closed: a callback can only be registered for a type implementing
//! [`ArgValue`], and that trait is implemented here for every supported kind.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cell::{Slot, TypedCell, ValueCell};

/// The kind of value a parameter takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Bool,
    Char,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    /// UTF-8 string; the only kind that accepts a semantic check.
    Str,
}

impl ValueKind {
    /// Short type name used in error messages (`i32`, `string`, ...).
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Bool => "bool",
            ValueKind::Char => "char",
            ValueKind::I8 => "i8",
            ValueKind::I16 => "i16",
            ValueKind::I32 => "i32",
            ValueKind::I64 => "i64",
            ValueKind::U8 => "u8",
            ValueKind::U16 => "u16",
            ValueKind::U32 => "u32",
            ValueKind::U64 => "u64",
            ValueKind::F32 => "f32",
            ValueKind::F64 => "f64",
            ValueKind::Str => "string",
        }
    }

    /// Convert input text into a value of this kind.
    ///
    /// Uses `FromStr`; `bool` additionally accepts `1` and `0`.
    pub fn parse_text(self, text: &str) -> Option<Value> {
        fn parse<T: std::str::FromStr>(text: &str) -> Option<T> {
            text.parse().ok()
        }

        Some(match self {
            ValueKind::Bool => Value::Bool(match text {
                "1" => true,
                "0" => false,
                other => parse(other)?,
            }),
            ValueKind::Char => Value::Char(parse(text)?),
            ValueKind::I8 => Value::I8(parse(text)?),
            ValueKind::I16 => Value::I16(parse(text)?),
            ValueKind::I32 => Value::I32(parse(text)?),
            ValueKind::I64 => Value::I64(parse(text)?),
            ValueKind::U8 => Value::U8(parse(text)?),
            ValueKind::U16 => Value::U16(parse(text)?),
            ValueKind::U32 => Value::U32(parse(text)?),
            ValueKind::U64 => Value::U64(parse(text)?),
            ValueKind::F32 => Value::F32(parse(text)?),
            ValueKind::F64 => Value::F64(parse(text)?),
            ValueKind::Str => Value::Str(text.to_owned()),
        })
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A value of one of the supported kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Char(char),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    Str(String),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Bool(_) => ValueKind::Bool,
            Value::Char(_) => ValueKind::Char,
            Value::I8(_) => ValueKind::I8,
            Value::I16(_) => ValueKind::I16,
            Value::I32(_) => ValueKind::I32,
            Value::I64(_) => ValueKind::I64,
            Value::U8(_) => ValueKind::U8,
            Value::U16(_) => ValueKind::U16,
            Value::U32(_) => ValueKind::U32,
            Value::U64(_) => ValueKind::U64,
            Value::F32(_) => ValueKind::F32,
            Value::F64(_) => ValueKind::F64,
            Value::Str(_) => ValueKind::Str,
        }
    }

    /// Get the string if this is a `Str`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Losslessly convert into `target`, or give the value back unchanged.
    ///
    /// Accepts the same kind, an integer whose value lies in the target's
    /// range (within ±2^24 for `f32`, ±2^53 for `f64`), and `f32` into
    /// `f64`.
    pub fn coerce(self, target: ValueKind) -> Result<Value, Value> {
        if self.kind() == target {
            return Ok(self);
        }
        if let (Value::F32(v), ValueKind::F64) = (&self, target) {
            return Ok(Value::F64(f64::from(*v)));
        }
        let Some(wide) = self.as_i128() else {
            return Err(self);
        };

        let converted = match target {
            ValueKind::I8 => i8::try_from(wide).ok().map(Value::I8),
            ValueKind::I16 => i16::try_from(wide).ok().map(Value::I16),
            ValueKind::I32 => i32::try_from(wide).ok().map(Value::I32),
            ValueKind::I64 => i64::try_from(wide).ok().map(Value::I64),
            ValueKind::U8 => u8::try_from(wide).ok().map(Value::U8),
            ValueKind::U16 => u16::try_from(wide).ok().map(Value::U16),
            ValueKind::U32 => u32::try_from(wide).ok().map(Value::U32),
            ValueKind::U64 => u64::try_from(wide).ok().map(Value::U64),
            // Exact integer range of the mantissa.
            ValueKind::F32 => (wide.abs() <= 1 << 24).then(|| Value::F32(wide as f32)),
            ValueKind::F64 => (wide.abs() <= 1 << 53).then(|| Value::F64(wide as f64)),
            _ => None,
        };
        converted.ok_or(self)
    }

    fn as_i128(&self) -> Option<i128> {
        Some(match *self {
            Value::I8(v) => v.into(),
            Value::I16(v) => v.into(),
            Value::I32(v) => v.into(),
            Value::I64(v) => v.into(),
            Value::U8(v) => v.into(),
            Value::U16(v) => v.into(),
            Value::U32(v) => v.into(),
            Value::U64(v) => v.into(),
            _ => return None,
        })
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{v}"),
            Value::Char(v) => write!(f, "{v}"),
            Value::I8(v) => write!(f, "{v}"),
            Value::I16(v) => write!(f, "{v}"),
            Value::I32(v) => write!(f, "{v}"),
            Value::I64(v) => write!(f, "{v}"),
            Value::U8(v) => write!(f, "{v}"),
            Value::U16(v) => write!(f, "{v}"),
            Value::U32(v) => write!(f, "{v}"),
            Value::U64(v) => write!(f, "{v}"),
            Value::F32(v) => write!(f, "{v}"),
            Value::F64(v) => write!(f, "{v}"),
            Value::Str(v) => f.write_str(v),
        }
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_owned())
    }
}

/// A Rust type a valued parameter can deliver to its callback.
///
/// Implemented for `bool`, `char`, the signed and unsigned integers from 8
/// to 64 bits, `f32`, `f64` and `String`. The set is closed.
pub trait ArgValue: Clone + Into<Value> + 'static {
    const KIND: ValueKind;

    /// Extract `Self` from a value of exactly [`Self::KIND`].
    fn from_value(value: Value) -> Option<Self>;

    #[doc(hidden)]
    fn into_cell(callback: Box<dyn Fn(Self)>) -> ValueCell;
}

macro_rules! arg_value {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl ArgValue for $ty {
                const KIND: ValueKind = ValueKind::$kind;

                fn from_value(value: Value) -> Option<Self> {
                    match value {
                        Value::$kind(v) => Some(v),
                        _ => None,
                    }
                }

                fn into_cell(callback: Box<dyn Fn(Self)>) -> ValueCell {
                    ValueCell::new(Slot::$kind(TypedCell::new(callback)))
                }
            }

            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$kind(v)
                }
            }
        )*
    };
}

arg_value! {
    bool => Bool,
    char => Char,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    String => Str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_text_integers() {
        assert_eq!(ValueKind::I32.parse_text("-42"), Some(Value::I32(-42)));
        assert_eq!(ValueKind::U8.parse_text("255"), Some(Value::U8(255)));
        assert_eq!(ValueKind::U8.parse_text("256"), None);
        assert_eq!(ValueKind::U32.parse_text("-1"), None);
        assert_eq!(ValueKind::I64.parse_text("abc"), None);
    }

    #[test]
    fn parse_text_bool_accepts_digits() {
        assert_eq!(ValueKind::Bool.parse_text("true"), Some(Value::Bool(true)));
        assert_eq!(ValueKind::Bool.parse_text("0"), Some(Value::Bool(false)));
        assert_eq!(ValueKind::Bool.parse_text("1"), Some(Value::Bool(true)));
        assert_eq!(ValueKind::Bool.parse_text("yes"), None);
    }

    #[test]
    fn parse_text_char_requires_single_char() {
        assert_eq!(ValueKind::Char.parse_text("x"), Some(Value::Char('x')));
        assert_eq!(ValueKind::Char.parse_text("xy"), None);
    }

    #[test]
    fn parse_text_string_is_verbatim() {
        assert_eq!(
            ValueKind::Str.parse_text("/tmp/x"),
            Some(Value::Str("/tmp/x".into()))
        );
    }

    #[test]
    fn coerce_accepts_values_that_fit() {
        assert_eq!(Value::I32(5).coerce(ValueKind::I64), Ok(Value::I64(5)));
        assert_eq!(Value::I32(5).coerce(ValueKind::U32), Ok(Value::U32(5)));
        assert_eq!(Value::I32(7).coerce(ValueKind::U8), Ok(Value::U8(7)));
        assert_eq!(Value::I64(5).coerce(ValueKind::I32), Ok(Value::I32(5)));
        assert_eq!(Value::I64(5).coerce(ValueKind::F64), Ok(Value::F64(5.0)));
        assert_eq!(Value::I32(5).coerce(ValueKind::F32), Ok(Value::F32(5.0)));
        assert_eq!(Value::I32(1 << 24).coerce(ValueKind::F32), Ok(Value::F32(16_777_216.0)));
        assert_eq!(Value::F32(1.5).coerce(ValueKind::F64), Ok(Value::F64(1.5)));
    }

    #[test]
    fn coerce_rejects_values_that_do_not_fit() {
        assert_eq!(Value::I32(-1).coerce(ValueKind::U32), Err(Value::I32(-1)));
        assert_eq!(Value::I32(300).coerce(ValueKind::U8), Err(Value::I32(300)));
        assert_eq!(Value::U64(u64::MAX).coerce(ValueKind::I64), Err(Value::U64(u64::MAX)));
        assert_eq!(
            Value::I32((1 << 24) + 1).coerce(ValueKind::F32),
            Err(Value::I32((1 << 24) + 1))
        );
        assert_eq!(
            Value::I64((1 << 53) + 1).coerce(ValueKind::F64),
            Err(Value::I64((1 << 53) + 1))
        );
        assert_eq!(Value::F64(1.5).coerce(ValueKind::F32), Err(Value::F64(1.5)));
        assert_eq!(Value::F32(2.0).coerce(ValueKind::I32), Err(Value::F32(2.0)));
        assert_eq!(
            Value::Str("5".into()).coerce(ValueKind::I32),
            Err(Value::Str("5".into()))
        );
        assert_eq!(Value::Bool(true).coerce(ValueKind::Str), Err(Value::Bool(true)));
    }

    #[test]
    fn from_value_extracts_exact_kind() {
        assert_eq!(i32::from_value(Value::I32(3)), Some(3));
        assert_eq!(i32::from_value(Value::I64(3)), None);
        assert_eq!(String::from_value("a".into()), Some("a".to_string()));
    }

    #[test]
    fn display_uses_plain_text() {
        assert_eq!(Value::Str("abc".into()).to_string(), "abc");
        assert_eq!(Value::F64(2.5).to_string(), "2.5");
        assert_eq!(ValueKind::Str.to_string(), "string");
    }
}

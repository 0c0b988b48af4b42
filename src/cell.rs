//! Typed storage for a valued parameter's callback and default.

use crate::value::{ArgValue, Value, ValueKind};

/// A callback invocation bound to its argument, ready to run.
pub(crate) type Call<'a> = Box<dyn FnOnce() + 'a>;

/// Callback and optional default for one concrete value type.
pub struct TypedCell<T> {
    callback: Box<dyn Fn(T)>,
    default: Option<T>,
}

impl<T: ArgValue> TypedCell<T> {
    pub(crate) fn new(callback: Box<dyn Fn(T)>) -> Self {
        Self {
            callback,
            default: None,
        }
    }

    fn bind_text(&self, text: &str) -> Option<Call<'_>> {
        let arg = T::from_value(T::KIND.parse_text(text)?)?;
        Some(Box::new(move || (self.callback)(arg)))
    }

    fn bind_default(&self) -> Option<Call<'_>> {
        let arg = self.default.clone()?;
        Some(Box::new(move || (self.callback)(arg)))
    }

    fn default_value(&self) -> Option<Value> {
        self.default.clone().map(Into::into)
    }

    fn set_default(&mut self, value: Value) -> Result<(), Value> {
        let coerced = value.coerce(T::KIND)?;
        // coerce() only succeeds with a value of T::KIND
        self.default = Some(T::from_value(coerced.clone()).ok_or(coerced)?);
        Ok(())
    }
}

/// One variant per [`ValueKind`], each holding its own typed cell.
pub(crate) enum Slot {
    Bool(TypedCell<bool>),
    Char(TypedCell<char>),
    I8(TypedCell<i8>),
    I16(TypedCell<i16>),
    I32(TypedCell<i32>),
    I64(TypedCell<i64>),
    U8(TypedCell<u8>),
    U16(TypedCell<u16>),
    U32(TypedCell<u32>),
    U64(TypedCell<u64>),
    F32(TypedCell<f32>),
    F64(TypedCell<f64>),
    Str(TypedCell<String>),
}

macro_rules! with_cell {
    ($slot:expr, $cell:ident => $body:expr) => {
        match $slot {
            Slot::Bool($cell) => $body,
            Slot::Char($cell) => $body,
            Slot::I8($cell) => $body,
            Slot::I16($cell) => $body,
            Slot::I32($cell) => $body,
            Slot::I64($cell) => $body,
            Slot::U8($cell) => $body,
            Slot::U16($cell) => $body,
            Slot::U32($cell) => $body,
            Slot::U64($cell) => $body,
            Slot::F32($cell) => $body,
            Slot::F64($cell) => $body,
            Slot::Str($cell) => $body,
        }
    };
}

/// Type-erased value cell held by a valued parameter.
pub struct ValueCell {
    slot: Slot,
}

impl ValueCell {
    pub(crate) fn new(slot: Slot) -> Self {
        Self { slot }
    }

    pub(crate) fn kind(&self) -> ValueKind {
        match &self.slot {
            Slot::Bool(_) => ValueKind::Bool,
            Slot::Char(_) => ValueKind::Char,
            Slot::I8(_) => ValueKind::I8,
            Slot::I16(_) => ValueKind::I16,
            Slot::I32(_) => ValueKind::I32,
            Slot::I64(_) => ValueKind::I64,
            Slot::U8(_) => ValueKind::U8,
            Slot::U16(_) => ValueKind::U16,
            Slot::U32(_) => ValueKind::U32,
            Slot::U64(_) => ValueKind::U64,
            Slot::F32(_) => ValueKind::F32,
            Slot::F64(_) => ValueKind::F64,
            Slot::Str(_) => ValueKind::Str,
        }
    }

    /// Convert `text` and bind it to the callback; `None` if conversion fails.
    pub(crate) fn bind_text(&self, text: &str) -> Option<Call<'_>> {
        with_cell!(&self.slot, cell => cell.bind_text(text))
    }

    /// Bind the stored default to the callback; `None` without a default.
    pub(crate) fn bind_default(&self) -> Option<Call<'_>> {
        with_cell!(&self.slot, cell => cell.bind_default())
    }

    pub(crate) fn default_value(&self) -> Option<Value> {
        with_cell!(&self.slot, cell => cell.default_value())
    }

    /// Store a default, leaving the cell untouched if the kind does not fit.
    pub(crate) fn set_default(&mut self, value: Value) -> Result<(), Value> {
        with_cell!(&mut self.slot, cell => cell.set_default(value))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn recording_cell<T: ArgValue + std::fmt::Debug>() -> (ValueCell, Rc<RefCell<Vec<String>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let cell = T::into_cell(Box::new(move |v: T| sink.borrow_mut().push(format!("{v:?}"))));
        (cell, seen)
    }

    #[test]
    fn bind_text_converts_and_calls() {
        let (cell, seen) = recording_cell::<i32>();
        assert_eq!(cell.kind(), ValueKind::I32);
        let call = cell.bind_text("17").expect("convertible");
        assert!(seen.borrow().is_empty());
        call();
        assert_eq!(*seen.borrow(), vec!["17"]);
    }

    #[test]
    fn bind_text_rejects_unconvertible() {
        let (cell, _) = recording_cell::<u16>();
        assert!(cell.bind_text("-3").is_none());
    }

    #[test]
    fn default_round_trip_with_widening() {
        let (mut cell, seen) = recording_cell::<f64>();
        assert!(cell.bind_default().is_none());
        cell.set_default(Value::I32(5)).unwrap();
        assert_eq!(cell.default_value(), Some(Value::F64(5.0)));
        cell.bind_default().unwrap()();
        assert_eq!(*seen.borrow(), vec!["5.0"]);
    }

    #[test]
    fn set_default_mismatch_keeps_previous() {
        let (mut cell, _) = recording_cell::<String>();
        cell.set_default("a".into()).unwrap();
        assert_eq!(cell.set_default(Value::I32(1)), Err(Value::I32(1)));
        assert_eq!(cell.default_value(), Some(Value::Str("a".into())));
    }
}

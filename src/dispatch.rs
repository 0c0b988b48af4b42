//! Callback dispatch for a validated token list.

use crate::cell::Call;
use crate::error::ParseError;
use crate::extract::Token;
use crate::parameter::Action;
use crate::registry::Registry;

/// Convert every supplied value and bind every default, then run the
/// callbacks.
///
/// Supplied parameters fire in token order, defaults after them in
/// registration order. A conversion failure returns before the first
/// callback runs.
pub(crate) fn dispatch(registry: &Registry, tokens: &[Token]) -> Result<(), ParseError> {
    let mut supplied = vec![false; registry.len()];
    let mut calls: Vec<Call<'_>> = Vec::with_capacity(registry.len());

    for token in tokens {
        let Some((index, parameter)) = registry.find(&token.name) else {
            continue;
        };
        supplied[index] = true;

        match (parameter.action(), token.value.as_deref()) {
            (Action::Flag(callback), _) => calls.push(Box::new(move || callback())),
            (Action::Valued(cell), Some(text)) => {
                let call = cell.bind_text(text).ok_or_else(|| ParseError::TypeMismatch {
                    name: token.name.clone(),
                    expected: cell.kind(),
                    received: text.to_owned(),
                })?;
                calls.push(call);
            }
            (Action::Valued(cell), None) => {
                // value shape was checked before dispatch
                return Err(ParseError::TypeMismatch {
                    name: token.name.clone(),
                    expected: cell.kind(),
                    received: String::new(),
                });
            }
        }
    }

    for (parameter, _) in registry.iter().zip(&supplied).filter(|(_, s)| !**s) {
        if let Action::Valued(cell) = parameter.action() {
            if let Some(call) = cell.bind_default() {
                calls.push(call);
            }
        }
    }

    tracing::trace!(callbacks = calls.len(), "dispatching");
    for call in calls {
        call();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::extract::Extractor;
    use crate::parameter::Parameter;
    use crate::registry::ParameterHandle;
    use crate::value::ArgValue;

    type Log = Rc<RefCell<Vec<String>>>;

    fn registry(log: &Log) -> Registry {
        let mut registry = Registry::default();

        let sink = Rc::clone(log);
        registry
            .insert(Parameter::new(
                ("-v", "--verbose").into(),
                Action::Flag(Box::new(move || sink.borrow_mut().push("verbose".into()))),
            ))
            .unwrap();

        let sink = Rc::clone(log);
        let level = registry
            .insert(Parameter::new(
                ("-l", "--level").into(),
                Action::Valued(u8::into_cell(Box::new(move |v: u8| {
                    sink.borrow_mut().push(format!("level={v}"))
                }))),
            ))
            .unwrap();
        ParameterHandle::new(&mut registry, level).default_value(3u8).unwrap();

        let sink = Rc::clone(log);
        registry
            .insert(Parameter::new(
                ("-n", "--name").into(),
                Action::Valued(String::into_cell(Box::new(move |v: String| {
                    sink.borrow_mut().push(format!("name={v}"))
                }))),
            ))
            .unwrap();

        registry
    }

    fn tokens(raw: &[&str]) -> Vec<Token> {
        let extractor = Extractor::new("=");
        raw.iter().map(|r| extractor.split(r).unwrap()).collect()
    }

    #[test]
    fn supplied_then_defaults() {
        let log = Log::default();
        let registry = registry(&log);
        dispatch(&registry, &tokens(&["--name=x", "-v"])).unwrap();
        assert_eq!(*log.borrow(), vec!["name=x", "verbose", "level=3"]);
    }

    #[test]
    fn supplied_value_replaces_default() {
        let log = Log::default();
        let registry = registry(&log);
        dispatch(&registry, &tokens(&["-l=7"])).unwrap();
        assert_eq!(*log.borrow(), vec!["level=7"]);
    }

    #[test]
    fn conversion_failure_runs_nothing() {
        let log = Log::default();
        let registry = registry(&log);
        let err = dispatch(&registry, &tokens(&["-v", "-n=ok", "--level=300"])).unwrap_err();
        assert_eq!(
            err,
            ParseError::TypeMismatch {
                name: "--level".into(),
                expected: crate::value::ValueKind::U8,
                received: "300".into(),
            }
        );
        assert!(log.borrow().is_empty());
    }
}

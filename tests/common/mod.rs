//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use parking_lot::Mutex;
use std::sync::Arc;

/// Collects one line per callback invocation, in call order.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    calls: Arc<Mutex<Vec<String>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Callback for a flag: records `name`.
    pub fn flag(&self, name: &str) -> impl Fn() + 'static {
        let calls = Arc::clone(&self.calls);
        let name = name.to_owned();
        move || calls.lock().push(name.clone())
    }

    /// Callback for a valued parameter: records `name=value`.
    pub fn value<T: std::fmt::Display + 'static>(&self, name: &str) -> impl Fn(T) + 'static {
        let calls = Arc::clone(&self.calls);
        let name = name.to_owned();
        move |value: T| calls.lock().push(format!("{name}={value}"))
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    pub fn clear(&self) {
        self.calls.lock().clear();
    }

    pub fn is_empty(&self) -> bool {
        self.calls.lock().is_empty()
    }
}

pub fn args(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|s| s.to_string()).collect()
}

//! Declarative command-line parameter binding.
//!
//! Parameters are declared up front, each with a short (and optional full)
//! name and a typed callback. A parse runs the whole token list through a
//! fixed validation pipeline and only then invokes callbacks:
//!
//! ```text
//! Tokens → Extract / Resolve positional → Validate → Convert → Dispatch
//! ```
//!
//! A failed parse never runs a callback.
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use argbind::{Parser, ValidationError, ParseError};
//!
//! let log = Rc::new(RefCell::new(Vec::new()));
//! let mut parser = Parser::new();
//!
//! let sink = Rc::clone(&log);
//! parser.add_flag(("-h", "--help"), move || sink.borrow_mut().push("help".to_string()))?;
//! let sink = Rc::clone(&log);
//! parser
//!     .add_parameter(("-n", "--log-num"), move |n: u32| sink.borrow_mut().push(format!("num={n}")))?
//!     .default_value(1u32)?;
//!
//! parser.parse(["--help"])?;
//! assert_eq!(*log.borrow(), ["help", "num=1"]);
//!
//! let err = parser.parse(["-z"]).unwrap_err();
//! assert_eq!(err, ParseError::Validation(ValidationError::Unknown { names: vec!["-z".into()] }));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod cell;
mod dispatch;
pub mod error;
mod extract;
mod parameter;
mod parser;
mod pipeline;
mod positional;
mod registry;
mod report;
pub mod semantic;
mod settings;
mod value;

pub use error::{ParseError, RegistrationError, SemanticError, SettingsError, ValidationError};
pub use extract::{Extractor, Token};
pub use parameter::{Parameter, ParameterNames};
pub use parser::Parser;
pub use registry::{ParameterHandle, Registry};
pub use report::{ErrorDetail, ErrorReport};
pub use semantic::{builtin, SemanticTag, SemanticValidators, Validator};
pub use settings::ParserSettings;
pub use value::{ArgValue, Value, ValueKind};

//! Logging-tool front end declared with argbind.
//!
//! ```text
//! cargo run --example advanced -- -lf=/tmp --log-num=3 -ls
//! ARGBIND_LOG=argbind=trace cargo run --example advanced -- --help
//! ```
//!
//! Set `ARGBIND_JSON=1` to get parse failures as a JSON envelope.

use std::cell::RefCell;
use std::process::ExitCode;
use std::rc::Rc;

use argbind::{ErrorReport, Parser, SemanticTag};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default)]
struct LogOptions {
    file: Option<String>,
    num: u32,
    some: bool,
    init: bool,
    config: Option<String>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("ARGBIND_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

/// One line per parameter, driven by the declarations.
fn usage(parser: &Parser) -> String {
    let mut text = String::from("Usage: advanced [OPTIONS]\n\nOptions:\n");
    for parameter in parser.parameters() {
        let mut line = format!("  {}", parameter.names());
        if let Some(kind) = parameter.value_kind() {
            line.push_str(&format!("=<{kind}>"));
        }
        if parameter.is_necessary() {
            line.push_str("  (required)");
        }
        if let Some(default) = parameter.default_value() {
            line.push_str(&format!("  [default: {default}]"));
        }
        if parameter.semantic() != SemanticTag::None {
            line.push_str(&format!("  <{}>", parameter.semantic()));
        }
        text.push_str(&line);
        text.push('\n');
    }
    text
}

fn build(options: &Rc<RefCell<LogOptions>>, help: &Rc<RefCell<String>>) -> anyhow::Result<Parser> {
    let mut parser = Parser::new();

    let text = Rc::clone(help);
    parser.add_flag(("-h", "--help"), move || {
        print!("{}", text.borrow());
        std::process::exit(0);
    })?;
    parser.add_flag("--version", || {
        println!("advanced {}", env!("CARGO_PKG_VERSION"));
        std::process::exit(0);
    })?;

    let opts = Rc::clone(options);
    parser
        .add_parameter(("-c", "--config"), move |path: String| opts.borrow_mut().config = Some(path))?
        .default_value("/tmp")?
        .check_semantic(SemanticTag::Path)?;

    let opts = Rc::clone(options);
    parser
        .add_parameter(("-lf", "--log-file"), move |path: String| opts.borrow_mut().file = Some(path))?
        .necessary()?
        .check_semantic(SemanticTag::Path)?;

    let opts = Rc::clone(options);
    parser
        .add_parameter(("-ln", "--log-num"), move |n: u32| opts.borrow_mut().num = n)?
        .default_value(1u32)?;

    let opts = Rc::clone(options);
    parser.add_flag(("-ls", "--log-some"), move || opts.borrow_mut().some = true)?;

    let opts = Rc::clone(options);
    parser.add_flag(("-li", "--log-init"), move || opts.borrow_mut().init = true)?;

    *help.borrow_mut() = usage(&parser);
    Ok(parser)
}

fn main() -> anyhow::Result<ExitCode> {
    init_tracing();

    let options = Rc::new(RefCell::new(LogOptions::default()));
    let help = Rc::new(RefCell::new(String::new()));
    let parser = build(&options, &help)?;

    if let Err(err) = parser.parse(std::env::args().skip(1)) {
        if std::env::var_os("ARGBIND_JSON").is_some() {
            println!("{}", ErrorReport::from(&err).to_json()?);
        } else {
            eprintln!("error: {err}");
            eprintln!("Try '--help' for more information.");
        }
        return Ok(ExitCode::from(2));
    }

    println!("{:#?}", options.borrow());
    Ok(ExitCode::SUCCESS)
}

//! Parser settings embedded in a host program's configuration.

mod common;

use argbind::{Parser, ParserSettings, SettingsError};
use common::Recorder;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct HostConfig {
    name: String,
    #[serde(default)]
    cli: ParserSettings,
}

#[test]
fn settings_from_toml_table() {
    let config: HostConfig = toml::from_str(
        r#"
name = "tool"

[cli]
value_separator = ":"
"#,
    )
    .unwrap();
    assert_eq!(config.name, "tool");

    let recorder = Recorder::new();
    let mut parser = Parser::with_settings(config.cli).unwrap();
    parser.add_parameter(("-u", "--url"), recorder.value::<String>("url")).unwrap();

    parser.parse(["--url:example.org"]).unwrap();
    assert_eq!(recorder.calls(), vec!["url=example.org"]);
}

#[test]
fn missing_table_uses_defaults() {
    let config: HostConfig = toml::from_str(r#"name = "tool""#).unwrap();
    assert_eq!(config.cli, ParserSettings::default());
    assert_eq!(config.cli.value_separator, "=");

    let config: HostConfig = toml::from_str("name = \"tool\"\n[cli]\n").unwrap();
    assert_eq!(config.cli.value_separator, "=");
}

#[test]
fn whitespace_separator_is_rejected() {
    let config: HostConfig = toml::from_str("name = \"t\"\n[cli]\nvalue_separator = \" \"\n").unwrap();
    let err = Parser::with_settings(config.cli).unwrap_err();
    assert_eq!(err, SettingsError::InvalidSeparator { separator: " ".into() });
    assert_eq!(err.error_type(), "invalid_separator");
}

#[test]
fn multi_character_separator() {
    let recorder = Recorder::new();
    let mut parser = Parser::new();
    parser.set_value_separator("::").unwrap();
    parser.add_parameter("-n", recorder.value::<i16>("n")).unwrap();

    parser.parse(["-n::-4"]).unwrap();
    assert_eq!(recorder.calls(), vec!["n=-4"]);

    let err = parser.parse(["-n::1::2"]).unwrap_err();
    assert_eq!(err.error_type(), "ambiguous_token");
}

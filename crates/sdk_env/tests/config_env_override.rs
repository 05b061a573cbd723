#![allow(clippy::unwrap_used)]

use sdk_env::config::{Config, LogFormat};

#[test]
fn environment_variables_override_files() {
    std::env::set_var("PAYSDK__API__VERSION", "2024-12-18");
    std::env::set_var("PAYSDK__LOG__CONSOLE__LOG_FORMAT", "json");

    let config = Config::new_with_config_path(Some(
        sdk_env::workspace_path().join("config"),
    ))
    .unwrap();

    assert_eq!(config.api.version, "2024-12-18");
    assert_eq!(config.log.console.log_format, LogFormat::Json);
}

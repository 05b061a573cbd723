use sdk_env::Env;
use test_case::test_case;

#[test_case("Development", Env::Development ; "development")]
#[test_case("Sandbox", Env::Sandbox ; "sandbox")]
#[test_case("Production", Env::Production ; "production")]
fn parses_environment_names(name: &str, expected: Env) {
    assert_eq!(name.parse::<Env>().ok(), Some(expected));
    assert_eq!(expected.to_string(), name);
}

#[test]
fn rejects_unknown_environment() {
    assert!("Staging".parse::<Env>().is_err());
}

#[test]
fn workspace_path_holds_config_dir() {
    let path = sdk_env::workspace_path().join("config").join("Default.toml");
    assert!(path.exists(), "missing {}", path.display());
}

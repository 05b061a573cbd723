//!
//! Current environment related stuff.
//!

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Parent dir where Cargo.toml is stored
pub const CARGO_MANIFEST_DIR: &str = "CARGO_MANIFEST_DIR";
/// Env variable that sets Development/Sandbox/Production env
pub const RUN_ENV: &str = "RUN_ENV";

///
/// Environment of the payments platform the models are exchanged with.
///
#[derive(
    Debug, Default, Deserialize, Serialize, Clone, Copy, Display, EnumString, PartialEq, Eq,
)]
pub enum Env {
    /// Local development against a mock server.
    #[default]
    Development,
    /// Platform sandbox, test credentials only.
    Sandbox,
    /// Platform production.
    Production,
}

/// Name of current environment. Either "Development", "Sandbox" or "Production".
pub fn which() -> Env {
    #[cfg(debug_assertions)]
    let default_env = Env::Development;
    #[cfg(not(debug_assertions))]
    let default_env = Env::Production;

    std::env::var(RUN_ENV).map_or_else(|_| default_env, |v| v.parse().unwrap_or(default_env))
}

///
/// Base path to look for the `config/` directory.
///
/// Crates of the workspace live two levels below the workspace root, so when cargo provides
/// `CARGO_MANIFEST_DIR` (tests, build scripts) the root is found by walking up from it.
/// Otherwise the current directory is used.
///
pub fn workspace_path() -> PathBuf {
    if let Ok(manifest_dir) = std::env::var(CARGO_MANIFEST_DIR) {
        let mut path = PathBuf::from(manifest_dir);
        path.pop();
        path.pop();
        path
    } else {
        PathBuf::from(".")
    }
}

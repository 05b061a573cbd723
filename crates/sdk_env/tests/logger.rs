#![allow(clippy::unwrap_used)]

use once_cell::sync::OnceCell;
use sdk_env::{config::Config, logger, LogGuard};

fn logger() -> &'static LogGuard {
    static INSTANCE: OnceCell<LogGuard> = OnceCell::new();
    INSTANCE.get_or_init(|| {
        let config = Config::new().unwrap();

        logger::setup(&config.log, ["sdk_env", "logger"]).unwrap()
    })
}

fn encode_with_span(model: &str) -> usize {
    let span = sdk_env::tracing::debug_span!("encode", model);
    let _entered = span.enter();
    logger::debug!(model, "encoding model");
    model.len()
}

#[test]
fn basic() {
    logger();

    logger::info!(environment = %sdk_env::which(), "logger ready");
    assert_eq!(encode_with_span("CreateVendorRequest"), 19);
}

#[test]
fn second_setup_is_rejected() {
    logger();

    let config = Config::default();
    assert!(logger::setup(&config.log, ["sdk_env"]).is_err());
}

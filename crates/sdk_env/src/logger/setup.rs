//!
//! Setup logging subsystem.
//!

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    filter::{self, LevelFilter},
    fmt,
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
    EnvFilter, Layer,
};

use crate::config;

/// Keeps the non-blocking console writer alive; logs are flushed when it is dropped.
#[derive(Debug)]
pub struct LogGuard {
    _log_guards: Vec<WorkerGuard>,
}

///
/// Setup logging sub-system.
/// Expects config and list of names of crates to watch.
///
/// Crates to watch are logged at the configured console level, everything else at `WARN`.
/// `RUST_LOG` narrows what reaches the console further.
///
pub fn setup<Str: AsRef<str>>(
    conf: &config::Log,
    crates_to_watch: impl IntoIterator<Item = Str>,
) -> Result<LogGuard, TryInitError> {
    let mut guards = Vec::new();

    let subscriber = tracing_subscriber::registry().with(
        EnvFilter::builder()
            .with_default_directive(LevelFilter::TRACE.into())
            .from_env_lossy(),
    );

    if !conf.console.enabled {
        subscriber.try_init()?;
        return Ok(LogGuard {
            _log_guards: guards,
        });
    }

    let (console_writer, guard) = tracing_appender::non_blocking(std::io::stdout());
    guards.push(guard);

    let level = conf.console.level.into_level();
    let mut console_filter = filter::Targets::new().with_default(tracing::Level::WARN);
    for acrate in crates_to_watch {
        console_filter = console_filter.with_target(acrate.as_ref(), level);
    }

    match conf.console.log_format {
        config::LogFormat::Default => {
            let logging_layer = fmt::layer()
                .with_timer(fmt::time::time())
                .pretty()
                .with_writer(console_writer);

            subscriber
                .with(logging_layer.with_filter(console_filter))
                .try_init()?;
        }
        config::LogFormat::Json => {
            let logging_layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_writer(console_writer);

            subscriber
                .with(logging_layer.with_filter(console_filter))
                .try_init()?;
        }
    }

    // Returning the WorkerGuard for logs to be printed until it is dropped
    Ok(LogGuard {
        _log_guards: guards,
    })
}

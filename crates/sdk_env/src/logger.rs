//!
//! Logger of the SDK.
//!

pub use tracing::{debug, error, event as log, info, warn, Level};

mod setup;
pub use setup::{setup, LogGuard};

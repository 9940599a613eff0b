//! Logging setup.
//!
//! Thin layer over the `log` facade with an `env_logger` backend. Hosts call
//! `init_logging` once, early in startup; repeat calls are no-ops.

use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the global logger.
///
/// Filter resolution order: the explicit `filter` argument (env_logger
/// syntax, e.g. `"nammu=debug"`), then `RUST_LOG`, then a warn-level
/// default.
pub fn init_logging(filter: Option<&str>) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = filter {
            builder.parse_filters(filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Warn);
        }

        builder.init();
        log::debug!("logging initialized");
    });
}

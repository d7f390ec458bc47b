//! Logging backend for the browser.
//!
//! Library code logs through the `log` facade; this module installs a
//! backend that forwards records to the devtools console. Without it (as in
//! native unit tests) log calls are no-ops.

use std::sync::Once;

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

/// Logger configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub max_level: LevelFilter,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            max_level: if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info },
        }
    }
}

struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug => web_sys::console::log_1(&line),
            Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;
static INIT: Once = Once::new();

/// Installs the console logger once.
///
/// Subsequent calls are ignored, as is a failure because another logger
/// was already installed by the host.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(config.max_level);
            log::debug!("logging initialized");
        }
    });
}

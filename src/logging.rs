//! Console Logging
//!
//! `log` backend that writes to the browser console.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;
use web_sys::console;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format_line(
            record.level(),
            record.target(),
            &record.args().to_string(),
        ));
        match record.level() {
            Level::Error => console::error_1(&line),
            Level::Warn => console::warn_1(&line),
            Level::Info => console::info_1(&line),
            Level::Debug | Level::Trace => console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger. Debug builds log at `debug`, release at `info`.
pub fn init() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

/// `[CONTROLLER] ERROR message` style lines
fn format_line(level: Level, target: &str, message: &str) -> String {
    let module = target.rsplit("::").next().unwrap_or(target);
    format!("[{}] {} {}", module.to_uppercase(), level, message)
}

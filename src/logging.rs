//! Console Logger
//!
//! `log` backend that writes to the browser devtools console.

use log::{Level, LevelFilter, Log, Metadata, Record};

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
        let line = format_line(record.level(), record.target(), &record.args().to_string());
        let line = wasm_bindgen::JsValue::from_str(&line);
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::log_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

fn format_line(level: Level, target: &str, message: &str) -> String {
    // Crate-internal targets are noise in the console; keep only the last segment
    let short = target.rsplit("::").next().unwrap_or(target);
    let tag = format!("[{}] ", short);
    // The target tag is added here, once
    let message = message.strip_prefix(tag.as_str()).unwrap_or(message);
    format!("{:<5} {}{}", level, tag, message)
}

/// Install the console logger. Safe to call more than once.
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_err() {
        log::debug!("logger already installed");
    }
    log::set_max_level(level);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        assert_eq!(
            format_line(Level::Error, "helpdesk_ui::sync", "GET /tickets failed"),
            "ERROR [sync] GET /tickets failed"
        );
        assert_eq!(format_line(Level::Info, "app", "ready"), "INFO  [app] ready");
    }

    #[test]
    fn test_target_tag_not_repeated() {
        assert_eq!(
            format_line(Level::Error, "helpdesk_ui::sync", "[sync] list tickets failed"),
            "ERROR [sync] list tickets failed"
        );
        // Only a leading tag for the same target is folded
        assert_eq!(
            format_line(Level::Warn, "helpdesk_ui::sync", "[api] GET /tickets"),
            "WARN  [sync] [api] GET /tickets"
        );
    }
}

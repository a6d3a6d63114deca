//! Log backend that forwards records to the browser console, picking the
//! console method by level so devtools filtering works.

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
        let line = format_record(record);
        write_line(record.level(), &line);
    }

    fn flush(&self) {}
}

fn format_record(record: &Record) -> String {
    format!("[{:>5}] {}: {}", record.level(), record.target(), record.args())
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let msg = JsValue::from_str(line);
    match level {
        Level::Error => console::error_1(&msg),
        Level::Warn => console::warn_1(&msg),
        Level::Info => console::info_1(&msg),
        Level::Debug | Level::Trace => console::debug_1(&msg),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(level: Level, line: &str) {
    if level <= Level::Warn {
        eprintln!("{}", line);
    }
}

/// Install the console logger. Later calls keep the first logger but still
/// update the level.
pub(crate) fn init(level: LevelFilter) {
    // set_logger fails only when a logger is already installed
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}

//! Browser console logging.
//!
//! Every line is tagged `[virex]` and styled with `%c` so page logs stand
//! out from extension noise.

use wasm_bindgen::JsValue;

const FORMAT: &str = "%c[virex]%c %s";
const TAG_STYLE: &str = "color: #a855f7; font-weight: bold;";

#[derive(Clone, Copy)]
enum Level {
    Info,
    Warn,
    Error,
}

fn emit(level: Level, message: &str) {
    let format = JsValue::from_str(FORMAT);
    let tag = JsValue::from_str(TAG_STYLE);
    let reset = JsValue::from_str("");
    let message = JsValue::from_str(message);
    match level {
        Level::Info => web_sys::console::log_4(&format, &tag, &reset, &message),
        Level::Warn => web_sys::console::warn_4(&format, &tag, &reset, &message),
        Level::Error => web_sys::console::error_4(&format, &tag, &reset, &message),
    }
}

/// Informational line.
pub fn info(message: &str) {
    emit(Level::Info, message);
}

/// Something degraded but the page still works.
pub fn warn(message: &str) {
    emit(Level::Warn, message);
}

/// Something the page could not recover from.
pub fn error(message: &str) {
    emit(Level::Error, message);
}

/// Wordmark printed once on startup.
pub fn banner(brand: &str) {
    web_sys::console::log_2(
        &JsValue::from_str(&format!("%c{brand}")),
        &JsValue::from_str(
            "color: #22d3ee; font-family: monospace; font-size: 18px; font-weight: bold; letter-spacing: 6px;",
        ),
    );
    web_sys::console::log_2(
        &JsValue::from_str("%cCreative digital agency. Built with Rust + Leptos."),
        &JsValue::from_str("color: #888;"),
    );
}

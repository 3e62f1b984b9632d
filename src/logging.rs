//! `tracing` output for the browser.
//!
//! Events are formatted by `tracing-subscriber` and handed to the matching
//! `console.*` method, so browser devtools can filter them by level. Host builds
//! (tests) write to stderr instead.

use std::io::{self, Write};

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

/// Install the global subscriber. Safe to call more than once.
pub fn init(config: &AppConfig) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(ConsoleMakeWriter)
        .without_time()
        .try_init();
}

/// Hands out one [`ConsoleWriter`] per event.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers one formatted event and emits it on drop.
#[derive(Debug)]
pub struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buf: Vec::with_capacity(128),
        }
    }

    fn line(&self) -> String {
        String::from_utf8_lossy(&self.buf).trim_end().to_string()
    }
}

impl Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        emit(self.level, &self.line());
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::ERROR => web_sys::console::error_1(&value),
        Level::WARN => web_sys::console::warn_1(&value),
        Level::INFO => web_sys::console::info_1(&value),
        Level::DEBUG => web_sys::console::debug_1(&value),
        _ => web_sys::console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_buffers_whole_event() {
        let mut writer = ConsoleMakeWriter.make_writer();
        write!(writer, "analysis ").unwrap();
        writeln!(writer, "submitted").unwrap();
        assert_eq!(writer.level, Level::INFO);
        assert_eq!(writer.line(), "analysis submitted");
    }

    #[test]
    fn test_init_is_idempotent() {
        let config = AppConfig::default();
        init(&config);
        init(&config);
        tracing::info!("logging initialized twice");
    }

    #[test]
    fn test_bad_filter_falls_back() {
        let config = AppConfig {
            log_level: "[[not a filter".to_string(),
            ..AppConfig::default()
        };
        init(&config);
    }
}

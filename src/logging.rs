#![cfg(feature = "std")]

//! Minimal stdout sink behind the `log` facade.
//!
//! The engine only emits decision-level `debug!` lines, so a plain
//! println sink is enough here. An embedding application that wants
//! structured output should install its own logger instead of calling
//! `init_logging`.

use log::{self, LevelFilter, Metadata, Record};
use std::env;

struct StdoutLogger;

impl log::Log for StdoutLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            println!("{:<5} {} - {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StdoutLogger = StdoutLogger;

/// Install the stdout logger, with the level taken from the `SALVO_LOG`
/// environment variable. Defaults to `info` when unset or unparseable.
/// Does nothing if a logger is already installed.
pub fn init_logging() {
    let level = env::var("SALVO_LOG")
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}

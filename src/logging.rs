#![cfg(feature = "std")]

//! Stderr logger for the terminal binaries, so log lines never mix with the
//! board printed on stdout.

use log::{LevelFilter, Log, Metadata, Record};
use std::{env, io::Write};

/// Environment variable holding the log level filter.
pub const LOG_ENV: &str = "SOLO_BATTLESHIP_LOG";

const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

struct GameLogger;

impl Log for GameLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level() && metadata.target().starts_with("solo_battleship")
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let module = record
            .target()
            .strip_prefix("solo_battleship::")
            .unwrap_or("game");
        let mut err = std::io::stderr().lock();
        let _ = writeln!(err, "[{:<5} {}] {}", record.level(), module, record.args());
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: GameLogger = GameLogger;

/// Level requested by `raw`, falling back to `warn` when absent or unknown.
fn level_from(raw: Option<&str>) -> LevelFilter {
    raw.map(str::trim)
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(DEFAULT_LEVEL)
}

/// Install the logger with the level named by `SOLO_BATTLESHIP_LOG`.
/// Calling it again keeps the first logger.
pub fn init_logging() {
    let level = level_from(env::var(LOG_ENV).ok().as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

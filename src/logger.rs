use log::{Level, LevelFilter, Log, Metadata, Record};

// Diagnostics go to stderr; stdout carries only the simulator trace.
struct Logger;

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        const RESET: &str = "\x1b[0m";
        const INFO_COLOR: &str = "\x1b[36m";
        const WARN_COLOR: &str = "\x1b[33m";
        const ERROR_COLOR: &str = "\x1b[1;31m";

        if !self.enabled(record.metadata()) {
            return;
        }
        match record.level() {
            Level::Trace | Level::Debug => eprintln!("{}", record.args()),
            Level::Info => eprintln!("{}{}{}", INFO_COLOR, record.args(), RESET),
            Level::Warn => eprintln!("{}{}{}", WARN_COLOR, record.args(), RESET),
            Level::Error => eprintln!("{}{}{}", ERROR_COLOR, record.args(), RESET),
        }
    }

    fn flush(&self) {}
}

static LOGGER: Logger = Logger;

/// Maps `-v` occurrences to a level: none is Warn, one Debug, more Trace.
pub fn level_for(verbosity: u64) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

pub fn init(level: LevelFilter) {
    // a second init (e.g. from tests) keeps the first logger
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}

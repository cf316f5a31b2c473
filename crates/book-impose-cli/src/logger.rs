use chrono::Local;
use log::{LevelFilter, Metadata, Record};
use std::io::Write;

/// Writes timestamped log lines to stderr
pub struct StderrLogger {
    level: LevelFilter,
}

impl StderrLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }

    /// Level for a `-v` count and `-q` switch. Info by default.
    pub fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
        if quiet {
            return LevelFilter::Error;
        }
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    pub fn init(self) -> Result<(), log::SetLoggerError> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(level);
        Ok(())
    }
}

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let mut stderr = std::io::stderr().lock();
            // Nowhere left to report a failed write to stderr
            let _ = writeln!(
                stderr,
                "{} {} - {}",
                Local::now().format("%I:%M:%S"),
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_flags() {
        assert_eq!(StderrLogger::level_for(0, false), LevelFilter::Info);
        assert_eq!(StderrLogger::level_for(1, false), LevelFilter::Debug);
        assert_eq!(StderrLogger::level_for(3, false), LevelFilter::Trace);
        assert_eq!(StderrLogger::level_for(2, true), LevelFilter::Error);
    }

    #[test]
    fn test_init_installs_logger() {
        StderrLogger::new(LevelFilter::Warn).init().unwrap();
        assert_eq!(log::max_level(), LevelFilter::Warn);
    }

    #[test]
    fn test_enabled_respects_level() {
        let logger = StderrLogger::new(LevelFilter::Info);
        let info = Metadata::builder().level(log::Level::Info).build();
        let debug = Metadata::builder().level(log::Level::Debug).build();
        assert!(log::Log::enabled(&logger, &info));
        assert!(!log::Log::enabled(&logger, &debug));
    }
}

use log::{Level, LevelFilter, Log, Metadata, Record};
use spin::Lazy;

/// 输出到标准错误的日志，级别在构建时由 `USER_LOG` 决定
struct UserLogger {
    level: LevelFilter,
}

impl Log for UserLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let color = match record.level() {
            Level::Error => 31, // Red
            Level::Warn => 93,  // BrightYellow
            Level::Info => 34,  // Blue
            Level::Debug => 32, // Green
            Level::Trace => 90, // BrightBlack
        };
        eprintln!(
            "\u{1B}[{}m[{:>5}] {}\u{1B}[0m",
            color,
            record.level(),
            record.args(),
        );
    }

    fn flush(&self) {}
}

fn parse_level(level: Option<&str>) -> LevelFilter {
    match level {
        Some("ERROR") => LevelFilter::Error,
        Some("WARN") => LevelFilter::Warn,
        Some("INFO") => LevelFilter::Info,
        Some("DEBUG") => LevelFilter::Debug,
        Some("TRACE") => LevelFilter::Trace,
        _ => LevelFilter::Off,
    }
}

pub fn init() {
    static LOGGER: Lazy<UserLogger> = Lazy::new(|| UserLogger {
        level: parse_level(option_env!("USER_LOG")),
    });
    if log::set_logger(&*LOGGER).is_ok() {
        log::set_max_level(LOGGER.level);
    }
}

use log::{LevelFilter, Log, Metadata, Record};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

/// Environment variable holding the max log level (`error`, `warn`, `info`, `debug`, `trace`, `off`).
pub const LOG_LEVEL_ENV: &str = "TETHER_LOG";

/// Writes every record to stdout, one line per record.
pub struct StdoutLogger;

/// Writes records to `<dir>/YYYY-MM-DD.log`, switching files when the UTC date changes.
pub struct FileLogger {
    state: Mutex<FileLoggerState>,
}

struct FileLoggerState {
    dir: PathBuf,
    current_date: String,
    file: File,
}

impl FileLoggerState {
    fn roll_over_if_needed(&mut self) {
        let today = format_today();
        if today == self.current_date {
            return;
        }
        match open_day_file(&self.dir, &today) {
            Ok(file) => {
                self.file = file;
                self.current_date = today;
            }
            Err(e) => {
                // keep writing to the previous day's file
                eprintln!("tether-base: cannot open log file for {}: {}", today, e);
            }
        }
    }
}

fn open_day_file(dir: &Path, date: &str) -> io::Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(format!("{}.log", date)))
}

impl FileLogger {
    /// Create the directory if needed and open today's log file in append mode.
    pub fn new(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        let current_date = format_today();
        let file = open_day_file(&dir, &current_date)?;
        Ok(FileLogger {
            state: Mutex::new(FileLoggerState {
                dir,
                current_date,
                file,
            }),
        })
    }

    /// Path of the file currently being written.
    pub fn current_path(&self) -> PathBuf {
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.dir.join(format!("{}.log", state.current_date))
    }
}

/// `<timestamp> [LEVEL] [thread:<id>] <file>:<line> - <message>`
fn format_record(record: &Record) -> String {
    format!(
        "{} [{}] [thread:{:?}] {}:{} - {}",
        format_timestamp(),
        record.level(),
        std::thread::current().id(),
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0),
        record.args()
    )
}

impl Log for StdoutLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        println!("{}", format_record(record));
    }

    fn flush(&self) {
        io::stdout().flush().ok();
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record);
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.roll_over_if_needed();
        if let Err(e) = writeln!(state.file, "{}", line) {
            eprintln!("tether-base: log write failed: {}", e);
            eprintln!("{}", line);
        }
    }

    fn flush(&self) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.file.flush().ok();
    }
}

fn unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Current UTC time as `YYYY-MM-DDTHH:MM:SS`.
pub fn format_timestamp() -> String {
    let secs = unix_seconds();
    let (year, month, day) = civil_from_days((secs / 86400) as i64);
    let time_of_day = secs % 86400;
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
        year,
        month,
        day,
        time_of_day / 3600,
        (time_of_day % 3600) / 60,
        time_of_day % 60
    )
}

/// Current UTC date as `YYYY-MM-DD`.
pub fn format_today() -> String {
    let (year, month, day) = civil_from_days((unix_seconds() / 86400) as i64);
    format!("{:04}-{:02}-{:02}", year, month, day)
}

// Howard Hinnant's days-to-civil conversion.
fn civil_from_days(z: i64) -> (i64, u32, u32) {
    let z = z + 719468;
    let era = if z >= 0 { z } else { z - 146096 } / 146097;
    let doe = (z - era * 146097) as u32;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = yoe as i64 + era * 400;
    (if m <= 2 { y + 1 } else { y }, m, d)
}

/// Parse a level name, case-insensitively. Returns `None` for anything unknown.
pub fn parse_level_filter(name: &str) -> Option<LevelFilter> {
    name.trim().parse().ok()
}

/// Max level from `TETHER_LOG`, falling back to Debug in debug builds and Info in release builds.
pub fn level_from_env() -> LevelFilter {
    std::env::var(LOG_LEVEL_ENV)
        .ok()
        .and_then(|value| parse_level_filter(&value))
        .unwrap_or(if cfg!(debug_assertions) {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
}

fn install(logger: &'static dyn Log) {
    // a second install is ignored, the first logger stays active
    if log::set_logger(logger).is_ok() {
        log::set_max_level(level_from_env());
    }
}

/// Install `StdoutLogger` as the global logger. Only the first call per process has any effect.
pub fn init_stdout_logger() {
    static LOGGER: StdoutLogger = StdoutLogger;
    install(&LOGGER);
}

/// Install a `FileLogger` writing into `dir` as the global logger.
///
/// Fails if the directory or today's file cannot be created. Only the first
/// successful install per process has any effect.
pub fn init_file_logger(dir: impl Into<PathBuf>) -> io::Result<()> {
    let logger = FileLogger::new(dir)?;
    install(Box::leak(Box::new(logger)));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_civil_from_days_epoch() {
        assert_eq!(civil_from_days(0), (1970, 1, 1));
    }

    #[test]
    fn test_civil_from_days_leap_day() {
        assert_eq!(civil_from_days(11016), (2000, 2, 29));
    }

    #[test]
    fn test_civil_from_days_before_epoch() {
        assert_eq!(civil_from_days(-1), (1969, 12, 31));
    }

    #[test]
    fn test_format_timestamp_shape() {
        let ts = format_timestamp();
        assert_eq!(ts.len(), 19);
        assert_eq!(&ts[10..11], "T");
        assert_eq!(&ts[13..14], ":");
    }

    #[test]
    fn test_file_logger_rolls_over_stale_date() {
        let dir = std::env::temp_dir().join(format!("tether-log-{}-rollover", std::process::id()));
        let _ = fs::remove_dir_all(&dir);

        let logger = FileLogger::new(&dir).expect("create FileLogger");
        {
            let mut state = logger.state.lock().unwrap();
            state.current_date = "1999-01-01".to_string();
            state.file = open_day_file(&dir, "1999-01-01").unwrap();
        }

        log::set_max_level(LevelFilter::Trace);
        let record = log::RecordBuilder::new()
            .level(log::Level::Info)
            .file(Some("controller.rs"))
            .line(Some(7))
            .args(format_args!("session opened"))
            .build();
        logger.log(&record);
        logger.flush();

        let today = format_today();
        assert_eq!(logger.state.lock().unwrap().current_date, today);
        assert_eq!(logger.current_path(), dir.join(format!("{}.log", today)));

        let stale = fs::read_to_string(dir.join("1999-01-01.log")).unwrap();
        assert!(stale.is_empty());
        let fresh = fs::read_to_string(logger.current_path()).unwrap();
        assert!(fresh.contains("session opened"));

        fs::remove_dir_all(&dir).ok();
    }
}

use log::info;
use simplelog::*;

/// Maps a textual log level to a filter; unknown or missing levels fall back to `Info`.
pub fn level_from_str(loglevel: Option<&str>) -> LevelFilter {
    match loglevel {
        Some("trace") => LevelFilter::Trace,
        Some("debug") => LevelFilter::Debug,
        Some("info") => LevelFilter::Info,
        Some("warn") => LevelFilter::Warn,
        Some("error") => LevelFilter::Error,
        Some("off") => LevelFilter::Off,
        _ => LevelFilter::Info,
    }
}

/// Installs a terminal logger at the given level.
///
/// A logger can only be installed once per process; later calls are ignored.
pub fn init_logger(loglevel: Option<String>) {
    let level = level_from_str(loglevel.as_deref());
    let logger_instance = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
    match logger_instance {
        Ok(()) => info!("logger started with level {}", level),
        Err(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_str() {
        assert_eq!(level_from_str(Some("debug")), LevelFilter::Debug);
        assert_eq!(level_from_str(Some("error")), LevelFilter::Error);
        assert_eq!(level_from_str(Some("verbose")), LevelFilter::Info);
        assert_eq!(level_from_str(None), LevelFilter::Info);
    }

    #[test]
    fn test_init_logger_twice() {
        init_logger(Some("warn".to_string()));
        init_logger(None);
    }
}

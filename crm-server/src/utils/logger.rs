//! Logging Setup
//!
//! tracing-subscriber initialization: console output by default, plus a
//! daily-rolling file appender when a log directory is configured.

/// Initialize the logger
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Initialize the logger, writing to `log_dir` when provided
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let level = log_level
        .and_then(|l| l.parse().ok())
        .unwrap_or(tracing::Level::INFO);

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        if std::fs::create_dir_all(dir).is_ok() {
            let appender = tracing_appender::rolling::daily(dir, "crm-server");
            subscriber.with_writer(appender).init();
            return;
        }
        eprintln!("Log directory {dir} is not writable, falling back to console");
    }

    subscriber.init();
}

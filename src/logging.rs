use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logging system
///
/// # Arguments
/// * `verbose` - Enable verbose (DEBUG) logging
/// * `log_file` - Optional path to log file. If None, logs only to stderr
pub fn init(verbose: bool, log_file: Option<PathBuf>) {
    // RUST_LOG wins over the verbose flag
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer);

    if let Some(log_path) = log_file {
        let (dir, file_name) = split_log_path(&log_path);
        let _ = std::fs::create_dir_all(&dir);

        let file_appender = tracing_appender::rolling::daily(dir, file_name);
        let file_layer = fmt::layer()
            .with_writer(file_appender)
            .with_ansi(false)
            .json();

        subscriber.with(file_layer).init();
    } else {
        subscriber.init();
    }
}

fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("blogql={}", level)
}

/// Directory and file name for the rolling appender.
fn split_log_path(log_path: &Path) -> (PathBuf, PathBuf) {
    let dir = log_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
        .to_path_buf();
    let file_name = log_path
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("blogql.log"));
    (dir, file_name)
}

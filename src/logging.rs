use flexi_logger::{
    colored_default_format, opt_format, Cleanup, Criterion, FileSpec, FlexiLoggerError, Logger,
    LoggerHandle, Naming,
};
use std::path::Path;

/// Rotate log files once they reach this size.
const LOG_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Rotated log files kept on disk.
const KEPT_LOG_FILES: usize = 3;

/// Starts the global logger.
///
/// `level` is a `RUST_LOG`-style spec used when the environment does not set
/// one. Logs go to stderr in color, or to rotating files under `log_dir`.
/// The returned handle must be kept alive for file output to be flushed.
pub fn setup_logging(level: &str, log_dir: Option<&Path>) -> Result<LoggerHandle, FlexiLoggerError> {
    let logger = Logger::try_with_env_or_str(level)?;
    match log_dir {
        Some(dir) => logger
            .log_to_file(FileSpec::default().directory(dir))
            .format(opt_format)
            .rotate(
                Criterion::Size(LOG_FILE_SIZE),
                Naming::Numbers,
                Cleanup::KeepLogFiles(KEPT_LOG_FILES),
            )
            .start(),
        None => logger.format(colored_default_format).start(),
    }
}

//! Logging Infrastructure
//!
//! `RUST_LOG` wins when set; otherwise the configured level applies to this
//! crate and request tracing stays at info.

use std::fs;
use std::io;
use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Default filter directive for a given level
pub fn default_directive(level: &str) -> String {
    format!("booking_service={level},shared={level},tower_http=info,sqlx=warn")
}

/// Create the log directory (and parents) if missing
pub fn prepare_log_dir(dir: &str) -> io::Result<()> {
    fs::create_dir_all(Path::new(dir))
}

/// Initialize the global subscriber
///
/// Returns the appender guard when logging to files; keep it alive for the
/// lifetime of the process or buffered lines are lost. Fails when the log
/// directory cannot be created.
pub fn init_logger(
    log_level: &str,
    json: bool,
    log_dir: Option<&str>,
) -> io::Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(log_level)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        prepare_log_dir(dir)?;
        let file_appender = tracing_appender::rolling::daily(dir, "booking-service");
        let (writer, guard) = tracing_appender::non_blocking(file_appender);
        let builder = builder.with_writer(writer).with_ansi(false);
        if json {
            builder.json().init();
        } else {
            builder.init();
        }
        return Ok(Some(guard));
    }

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
    Ok(None)
}

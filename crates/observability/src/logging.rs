//! Process-wide logging initialization.
//!
//! Locally each run writes its own file under `logs/`. Inside a read-only
//! execution environment (an AWS Lambda root filesystem) file creation
//! fails with a permission error; the hosting runtime's stderr stream is
//! used instead, which Lambda forwards to CloudWatch.

use std::fs::{self, File};
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Utc;
use tracing_subscriber::EnvFilter;

/// Directory the per-run log files are written to.
const LOG_DIR: &str = "logs";

/// Which sink [`init`] ended up installing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    /// Per-run log file under the logs directory.
    File(PathBuf),
    /// The hosting runtime's stderr.
    Stderr,
}

/// Handle to the installed logging mode.
///
/// Dropping it does not tear logging down; the subscriber lives for the
/// rest of the process.
#[derive(Debug)]
pub struct LogGuard {
    sink: LogSink,
}

impl LogGuard {
    pub fn sink(&self) -> &LogSink {
        &self.sink
    }
}

/// Initialize logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops). Never fails:
/// when the log file cannot be created the fallback sink is installed and
/// startup continues.
pub fn init() -> LogGuard {
    init_at(LOG_DIR)
}

/// [`init`] with an explicit logs directory.
pub fn init_at(dir: impl AsRef<Path>) -> LogGuard {
    match open_run_file(dir.as_ref()) {
        Ok((path, file)) => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(tracing_subscriber::fmt::time::SystemTime)
                .try_init();
            tracing::info!("logging initialized");
            LogGuard {
                sink: LogSink::File(path),
            }
        }
        Err(err) => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(io::stderr)
                .with_ansi(false)
                .with_target(false)
                .with_file(true)
                .with_line_number(true)
                .try_init();
            if !is_permission_error(&err) {
                // A read-only filesystem is the expected Lambda case;
                // anything else gets one line before we carry on.
                tracing::warn!(error = %err, "log file unavailable, falling back to stderr");
            }
            LogGuard {
                sink: LogSink::Stderr,
            }
        }
    }
}

/// Capture everything by default; `RUST_LOG` still wins when set.
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace"))
}

fn open_run_file(dir: &Path) -> io::Result<(PathBuf, File)> {
    fs::create_dir_all(dir)?;
    let name = format!("info_{}.log", Utc::now().format("%Y-%m-%d_%H-%M-%S"));
    let path = dir.join(name);
    let file = File::create(&path)?;
    Ok((path, file))
}

fn is_permission_error(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        ErrorKind::PermissionDenied | ErrorKind::ReadOnlyFilesystem
    )
}

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::constants::{DEFAULT_LOG_FILTER, LOG_FILTER_ENV};

/// Open (or create) the log file in append mode.
pub fn open_log_file(path: &Path) -> Result<Arc<File>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
        }
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;
    Ok(Arc::new(file))
}

/// Install the global tracing subscriber.
///
/// The terminal UI owns stdout, so logs only ever go to a file; with no log
/// file configured this is a no-op and tracing macros go nowhere. Filtering
/// comes from SUMVIEW_LOG (RUST_LOG syntax), defaulting to `info`.
pub fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = open_log_file(path)?;
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_open_log_file_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs/sumview.log");

        let file = open_log_file(&path).unwrap();
        writeln!(&*file, "probe").unwrap();

        assert!(path.exists());
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("probe"));
    }

    #[test]
    fn test_open_log_file_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sumview.log");

        writeln!(&*open_log_file(&path).unwrap(), "first").unwrap();
        writeln!(&*open_log_file(&path).unwrap(), "second").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("first"));
        assert!(contents.contains("second"));
    }
}

//! Operation timing via start-timestamp files.
//!
//! One invocation records a start time with [`create_start_file`]; a
//! later invocation resolves the elapsed duration and fires the
//! long-operation hook when a threshold is exceeded. A missing or
//! unparsable start file means "no timing information", never an
//! error.

use anyhow::{Context, Result};
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::notify;

/// Default notification threshold in seconds.
pub const DEFAULT_THRESHOLD_SECS: i64 = 30;

/// Default operation label for long-operation notifications.
pub const DEFAULT_OPERATION_TYPE: &str = "Operation";

/// Where a long-operation duration comes from.
///
/// Exactly one source applies per invocation; the CLI enforces that
/// callers supply one of the two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DurationSource {
    /// Elapsed seconds supplied directly.
    Explicit(i64),
    /// Elapsed seconds computed from a start-timestamp file.
    FromFile(PathBuf),
}

/// Write the current Unix timestamp (whole seconds) to `path`,
/// creating parent directories as needed.
pub fn create_start_file(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create parent directories for {}", path.display())
            })?;
        }
    }

    fs::write(path, Utc::now().timestamp().to_string())
        .with_context(|| format!("Failed to write start file {}", path.display()))
}

/// Resolve elapsed seconds from a duration source.
///
/// `Explicit` durations pass through verbatim. `FromFile` reads the
/// file, parses a float epoch timestamp, and truncates `now - start`
/// to whole seconds; the file is deleted (best effort) only after a
/// successful read and parse. Any read or parse failure yields `None`.
pub fn resolve_duration(source: &DurationSource) -> Option<i64> {
    match source {
        DurationSource::Explicit(secs) => Some(*secs),
        DurationSource::FromFile(path) => {
            let contents = match fs::read_to_string(path) {
                Ok(contents) => contents,
                Err(e) => {
                    debug!("start file {} unreadable: {e}", path.display());
                    return None;
                }
            };

            let start: f64 = match contents.trim().parse() {
                Ok(start) => start,
                Err(e) => {
                    debug!("start file {} unparsable: {e}", path.display());
                    return None;
                }
            };

            if let Err(e) = fs::remove_file(path) {
                debug!("could not remove start file {}: {e}", path.display());
            }

            let now = Utc::now().timestamp_millis() as f64 / 1000.0;
            Some((now - start).trunc() as i64)
        }
    }
}

/// Strict threshold check: equality does not notify.
pub fn exceeds_threshold(elapsed: i64, threshold: i64) -> bool {
    elapsed > threshold
}

/// Run the long-operation check: resolve the duration and fire the
/// notification hook when it strictly exceeds `threshold`.
///
/// An unresolvable duration is a silent no-op.
pub fn long_operation(source: &DurationSource, threshold: i64, operation_type: &str) {
    let Some(elapsed) = resolve_duration(source) else {
        return;
    };

    if exceeds_threshold(elapsed, threshold) {
        notify::send_long_operation_hook(elapsed, operation_type);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn create_start_file_writes_current_timestamp() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("start.tmp");

        create_start_file(&path).unwrap();

        let stamp: i64 = fs::read_to_string(&path).unwrap().trim().parse().unwrap();
        let now = Utc::now().timestamp();
        assert!((now - stamp).abs() < 10, "stamp {stamp} too far from {now}");
    }

    #[test]
    fn create_start_file_creates_parent_directories() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("a/b/c/start.tmp");

        create_start_file(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn explicit_duration_passes_through() {
        assert_eq!(
            resolve_duration(&DurationSource::Explicit(42)),
            Some(42)
        );
    }

    #[test]
    fn valid_start_file_resolves_and_is_deleted() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("start.tmp");
        let start = Utc::now().timestamp() - 120;
        fs::write(&path, start.to_string()).unwrap();

        let elapsed = resolve_duration(&DurationSource::FromFile(path.clone())).unwrap();
        assert!((118..=122).contains(&elapsed), "elapsed was {elapsed}");
        assert!(!path.exists(), "start file should be consumed");
    }

    #[test]
    fn fractional_timestamp_is_accepted() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("start.tmp");
        let start = Utc::now().timestamp_millis() as f64 / 1000.0 - 60.5;
        fs::write(&path, format!("{start}\n")).unwrap();

        let elapsed = resolve_duration(&DurationSource::FromFile(path)).unwrap();
        assert!((58..=62).contains(&elapsed), "elapsed was {elapsed}");
    }

    #[test]
    fn missing_start_file_is_no_information() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("absent.tmp");

        assert_eq!(resolve_duration(&DurationSource::FromFile(path)), None);
    }

    #[test]
    fn unparsable_start_file_is_left_in_place() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("start.tmp");
        fs::write(&path, "not a timestamp").unwrap();

        assert_eq!(
            resolve_duration(&DurationSource::FromFile(path.clone())),
            None
        );
        // Deletion only happens after a successful parse.
        assert!(path.exists());
    }

    #[test]
    fn threshold_comparison_is_strict() {
        assert!(exceeds_threshold(31, 30));
        assert!(!exceeds_threshold(30, 30));
        assert!(!exceeds_threshold(29, 30));
        // Clock skew can produce a negative elapsed; never notify.
        assert!(!exceeds_threshold(-5, 0));
    }

    #[test]
    fn long_operation_consumes_file_below_threshold() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("start.tmp");
        fs::write(&path, Utc::now().timestamp().to_string()).unwrap();

        // Elapsed ~0 never beats a large threshold, but the file is
        // consumed regardless of the notification decision.
        long_operation(&DurationSource::FromFile(path.clone()), 3600, "Bash");
        assert!(!path.exists());
    }

    #[test]
    fn long_operation_on_missing_file_is_a_no_op() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("absent.tmp");

        long_operation(&DurationSource::FromFile(path), 0, "Bash");
    }
}

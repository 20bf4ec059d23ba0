//! Lightweight performance instrumentation.
//!
//! Two channels: RAII timing scopes reported to stderr when `--perf` is on,
//! and an opt-in event log written to the `--render-debug-log` path. Both
//! are off by default and cost a flag check when disabled.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{LazyLock, Mutex};
use std::time::Instant;

static SCOPES_ENABLED: AtomicBool = AtomicBool::new(false);
static EVENT_LOG: LazyLock<Mutex<Option<EventLog>>> = LazyLock::new(|| Mutex::new(None));

struct EventLog {
    start: Instant,
    writer: BufWriter<File>,
}

/// Times a region of code, reporting on drop.
#[derive(Debug)]
pub struct Scope {
    name: &'static str,
    start: Instant,
}

impl Drop for Scope {
    fn drop(&mut self) {
        if !is_enabled() {
            return;
        }
        let elapsed_ms = self.start.elapsed().as_secs_f64() * 1000.0;
        eprintln!("[perf] {}: {:.2} ms", self.name, elapsed_ms);
    }
}

pub fn set_enabled(enabled: bool) {
    SCOPES_ENABLED.store(enabled, Ordering::Relaxed);
}

pub fn is_enabled() -> bool {
    SCOPES_ENABLED.load(Ordering::Relaxed)
}

pub fn scope(name: &'static str) -> Scope {
    Scope {
        name,
        start: Instant::now(),
    }
}

/// Start writing the event log to `path`, or stop logging with `None`.
pub fn set_debug_log_path(path: Option<&Path>) -> std::io::Result<()> {
    let mut slot = EVENT_LOG.lock().expect("event log lock poisoned");
    match path {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            writeln!(writer, "# ted event log")?;
            writer.flush()?;
            *slot = Some(EventLog {
                start: Instant::now(),
                writer,
            });
        }
        None => *slot = None,
    }
    Ok(())
}

pub fn is_debug_log_enabled() -> bool {
    EVENT_LOG.lock().expect("event log lock poisoned").is_some()
}

/// Append one timestamped event. Silently does nothing when no log is open.
pub fn log_event(name: &str, detail: impl AsRef<str>) {
    let mut slot = EVENT_LOG.lock().expect("event log lock poisoned");
    let Some(log) = slot.as_mut() else {
        return;
    };
    let elapsed_ms = log.start.elapsed().as_secs_f64() * 1000.0;
    let _ = writeln!(log.writer, "[{elapsed_ms:>10.3} ms] {name}: {}", detail.as_ref());
    let _ = log.writer.flush();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_set_enabled_toggles_runtime_flag() {
        set_enabled(true);
        assert!(is_enabled());

        set_enabled(false);
        assert!(!is_enabled());
    }

    #[test]
    fn test_event_log_writes_events() {
        let temp_file = NamedTempFile::new().unwrap();
        set_debug_log_path(Some(temp_file.path())).unwrap();
        assert!(is_debug_log_enabled());
        log_event("test.event", "hello world");
        set_debug_log_path(None).unwrap();
        assert!(!is_debug_log_enabled());

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert!(content.contains("# ted event log"));
        assert!(content.contains("test.event: hello world"));
    }
}

//! The engine console: where components write their diagnostic lines.
//!
//! [`LogConsole`] forwards everything to the `log` facade so whatever logger
//! the host installed (the binary uses `env_logger`) decides where it ends
//! up. [`MemoryConsole`] keeps the lines around so they can be inspected
//! afterwards.

use std::sync::{Arc, Mutex, MutexGuard};

/// Log target used by [`LogConsole`]
pub const CONSOLE_TARGET: &str = "restprobe::console";

/// Diagnostic sink shared by all components of an engine
pub trait Console: Send + Sync {
    /// Informational line
    fn log(&self, message: &str);
    /// Error line
    fn log_error(&self, message: &str);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LogConsole;

impl LogConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for LogConsole {
    fn log(&self, message: &str) {
        log::info!(target: CONSOLE_TARGET, "{message}");
    }

    fn log_error(&self, message: &str) {
        log::error!(target: CONSOLE_TARGET, "{message}");
    }
}

/// A single line written to a [`MemoryConsole`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleLine {
    pub level: log::Level,
    pub message: String,
}

/// Console that records lines in memory. Clones share the same buffer.
#[derive(Debug, Default, Clone)]
pub struct MemoryConsole {
    lines: Arc<Mutex<Vec<ConsoleLine>>>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything written so far
    pub fn lines(&self) -> Vec<ConsoleLine> {
        self.buffer().clone()
    }

    /// Messages only, in the order they were written
    pub fn messages(&self) -> Vec<String> {
        self.lines().into_iter().map(|l| l.message).collect()
    }

    pub fn clear(&self) {
        self.buffer().clear();
    }

    // A writer panicking mid-push leaves the buffer intact, so keep using it
    fn buffer(&self) -> MutexGuard<'_, Vec<ConsoleLine>> {
        self.lines.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn push(&self, level: log::Level, message: &str) {
        self.buffer().push(ConsoleLine {
            level,
            message: message.to_string(),
        });
    }
}

impl Console for MemoryConsole {
    fn log(&self, message: &str) {
        self.push(log::Level::Info, message);
    }

    fn log_error(&self, message: &str) {
        self.push(log::Level::Error, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_console_records_levels_in_order() {
        let console = MemoryConsole::new();
        console.log("first");
        console.log_error("second");

        assert_eq!(
            console.lines(),
            vec![
                ConsoleLine { level: log::Level::Info, message: "first".into() },
                ConsoleLine { level: log::Level::Error, message: "second".into() },
            ]
        );
    }

    #[test]
    fn memory_console_clones_share_buffer() {
        let console = MemoryConsole::new();
        let shared: Arc<dyn Console> = Arc::new(console.clone());

        shared.log("hello");
        assert_eq!(console.messages(), vec!["hello".to_string()]);

        console.clear();
        assert!(console.lines().is_empty());
    }

    #[test]
    fn memory_console_keeps_recording_after_poisoning() {
        let console = MemoryConsole::new();
        console.log("before");

        let poisoner = console.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.lines.lock().unwrap();
            panic!("poison the buffer");
        })
        .join();
        assert!(console.lines.is_poisoned());

        console.log_error("after");
        assert_eq!(console.messages(), vec!["before".to_string(), "after".to_string()]);

        console.clear();
        assert!(console.lines().is_empty());
    }

    #[test]
    fn log_console_does_not_need_a_logger() {
        // No logger installed: the facade drops the lines silently
        let console = LogConsole::new();
        console.log("Response: {}");
        console.log_error("Error: nope");
    }
}

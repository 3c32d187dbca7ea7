use std::io::Write;
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamKind {
    Stdout,
    Stderr,
}

impl StreamKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StreamKind::Stdout => "stdout",
            StreamKind::Stderr => "stderr",
        }
    }
}

/// Destination for lines drained from the engine process.
///
/// Each stream is drained by its own task, so implementations are called
/// concurrently from two tasks.
pub trait OutputSink: Send + Sync {
    fn line(&self, stream: StreamKind, line: &str);
}

/// Forwards engine output to the host's own stdout/stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl OutputSink for ConsoleSink {
    fn line(&self, stream: StreamKind, line: &str) {
        // Write errors on the host console are not worth failing a run for.
        let _ = match stream {
            StreamKind::Stdout => writeln!(std::io::stdout().lock(), "{line}"),
            StreamKind::Stderr => writeln!(std::io::stderr().lock(), "{line}"),
        };
    }
}

/// Keeps every line in memory, in arrival order.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<(StreamKind, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<(StreamKind, String)> {
        match self.lines.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn stream(&self, stream: StreamKind) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|(s, _)| *s == stream)
            .map(|(_, l)| l)
            .collect()
    }
}

impl OutputSink for MemorySink {
    fn line(&self, stream: StreamKind, line: &str) {
        let mut guard = match self.lines.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.push((stream, line.to_string()));
    }
}

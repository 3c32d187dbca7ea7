//! Seam to the collaborator that knows the engine and host classpaths.

/// Separator between classpath entries on this platform.
pub const PATH_SEPARATOR: char = if cfg!(windows) { ';' } else { ':' };

pub trait ClasspathResolver: Send + Sync {
    /// Minimal runner-only classpath when `runner_only`, the full host build
    /// classpath otherwise. Entries are joined with [`PATH_SEPARATOR`].
    fn classpath(&self, runner_only: bool) -> anyhow::Result<String>;
}

/// Join entries with the platform separator.
pub fn join_entries<S: AsRef<str>>(entries: &[S]) -> String {
    let mut out = String::new();
    for (i, e) in entries.iter().enumerate() {
        if i > 0 {
            out.push(PATH_SEPARATOR);
        }
        out.push_str(e.as_ref());
    }
    out
}

use anyhow::{Context, Result};

use robotrun_core::api::{join_entries, ClasspathResolver};

/// Classpath built from configured entry lists.
///
/// Entries containing glob metacharacters (`*`, `?`, `[`) are expanded, in
/// sorted order; other entries are used verbatim whether they exist or not.
/// The full classpath is the runner entries followed by the host entries.
pub struct ConfiguredClasspath {
    runner: Vec<String>,
    host: Vec<String>,
}

impl ConfiguredClasspath {
    pub fn new(runner: Vec<String>, host: Vec<String>) -> Self {
        Self { runner, host }
    }
}

impl ClasspathResolver for ConfiguredClasspath {
    fn classpath(&self, runner_only: bool) -> Result<String> {
        let mut entries = expand(&self.runner)?;
        if !runner_only {
            for e in expand(&self.host)? {
                if !entries.contains(&e) {
                    entries.push(e);
                }
            }
        }
        tracing::debug!(
            target: "robotrun.classpath",
            runner_only,
            entries = entries.len(),
            "resolved classpath"
        );
        Ok(join_entries(&entries))
    }
}

fn expand(patterns: &[String]) -> Result<Vec<String>> {
    let mut out = Vec::new();
    for pattern in patterns {
        if !is_pattern(pattern) {
            out.push(pattern.clone());
            continue;
        }
        let mut matched: Vec<String> = glob::glob(pattern)
            .with_context(|| format!("invalid classpath pattern: {pattern}"))?
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("cannot read classpath entries for {pattern}"))?
            .into_iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect();
        if matched.is_empty() {
            tracing::warn!(target: "robotrun.classpath", pattern = %pattern, "classpath pattern matched nothing");
        }
        matched.sort();
        out.extend(matched);
    }
    Ok(out)
}

fn is_pattern(entry: &str) -> bool {
    entry.contains(['*', '?', '['])
}

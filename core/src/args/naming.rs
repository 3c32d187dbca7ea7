use std::path::{Path, PathBuf};

const DELIMITERS: &[char] = &[' ', '-', '_'];

/// Suite name used in reports: the configured name, otherwise the test case
/// directory (or file) name with each delimiter-separated segment capitalized.
///
/// `"my_test-suite 1"` becomes `"My_Test-Suite 1"`.
pub fn suite_name(explicit: Option<&str>, test_cases: &Path) -> String {
    if let Some(name) = explicit {
        return name.to_string();
    }
    capitalize_segments(&file_name(test_cases))
}

/// Xunit file name derived from the test case directory:
/// `TEST-<name with spaces as underscores>.xml`.
pub fn default_xunit_file(test_cases: &Path) -> PathBuf {
    PathBuf::from(format!(
        "TEST-{}.xml",
        file_name(test_cases).replace(' ', "_")
    ))
}

fn file_name(path: &Path) -> String {
    final_component(path).unwrap_or_default()
}

/// Last component of `path`; `.` and `..` stand for the directory they
/// resolve to. `None` only for paths without one, such as `/`.
pub(crate) fn final_component(path: &Path) -> Option<String> {
    if let Some(name) = path.file_name() {
        return Some(name.to_string_lossy().into_owned());
    }
    let resolved = std::fs::canonicalize(path)
        .or_else(|_| std::path::absolute(path))
        .ok()?;
    resolved.file_name().map(|n| n.to_string_lossy().into_owned())
}

fn capitalize_segments(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut at_segment_start = true;
    for c in name.chars() {
        if DELIMITERS.contains(&c) {
            out.push(c);
            at_segment_start = true;
        } else if at_segment_start {
            out.extend(c.to_uppercase());
            at_segment_start = false;
        } else {
            out.push(c);
        }
    }
    out
}

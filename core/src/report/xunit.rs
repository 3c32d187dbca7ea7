use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::error::ReportError;

/// Minimal xunit document describing one execution-infrastructure error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackReport {
    pub suite_name: String,
    pub message: String,
}

impl FallbackReport {
    pub fn new(suite_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            suite_name: suite_name.into(),
            message: message.into(),
        }
    }

    pub fn to_xml(&self) -> String {
        let name = escape_attr(&self.suite_name);
        let message = escape_attr(&self.message);
        let mut xml = String::with_capacity(256);
        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        let _ = writeln!(
            xml,
            "<testsuite errors=\"1\" failures=\"0\" tests=\"0\" skip=\"0\" name=\"{name}\">"
        );
        let _ = writeln!(
            xml,
            "  <testcase classname=\"ExecutionError\" name=\"{message}\">"
        );
        let _ = writeln!(xml, "    <error message=\"{message}\"/>");
        xml.push_str("  </testcase>\n");
        xml.push_str("</testsuite>\n");
        xml
    }

    /// Write the document to `path`, replacing any existing file and creating
    /// missing parent directories.
    pub fn write_to(&self, path: &Path) -> Result<(), ReportError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| ReportError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(path, self.to_xml()).map_err(|source| ReportError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Location of the xunit file: absolute paths are kept, relative ones are
/// resolved against the output directory.
pub fn result_path(output_directory: &Path, xunit_file: &Path) -> PathBuf {
    if xunit_file.is_absolute() {
        xunit_file.to_path_buf()
    } else {
        output_directory.join(xunit_file)
    }
}

fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            '\t' => out.push_str("&#9;"),
            c if !is_xml_char(c) => out.push(char::REPLACEMENT_CHARACTER),
            c => out.push(c),
        }
    }
    out
}

/// Characters allowed in an XML 1.0 document.
fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}

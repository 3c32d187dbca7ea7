use std::path::Path;

/// Ordered engine command-line tokens, built option by option.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments {
    tokens: Vec<String>,
}

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    /// `flag path`, only when the path is set.
    pub fn add_path(&mut self, path: Option<&Path>, flag: &str) -> &mut Self {
        if let Some(p) = path {
            self.push_pair(flag, p.to_string_lossy().into_owned());
        }
        self
    }

    /// `flag value`, only when the value is set and non-empty.
    pub fn add_non_empty(&mut self, value: Option<&str>, flag: &str) -> &mut Self {
        if let Some(v) = value.filter(|v| !v.is_empty()) {
            self.push_pair(flag, v.to_string());
        }
        self
    }

    /// Bare `flag` when `enabled`.
    pub fn add_flag(&mut self, enabled: bool, flag: &str) -> &mut Self {
        if enabled {
            self.tokens.push(flag.to_string());
        }
        self
    }

    /// One `flag value` pair per element, in order.
    pub fn add_list<S: AsRef<str>>(&mut self, values: &[S], flag: &str) -> &mut Self {
        for v in values {
            self.push_pair(flag, v.as_ref().to_string());
        }
        self
    }

    pub fn add_path_list<P: AsRef<Path>>(&mut self, paths: &[P], flag: &str) -> &mut Self {
        for p in paths {
            self.push_pair(flag, p.as_ref().to_string_lossy().into_owned());
        }
        self
    }

    /// Positional token without a flag.
    pub fn add(&mut self, token: impl Into<String>) -> &mut Self {
        self.tokens.push(token.into());
        self
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tokens
    }

    pub fn into_vec(self) -> Vec<String> {
        self.tokens
    }

    fn push_pair(&mut self, flag: &str, value: String) {
        self.tokens.push(flag.to_string());
        self.tokens.push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_values_emit_nothing() {
        let mut args = Arguments::new();
        args.add_path(None, "-d")
            .add_non_empty(None, "-N")
            .add_non_empty(Some(""), "-D")
            .add_flag(false, "--dryrun")
            .add_list::<String>(&[], "-t");
        assert!(args.as_slice().is_empty());
    }

    #[test]
    fn values_are_passed_verbatim() {
        let mut args = Arguments::new();
        args.add_path(Some(Path::new("out dir/x.xml")), "-o")
            .add_non_empty(Some("Name with \"quotes\""), "-N")
            .add_flag(true, "--rpa")
            .add_list(&["a", "b"], "-i");
        assert_eq!(
            args.into_vec(),
            vec![
                "-o",
                "out dir/x.xml",
                "-N",
                "Name with \"quotes\"",
                "--rpa",
                "-i",
                "a",
                "-i",
                "b"
            ]
        );
    }
}

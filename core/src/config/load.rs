use std::path::{Path, PathBuf};

use crate::args::final_component;
use crate::error::ConfigError;

use super::types::{AppConfig, RunConfig};

pub const DEFAULT_CONFIG_FILE: &str = "robotrun.toml";

/// Load the configuration file and apply environment overrides.
///
/// An explicitly named file must exist; the default file is optional.
pub fn load(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut cfg = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ConfigError::NotFound(p.display().to_string()));
            }
            parse_file(p)?
        }
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if default.exists() {
                parse_file(default)?
            } else {
                AppConfig::default()
            }
        }
    };

    apply_env_overrides(&mut cfg, |key| std::env::var(key).ok());
    Ok(cfg)
}

pub fn parse_str(s: &str) -> Result<AppConfig, ConfigError> {
    toml::from_str::<AppConfig>(s).map_err(|e| ConfigError::Parse(e.into()))
}

fn parse_file(path: &Path) -> Result<AppConfig, ConfigError> {
    let s = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(target: "robotrun.config", path = %path.display(), "loaded config file");
    parse_str(&s)
}

pub(crate) fn apply_env_overrides<F>(cfg: &mut AppConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(v) = non_empty("ROBOTRUN_TEST_CASES_DIRECTORY") {
        cfg.run.test_cases_directory = PathBuf::from(v);
    }
    if let Some(v) = non_empty("ROBOTRUN_OUTPUT_DIRECTORY") {
        cfg.run.output_directory = PathBuf::from(v);
    }
    if let Some(v) = non_empty("ROBOTRUN_JAVA_HOME") {
        if let Some(ext) = cfg.external_runner.as_mut() {
            ext.java_home = Some(PathBuf::from(v));
        }
    }
}

/// Reject configurations that cannot produce a meaningful run.
pub fn validate(cfg: &AppConfig) -> Result<(), ConfigError> {
    validate_run(&cfg.run)?;
    if let Some(ext) = &cfg.external_runner {
        if let Some(key) = ext.environment_variables.keys().find(|k| k.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "external_runner.environment_variables has an empty key ({key:?})"
            )));
        }
    }
    Ok(())
}

pub fn validate_run(run: &RunConfig) -> Result<(), ConfigError> {
    if run.test_cases_directory.as_os_str().is_empty() {
        return Err(ConfigError::Validation(
            "test_cases_directory must not be empty".to_string(),
        ));
    }
    if final_component(&run.test_cases_directory).is_none() {
        return Err(ConfigError::Validation(format!(
            "test_cases_directory has no file name: {}",
            run.test_cases_directory.display()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let cfg = parse_str("").unwrap();
        assert_eq!(
            cfg.run.test_cases_directory,
            PathBuf::from("src/test/robotframework/acceptance")
        );
        assert_eq!(
            cfg.run.output_directory,
            PathBuf::from("target/robotframework-reports")
        );
        assert_eq!(cfg.run.console.as_deref(), Some("verbose"));
        assert!(cfg.external_runner.is_none());
        assert_eq!(cfg.engine.command, "robot");
    }

    #[test]
    fn external_runner_table_is_parsed() {
        let cfg = parse_str(
            r#"
[run]
test_cases_directory = "atest/my suite"
tests = ["first", "second"]
extra_path_directories = ["libs", "more"]

[external_runner]
jvm_args = ["-Xmx512m"]
exclude_dependencies = true

[external_runner.environment_variables]
CLASSPATH = "extra.jar"
"#,
        )
        .unwrap();

        assert_eq!(cfg.run.tests, vec!["first", "second"]);
        assert_eq!(cfg.run.extra_path_directories.as_ref().map(Vec::len), Some(2));
        let ext = cfg.external_runner.unwrap();
        assert!(ext.exclude_dependencies);
        assert!(!ext.run_with_python);
        assert_eq!(ext.jvm_args, vec!["-Xmx512m"]);
        assert_eq!(
            ext.environment_variables.get("CLASSPATH").map(String::as_str),
            Some("extra.jar")
        );
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let err = parse_str("[run\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_named_file_is_not_found() {
        let err = load(Some(Path::new("/definitely/not/here/robotrun.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn env_overrides_ignore_blank_values() {
        let mut cfg = AppConfig::default();
        apply_env_overrides(&mut cfg, |key| match key {
            "ROBOTRUN_TEST_CASES_DIRECTORY" => Some("atest".to_string()),
            "ROBOTRUN_OUTPUT_DIRECTORY" => Some("   ".to_string()),
            _ => None,
        });
        assert_eq!(cfg.run.test_cases_directory, PathBuf::from("atest"));
        assert_eq!(
            cfg.run.output_directory,
            PathBuf::from("target/robotframework-reports")
        );
    }

    #[test]
    fn empty_test_cases_directory_fails_validation() {
        let mut cfg = AppConfig::default();
        cfg.run.test_cases_directory = PathBuf::new();
        assert!(matches!(validate(&cfg), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn current_directory_is_a_valid_test_source() {
        let mut cfg = AppConfig::default();
        cfg.run.test_cases_directory = PathBuf::from(".");
        assert!(validate(&cfg).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn filesystem_root_fails_validation() {
        let mut cfg = AppConfig::default();
        cfg.run.test_cases_directory = PathBuf::from("/");
        assert!(matches!(validate(&cfg), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn unreadable_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(Some(dir.path())).unwrap_err();
        match err {
            ConfigError::Read { path, .. } => assert_eq!(path, dir.path()),
            other => panic!("expected read error, got {other:?}"),
        }
    }
}

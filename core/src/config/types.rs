use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub run: RunConfig,

    /// Presence of this table selects the external-process execution mode.
    #[serde(default)]
    pub external_runner: Option<ExternalRunnerConfig>,

    #[serde(default)]
    pub classpath: ClasspathConfig,

    #[serde(default)]
    pub engine: EngineConfig,
}

/// Every option of a single engine run.
///
/// Built once at the process boundary and only read afterwards. Options that
/// can be overridden from the command line keep their file value here and the
/// override in [`CommandLineOverrides`]; precedence is applied when the
/// argument list is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Test case file or directory; always the last engine argument.
    pub test_cases_directory: PathBuf,

    // Output locations.
    pub output_directory: PathBuf,
    pub output: Option<PathBuf>,
    pub log: Option<PathBuf>,
    pub report: Option<PathBuf>,
    pub debug_file: Option<PathBuf>,
    pub argument_file: Option<PathBuf>,
    /// Xunit result file, relative to `output_directory` unless absolute.
    pub xunit_file: Option<PathBuf>,

    pub console: Option<String>,
    pub name: Option<String>,
    pub document: Option<String>,
    pub run_mode: Option<String>,
    pub randomize: Option<String>,
    pub split_outputs: Option<String>,
    pub log_title: Option<String>,
    pub report_title: Option<String>,
    pub report_background: Option<String>,
    pub summary_title: Option<String>,
    pub log_level: Option<String>,
    pub suite_stat_level: Option<String>,
    pub console_width: Option<String>,
    pub console_colors: Option<String>,
    pub listener: Option<String>,

    pub rpa: bool,
    pub dryrun: bool,
    pub exit_on_failure: bool,
    pub skip_teardown_on_exit: bool,
    pub run_empty_suite: bool,
    pub no_status_return_code: bool,
    pub timestamp_outputs: bool,
    pub warn_on_skipped_files: bool,
    pub rerun_failed: bool,

    pub metadata: Vec<String>,
    pub tags: Vec<String>,
    pub remove_keywords: Vec<String>,
    pub flatten_keywords: Vec<String>,
    pub tests: Vec<String>,
    pub tasks: Vec<String>,
    pub suites: Vec<String>,
    pub includes: Vec<String>,
    pub excludes: Vec<String>,
    pub critical_tags: Vec<String>,
    pub non_critical_tags: Vec<String>,
    pub variables: Vec<String>,
    pub variable_files: Vec<String>,
    pub tag_stat_includes: Vec<String>,
    pub tag_stat_excludes: Vec<String>,
    pub combined_tag_stats: Vec<String>,
    pub tag_docs: Vec<String>,
    pub tag_stat_links: Vec<String>,
    pub listeners: Vec<String>,

    /// Library search locations; `None` means "use `default_extra_path`".
    pub extra_path_directories: Option<Vec<PathBuf>>,
    pub default_extra_path: PathBuf,

    pub skip_tests: bool,
    pub skip_ats: bool,
    pub skip_its: bool,
    pub skip: bool,

    #[serde(skip)]
    pub overrides: CommandLineOverrides,
}

/// Values given on the command line for the overridable options.
///
/// `Some` replaces the file value entirely, except for `variables`, which are
/// appended after the file's variables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandLineOverrides {
    pub tests: Option<Vec<String>>,
    pub tasks: Option<Vec<String>>,
    pub suites: Option<Vec<String>>,
    pub includes: Option<Vec<String>>,
    pub excludes: Option<Vec<String>>,
    pub variables: Option<Vec<String>>,
}

fn default_test_cases_directory() -> PathBuf {
    PathBuf::from("src/test/robotframework/acceptance")
}

fn default_output_directory() -> PathBuf {
    PathBuf::from("target/robotframework-reports")
}

fn default_extra_path() -> PathBuf {
    PathBuf::from("src/test/resources/robotframework/libraries")
}

fn default_console() -> Option<String> {
    Some("verbose".to_string())
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            test_cases_directory: default_test_cases_directory(),
            output_directory: default_output_directory(),
            output: None,
            log: None,
            report: None,
            debug_file: None,
            argument_file: None,
            xunit_file: None,
            console: default_console(),
            name: None,
            document: None,
            run_mode: None,
            randomize: None,
            split_outputs: None,
            log_title: None,
            report_title: None,
            report_background: None,
            summary_title: None,
            log_level: None,
            suite_stat_level: None,
            console_width: None,
            console_colors: None,
            listener: None,
            rpa: false,
            dryrun: false,
            exit_on_failure: false,
            skip_teardown_on_exit: false,
            run_empty_suite: false,
            no_status_return_code: false,
            timestamp_outputs: false,
            warn_on_skipped_files: false,
            rerun_failed: false,
            metadata: Vec::new(),
            tags: Vec::new(),
            remove_keywords: Vec::new(),
            flatten_keywords: Vec::new(),
            tests: Vec::new(),
            tasks: Vec::new(),
            suites: Vec::new(),
            includes: Vec::new(),
            excludes: Vec::new(),
            critical_tags: Vec::new(),
            non_critical_tags: Vec::new(),
            variables: Vec::new(),
            variable_files: Vec::new(),
            tag_stat_includes: Vec::new(),
            tag_stat_excludes: Vec::new(),
            combined_tag_stats: Vec::new(),
            tag_docs: Vec::new(),
            tag_stat_links: Vec::new(),
            listeners: Vec::new(),
            extra_path_directories: None,
            default_extra_path: default_extra_path(),
            skip_tests: false,
            skip_ats: false,
            skip_its: false,
            skip: false,
            overrides: CommandLineOverrides::default(),
        }
    }
}

impl RunConfig {
    pub fn should_skip(&self) -> bool {
        self.skip_tests || self.skip_its || self.skip_ats || self.skip
    }
}

/// Settings for running the engine in a child process.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalRunnerConfig {
    /// Entry point class; defaults to the engine's own main class.
    pub runner_class: Option<String>,

    /// Run through the `robot` interpreter command instead of a JVM.
    pub run_with_python: bool,

    pub jvm_args: Vec<String>,

    pub environment_variables: BTreeMap<String, String>,

    /// Put only the runner jar on the classpath, not the host dependencies.
    pub exclude_dependencies: bool,

    /// JVM installation used to launch the runner; falls back to `JAVA_HOME`.
    pub java_home: Option<PathBuf>,
}

/// Classpath entries handed to the classpath resolver.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClasspathConfig {
    /// Minimal runner-only entries (the engine jar).
    pub runner: Vec<String>,

    /// Full host build classpath.
    pub host: Vec<String>,
}

/// Command used by the in-process engine adapter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub command: String,

    /// Arguments placed before the generated engine arguments.
    pub args: Vec<String>,
}

fn default_engine_command() -> String {
    "robot".to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            command: default_engine_command(),
            args: Vec::new(),
        }
    }
}

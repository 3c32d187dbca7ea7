use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::classpath::{ClasspathResolver, PATH_SEPARATOR};
use crate::config::ExternalRunnerConfig;
use crate::error::RunnerError;

/// Main class of the engine, used when no runner class is configured.
pub const DEFAULT_RUNNER_CLASS: &str = "org.robotframework.RobotFramework";

/// Interpreter command used when the engine runs on its native runtime.
pub const INTERPRETER_COMMAND: &str = "robot";

pub const CLASSPATH_VAR: &str = "CLASSPATH";

/// Everything needed to start one child process.
///
/// `envs` is laid over the inherited environment of the current process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSpec {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub envs: BTreeMap<String, String>,
}

impl LaunchSpec {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            envs: BTreeMap::new(),
        }
    }

    /// Program and arguments as one list, for logging.
    pub fn command_line(&self) -> Vec<String> {
        std::iter::once(self.program.to_string_lossy().into_owned())
            .chain(self.args.iter().cloned())
            .collect()
    }
}

/// `<java_home>/bin/java`, or plain `java` resolved through `PATH`.
pub fn java_executable(java_home: Option<&Path>) -> PathBuf {
    match java_home {
        Some(home) => home.join("bin").join("java"),
        None => PathBuf::from("java"),
    }
}

/// Classpath for the runner process.
///
/// Runner-only entries when dependencies are excluded, the host classpath
/// otherwise; a `CLASSPATH` in the configured environment is put in front.
pub fn resolve_classpath(
    runner: &ExternalRunnerConfig,
    resolver: &dyn ClasspathResolver,
) -> Result<String, RunnerError> {
    let resolved = resolver
        .classpath(runner.exclude_dependencies)
        .map_err(RunnerError::Classpath)?;
    Ok(match runner.environment_variables.get(CLASSPATH_VAR) {
        Some(extra) => format!("{extra}{PATH_SEPARATOR}{resolved}"),
        None => resolved,
    })
}

/// JVM command line: `java <jvm args> <runner class> <engine args>`.
pub fn jvm_launch(
    runner: &ExternalRunnerConfig,
    engine_args: &[String],
    resolver: &dyn ClasspathResolver,
    java_home: Option<&Path>,
) -> Result<LaunchSpec, RunnerError> {
    let classpath = resolve_classpath(runner, resolver)?;

    let mut spec = LaunchSpec::new(java_executable(java_home));
    spec.args.extend(runner.jvm_args.iter().cloned());
    spec.args.push(
        runner
            .runner_class
            .clone()
            .unwrap_or_else(|| DEFAULT_RUNNER_CLASS.to_string()),
    );
    spec.args.extend(engine_args.iter().cloned());

    spec.envs = runner.environment_variables.clone();
    spec.envs.insert(CLASSPATH_VAR.to_string(), classpath);
    Ok(spec)
}

/// Native interpreter command line: `robot <engine args>`.
pub fn interpreter_launch(runner: &ExternalRunnerConfig, engine_args: &[String]) -> LaunchSpec {
    let mut spec = LaunchSpec::new(INTERPRETER_COMMAND);
    spec.args = engine_args.to_vec();
    spec.envs = runner.environment_variables.clone();
    spec
}

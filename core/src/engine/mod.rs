//! Execution strategy: in-process engine call or child process.

use std::path::PathBuf;
use std::sync::Arc;

use crate::classpath::ClasspathResolver;
use crate::config::ExternalRunnerConfig;
use crate::error::RunnerError;
use crate::runner::{self, LaunchSpec};
use crate::sink::OutputSink;

/// In-process entry point of the engine: takes the argument tokens and
/// returns the engine's exit status.
pub trait EmbeddedEngine: Send + Sync {
    fn run(&self, args: &[String]) -> anyhow::Result<i32>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionMode {
    Embedded,
    ExternalProcess(ExternalRunnerConfig),
}

impl ExecutionMode {
    /// External process iff an external runner block is configured.
    pub fn select(external: Option<&ExternalRunnerConfig>) -> Self {
        match external {
            Some(ext) => ExecutionMode::ExternalProcess(ext.clone()),
            None => ExecutionMode::Embedded,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ExecutionMode::Embedded => "embedded",
            ExecutionMode::ExternalProcess(ext) if ext.run_with_python => "interpreter",
            ExecutionMode::ExternalProcess(_) => "jvm",
        }
    }
}

/// Collaborators the strategies need.
#[derive(Clone)]
pub struct ExecutionContext {
    pub engine: Arc<dyn EmbeddedEngine>,
    pub classpath: Arc<dyn ClasspathResolver>,
    pub sink: Arc<dyn OutputSink>,
}

/// Child process command line for an external mode; `None` when embedded.
pub fn plan_launch(
    mode: &ExecutionMode,
    args: &[String],
    classpath: &dyn ClasspathResolver,
) -> Result<Option<LaunchSpec>, RunnerError> {
    match mode {
        ExecutionMode::Embedded => Ok(None),
        ExecutionMode::ExternalProcess(ext) if ext.run_with_python => {
            Ok(Some(runner::interpreter_launch(ext, args)))
        }
        ExecutionMode::ExternalProcess(ext) => {
            let java_home = ext
                .java_home
                .clone()
                .or_else(|| std::env::var_os("JAVA_HOME").map(PathBuf::from));
            runner::jvm_launch(ext, args, classpath, java_home.as_deref()).map(Some)
        }
    }
}

/// Run the engine with `args` and return its raw exit status.
pub async fn execute(
    mode: &ExecutionMode,
    args: &[String],
    ctx: &ExecutionContext,
) -> Result<i32, RunnerError> {
    match plan_launch(mode, args, ctx.classpath.as_ref())? {
        None => {
            let engine = ctx.engine.clone();
            let args = args.to_vec();
            tokio::task::spawn_blocking(move || engine.run(&args))
                .await
                .map_err(|e| RunnerError::Engine(e.into()))?
                .map_err(RunnerError::Engine)
        }
        Some(spec) => {
            tracing::info!(
                target: "robotrun.engine",
                mode = mode.name(),
                command = ?spec.command_line(),
                "executing engine with command"
            );
            let result = runner::launch(&spec, ctx.sink.clone()).await?;
            Ok(result.exit_code)
        }
    }
}

//! Stable re-exports for consumers (`cli`, `plugins`, and external crates).
//!
//! Prefer importing from `robotrun_core::api` instead of reaching into internal modules.

pub use crate::args::{build_run_arguments, suite_name, Arguments, RunArguments};
pub use crate::classpath::{join_entries, ClasspathResolver, PATH_SEPARATOR};
pub use crate::config::{
    AppConfig, ClasspathConfig, CommandLineOverrides, EngineConfig, ExternalRunnerConfig,
    RunConfig,
};
pub use crate::engine::{execute, EmbeddedEngine, ExecutionContext, ExecutionMode};
pub use crate::error::{CliError, ConfigError, PipelineError, ReportError, RunnerError};
pub use crate::outcome::OutcomeCode;
pub use crate::pipeline::{reconcile, run_acceptance, RunSummary};
pub use crate::report::{result_path, FallbackReport};
pub use crate::runner::{launch, LaunchSpec, ProcessResult};
pub use crate::sink::{ConsoleSink, MemorySink, OutputSink, StreamKind};

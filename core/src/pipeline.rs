use std::path::{Path, PathBuf};

use crate::args::{self, RunArguments};
use crate::config::{self, AppConfig, RunConfig};
use crate::engine::{self, ExecutionContext, ExecutionMode};
use crate::error::{PipelineError, ReportError};
use crate::outcome::OutcomeCode;
use crate::report::{result_path, FallbackReport};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunSummary {
    /// A skip flag was set; nothing ran and nothing was written.
    Skipped,
    Completed {
        exit_code: i32,
        outcome: OutcomeCode,
        /// Set when the engine's report was replaced by a fallback one.
        fallback_report: Option<PathBuf>,
    },
}

/// Run the acceptance tests described by `cfg`.
///
/// A non-zero engine exit status is not an error here: only infrastructure
/// failures (config, launch, report writing) are. Test results are left for
/// the downstream verification step.
pub async fn run_acceptance(
    cfg: &AppConfig,
    ctx: &ExecutionContext,
) -> Result<RunSummary, PipelineError> {
    if cfg.run.should_skip() {
        tracing::info!(target: "robotrun.pipeline", "robot framework tests are skipped");
        return Ok(RunSummary::Skipped);
    }
    config::validate(cfg)?;

    let run_args = args::build_run_arguments(&cfg.run);
    tracing::debug!(
        target: "robotrun.pipeline",
        arguments = %run_args.tokens.join(" "),
        "robot framework arguments"
    );

    let mode = ExecutionMode::select(cfg.external_runner.as_ref());
    let exit_code = engine::execute(&mode, &run_args.tokens, ctx).await?;

    let (outcome, fallback_report) = reconcile(&cfg.run, &run_args, exit_code)?;
    Ok(RunSummary::Completed {
        exit_code,
        outcome,
        fallback_report,
    })
}

/// Classify `exit_code` and, for the codes where the engine leaves no usable
/// report, write a fallback xunit file in its place.
pub fn reconcile(
    run: &RunConfig,
    run_args: &RunArguments,
    exit_code: i32,
) -> Result<(OutcomeCode, Option<PathBuf>), ReportError> {
    let outcome = OutcomeCode::from_exit(exit_code);
    tracing::info!(target: "robotrun.pipeline", exit_code, outcome = %outcome, "engine finished");

    let Some(message) = outcome.fallback_message() else {
        return Ok((outcome, None));
    };

    let path = write_fallback(run, &run_args.xunit_file, message)?;
    Ok((outcome, Some(path)))
}

fn write_fallback(run: &RunConfig, xunit_file: &Path, message: &str) -> Result<PathBuf, ReportError> {
    let path = result_path(&run.output_directory, xunit_file);
    let suite = args::suite_name(run.name.as_deref(), &run.test_cases_directory);
    tracing::warn!(
        target: "robotrun.pipeline",
        path = %path.display(),
        suite = %suite,
        message,
        "writing fallback xunit report"
    );
    FallbackReport::new(suite, message).write_to(&path)?;
    Ok(path)
}

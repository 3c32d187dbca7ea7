use std::process::Stdio;
use std::sync::Arc;

use tokio::process::Command;

use crate::error::RunnerError;
use crate::sink::{OutputSink, StreamKind};

use super::command::LaunchSpec;
use super::exit::normalize_exit;
use super::tee;

/// Outcome of a finished child process whose streams were fully drained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessResult {
    pub exit_code: i32,
    pub stdout_lines: u64,
    pub stderr_lines: u64,
}

/// Start the process, drain stdout and stderr concurrently into `sink`, and
/// wait for it.
///
/// Both drains are joined before the exit code is returned. There is no
/// timeout; dropping the returned future kills the child, so a caller may
/// wrap this in `tokio::time::timeout`.
pub async fn launch(
    spec: &LaunchSpec,
    sink: Arc<dyn OutputSink>,
) -> Result<ProcessResult, RunnerError> {
    let program = spec.program.to_string_lossy().into_owned();

    let mut cmd = Command::new(&spec.program);
    cmd.args(&spec.args)
        .envs(&spec.envs)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    tracing::debug!(target: "robotrun.runner", program = %program, args = ?spec.args, "spawning");
    let mut child = cmd.spawn().map_err(|source| RunnerError::Spawn {
        program: program.clone(),
        source,
    })?;

    let stdout = child.stdout.take().ok_or_else(|| not_captured("stdout"))?;
    let stderr = child.stderr.take().ok_or_else(|| not_captured("stderr"))?;

    let out_task = tee::pump(stdout, StreamKind::Stdout, sink.clone());
    let err_task = tee::pump(stderr, StreamKind::Stderr, sink);

    let status = child.wait().await.map_err(|source| RunnerError::Wait {
        program: program.clone(),
        source,
    })?;

    let stdout_lines = out_task
        .await
        .map_err(|source| RunnerError::Join {
            stream: "stdout",
            source,
        })??;
    let stderr_lines = err_task
        .await
        .map_err(|source| RunnerError::Join {
            stream: "stderr",
            source,
        })??;

    let exit_code = normalize_exit(status);
    tracing::debug!(
        target: "robotrun.runner",
        program = %program,
        exit_code,
        stdout_lines,
        stderr_lines,
        "process finished"
    );

    Ok(ProcessResult {
        exit_code,
        stdout_lines,
        stderr_lines,
    })
}

fn not_captured(stream: &'static str) -> RunnerError {
    RunnerError::StreamIo {
        stream,
        source: std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stream was not captured"),
    }
}

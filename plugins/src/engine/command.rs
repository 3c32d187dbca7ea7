use std::process::Command;

use anyhow::{Context, Result};

use robotrun_core::api::EmbeddedEngine;
use robotrun_core::runner::exit::normalize_exit;

/// Engine invoked synchronously as a command sharing this process's stdio.
///
/// Stands in for a linked engine: the call blocks until the engine returns
/// and yields its exit status.
pub struct CommandEngine {
    program: String,
    prefix_args: Vec<String>,
}

impl CommandEngine {
    pub fn new(program: impl Into<String>, prefix_args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            prefix_args,
        }
    }
}

impl EmbeddedEngine for CommandEngine {
    fn run(&self, args: &[String]) -> Result<i32> {
        tracing::info!(
            target: "robotrun.engine",
            program = %self.program,
            "running engine in-process"
        );
        let status = Command::new(&self.program)
            .args(&self.prefix_args)
            .args(args)
            .status()
            .with_context(|| format!("failed to run engine command: {}", self.program))?;
        Ok(normalize_exit(status))
    }
}

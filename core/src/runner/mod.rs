//! Child process launching for the external execution mode.

mod command;
pub mod exit;
mod run;
mod tee;

pub use command::{
    interpreter_launch, java_executable, jvm_launch, resolve_classpath, LaunchSpec,
    CLASSPATH_VAR, DEFAULT_RUNNER_CLASS, INTERPRETER_COMMAND,
};
pub use run::{launch, ProcessResult};

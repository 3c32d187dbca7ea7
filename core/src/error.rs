use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(String),

    #[error("cannot read config file: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config parse error")]
    Parse(#[source] anyhow::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("failed to spawn process: {program}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("io error while streaming: {stream}")]
    StreamIo {
        stream: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("failed waiting for process: {program}")]
    Wait {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("output drain task for {stream} did not complete")]
    Join {
        stream: &'static str,
        #[source]
        source: tokio::task::JoinError,
    },

    #[error("embedded engine failed")]
    Engine(#[source] anyhow::Error),

    #[error("classpath resolution failed")]
    Classpath(#[source] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("cannot create report directory: {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write report file: {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("executing external robot failed")]
    Runner(#[from] RunnerError),

    #[error(transparent)]
    Report(#[from] ReportError),
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}


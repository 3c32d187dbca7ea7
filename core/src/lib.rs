//! Orchestration layer around the Robot Framework engine.
//!
//! A run turns a [`config::RunConfig`] into the engine's command line, executes
//! the engine either through an in-process [`engine::EmbeddedEngine`] or as a
//! child process, and reconciles the exit status with the downstream
//! verification step (writing a fallback xunit file when the engine could not).

pub mod api;
pub mod args;
pub mod classpath;
pub mod config;
pub mod engine;
pub mod error;
pub mod outcome;
pub mod pipeline;
pub mod report;
pub mod runner;
pub mod sink;

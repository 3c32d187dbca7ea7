use std::sync::Arc;

use robotrun_core::api::{AppConfig, ClasspathResolver, EmbeddedEngine};

use crate::classpath::ConfiguredClasspath;
use crate::engine::CommandEngine;

pub fn build_classpath(cfg: &AppConfig) -> Arc<dyn ClasspathResolver> {
    Arc::new(ConfiguredClasspath::new(
        cfg.classpath.runner.clone(),
        cfg.classpath.host.clone(),
    ))
}

pub fn build_engine(cfg: &AppConfig) -> Arc<dyn EmbeddedEngine> {
    Arc::new(CommandEngine::new(
        cfg.engine.command.clone(),
        cfg.engine.args.clone(),
    ))
}

//! Builds the execution context (engine, classpath, output sink) from config, for reuse by the CLI.
use std::sync::Arc;

use robotrun_core::api::{AppConfig, ExecutionContext, OutputSink};

use crate::factory;

pub fn build_context(cfg: &AppConfig, sink: Arc<dyn OutputSink>) -> ExecutionContext {
    ExecutionContext {
        engine: factory::build_engine(cfg),
        classpath: factory::build_classpath(cfg),
        sink,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use robotrun_core::api::{MemorySink, PATH_SEPARATOR};

    #[test]
    fn context_uses_configured_classpath() {
        let mut cfg = AppConfig::default();
        cfg.classpath.runner = vec!["robot.jar".into()];
        cfg.classpath.host = vec!["app.jar".into()];

        let ctx = build_context(&cfg, Arc::new(MemorySink::new()));
        assert_eq!(ctx.classpath.classpath(true).unwrap(), "robot.jar");
        assert_eq!(
            ctx.classpath.classpath(false).unwrap(),
            format!("robot.jar{PATH_SEPARATOR}app.jar")
        );
    }
}

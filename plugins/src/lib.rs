pub mod classpath;
pub mod engine;
pub mod factory;
pub mod services;

mod configured;

pub use configured::ConfiguredClasspath;

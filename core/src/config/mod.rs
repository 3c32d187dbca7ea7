mod load;
mod types;

pub use load::{load, parse_str, validate, validate_run, DEFAULT_CONFIG_FILE};
pub use types::*;

//! Fallback xunit report written when the engine could not produce one.

mod xunit;

pub use xunit::{result_path, FallbackReport};

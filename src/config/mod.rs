//! JSON runtime configuration for the command-line tools.
//!
//! A config names the input images, the tracker parameters and the output
//! directory. Every section except `inputs` may be omitted.

mod runtime;

pub use runtime::{load_config, OutputConfig, RuntimeConfig};

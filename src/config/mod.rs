//! JSON configuration types for the command-line tools.

mod detect;

pub use detect::{load_config, DetectOutputConfig, DetectToolConfig};

//! Command-line arguments and the interactive band prompt

pub mod args;
pub mod prompt;

pub use args::{parse_band, Cli};
pub use prompt::Prompt;

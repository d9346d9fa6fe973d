mod config;
mod prompt;

pub mod toml_input;

pub use config::*;
pub use prompt::*;

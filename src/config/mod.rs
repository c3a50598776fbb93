#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliArgs, NameArgs};
pub use toml_config::{ConfiguredSource, SnippetConfig};

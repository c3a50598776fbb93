pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliArgs, NameArgs};

pub use adapters::{ChunkLibrary, FileContentTypeSource, InMemoryContentTypeSource};
pub use config::SnippetConfig;
pub use core::{
    renderer::ListRenderer,
    snippet::{GetContentTypeName, GetContentTypes},
};
pub use domain::model::{ContentTypeRecord, OutputFormat, RenderConfig, SnippetProperties, TemplateRef};
pub use utils::error::{RenderError, Result, SnippetError};

pub mod export;
pub mod renderer;
pub mod snippet;
pub mod template;

pub use crate::domain::model::{
    ContentTypeRecord, Fields, OutputFormat, RenderConfig, SnippetProperties, TemplateRef,
};
pub use crate::domain::ports::{ContentTypeSource, TemplateResolver};
pub use crate::utils::error::Result;

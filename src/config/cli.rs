use crate::core::SnippetProperties;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "get-content-types")]
#[command(about = "List content types as JSON, an export dump, or through chunks")]
pub struct CliArgs {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Only return the content type with this id
    #[arg(long)]
    pub id: Option<i64>,

    /// `array` or `json`; anything else falls back to `array`
    #[arg(long)]
    pub format: Option<String>,

    /// Row chunk name, or `@INLINE <body>`
    #[arg(long)]
    pub tpl: Option<String>,

    /// Wrapper chunk name, or `@INLINE <body>`; receives `[[+output]]`
    #[arg(long = "wrapper-tpl", alias = "wrapperTpl")]
    pub wrapper_tpl: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliArgs {
    pub fn properties(&self) -> SnippetProperties {
        SnippetProperties {
            id: self.id,
            format: self.format.clone(),
            tpl: self.tpl.clone(),
            wrapper_tpl: self.wrapper_tpl.clone(),
        }
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "get-content-type-name")]
#[command(about = "Print the name of a content type")]
pub struct NameArgs {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Content type id; defaults to the current resource's content type
    #[arg(long)]
    pub id: Option<i64>,

    /// Content type of the resource being rendered
    #[arg(long, default_value = "1")]
    pub current_content_type: i64,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Placeholder name to rendered value, as handed to a chunk.
pub type Fields = HashMap<String, String>;

/// A `modContentType` row. Field order here is the canonical output key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentTypeRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub mime_type: String,
    #[serde(default)]
    pub file_extensions: String,
    #[serde(default)]
    pub binary: bool,
}

impl ContentTypeRecord {
    pub fn new(id: i64, name: &str, mime_type: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            description: String::new(),
            mime_type: mime_type.to_string(),
            file_extensions: String::new(),
            binary: false,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn with_extensions(mut self, file_extensions: &str) -> Self {
        self.file_extensions = file_extensions.to_string();
        self
    }

    pub fn binary(mut self, binary: bool) -> Self {
        self.binary = binary;
        self
    }

    /// Placeholder values for a row chunk. `binary` renders as `1`/`0`.
    pub fn to_fields(&self) -> Fields {
        let mut fields = Fields::with_capacity(6);
        fields.insert("id".to_string(), self.id.to_string());
        fields.insert("name".to_string(), self.name.clone());
        fields.insert("description".to_string(), self.description.clone());
        fields.insert("mime_type".to_string(), self.mime_type.clone());
        fields.insert("file_extensions".to_string(), self.file_extensions.clone());
        fields.insert(
            "binary".to_string(),
            if self.binary { "1" } else { "0" }.to_string(),
        );
        fields
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Array,
    Json,
}

impl OutputFormat {
    /// Unknown or missing values fall back to `Array`.
    pub fn from_param(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()) {
            Some(v) if v == "json" => OutputFormat::Json,
            _ => OutputFormat::Array,
        }
    }
}

/// Where a chunk body comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateRef {
    Inline(String),
    Named(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub row_template: Option<TemplateRef>,
    pub wrapper_template: Option<TemplateRef>,
}

/// Parameters as passed to the snippet call, e.g. `[[GetContentTypes? &tpl=`row`]]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetProperties {
    pub id: Option<i64>,
    pub format: Option<String>,
    pub tpl: Option<String>,
    #[serde(rename = "wrapperTpl")]
    pub wrapper_tpl: Option<String>,
}

impl SnippetProperties {
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            format: OutputFormat::from_param(self.format.as_deref()),
            row_template: self.tpl.as_deref().and_then(TemplateRef::parse),
            wrapper_template: self.wrapper_tpl.as_deref().and_then(TemplateRef::parse),
        }
    }
}

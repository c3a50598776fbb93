use crate::domain::model::ContentTypeRecord;
use serde::{Deserialize, Serialize};

/// Top-level shape of the human-readable export, one `[[content_type]]` table per record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentTypeExport {
    #[serde(default)]
    pub content_type: Vec<ContentTypeRecord>,
}

pub fn to_export_string(records: &[ContentTypeRecord]) -> Result<String, toml::ser::Error> {
    let export = ContentTypeExport {
        content_type: records.to_vec(),
    };
    toml::to_string_pretty(&export)
}

pub fn from_export_str(content: &str) -> Result<Vec<ContentTypeRecord>, toml::de::Error> {
    let export: ContentTypeExport = toml::from_str(content)?;
    Ok(export.content_type)
}

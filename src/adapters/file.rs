use crate::adapters::memory::InMemoryContentTypeSource;
use crate::core::export;
use crate::core::{ContentTypeRecord, ContentTypeSource, Result};
use crate::utils::error::SnippetError;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

enum RecordFormat {
    Json,
    Toml,
}

/// Reads records from a `.json` array or a `.toml` file of `[[content_type]]` tables.
///
/// The file is read on every fetch, so edits show up on the next snippet call.
#[derive(Debug, Clone)]
pub struct FileContentTypeSource {
    path: PathBuf,
}

impl FileContentTypeSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub async fn load(&self) -> Result<Vec<ContentTypeRecord>> {
        let path = self.path.display().to_string();
        let format = match self.path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => RecordFormat::Json,
            Some(ext) if ext.eq_ignore_ascii_case("toml") => RecordFormat::Toml,
            _ => return Err(SnippetError::UnsupportedRecordFormat { path }),
        };

        let content = tokio::fs::read_to_string(&self.path).await?;
        tracing::debug!("Read {} bytes of content types from {}", content.len(), path);

        let parsed = match format {
            RecordFormat::Json => serde_json::from_str(&content).map_err(|e| e.to_string()),
            RecordFormat::Toml => export::from_export_str(&content).map_err(|e| e.to_string()),
        };

        parsed.map_err(|message| SnippetError::RecordParseError {
            path,
            message,
        })
    }
}

#[async_trait]
impl ContentTypeSource for FileContentTypeSource {
    async fn fetch(&self, id: Option<i64>) -> Result<Vec<ContentTypeRecord>> {
        let records = self.load().await?;
        Ok(InMemoryContentTypeSource::new(records).lookup(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_json_records() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("types.json");
        std::fs::write(
            &path,
            r#"[
                {"id": 2, "name": "XML", "mime_type": "text/xml", "file_extensions": ".xml"},
                {"id": 1, "name": "HTML", "mime_type": "text/html", "binary": false}
            ]"#,
        )
        .unwrap();

        let source = FileContentTypeSource::new(&path);
        let records = source.fetch(None).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "HTML");
        assert_eq!(records[1].file_extensions, ".xml");
    }

    #[tokio::test]
    async fn test_load_toml_records_with_filter() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("types.toml");
        std::fs::write(
            &path,
            r#"
[[content_type]]
id = 1
name = "HTML"
mime_type = "text/html"

[[content_type]]
id = 8
name = "PDF"
mime_type = "application/pdf"
binary = true
"#,
        )
        .unwrap();

        let source = FileContentTypeSource::new(&path);
        let records = source.fetch(Some(8)).await.unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].binary);
    }

    #[tokio::test]
    async fn test_bad_files() {
        let dir = TempDir::new().unwrap();

        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, "{ not json").unwrap();
        let err = FileContentTypeSource::new(&broken).fetch(None).await.unwrap_err();
        match err {
            SnippetError::RecordParseError { path, .. } => assert!(path.ends_with("broken.json")),
            other => panic!("unexpected error: {other}"),
        }

        let csv = dir.path().join("types.csv");
        std::fs::write(&csv, "id,name").unwrap();
        let err = FileContentTypeSource::new(&csv).fetch(None).await.unwrap_err();
        assert!(matches!(err, SnippetError::UnsupportedRecordFormat { .. }));

        let missing = dir.path().join("missing.json");
        let err = FileContentTypeSource::new(&missing).fetch(None).await.unwrap_err();
        assert!(matches!(err, SnippetError::IoError(_)));
    }
}

use thiserror::Error;

/// Failures raised while rendering a list of content types.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("No content types found")]
    NoRecords,

    #[error("Chunk '{name}' not found")]
    TemplateNotFound { name: String },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Export serialization error: {0}")]
    Export(#[from] toml::ser::Error),
}

#[derive(Error, Debug)]
pub enum SnippetError {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Record file '{path}' could not be parsed: {message}")]
    RecordParseError { path: String, message: String },

    #[error("Unsupported record file format: {path}")]
    UnsupportedRecordFormat { path: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

impl SnippetError {
    /// Short message returned in place of snippet output.
    pub fn user_message(&self) -> String {
        match self {
            SnippetError::Render(e) => e.to_string(),
            SnippetError::IoError(_)
            | SnippetError::RecordParseError { .. }
            | SnippetError::UnsupportedRecordFormat { .. } => {
                "Content types could not be loaded".to_string()
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SnippetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_errors_surface_verbatim() {
        let err = SnippetError::from(RenderError::TemplateNotFound {
            name: "rowTpl".to_string(),
        });
        assert_eq!(err.user_message(), "Chunk 'rowTpl' not found");

        let err = SnippetError::from(RenderError::NoRecords);
        assert_eq!(err.user_message(), "No content types found");
    }

    #[test]
    fn test_load_errors_are_summarised() {
        let err = SnippetError::RecordParseError {
            path: "types.json".to_string(),
            message: "expected value".to_string(),
        };
        assert_eq!(err.user_message(), "Content types could not be loaded");
    }
}

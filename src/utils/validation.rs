use crate::utils::error::{Result, SnippetError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub const VALID_FORMATS: [&str; 2] = ["array", "json"];

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SnippetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SnippetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SnippetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Only used for config files; the snippet parameter itself falls back to `array`.
pub fn validate_format(field_name: &str, format: &str) -> Result<()> {
    if VALID_FORMATS.contains(&format.trim().to_ascii_lowercase().as_str()) {
        return Ok(());
    }

    Err(SnippetError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: format.to_string(),
        reason: format!(
            "Unsupported format. Valid formats: {}",
            VALID_FORMATS.join(", ")
        ),
    })
}

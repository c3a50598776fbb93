use crate::core::export;
use crate::domain::model::{ContentTypeRecord, Fields, OutputFormat, RenderConfig, TemplateRef};
use crate::domain::ports::TemplateResolver;
use crate::utils::error::RenderError;

/// Turns a list of content types into JSON, an export dump, or chunk output.
pub struct ListRenderer<R: TemplateResolver> {
    resolver: R,
}

impl<R: TemplateResolver> ListRenderer<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    pub fn render(
        &self,
        records: &[ContentTypeRecord],
        config: &RenderConfig,
    ) -> Result<String, RenderError> {
        match &config.row_template {
            Some(row) => self.render_templated(records, row, config.wrapper_template.as_ref()),
            None => Self::render_plain(records, config.format),
        }
    }

    fn render_templated(
        &self,
        records: &[ContentTypeRecord],
        row: &TemplateRef,
        wrapper: Option<&TemplateRef>,
    ) -> Result<String, RenderError> {
        if records.is_empty() {
            return Err(RenderError::NoRecords);
        }

        // Resolve both up front so a missing wrapper never leaves half-rendered rows.
        self.ensure_exists(row)?;
        if let Some(wrapper) = wrapper {
            self.ensure_exists(wrapper)?;
        }

        tracing::debug!(
            "Rendering {} content types through {} chunk",
            records.len(),
            row.kind()
        );

        let output: String = records
            .iter()
            .map(|record| self.resolver.render(row, &record.to_fields()))
            .collect();

        let Some(wrapper) = wrapper else {
            return Ok(output);
        };

        tracing::debug!(
            "Wrapping {} bytes of row output in {} chunk",
            output.len(),
            wrapper.kind()
        );
        let mut fields = Fields::with_capacity(1);
        fields.insert("output".to_string(), output);
        Ok(self.resolver.render(wrapper, &fields))
    }

    fn render_plain(
        records: &[ContentTypeRecord],
        format: OutputFormat,
    ) -> Result<String, RenderError> {
        tracing::debug!("Serializing {} content types as {:?}", records.len(), format);
        match format {
            OutputFormat::Json => Ok(serde_json::to_string(records)?),
            OutputFormat::Array => Ok(export::to_export_string(records)?),
        }
    }

    fn ensure_exists(&self, template: &TemplateRef) -> Result<(), RenderError> {
        match template {
            TemplateRef::Named(name) if !self.resolver.exists(name) => {
                Err(RenderError::TemplateNotFound { name: name.clone() })
            }
            _ => Ok(()),
        }
    }
}

use crate::core::renderer::ListRenderer;
use crate::domain::model::SnippetProperties;
use crate::domain::ports::{ContentTypeSource, TemplateResolver};
use crate::utils::error::Result;

pub const CONTENT_TYPE_NOT_FOUND: &str = "Content type not found";

/// `[[GetContentTypes? &id=`` &format=`` &tpl=`` &wrapperTpl=``]]`
pub struct GetContentTypes<S: ContentTypeSource, R: TemplateResolver> {
    source: S,
    resolver: R,
}

impl<S: ContentTypeSource, R: TemplateResolver> GetContentTypes<S, R> {
    pub fn new(source: S, resolver: R) -> Self {
        Self { source, resolver }
    }

    pub async fn try_run(&self, properties: &SnippetProperties) -> Result<String> {
        let records = self.source.fetch(properties.id).await?;
        tracing::debug!(
            "Fetched {} content types (id filter: {:?})",
            records.len(),
            properties.id
        );

        let config = properties.render_config();
        let output = ListRenderer::new(&self.resolver).render(&records, &config)?;

        tracing::debug!("Snippet produced {} bytes", output.len());
        Ok(output)
    }

    /// Never fails; errors come back as the message shown in place of output.
    pub async fn run(&self, properties: &SnippetProperties) -> String {
        match self.try_run(properties).await {
            Ok(output) => output,
            Err(e) => {
                tracing::warn!("GetContentTypes failed: {}", e);
                e.user_message()
            }
        }
    }
}

/// `[[GetContentTypeName? &id=`1`]]`
pub struct GetContentTypeName<S: ContentTypeSource> {
    source: S,
}

impl<S: ContentTypeSource> GetContentTypeName<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Looks up `id`, or the current resource's content type when no id is given.
    pub async fn run(&self, id: Option<i64>, current_content_type: i64) -> String {
        let id = id.unwrap_or(current_content_type);

        match self.source.fetch(Some(id)).await {
            Ok(records) => match records.into_iter().find(|r| r.id == id) {
                Some(record) => record.name,
                None => {
                    tracing::debug!("No content type with id {}", id);
                    CONTENT_TYPE_NOT_FOUND.to_string()
                }
            },
            Err(e) => {
                tracing::warn!("GetContentTypeName failed for id {}: {}", id, e);
                CONTENT_TYPE_NOT_FOUND.to_string()
            }
        }
    }
}

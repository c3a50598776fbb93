use crate::domain::model::{ContentTypeRecord, Fields, TemplateRef};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Stands in for the CMS object layer (`getObject` / `getCollection`).
#[async_trait]
pub trait ContentTypeSource: Send + Sync {
    /// `Some(id)` yields at most one record; `None` yields all of them.
    async fn fetch(&self, id: Option<i64>) -> Result<Vec<ContentTypeRecord>>;
}

/// Stands in for the CMS chunk parser.
pub trait TemplateResolver: Send + Sync {
    fn exists(&self, name: &str) -> bool;

    fn render(&self, template: &TemplateRef, fields: &Fields) -> String;
}

impl<T: TemplateResolver + ?Sized> TemplateResolver for &T {
    fn exists(&self, name: &str) -> bool {
        (**self).exists(name)
    }

    fn render(&self, template: &TemplateRef, fields: &Fields) -> String {
        (**self).render(template, fields)
    }
}

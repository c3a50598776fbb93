use crate::core::{ContentTypeRecord, ContentTypeSource, Result};
use async_trait::async_trait;

#[derive(Debug, Clone, Default)]
pub struct InMemoryContentTypeSource {
    records: Vec<ContentTypeRecord>,
}

impl InMemoryContentTypeSource {
    /// Records are kept in ascending id order; later duplicates of an id are dropped.
    pub fn new(mut records: Vec<ContentTypeRecord>) -> Self {
        records.sort_by_key(|r| r.id);
        records.dedup_by_key(|r| r.id);
        Self { records }
    }

    pub fn records(&self) -> &[ContentTypeRecord] {
        &self.records
    }

    pub fn lookup(&self, id: Option<i64>) -> Vec<ContentTypeRecord> {
        match id {
            Some(id) => self
                .records
                .iter()
                .filter(|r| r.id == id)
                .cloned()
                .collect(),
            None => self.records.clone(),
        }
    }
}

#[async_trait]
impl ContentTypeSource for InMemoryContentTypeSource {
    async fn fetch(&self, id: Option<i64>) -> Result<Vec<ContentTypeRecord>> {
        Ok(self.lookup(id))
    }
}

use crate::core::template::substitute_placeholders;
use crate::core::{Fields, Result, TemplateRef, TemplateResolver};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub const CHUNK_EXTENSIONS: [&str; 2] = ["tpl", "html"];

/// Named chunks held in memory. Lookups are case-sensitive, like chunk names in the manager.
#[derive(Debug, Clone, Default)]
pub struct ChunkLibrary {
    chunks: HashMap<String, String>,
}

impl ChunkLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads every `*.tpl` / `*.html` file directly under `dir`, named by file stem.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let mut library = Self::new();

        for entry in fs::read_dir(dir.as_ref())? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }

            let is_chunk = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| CHUNK_EXTENSIONS.contains(&ext));
            let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };

            if is_chunk {
                let body = fs::read_to_string(&path)?;
                library.insert(name, &body);
            }
        }

        tracing::debug!(
            "Loaded {} chunks from {}",
            library.len(),
            dir.as_ref().display()
        );
        Ok(library)
    }

    pub fn insert(&mut self, name: &str, body: &str) {
        self.chunks.insert(name.to_string(), body.to_string());
    }

    pub fn with_chunk(mut self, name: &str, body: &str) -> Self {
        self.insert(name, body);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.chunks.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}

impl TemplateResolver for ChunkLibrary {
    fn exists(&self, name: &str) -> bool {
        self.chunks.contains_key(name)
    }

    fn render(&self, template: &TemplateRef, fields: &Fields) -> String {
        match template {
            TemplateRef::Inline(body) => substitute_placeholders(body, fields),
            // getChunk on a missing chunk yields an empty string
            TemplateRef::Named(name) => self
                .get(name)
                .map(|body| substitute_placeholders(body, fields))
                .unwrap_or_default(),
        }
    }
}

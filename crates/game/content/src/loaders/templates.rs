//! Template catalog loader.

use std::path::Path;

use arena_core::{Template, TemplateCatalog};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Template catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateFile {
    pub templates: Vec<Template>,
}

/// Loader for creature and spell templates from RON files.
pub struct TemplateLoader;

impl TemplateLoader {
    /// Load a template catalog from a RON file.
    ///
    /// HP rules may use either the list or the single-object shape, with any
    /// of the accepted field synonyms. Duplicate template ids are rejected.
    pub fn load(path: &Path) -> LoadResult<TemplateCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load templates from {}: {}", path.display(), e))
    }

    /// Parse a template catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<TemplateCatalog> {
        let file: TemplateFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse template RON: {}", e))?;

        let count = file.templates.len();
        let catalog = TemplateCatalog::from_templates(file.templates)?;
        tracing::debug!(templates = count, "loaded template catalog");

        Ok(catalog)
    }
}

use std::collections::HashMap;

use super::error::CatalogError;
use super::template::{Template, TemplateId};

/// Read-only template lookup consumed by the orchestrator and rules callers.
pub trait TemplateOracle: Send + Sync {
    fn template(&self, id: &str) -> Option<&Template>;

    /// Returns the template or a `TemplateNotFound` error.
    fn require(&self, id: &str) -> Result<&Template, CatalogError> {
        self.template(id)
            .ok_or_else(|| CatalogError::TemplateNotFound(id.to_string()))
    }
}

/// In-memory template catalog keyed by template id.
#[derive(Clone, Debug, Default)]
pub struct TemplateCatalog {
    templates: HashMap<TemplateId, Template>,
}

impl TemplateCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog, rejecting duplicate ids.
    pub fn from_templates(
        templates: impl IntoIterator<Item = Template>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for template in templates {
            catalog.insert(template)?;
        }
        Ok(catalog)
    }

    pub fn insert(&mut self, template: Template) -> Result<(), CatalogError> {
        if self.templates.contains_key(&template.id) {
            return Err(CatalogError::DuplicateTemplate(template.id));
        }
        self.templates.insert(template.id.clone(), template);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Template> {
        self.templates.values()
    }
}

impl TemplateOracle for TemplateCatalog {
    fn template(&self, id: &str) -> Option<&Template> {
        self.templates.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorSeverity, GameError};

    #[test]
    fn rejects_duplicate_ids() {
        let err = TemplateCatalog::from_templates([
            Template::new("FIRE_IMP", 2, 1),
            Template::new("FIRE_IMP", 3, 1),
        ])
        .unwrap_err();

        assert_eq!(err, CatalogError::DuplicateTemplate("FIRE_IMP".into()));
        assert_eq!(err.error_code(), "CATALOG_DUPLICATE_TEMPLATE");
        assert_eq!(err.severity(), ErrorSeverity::Validation);
    }

    #[test]
    fn require_reports_missing_templates() {
        let catalog = TemplateCatalog::from_templates([Template::new("WATER_NAGA", 4, 2)]).unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.require("WATER_NAGA").unwrap().hp, 4);
        assert_eq!(
            catalog.require("WATER_KRAKEN").unwrap_err().to_string(),
            "template 'WATER_KRAKEN' not found"
        );
    }
}

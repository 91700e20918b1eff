//! Template catalog errors.

use crate::error::{ErrorSeverity, GameError};

/// Errors raised when reading or building a template catalog.
///
/// Rules components never see these: they take `Option<&Template>` and treat
/// a missing template as "no creature". The catalog API reports them so
/// loaders and orchestrators can surface bad card data early.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CatalogError {
    /// No template is registered under the given id.
    #[error("template '{0}' not found")]
    TemplateNotFound(String),

    /// A template with the same id is already registered.
    #[error("template '{0}' is defined more than once")]
    DuplicateTemplate(String),
}

impl GameError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            CatalogError::TemplateNotFound(_) | CatalogError::DuplicateTemplate(_) => {
                ErrorSeverity::Validation
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            CatalogError::TemplateNotFound(_) => "CATALOG_TEMPLATE_NOT_FOUND",
            CatalogError::DuplicateTemplate(_) => "CATALOG_DUPLICATE_TEMPLATE",
        }
    }
}

//! Read-only reference data consumed by the rules components.
//!
//! Templates describe creature and spell kinds, the [`TemplateOracle`] serves
//! them by id, and [`TerrainLookup`] exposes the element under a board cell.
//! None of these types are mutated during a match.
mod catalog;
mod error;
mod template;
mod terrain;

pub use catalog::{TemplateCatalog, TemplateOracle};
pub use error::CatalogError;
pub use template::{
    AttackDescriptor, AttackScheme, AttackType, ForcedSchemeRule, MagicArea, Template, TemplateId,
};
pub use terrain::{Element, TerrainLookup};

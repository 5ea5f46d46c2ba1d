use thiserror::Error;

use crate::models::Scheme;

/// Scheme records embedded at compile time
static CATALOG_JSON: &str = include_str!("../data/schemes.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse embedded scheme catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Immutable catalog of government schemes, parsed once at process start
/// from an embedded JSON resource. No create/update/delete lifecycle; the
/// recommendation engine re-derives its vocabulary and vectors from these
/// records on every call.
#[derive(Debug, Clone)]
pub struct SchemeCatalog {
    schemes: Vec<Scheme>,
}

impl SchemeCatalog {
    pub fn load() -> Result<Self, CatalogError> {
        let schemes: Vec<Scheme> = serde_json::from_str(CATALOG_JSON)?;
        Ok(Self { schemes })
    }

    pub fn schemes(&self) -> &[Scheme] {
        &self.schemes
    }

    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }
}

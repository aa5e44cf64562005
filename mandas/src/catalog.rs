use crate::constants::MIN_WORDS_PER_CATEGORY;
use crate::error::CatalogError;
use crate::types::{Category, CategoryKey};
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

// Category/word dataset. Loaded once, never mutated afterwards.

const EMBEDDED_WORDS: &str = include_str!("../data/words.json");

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_WORDS)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let mut document: HashMap<String, Vec<String>> = serde_json::from_str(raw)?;
        let mut categories = Vec::new();
        for key in CategoryKey::ALL {
            if let Some(words) = document.remove(key.as_str()) {
                categories.push(Category {
                    key,
                    name: key.display_name().to_string(),
                    words,
                });
            }
        }
        for unknown in document.keys() {
            log::debug!("ignoring unknown category {:?} in words document", unknown);
        }
        Ok(Self { categories })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, key: CategoryKey) -> Option<&Category> {
        self.categories.iter().find(|c| c.key == key)
    }

    /// Word list for `key`, provided it is large enough to play a round with.
    pub fn words(&self, key: CategoryKey) -> Result<&[String], CatalogError> {
        let category = self
            .category(key)
            .ok_or(CatalogError::MissingCategory(key))?;
        if category.words.len() < MIN_WORDS_PER_CATEGORY {
            return Err(CatalogError::TooFewWords {
                category: key,
                len: category.words.len(),
                min: MIN_WORDS_PER_CATEGORY,
            });
        }
        Ok(&category.words)
    }
}

pub fn shared() -> Result<&'static Catalog, &'static CatalogError> {
    static CATALOG: OnceLock<Result<Catalog, CatalogError>> = OnceLock::new();
    CATALOG.get_or_init(Catalog::embedded).as_ref()
}

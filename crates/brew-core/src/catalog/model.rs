//! Catalog domain model.
//!
//! The catalog is the fixed menu the synchronizer matches against. Entry order
//! is significant: single-valued categories resolve ties by taking the last
//! matching entry in this order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::error::{BrewError, Result};

/// A selectable axis of an order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Category {
    Beverage,
    Size,
    Milk,
    Extra,
}

impl Category {
    /// Whether at most one entry of this category can be selected at a time.
    pub fn is_single_valued(self) -> bool {
        !matches!(self, Category::Extra)
    }

    /// All categories in display order.
    pub fn all() -> impl Iterator<Item = Category> {
        Category::iter()
    }
}

/// How an entry contributes to the price of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Pricing {
    /// No charge of its own (sizes, regular milk).
    #[default]
    Included,
    /// Flat amount added on top of the beverage.
    Surcharge { amount: u32 },
    /// Base price keyed by size canonical name.
    PerSize { prices: BTreeMap<String, u32> },
}

/// A single menu entry: canonical name plus the keywords that select it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub category: Category,
    /// Display/identity string, unique within the category
    pub name: String,
    /// Lowercase aliases matched as substrings of the evidence text
    pub keywords: Vec<String>,
    #[serde(default)]
    pub pricing: Pricing,
}

impl CatalogEntry {
    pub fn new<I, S>(category: Category, name: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            category,
            name: name.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
            pricing: Pricing::Included,
        }
    }

    pub fn with_pricing(mut self, pricing: Pricing) -> Self {
        self.pricing = pricing;
        self
    }

    /// True if any keyword occurs in `text`. `text` must already be lowercase.
    pub fn mentioned_in(&self, text: &str) -> bool {
        self.keywords.iter().any(|keyword| text.contains(keyword.as_str()))
    }
}

/// Immutable, validated, ordered menu.
///
/// Built once and shared behind an `Arc`; nothing mutates it after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Validates `entries` and builds a catalog preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`BrewError::InvalidCatalog`] when:
    /// - two entries in one category share a canonical name
    /// - an entry has no keywords, or a keyword is blank or not lowercase
    /// - a per-size price names a size that is not in the catalog
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self> {
        validate(&entries)?;
        Ok(Self { entries })
    }

    /// All entries in iteration order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Entries of one category, in iteration order.
    pub fn entries_in(&self, category: Category) -> impl Iterator<Item = &CatalogEntry> {
        self.entries
            .iter()
            .filter(move |entry| entry.category == category)
    }

    pub fn find(&self, category: Category, name: &str) -> Option<&CatalogEntry> {
        self.entries_in(category).find(|entry| entry.name == name)
    }

    pub fn contains(&self, category: Category, name: &str) -> bool {
        self.find(category, name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn validate(entries: &[CatalogEntry]) -> Result<()> {
    let mut seen: BTreeMap<Category, Vec<&str>> = BTreeMap::new();

    for entry in entries {
        let names = seen.entry(entry.category).or_default();
        if names.contains(&entry.name.as_str()) {
            return Err(BrewError::invalid_catalog(format!(
                "duplicate {} entry '{}'",
                entry.category, entry.name
            )));
        }
        names.push(entry.name.as_str());

        if entry.keywords.is_empty() {
            return Err(BrewError::invalid_catalog(format!(
                "{} entry '{}' has no keywords",
                entry.category, entry.name
            )));
        }
        for keyword in &entry.keywords {
            if keyword.trim().is_empty() {
                return Err(BrewError::invalid_catalog(format!(
                    "{} entry '{}' has a blank keyword",
                    entry.category, entry.name
                )));
            }
            if *keyword != keyword.to_lowercase() {
                return Err(BrewError::invalid_catalog(format!(
                    "keyword '{}' of '{}' must be lowercase",
                    keyword, entry.name
                )));
            }
        }
    }

    let sizes = seen.get(&Category::Size).cloned().unwrap_or_default();
    for entry in entries {
        if let Pricing::PerSize { prices } = &entry.pricing {
            if let Some(unknown) = prices.keys().find(|size| !sizes.contains(&size.as_str())) {
                return Err(BrewError::invalid_catalog(format!(
                    "'{}' is priced for unknown size '{}'",
                    entry.name, unknown
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(name: &str, keyword: &str) -> CatalogEntry {
        CatalogEntry::new(Category::Size, name, [keyword])
    }

    #[test]
    fn test_extra_is_the_only_multi_valued_category() {
        let multi: Vec<Category> = Category::all().filter(|c| !c.is_single_valued()).collect();
        assert_eq!(multi, vec![Category::Extra]);
    }

    #[test]
    fn test_category_parses_from_snake_case() {
        assert_eq!("milk".parse::<Category>().unwrap(), Category::Milk);
        assert_eq!(Category::Beverage.to_string(), "beverage");
    }

    #[test]
    fn test_rejects_duplicate_name_within_category() {
        let err = Catalog::new(vec![size("Tall", "tall"), size("Tall", "small")]).unwrap_err();
        assert!(err.is_invalid_catalog());
        assert!(err.to_string().contains("duplicate size entry 'Tall'"));
    }

    #[test]
    fn test_same_name_in_different_categories_is_allowed() {
        let catalog = Catalog::new(vec![
            CatalogEntry::new(Category::Beverage, "Mocha", ["mocha"]),
            CatalogEntry::new(Category::Extra, "Mocha", ["mocha sauce"]),
        ])
        .unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_rejects_empty_and_uppercase_keywords() {
        let empty: Vec<&str> = Vec::new();
        assert!(Catalog::new(vec![CatalogEntry::new(Category::Milk, "Oat Milk", empty)]).is_err());
        assert!(Catalog::new(vec![size("Tall", "  ")]).is_err());
        assert!(Catalog::new(vec![size("Tall", "Tall")]).is_err());
    }

    #[test]
    fn test_rejects_price_for_unknown_size() {
        let latte = CatalogEntry::new(Category::Beverage, "Latte", ["latte"]).with_pricing(
            Pricing::PerSize {
                prices: BTreeMap::from([("Trenta".to_string(), 500)]),
            },
        );
        let err = Catalog::new(vec![size("Tall", "tall"), latte]).unwrap_err();
        assert!(err.to_string().contains("unknown size 'Trenta'"));
    }

    #[test]
    fn test_entries_in_preserves_order() {
        let catalog = Catalog::new(vec![
            size("Tall", "tall"),
            CatalogEntry::new(Category::Milk, "Soy Milk", ["soy"]),
            size("Venti", "venti"),
        ])
        .unwrap();
        let names: Vec<&str> = catalog
            .entries_in(Category::Size)
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["Tall", "Venti"]);
        assert!(catalog.contains(Category::Milk, "Soy Milk"));
        assert!(!catalog.contains(Category::Size, "Soy Milk"));
    }
}

//! Keyword matcher.
//!
//! Plain substring containment on lowercase text: no tokenization, no word
//! boundaries, no negation. "no whipped cream" selects Whipped Cream.

use std::collections::{BTreeMap, BTreeSet};

use crate::catalog::{Catalog, Category};
use crate::evidence::Evidence;

/// Per-category findings for one pass. Borrows canonical names from the
/// catalog, so nothing is copied until the reconciler commits a change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchResult<'c> {
    singles: BTreeMap<Category, &'c str>,
    extras: BTreeSet<&'c str>,
}

impl<'c> MatchResult<'c> {
    /// Match for a single-valued category, if any.
    pub fn single(&self, category: Category) -> Option<&'c str> {
        self.singles.get(&category).copied()
    }

    /// Every matched multi-valued entry.
    pub fn extras(&self) -> &BTreeSet<&'c str> {
        &self.extras
    }

    pub fn is_empty(&self) -> bool {
        self.singles.is_empty() && self.extras.is_empty()
    }
}

/// Runs every category of `catalog` against `evidence`.
///
/// Single-valued categories keep the last matching entry in catalog order;
/// the multi-valued category keeps all of them.
pub fn match_evidence<'c>(evidence: &Evidence, catalog: &'c Catalog) -> MatchResult<'c> {
    let text = evidence.as_str();
    let mut result = MatchResult::default();

    for category in Category::all() {
        let hits = catalog
            .entries_in(category)
            .filter(|entry| entry.mentioned_in(text))
            .map(|entry| entry.name.as_str());

        if category.is_single_valued() {
            if let Some(name) = hits.last() {
                result.singles.insert(category, name);
            }
        } else {
            result.extras.extend(hits);
        }
    }

    result
}

//! Selection state and the reconciler that merges new findings into it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;

use crate::catalog::{CatalogEntry, Category};
use crate::matcher::MatchResult;

/// The current order as derived from the conversation.
///
/// Every value is a canonical catalog name. Single-valued fields only ever
/// move from one match to another; `extras` only grows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beverage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milk: Option<String>,
    #[serde(default)]
    pub extras: BTreeSet<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of a single-valued category. Always `None` for `Extra`.
    pub fn single(&self, category: Category) -> Option<&str> {
        match category {
            Category::Beverage => self.beverage.as_deref(),
            Category::Size => self.size.as_deref(),
            Category::Milk => self.milk.as_deref(),
            Category::Extra => None,
        }
    }

    fn single_mut(&mut self, category: Category) -> Option<&mut Option<String>> {
        match category {
            Category::Beverage => Some(&mut self.beverage),
            Category::Size => Some(&mut self.size),
            Category::Milk => Some(&mut self.milk),
            Category::Extra => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.beverage.is_none() && self.size.is_none() && self.milk.is_none() && self.extras.is_empty()
    }

    /// Whether `entry` should be highlighted.
    pub fn is_selected(&self, entry: &CatalogEntry) -> bool {
        if entry.category.is_single_valued() {
            self.single(entry.category) == Some(entry.name.as_str())
        } else {
            self.extras.contains(&entry.name)
        }
    }
}

/// Merges `found` into `previous`.
///
/// Single-valued categories take the new match when there is one and keep
/// the previous value otherwise; extras are unioned. When nothing changes
/// the previous `Arc` is returned as-is, so `Arc::ptr_eq` tells the caller
/// there is nothing to publish.
pub fn reconcile(previous: &Arc<SelectionState>, found: &MatchResult<'_>) -> Arc<SelectionState> {
    let mut next = SelectionState::clone(previous);

    for category in Category::all() {
        if let (Some(slot), Some(name)) = (next.single_mut(category), found.single(category)) {
            *slot = Some(name.to_string());
        }
    }
    next.extras
        .extend(found.extras().iter().map(|name| name.to_string()));

    if next == **previous {
        Arc::clone(previous)
    } else {
        Arc::new(next)
    }
}

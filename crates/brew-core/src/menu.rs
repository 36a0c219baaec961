//! Plain-text rendering of the menu and of an order review.

use crate::catalog::{Catalog, Category, Pricing};
use crate::error::BrewError;
use crate::pricing::quote;
use crate::selection::SelectionState;

fn heading(category: Category) -> &'static str {
    match category {
        Category::Beverage => "DRINKS",
        Category::Size => "SIZES",
        Category::Milk => "MILK OPTIONS",
        Category::Extra => "EXTRAS",
    }
}

/// Renders the catalog grouped by category, with prices.
pub fn render_menu(catalog: &Catalog, currency: &str) -> String {
    let sizes: Vec<&str> = catalog
        .entries_in(Category::Size)
        .map(|entry| entry.name.as_str())
        .collect();
    let mut out = String::new();

    for category in Category::all() {
        let mut entries = catalog.entries_in(category).peekable();
        if entries.peek().is_none() {
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(heading(category));
        out.push_str(":\n");

        for entry in entries {
            let price = match &entry.pricing {
                Pricing::Included if category == Category::Size => String::new(),
                Pricing::Included => " - included".to_string(),
                Pricing::Surcharge { amount } => format!(" - add {currency}{amount}"),
                Pricing::PerSize { prices } => {
                    let columns: Vec<String> = sizes
                        .iter()
                        .filter_map(|size| prices.get(*size).map(|p| format!("{currency}{p}")))
                        .collect();
                    format!(": {}", columns.join(" / "))
                }
            };
            out.push_str(&format!("  - {}{}\n", entry.name, price));
        }
    }

    out
}

/// Summarizes the selection the way the barista reads it back.
pub fn render_review(catalog: &Catalog, state: &SelectionState, currency: &str) -> String {
    if state.is_empty() {
        return "Your order is currently empty.".to_string();
    }

    let mut summary = [state.size.as_deref(), state.beverage.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");
    if let Some(milk) = state.milk.as_deref() {
        summary = join_clause(summary, &format!("with {}", milk.to_lowercase()));
    }
    if !state.extras.is_empty() {
        let extras: Vec<&str> = catalog
            .entries_in(Category::Extra)
            .filter(|entry| state.extras.contains(&entry.name))
            .map(|entry| entry.name.as_str())
            .collect();
        summary = join_clause(summary, &format!("+ {}", extras.join(", ")));
    }

    match quote(catalog, state) {
        Ok(quote) => format!("{summary} - Total: {currency}{}", quote.total),
        Err(BrewError::IncompleteOrder { missing }) => {
            format!("{summary} (still need a {missing})")
        }
        Err(err) => format!("{summary} (cannot price: {err})"),
    }
}

fn join_clause(summary: String, clause: &str) -> String {
    if summary.is_empty() {
        clause.to_string()
    } else {
        format!("{summary} {clause}")
    }
}

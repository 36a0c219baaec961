//! Price quotes for a selection.

use serde::Serialize;

use crate::catalog::{Catalog, CatalogEntry, Category, Pricing};
use crate::error::{BrewError, Result};
use crate::selection::SelectionState;

/// One priced line of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteLine {
    pub name: String,
    pub amount: u64,
}

/// Price breakdown for a complete selection.
///
/// Catalog prices are `u32`; lines and the total are widened to `u64` so a
/// sum of catalog prices cannot overflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderQuote {
    pub base: QuoteLine,
    pub milk: Option<QuoteLine>,
    pub extras: Vec<QuoteLine>,
    pub total: u64,
}

/// Prices `state` against `catalog`.
///
/// # Errors
///
/// - [`BrewError::IncompleteOrder`] if no beverage or no size is selected
/// - [`BrewError::NotFound`] if the selection names something the catalog
///   does not price (a state built against a different catalog)
pub fn quote(catalog: &Catalog, state: &SelectionState) -> Result<OrderQuote> {
    let beverage = required(catalog, state, Category::Beverage)?;
    let size = required(catalog, state, Category::Size)?;

    let base_amount = match &beverage.pricing {
        Pricing::PerSize { prices } => prices.get(&size.name).copied().map(u64::from),
        Pricing::Surcharge { amount } => Some(u64::from(*amount)),
        Pricing::Included => Some(0),
    }
    .ok_or_else(|| BrewError::not_found("price", format!("{} {}", size.name, beverage.name)))?;

    let milk = match state.milk.as_deref() {
        Some(name) => {
            let entry = lookup(catalog, Category::Milk, name)?;
            Some(line(entry, surcharge(entry)))
        }
        None => None,
    };

    // Catalog order, not set order, so receipts read like the menu.
    let extras: Vec<QuoteLine> = catalog
        .entries_in(Category::Extra)
        .filter(|entry| state.extras.contains(&entry.name))
        .map(|entry| line(entry, surcharge(entry)))
        .collect();
    if let Some(unknown) = state
        .extras
        .iter()
        .find(|name| !catalog.contains(Category::Extra, name))
    {
        return Err(BrewError::not_found("extra", unknown.clone()));
    }

    let total = base_amount
        + milk.as_ref().map_or(0, |line| line.amount)
        + extras.iter().map(|line| line.amount).sum::<u64>();

    Ok(OrderQuote {
        base: QuoteLine {
            name: format!("{} {}", size.name, beverage.name),
            amount: base_amount,
        },
        milk,
        extras,
        total,
    })
}

fn required<'c>(
    catalog: &'c Catalog,
    state: &SelectionState,
    category: Category,
) -> Result<&'c CatalogEntry> {
    let name = state
        .single(category)
        .ok_or(BrewError::IncompleteOrder { missing: category })?;
    lookup(catalog, category, name)
}

fn lookup<'c>(catalog: &'c Catalog, category: Category, name: &str) -> Result<&'c CatalogEntry> {
    catalog
        .find(category, name)
        .ok_or_else(|| BrewError::not_found("catalog entry", name))
}

fn surcharge(entry: &CatalogEntry) -> u64 {
    match entry.pricing {
        Pricing::Surcharge { amount } => u64::from(amount),
        _ => 0,
    }
}

fn line(entry: &CatalogEntry, amount: u64) -> QuoteLine {
    QuoteLine {
        name: entry.name.clone(),
        amount,
    }
}

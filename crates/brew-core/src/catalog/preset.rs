//! Built-in barista menu.
//!
//! Loaded once at startup and cached for the lifetime of the process.
//! Prices are in rupees; Tall/Grande/Venti take the small/medium/large columns.

use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

use super::model::{Catalog, CatalogEntry, Category, Pricing};

/// (name, keywords, [tall, grande, venti])
const BEVERAGES: &[(&str, &[&str], [u32; 3])] = &[
    ("Espresso", &["espresso", "expresso"], [245, 285, 330]),
    ("Latte", &["latte"], [370, 410, 450]),
    ("Cappuccino", &["cappuccino", "cappucino", "capuccino"], [350, 395, 435]),
    ("Americano", &["americano"], [285, 330, 370]),
    ("Mocha", &["mocha"], [410, 450, 495]),
    ("Cold Brew", &["cold brew", "coldbrew"], [330, 370, 410]),
    ("Macchiato", &["macchiato", "machiato"], [350, 395, 435]),
    ("Flat White", &["flat white", "flatwhite"], [370, 410, 450]),
];

const SIZES: &[(&str, &[&str])] = &[
    ("Tall", &["tall", "small"]),
    ("Grande", &["grande", "medium"]),
    ("Venti", &["venti", "large"]),
];

/// (name, keywords, upcharge)
const MILKS: &[(&str, &[&str], u32)] = &[
    ("Whole Milk", &["whole"], 0),
    ("Skim Milk", &["skim"], 0),
    ("Oat Milk", &["oat"], 60),
    ("Almond Milk", &["almond"], 60),
    ("Soy Milk", &["soy"], 60),
];

const EXTRAS: &[(&str, &[&str], u32)] = &[
    ("Extra Shot", &["extra shot", "double shot"], 65),
    ("Whipped Cream", &["whipped cream", "whip"], 60),
    ("Caramel Drizzle", &["caramel"], 50),
    ("Vanilla Syrup", &["vanilla"], 50),
    ("Hazelnut Syrup", &["hazelnut"], 50),
    ("Chocolate Chips", &["chocolate chip", "choc chip"], 60),
];

static DEFAULT_CATALOG: OnceLock<Arc<Catalog>> = OnceLock::new();

/// Returns the shared built-in catalog.
pub fn default_catalog() -> Arc<Catalog> {
    DEFAULT_CATALOG
        .get_or_init(|| {
            // The tables above are covered by `test_default_catalog_is_valid`.
            Arc::new(Catalog::new(default_entries()).expect("built-in catalog is valid"))
        })
        .clone()
}

/// The built-in entries in iteration order, unvalidated.
pub fn default_entries() -> Vec<CatalogEntry> {
    let mut entries = Vec::new();

    for (name, keywords, prices) in BEVERAGES {
        let prices: BTreeMap<String, u32> = SIZES
            .iter()
            .zip(prices)
            .map(|((size, _), price)| (size.to_string(), *price))
            .collect();
        entries.push(
            CatalogEntry::new(Category::Beverage, *name, keywords.iter().copied())
                .with_pricing(Pricing::PerSize { prices }),
        );
    }

    for (name, keywords) in SIZES {
        entries.push(CatalogEntry::new(Category::Size, *name, keywords.iter().copied()));
    }

    for (name, keywords, amount) in MILKS {
        entries.push(surcharged(Category::Milk, name, keywords, *amount));
    }

    for (name, keywords, amount) in EXTRAS {
        entries.push(surcharged(Category::Extra, name, keywords, *amount));
    }

    entries
}

fn surcharged(category: Category, name: &str, keywords: &[&str], amount: u32) -> CatalogEntry {
    let entry = CatalogEntry::new(category, name, keywords.iter().copied());
    if amount == 0 {
        entry
    } else {
        entry.with_pricing(Pricing::Surcharge { amount })
    }
}

//! Core of the Brew voice ordering assistant.
//!
//! Watches a chat transcript and derives, from keyword evidence in what the
//! customer said, which menu entries should be highlighted.
//!
//! Each pass runs evidence filter, then matcher, then reconciler:
//!
//! ```
//! use brew_core::{ChatMessage, OrderSynchronizer, default_catalog};
//!
//! let mut sync = OrderSynchronizer::new(default_catalog());
//! sync.on_transcript_changed(&[
//!     ChatMessage::agent("What can I get you?"),
//!     ChatMessage::human("Can I get a venti latte with oat milk and whipped cream"),
//! ]);
//!
//! let state = sync.state();
//! assert_eq!(state.beverage.as_deref(), Some("Latte"));
//! assert_eq!(state.size.as_deref(), Some("Venti"));
//! assert_eq!(state.milk.as_deref(), Some("Oat Milk"));
//! assert!(state.extras.contains("Whipped Cream"));
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod evidence;
pub mod matcher;
pub mod menu;
pub mod pricing;
pub mod selection;
pub mod synchronizer;
pub mod transcript;

pub use catalog::{Catalog, CatalogEntry, CatalogRepository, Category, Pricing, default_catalog};
pub use config::AppConfig;
pub use error::{BrewError, Result};
pub use evidence::Evidence;
pub use matcher::{MatchResult, match_evidence};
pub use menu::{render_menu, render_review};
pub use pricing::{OrderQuote, QuoteLine, quote};
pub use selection::{SelectionState, reconcile};
pub use synchronizer::{OrderSynchronizer, SyncOutcome, SyncPhase};
pub use transcript::{ChatMessage, MessageOrigin};

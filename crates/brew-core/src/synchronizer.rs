//! Conversation-to-selection synchronizer.
//!
//! Re-derives the order from the whole transcript on every change. Working
//! from the full history rather than a diff keeps the result correct when
//! updates arrive batched or out of order, and makes a repeated pass a no-op.

use std::sync::Arc;
use tracing::{debug, info};

use crate::catalog::{Catalog, CatalogEntry};
use crate::evidence::Evidence;
use crate::matcher::match_evidence;
use crate::selection::{SelectionState, reconcile};
use crate::transcript::ChatMessage;

/// Whether the synchronizer has picked anything up yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncPhase {
    /// Nothing selected so far.
    Idle,
    /// At least one field is set. Terminal for the session.
    Tracking,
}

/// What a single pass did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// No human evidence; nothing was recomputed.
    Skipped,
    /// Recomputed, structurally equal to before; the state instance is kept.
    Unchanged,
    /// A new state was produced.
    Updated,
}

impl SyncOutcome {
    pub fn is_updated(self) -> bool {
        matches!(self, SyncOutcome::Updated)
    }
}

/// Holds the selection for one ordering session.
///
/// Create one per session and drop it (or call [`reset`](Self::reset)) when
/// the session ends.
#[derive(Debug, Clone)]
pub struct OrderSynchronizer {
    catalog: Arc<Catalog>,
    state: Arc<SelectionState>,
    passes: u64,
}

impl OrderSynchronizer {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            state: Arc::new(SelectionState::new()),
            passes: 0,
        }
    }

    /// Runs one pass over the full transcript.
    pub fn on_transcript_changed(&mut self, transcript: &[ChatMessage]) -> SyncOutcome {
        let Some(evidence) = Evidence::collect(transcript) else {
            debug!(messages = transcript.len(), "no human evidence, pass skipped");
            return SyncOutcome::Skipped;
        };

        self.passes += 1;
        let found = match_evidence(&evidence, &self.catalog);
        let next = reconcile(&self.state, &found);

        if Arc::ptr_eq(&next, &self.state) {
            debug!(pass = self.passes, "selection unchanged");
            return SyncOutcome::Unchanged;
        }

        info!(
            pass = self.passes,
            beverage = next.beverage.as_deref().unwrap_or("-"),
            size = next.size.as_deref().unwrap_or("-"),
            milk = next.milk.as_deref().unwrap_or("-"),
            extras = next.extras.len(),
            "selection updated"
        );
        self.state = next;
        SyncOutcome::Updated
    }

    /// Read-only snapshot of the current selection.
    pub fn state(&self) -> &Arc<SelectionState> {
        &self.state
    }

    pub fn phase(&self) -> SyncPhase {
        if self.state.is_empty() {
            SyncPhase::Idle
        } else {
            SyncPhase::Tracking
        }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Whether `entry` is part of the current selection.
    pub fn is_selected(&self, entry: &CatalogEntry) -> bool {
        self.state.is_selected(entry)
    }

    /// Highlighted entries in catalog order.
    pub fn selected_entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.catalog
            .entries()
            .iter()
            .filter(|entry| self.state.is_selected(entry))
    }

    /// Discards the selection, as when the session is torn down.
    pub fn reset(&mut self) {
        self.state = Arc::new(SelectionState::new());
        self.passes = 0;
    }
}

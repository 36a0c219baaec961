//! JSON transcript files, as exported by the transport layer.
//!
//! ```json
//! [
//!   { "origin": "agent", "text": "Welcome! What can I get you?" },
//!   { "origin": "human", "text": "A venti latte please" }
//! ]
//! ```

use brew_core::{BrewError, ChatMessage, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Reads a transcript from a JSON array of messages.
pub fn load_transcript(path: &Path) -> Result<Vec<ChatMessage>> {
    if !path.exists() {
        return Err(BrewError::not_found("transcript", path.display().to_string()));
    }
    let content = fs::read_to_string(path)?;
    let messages: Vec<ChatMessage> = serde_json::from_str(&content)?;
    debug!(path = %path.display(), messages = messages.len(), "loaded transcript");
    Ok(messages)
}

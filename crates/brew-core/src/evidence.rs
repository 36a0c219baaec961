//! Evidence filter.
//!
//! Only what the human said counts. Agent suggestions are never evidence,
//! otherwise the UI would highlight items the barista merely offered.

use crate::transcript::ChatMessage;

/// Lowercased, space-joined text of every human message in a transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evidence(String);

impl Evidence {
    /// Builds evidence from the full transcript.
    ///
    /// Returns `None` when the transcript has no human message; the caller
    /// skips the pass in that case. Blank human messages still count and
    /// yield evidence that simply matches nothing.
    pub fn collect(transcript: &[ChatMessage]) -> Option<Self> {
        let texts: Vec<&str> = transcript
            .iter()
            .filter(|message| message.origin.is_human())
            .map(|message| message.text.as_str())
            .collect();

        if texts.is_empty() {
            return None;
        }
        Some(Self(texts.join(" ").to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

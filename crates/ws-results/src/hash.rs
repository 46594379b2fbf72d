//! Content-based hashing for case IDs.

use sha2::{Digest, Sha256};
use ws_deck::SummaryDeck;

/// Hash of the deck, the raw step input and the writer version.
pub fn compute_case_id(deck: &SummaryDeck, step_input: &str, writer_version: &str) -> String {
    let mut hasher = Sha256::new();

    let deck_json = serde_json::to_string(deck).unwrap_or_default();
    hasher.update(deck_json.as_bytes());

    hasher.update(step_input.as_bytes());
    hasher.update(writer_version.as_bytes());

    let result = hasher.finalize();
    format!("{:x}", result)
}

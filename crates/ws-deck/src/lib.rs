//! ws-deck: summary deck file format and validation.
//!
//! A deck names the wells and groups of a case, the observed (history)
//! rates per well and the summary keywords to report.

pub mod schema;
pub mod validate;

pub use schema::*;
pub use validate::{ValidationError, validate_deck};

pub const LATEST_VERSION: u32 = 1;

pub type DeckResult<T> = Result<T, DeckError>;

#[derive(thiserror::Error, Debug)]
pub enum DeckError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &std::path::Path) -> DeckResult<SummaryDeck> {
    let content = std::fs::read_to_string(path)?;
    let deck: SummaryDeck = serde_yaml::from_str(&content)?;
    validate_deck(&deck)?;
    Ok(deck)
}

pub fn save_yaml(path: &std::path::Path, deck: &SummaryDeck) -> DeckResult<()> {
    validate_deck(deck)?;
    let content = serde_yaml::to_string(deck)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> DeckResult<SummaryDeck> {
    let content = std::fs::read_to_string(path)?;
    let deck: SummaryDeck = serde_json::from_str(&content)?;
    validate_deck(&deck)?;
    Ok(deck)
}

pub fn save_json(path: &std::path::Path, deck: &SummaryDeck) -> DeckResult<()> {
    validate_deck(deck)?;
    let content = serde_json::to_string_pretty(deck)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load by extension: `.json` as JSON, anything else as YAML.
pub fn load(path: &std::path::Path) -> DeckResult<SummaryDeck> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => load_json(path),
        _ => load_yaml(path),
    }
}

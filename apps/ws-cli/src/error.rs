//! Error type for the ws-cli commands.

use std::path::PathBuf;

/// Wraps errors from the backend crates into one CLI-facing type.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Deck error: {0}")]
    Deck(#[from] ws_deck::DeckError),

    #[error("Summary error: {0}")]
    Summary(#[from] ws_summary::SummaryError),

    #[error("Results error: {0}")]
    Results(#[from] ws_results::ResultsError),

    #[error("Failed to read {path}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CliResult<T> = Result<T, CliError>;

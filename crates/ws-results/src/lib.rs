//! ws-results: summary table, case storage and retrieval.

pub mod hash;
pub mod query;
pub mod store;
pub mod types;
pub mod writer;

pub use hash::compute_case_id;
pub use store::SummaryStore;
pub use types::*;
pub use writer::{MemoryWriter, StoreWriter, SummaryWriter, WRITER_VERSION};

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Case not found: {case_id}")]
    CaseNotFound { case_id: String },

    #[error("Invalid path: {message}")]
    InvalidPath { message: String },

    #[error("Unknown summary key: {keyword}:{entity}")]
    UnknownKey { keyword: String, entity: String },
}

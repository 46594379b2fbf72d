//! Transport seam: where a finished summary table goes on flush.

use crate::store::SummaryStore;
use crate::types::{CaseId, CaseManifest, SummaryTable};
use crate::ResultsResult;

/// Version stamped into every manifest this crate writes.
pub const WRITER_VERSION: &str = env!("CARGO_PKG_VERSION");

pub trait SummaryWriter {
    /// Persist a complete table. Called again with identical content on re-flush.
    fn write_summary(&mut self, table: &SummaryTable) -> ResultsResult<()>;
}

/// Keeps every written table in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryWriter {
    pub tables: Vec<SummaryTable>,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&SummaryTable> {
        self.tables.last()
    }
}

impl SummaryWriter for MemoryWriter {
    fn write_summary(&mut self, table: &SummaryTable) -> ResultsResult<()> {
        self.tables.push(table.clone());
        Ok(())
    }
}

/// Writes one case into a `SummaryStore`.
#[derive(Debug, Clone)]
pub struct StoreWriter {
    store: SummaryStore,
    case_id: CaseId,
    name: String,
    timestamp: String,
}

impl StoreWriter {
    pub fn new(store: SummaryStore, case_id: CaseId, name: impl Into<String>) -> Self {
        Self {
            store,
            case_id,
            name: name.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn case_id(&self) -> &str {
        &self.case_id
    }
}

impl SummaryWriter for StoreWriter {
    fn write_summary(&mut self, table: &SummaryTable) -> ResultsResult<()> {
        let manifest = CaseManifest {
            case_id: self.case_id.clone(),
            name: self.name.clone(),
            timestamp: self.timestamp.clone(),
            writer_version: WRITER_VERSION.to_string(),
            key_count: table.keys().len(),
            ministep_count: table.ministeps.len(),
        };
        self.store.save_case(&manifest, table)
    }
}

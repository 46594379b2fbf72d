//! Summary table types.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

pub type CaseId = String;

/// One reported series: a keyword evaluated for one entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SummaryKey {
    pub keyword: String,
    pub entity: String,
}

impl SummaryKey {
    pub fn new(keyword: impl Into<String>, entity: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            entity: entity.into(),
        }
    }
}

/// Values of every key at one ministep, in `SummaryTable::keys()` order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinistepRecord {
    pub report_step: usize,
    /// Simulated time in seconds, as ingested.
    pub sim_time_s: f64,
    /// Simulated time in report time units.
    pub time: f64,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseManifest {
    pub case_id: CaseId,
    pub name: String,
    pub timestamp: String,
    pub writer_version: String,
    pub key_count: usize,
    pub ministep_count: usize,
}

/// Complete summary output of one session.
///
/// Every ministep is kept on the timeline. Lookups by report step resolve to
/// the last ministep tagged with that step.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "TableData", into = "TableData")]
pub struct SummaryTable {
    keys: Vec<SummaryKey>,
    /// keyword -> entity -> column; the first occurrence of a key wins.
    index: HashMap<String, HashMap<String, usize>>,
    pub ministeps: Vec<MinistepRecord>,
}

/// Serialized form of `SummaryTable`; the lookup index is rebuilt on load.
#[derive(Serialize, Deserialize)]
struct TableData {
    keys: Vec<SummaryKey>,
    ministeps: Vec<MinistepRecord>,
}

impl From<TableData> for SummaryTable {
    fn from(data: TableData) -> Self {
        let mut table = SummaryTable::new(data.keys);
        table.ministeps = data.ministeps;
        table
    }
}

impl From<SummaryTable> for TableData {
    fn from(table: SummaryTable) -> Self {
        Self {
            keys: table.keys,
            ministeps: table.ministeps,
        }
    }
}

impl SummaryTable {
    pub fn new(keys: Vec<SummaryKey>) -> Self {
        let mut index: HashMap<String, HashMap<String, usize>> = HashMap::new();
        for (i, key) in keys.iter().enumerate() {
            index
                .entry(key.keyword.clone())
                .or_default()
                .entry(key.entity.clone())
                .or_insert(i);
        }
        Self {
            keys,
            index,
            ministeps: Vec::new(),
        }
    }

    pub fn keys(&self) -> &[SummaryKey] {
        &self.keys
    }

    pub fn is_empty(&self) -> bool {
        self.ministeps.is_empty()
    }

    pub fn key_index(&self, keyword: &str, entity: &str) -> Option<usize> {
        self.index.get(keyword)?.get(entity).copied()
    }

    pub fn has_key(&self, keyword: &str, entity: &str) -> bool {
        self.key_index(keyword, entity).is_some()
    }

    pub fn has_report_step(&self, report_step: usize) -> bool {
        self.ministeps.iter().any(|m| m.report_step == report_step)
    }

    /// Distinct report steps in the order they were first written.
    pub fn report_steps(&self) -> Vec<usize> {
        let mut seen = HashSet::new();
        self.ministeps
            .iter()
            .map(|m| m.report_step)
            .filter(|step| seen.insert(*step))
            .collect()
    }

    pub fn report_record(&self, report_step: usize) -> Option<&MinistepRecord> {
        self.ministeps
            .iter()
            .rev()
            .find(|m| m.report_step == report_step)
    }

    /// Value of `keyword` for `entity` at `report_step`.
    pub fn value(&self, report_step: usize, entity: &str, keyword: &str) -> Option<f64> {
        let index = self.key_index(keyword, entity)?;
        self.report_record(report_step)
            .and_then(|m| m.values.get(index).copied())
    }

    /// Simulated time of `report_step`, in report time units.
    pub fn sim_time(&self, report_step: usize) -> Option<f64> {
        self.report_record(report_step).map(|m| m.time)
    }

    /// Simulated time of the `index`-th ministep, in report time units.
    pub fn ministep_time(&self, index: usize) -> Option<f64> {
        self.ministeps.get(index).map(|m| m.time)
    }

    /// Time of the last ministep, 0 for an empty table.
    pub fn sim_length(&self) -> f64 {
        self.ministeps.last().map(|m| m.time).unwrap_or(0.0)
    }
}

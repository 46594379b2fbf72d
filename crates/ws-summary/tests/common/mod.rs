#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use ws_core::{Tolerances, nearly_equal};
use ws_results::{MemoryWriter, SummaryTable};
use ws_summary::{DeckModel, StepRecord, SummaryEngine};

pub fn demos_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos")
}

pub fn load_demo_model() -> DeckModel {
    let deck = ws_deck::load(&demos_dir().join("summary_deck.yaml"))
        .unwrap_or_else(|e| panic!("Failed to load demo deck: {}", e));
    DeckModel::new(deck)
}

pub fn load_demo_steps() -> Vec<StepRecord> {
    let text = fs::read_to_string(demos_dir().join("three_wells_steps.json"))
        .unwrap_or_else(|e| panic!("Failed to read demo steps: {}", e));
    serde_json::from_str(&text).unwrap_or_else(|e| panic!("Failed to parse demo steps: {}", e))
}

/// Runs the three-well demo case through an engine and returns the flushed table.
pub fn run_demo() -> SummaryTable {
    let mut engine = SummaryEngine::new(load_demo_model()).unwrap();
    for record in load_demo_steps() {
        engine.ingest_record(&record).unwrap();
    }
    let mut writer = MemoryWriter::new();
    engine.flush(&mut writer).unwrap().clone()
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        nearly_equal(actual, expected, Tolerances::default()),
        "expected {expected}, got {actual}"
    );
}

pub fn value(table: &SummaryTable, step: usize, entity: &str, keyword: &str) -> f64 {
    table
        .value(step, entity, keyword)
        .unwrap_or_else(|| panic!("no value for {keyword}:{entity} at step {step}"))
}

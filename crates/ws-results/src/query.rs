//! Query helpers for extracting data from summary tables.

use crate::types::SummaryTable;
use std::collections::HashSet;
use crate::{ResultsError, ResultsResult};

/// Entity name used for field-level keywords.
pub const FIELD_ENTITY: &str = ws_deck::FIELD;

/// Summary of a table's time range and contents.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseSummary {
    pub time_range: (f64, f64),
    pub ministep_count: usize,
    pub report_step_count: usize,
    pub key_count: usize,
}

pub fn get_case_summary(table: &SummaryTable) -> CaseSummary {
    let t_min = table.ministeps.first().map(|m| m.time).unwrap_or(0.0);
    let t_max = table.sim_length();

    CaseSummary {
        time_range: (t_min, t_max),
        ministep_count: table.ministeps.len(),
        report_step_count: table.report_steps().len(),
        key_count: table.keys().len(),
    }
}

pub fn well_var(table: &SummaryTable, report_step: usize, well: &str, keyword: &str) -> Option<f64> {
    table.value(report_step, well, keyword)
}

pub fn group_var(
    table: &SummaryTable,
    report_step: usize,
    group: &str,
    keyword: &str,
) -> Option<f64> {
    table.value(report_step, group, keyword)
}

pub fn field_var(table: &SummaryTable, report_step: usize, keyword: &str) -> Option<f64> {
    table.value(report_step, FIELD_ENTITY, keyword)
}

/// Entities reported for `keyword`, in key order.
pub fn list_entities(table: &SummaryTable, keyword: &str) -> Vec<String> {
    table
        .keys()
        .iter()
        .filter(|k| k.keyword == keyword)
        .map(|k| k.entity.clone())
        .collect()
}

/// Distinct keywords in key order.
pub fn list_keywords(table: &SummaryTable) -> Vec<String> {
    let mut seen = HashSet::new();
    table
        .keys()
        .iter()
        .filter(|key| seen.insert(key.keyword.as_str()))
        .map(|key| key.keyword.clone())
        .collect()
}

/// `(time, value)` for every ministep.
pub fn extract_series(
    table: &SummaryTable,
    keyword: &str,
    entity: &str,
) -> ResultsResult<Vec<(f64, f64)>> {
    let index = key_index(table, keyword, entity)?;
    Ok(table
        .ministeps
        .iter()
        .filter_map(|m| m.values.get(index).map(|v| (m.time, *v)))
        .collect())
}

/// `(report_step, time, value)` for every report step.
pub fn extract_report_series(
    table: &SummaryTable,
    keyword: &str,
    entity: &str,
) -> ResultsResult<Vec<(usize, f64, f64)>> {
    let index = key_index(table, keyword, entity)?;
    let mut series = Vec::new();
    for step in table.report_steps() {
        if let Some(record) = table.report_record(step) {
            if let Some(v) = record.values.get(index) {
                series.push((step, record.time, *v));
            }
        }
    }
    Ok(series)
}

fn key_index(table: &SummaryTable, keyword: &str, entity: &str) -> ResultsResult<usize> {
    table
        .key_index(keyword, entity)
        .ok_or_else(|| ResultsError::UnknownKey {
            keyword: keyword.to_string(),
            entity: entity.to_string(),
        })
}

//! Group and field aggregation of well-level values.

use crate::accumulator::AccumulatorState;
use crate::evaluator::EntityRates;
use crate::keyword::TotalQuantity;
use std::collections::{BTreeMap, BTreeSet};

/// Group → member wells, frozen when the engine is built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupMembership {
    groups: BTreeMap<String, BTreeSet<String>>,
}

impl GroupMembership {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, group: impl Into<String>, well: impl Into<String>) {
        self.groups
            .entry(group.into())
            .or_default()
            .insert(well.into());
    }

    /// Register a group with no members yet.
    pub fn add_group(&mut self, group: impl Into<String>) {
        self.groups.entry(group.into()).or_default();
    }

    pub fn members(&self, group: &str) -> impl Iterator<Item = &str> {
        self.groups
            .get(group)
            .into_iter()
            .flat_map(|wells| wells.iter().map(String::as_str))
    }

}

/// Sum of the rates of `members` present in this step's `well_rates`.
pub fn aggregate_rates<'a>(
    members: impl IntoIterator<Item = &'a str>,
    well_rates: &BTreeMap<String, EntityRates>,
) -> EntityRates {
    members
        .into_iter()
        .filter_map(|well| well_rates.get(well).copied())
        .sum()
}

/// Sum of the running totals of `members`.
pub fn aggregate_totals<'a>(
    members: impl IntoIterator<Item = &'a str>,
    quantity: TotalQuantity,
    accumulators: &AccumulatorState,
) -> f64 {
    members
        .into_iter()
        .map(|well| accumulators.total(well, quantity))
        .sum()
}

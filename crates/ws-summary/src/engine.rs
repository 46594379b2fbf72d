//! Summary engine: ingests ministeps, evaluates every requested series and
//! hands the finished table to a writer.

use crate::accumulator::AccumulatorState;
use crate::aggregate::{GroupMembership, aggregate_rates, aggregate_totals};
use crate::catalog::{CatalogEntry, KeywordCatalog};
use crate::error::{SummaryError, SummaryResult};
use crate::evaluator::{EntityRates, FlowRates};
use crate::keyword::{EntityKind, Quantity, TotalQuantity};
use crate::model::EntityModel;
use crate::rates::{Phase, StepRecord, WellSnapshot, WellSnapshots};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info, warn};
use ws_core::{ReportUnits, ensure_finite, ensure_non_negative};
use ws_results::{MinistepRecord, SummaryTable, SummaryWriter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Built, no step ingested yet.
    Uninitialized,
    AcceptingSteps,
    /// Table handed to a writer; only re-flush is allowed.
    Flushed,
}

/// One summary session over one model.
#[derive(Debug)]
pub struct SummaryEngine<M: EntityModel> {
    model: M,
    catalog: KeywordCatalog,
    membership: GroupMembership,
    units: ReportUnits,
    totals: BTreeSet<TotalQuantity>,
    accumulators: AccumulatorState,
    tracked_wells: BTreeSet<String>,
    last_sim_time: Option<f64>,
    state: EngineState,
    table: SummaryTable,
}

impl<M: EntityModel> SummaryEngine<M> {
    /// Engine reporting in days and bar.
    pub fn new(model: M) -> SummaryResult<Self> {
        Self::with_units(model, ReportUnits::metric())
    }

    pub fn with_units(model: M, units: ReportUnits) -> SummaryResult<Self> {
        let scale_ok = |v: f64| v.is_finite() && v > 0.0;
        if !(scale_ok(units.time_scale_s) && scale_ok(units.pressure_scale_pa)) {
            return Err(SummaryError::InvalidArg {
                what: "report unit scales must be finite and positive",
            });
        }

        let catalog = KeywordCatalog::from_model(&model)?;

        let mut membership = GroupMembership::new();
        for group in model.group_names() {
            for well in model.group_members(&group) {
                membership.insert(group.clone(), well);
            }
            membership.add_group(group);
        }

        let totals = catalog.total_quantities();
        let tracked_wells = model.well_names().into_iter().collect();
        let table = SummaryTable::new(catalog.keys());

        Ok(Self {
            model,
            catalog,
            membership,
            units,
            totals,
            accumulators: AccumulatorState::new(),
            tracked_wells,
            last_sim_time: None,
            state: EngineState::Uninitialized,
            table,
        })
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn catalog(&self) -> &KeywordCatalog {
        &self.catalog
    }

    pub fn membership(&self) -> &GroupMembership {
        &self.membership
    }

    pub fn units(&self) -> &ReportUnits {
        &self.units
    }

    pub fn accumulators(&self) -> &AccumulatorState {
        &self.accumulators
    }

    pub fn table(&self) -> &SummaryTable {
        &self.table
    }

    pub fn into_table(self) -> SummaryTable {
        self.table
    }

    pub fn ingest_record(&mut self, record: &StepRecord) -> SummaryResult<()> {
        self.ingest(record.report_step, record.sim_time, &record.wells)
    }

    /// Ingest one ministep. `sim_time` is elapsed simulated time in seconds
    /// and must not go backwards.
    pub fn ingest(
        &mut self,
        report_step: usize,
        sim_time: f64,
        wells: &WellSnapshots,
    ) -> SummaryResult<()> {
        if self.state == EngineState::Flushed {
            return Err(SummaryError::Flushed);
        }
        let sim_time = ensure_non_negative(sim_time, "sim_time must be finite and non-negative")?;
        if let Some(previous) = self.last_sim_time {
            if sim_time < previous {
                return Err(SummaryError::OrderingViolation {
                    previous,
                    current: sim_time,
                });
            }
        }
        for snapshot in wells.values() {
            self.check_snapshot(snapshot)?;
        }
        let time = self.units.time(sim_time);

        for name in wells.keys() {
            if !self.model.has_well(name) {
                warn!(well = %name, report_step, "snapshot for well not in model");
            }
            self.tracked_wells.insert(name.clone());
        }

        // History follows the schedule whether or not the well reported.
        let mut well_rates: BTreeMap<String, EntityRates> = BTreeMap::new();
        let mut history: BTreeMap<String, FlowRates> = BTreeMap::new();
        for name in &self.tracked_wells {
            let historical = self
                .model
                .historical_rates(name, report_step)
                .map(|rates| FlowRates::from_rates(&rates, &self.units))
                .unwrap_or_default();
            if let Some(snapshot) = wells.get(name) {
                well_rates.insert(
                    name.clone(),
                    EntityRates {
                        simulated: FlowRates::from_rates(&snapshot.rates, &self.units),
                        historical,
                    },
                );
            }
            history.insert(name.clone(), historical);
        }

        // A tracked well missing from this step holds a zero simulated rate.
        for well in &self.tracked_wells {
            let rates = EntityRates {
                simulated: well_rates
                    .get(well)
                    .map(|r| r.simulated)
                    .unwrap_or_default(),
                historical: history.get(well).copied().unwrap_or_default(),
            };
            for &quantity in &self.totals {
                let rate = rates
                    .select(quantity.history)
                    .rate(quantity.direction, quantity.stream);
                self.accumulators.observe(well, quantity, time, rate);
            }
        }

        let field_rates: EntityRates = well_rates.values().copied().sum();
        let values: Vec<f64> = self
            .catalog
            .entries()
            .iter()
            .map(|entry| self.evaluate(entry, wells, &well_rates, &history, &field_rates))
            .collect();

        self.table.ministeps.push(MinistepRecord {
            report_step,
            sim_time_s: sim_time,
            time,
            values,
        });
        self.last_sim_time = Some(sim_time);
        self.state = EngineState::AcceptingSteps;

        debug!(
            report_step,
            sim_time,
            wells = wells.len(),
            ministeps = self.table.ministeps.len(),
            "ingested ministep"
        );
        Ok(())
    }

    /// Rejects a snapshot whose rates or pressures are not finite once
    /// converted to report units.
    fn check_snapshot(&self, snapshot: &WellSnapshot) -> SummaryResult<()> {
        for phase in Phase::ALL {
            ensure_finite(
                self.units.rate(snapshot.rates.get(phase)),
                "well rates must be finite",
            )?;
        }
        ensure_finite(self.units.pressure(snapshot.bhp), "bhp must be finite")?;
        ensure_finite(self.units.pressure(snapshot.thp), "thp must be finite")?;
        Ok(())
    }

    fn evaluate(
        &self,
        entry: &CatalogEntry,
        wells: &WellSnapshots,
        well_rates: &BTreeMap<String, EntityRates>,
        history: &BTreeMap<String, FlowRates>,
        field_rates: &EntityRates,
    ) -> f64 {
        let keyword = entry.keyword;
        let entity = entry.entity.as_str();

        match keyword.quantity {
            Quantity::BottomHolePressure => {
                return wells
                    .get(entity)
                    .map(|s| self.units.pressure(s.bhp))
                    .unwrap_or(0.0);
            }
            Quantity::TubingHeadPressure => {
                return wells
                    .get(entity)
                    .map(|s| self.units.pressure(s.thp))
                    .unwrap_or(0.0);
            }
            _ => {}
        }

        if let Some(quantity) = keyword.total() {
            return match keyword.entity {
                EntityKind::Well => self.accumulators.total(entity, quantity),
                EntityKind::Group => aggregate_totals(
                    self.membership.members(entity),
                    quantity,
                    &self.accumulators,
                ),
                EntityKind::Field => aggregate_totals(
                    self.tracked_wells.iter().map(String::as_str),
                    quantity,
                    &self.accumulators,
                ),
            };
        }

        let rates = match keyword.entity {
            EntityKind::Well => EntityRates {
                simulated: well_rates
                    .get(entity)
                    .map(|r| r.simulated)
                    .unwrap_or_default(),
                historical: history.get(entity).copied().unwrap_or_default(),
            },
            EntityKind::Group => aggregate_rates(self.membership.members(entity), well_rates),
            EntityKind::Field => *field_rates,
        };
        rates
            .select(keyword.history)
            .evaluate(keyword.quantity)
            .unwrap_or(0.0)
    }

    /// Hand the complete table to `writer` and stop accepting steps.
    ///
    /// Flushing again writes the same table again. A writer failure leaves
    /// the table untouched and the engine flushed, so the flush can be retried.
    pub fn flush<W: SummaryWriter + ?Sized>(
        &mut self,
        writer: &mut W,
    ) -> SummaryResult<&SummaryTable> {
        let reflush = self.state == EngineState::Flushed;
        self.state = EngineState::Flushed;
        writer.write_summary(&self.table)?;
        info!(
            keys = self.table.keys().len(),
            ministeps = self.table.ministeps.len(),
            reflush,
            "summary flushed"
        );
        Ok(&self.table)
    }
}

//! Well, group and field summary variables.
//!
//! Provides:
//! - rate, ratio and pressure variables from per-well snapshots
//! - rectangular integration of cumulative totals across ministeps
//! - group and field aggregation
//! - a step-ingesting engine that flushes a `SummaryTable` to a writer

pub mod accumulator;
pub mod aggregate;
pub mod catalog;
pub mod engine;
pub mod error;
pub mod evaluator;
pub mod keyword;
pub mod model;
pub mod rates;

pub use accumulator::{Accumulator, AccumulatorState};
pub use aggregate::{GroupMembership, aggregate_rates, aggregate_totals};
pub use catalog::{CatalogEntry, KeywordCatalog};
pub use engine::{EngineState, SummaryEngine};
pub use error::{SummaryError, SummaryResult};
pub use evaluator::{EntityRates, FlowRates, injection_rate, production_rate};
pub use keyword::{Direction, EntityKind, Keyword, Quantity, Stream, TotalQuantity};
pub use model::{DeckModel, EntityModel, KeywordRequest};
pub use rates::{Connection, Phase, RateVector, StepRecord, WellSnapshot, WellSnapshots};

//! Raw per-well snapshot types, as handed over by the simulator.
//!
//! Rates are SI volume per second with the simulator sign convention:
//! negative produces, positive injects. Pressures are in pascal.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Water,
    Oil,
    Gas,
}

impl Phase {
    pub const ALL: [Phase; 3] = [Phase::Water, Phase::Oil, Phase::Gas];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Phase::Water => 0,
            Phase::Oil => 1,
            Phase::Gas => 2,
        }
    }
}

/// Signed rates for up to three phases. An absent phase reads as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RateVector {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    water: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    oil: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    gas: Option<f64>,
}

impl RateVector {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, phase: Phase, rate: f64) -> Self {
        self.set(phase, rate);
        self
    }

    pub fn set(&mut self, phase: Phase, rate: f64) {
        *self.slot(phase) = Some(rate);
    }

    pub fn has(&self, phase: Phase) -> bool {
        match phase {
            Phase::Water => self.water.is_some(),
            Phase::Oil => self.oil.is_some(),
            Phase::Gas => self.gas.is_some(),
        }
    }

    pub fn get(&self, phase: Phase) -> f64 {
        match phase {
            Phase::Water => self.water,
            Phase::Oil => self.oil,
            Phase::Gas => self.gas,
        }
        .unwrap_or(0.0)
    }

    fn slot(&mut self, phase: Phase) -> &mut Option<f64> {
        match phase {
            Phase::Water => &mut self.water,
            Phase::Oil => &mut self.oil,
            Phase::Gas => &mut self.gas,
        }
    }
}

/// Per-connection record. Carried along, never evaluated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub index: usize,
    #[serde(default)]
    pub rates: RateVector,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WellSnapshot {
    #[serde(default)]
    pub rates: RateVector,
    /// Bottom-hole pressure (Pa)
    #[serde(default)]
    pub bhp: f64,
    /// Tubing-head pressure (Pa)
    #[serde(default)]
    pub thp: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub connections: Vec<Connection>,
}

impl WellSnapshot {
    pub fn new(rates: RateVector, bhp: f64, thp: f64) -> Self {
        Self {
            rates,
            bhp,
            thp,
            connections: Vec::new(),
        }
    }
}

pub type WellSnapshots = BTreeMap<String, WellSnapshot>;

/// One ministep of simulator output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    pub report_step: usize,
    /// Elapsed simulated time (s)
    pub sim_time: f64,
    #[serde(default)]
    pub wells: WellSnapshots,
}

//! Instantaneous summary variables from rate components.
//!
//! Everything here is pure and total. Ratios fall back to 0 when their
//! denominator is 0.

use crate::keyword::{Direction, Quantity, Stream};
use crate::rates::{Phase, RateVector};
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use ws_core::{ReportUnits, ratio_or_zero};

/// Magnitude of a producing rate, 0 otherwise.
#[inline]
pub fn production_rate(signed: f64) -> f64 {
    if signed < 0.0 { -signed } else { 0.0 }
}

/// Magnitude of an injecting rate, 0 otherwise.
#[inline]
pub fn injection_rate(signed: f64) -> f64 {
    if signed > 0.0 { signed } else { 0.0 }
}

/// Non-negative production and injection rates per phase, in report units.
///
/// Each phase is classified on its own sign, so one well may produce one
/// phase while injecting another.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FlowRates {
    production: [f64; 3],
    injection: [f64; 3],
}

impl FlowRates {
    pub fn from_rates(rates: &RateVector, units: &ReportUnits) -> Self {
        let mut out = Self::default();
        for phase in Phase::ALL {
            let signed = units.rate(rates.get(phase));
            out.production[phase.index()] = production_rate(signed);
            out.injection[phase.index()] = injection_rate(signed);
        }
        out
    }

    pub fn production(&self, phase: Phase) -> f64 {
        self.production[phase.index()]
    }

    pub fn injection(&self, phase: Phase) -> f64 {
        self.injection[phase.index()]
    }

    pub fn liquid_production(&self) -> f64 {
        self.production(Phase::Water) + self.production(Phase::Oil)
    }

    /// Rate of `stream` in `direction`. Liquid injection is 0.
    pub fn rate(&self, direction: Direction, stream: Stream) -> f64 {
        match (direction, stream) {
            (Direction::Production, Stream::Phase(p)) => self.production(p),
            (Direction::Production, Stream::Liquid) => self.liquid_production(),
            (Direction::Injection, Stream::Phase(p)) => self.injection(p),
            (Direction::Injection, Stream::Liquid) => 0.0,
        }
    }

    pub fn water_cut(&self) -> f64 {
        ratio_or_zero(self.production(Phase::Water), self.liquid_production())
    }

    pub fn gas_oil_ratio(&self) -> f64 {
        ratio_or_zero(self.production(Phase::Gas), self.production(Phase::Oil))
    }

    pub fn gas_liquid_ratio(&self) -> f64 {
        ratio_or_zero(self.production(Phase::Gas), self.liquid_production())
    }

    /// Value of a rate or ratio quantity; `None` for totals and pressures.
    pub fn evaluate(&self, quantity: Quantity) -> Option<f64> {
        match quantity {
            Quantity::Rate { direction, stream } => Some(self.rate(direction, stream)),
            Quantity::WaterCut => Some(self.water_cut()),
            Quantity::GasOilRatio => Some(self.gas_oil_ratio()),
            Quantity::GasLiquidRatio => Some(self.gas_liquid_ratio()),
            Quantity::Total { .. }
            | Quantity::BottomHolePressure
            | Quantity::TubingHeadPressure => None,
        }
    }
}

impl Add for FlowRates {
    type Output = FlowRates;

    fn add(mut self, rhs: FlowRates) -> FlowRates {
        self += rhs;
        self
    }
}

impl AddAssign for FlowRates {
    fn add_assign(&mut self, rhs: FlowRates) {
        for i in 0..3 {
            self.production[i] += rhs.production[i];
            self.injection[i] += rhs.injection[i];
        }
    }
}

impl Sum for FlowRates {
    fn sum<I: Iterator<Item = FlowRates>>(iter: I) -> Self {
        iter.fold(FlowRates::default(), Add::add)
    }
}

/// Evaluated rates of one entity: simulated and historical.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EntityRates {
    pub simulated: FlowRates,
    pub historical: FlowRates,
}

impl EntityRates {
    pub fn select(&self, history: bool) -> &FlowRates {
        if history {
            &self.historical
        } else {
            &self.simulated
        }
    }
}

impl Add for EntityRates {
    type Output = EntityRates;

    fn add(self, rhs: EntityRates) -> EntityRates {
        EntityRates {
            simulated: self.simulated + rhs.simulated,
            historical: self.historical + rhs.historical,
        }
    }
}

impl Sum for EntityRates {
    fn sum<I: Iterator<Item = EntityRates>>(iter: I) -> Self {
        iter.fold(EntityRates::default(), Add::add)
    }
}

//! Cumulative totals by rectangular integration.
//!
//! Over each interval the rate observed at its start is held constant:
//! `total += rate_prev * (t_now - t_prev)`. The first observation only
//! records the starting point.

use crate::keyword::TotalQuantity;
use std::collections::BTreeMap;

/// Running total of one quantity for one entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Accumulator {
    total: f64,
    last_time: f64,
    last_rate: f64,
}

impl Accumulator {
    /// First observation at `time`; the total starts at 0.
    pub fn start(time: f64, rate: f64) -> Self {
        Self {
            total: 0.0,
            last_time: time,
            last_rate: rate,
        }
    }

    /// Integrate the held rate up to `time`, then hold `rate` from here on.
    pub fn advance(&mut self, time: f64, rate: f64) {
        self.total += self.last_rate * (time - self.last_time);
        self.last_time = time;
        self.last_rate = rate;
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn last_time(&self) -> f64 {
        self.last_time
    }

    pub fn last_rate(&self) -> f64 {
        self.last_rate
    }
}

/// Accumulators of one summary session, keyed by entity then quantity.
#[derive(Debug, Clone, Default)]
pub struct AccumulatorState {
    entries: BTreeMap<String, BTreeMap<TotalQuantity, Accumulator>>,
}

impl AccumulatorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one observation and return the updated total.
    pub fn observe(&mut self, entity: &str, quantity: TotalQuantity, time: f64, rate: f64) -> f64 {
        // Only the first observation of an entity allocates its key.
        if let Some(per_entity) = self.entries.get_mut(entity) {
            return observe_in(per_entity, quantity, time, rate);
        }
        let per_entity = self.entries.entry(entity.to_string()).or_default();
        observe_in(per_entity, quantity, time, rate)
    }

    /// Current total, 0 for a pair never observed.
    pub fn total(&self, entity: &str, quantity: TotalQuantity) -> f64 {
        self.get(entity, quantity)
            .map(Accumulator::total)
            .unwrap_or(0.0)
    }

    pub fn get(&self, entity: &str, quantity: TotalQuantity) -> Option<&Accumulator> {
        self.entries.get(entity)?.get(&quantity)
    }

    /// Number of (entity, quantity) pairs observed.
    pub fn len(&self) -> usize {
        self.entries.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn observe_in(
    per_entity: &mut BTreeMap<TotalQuantity, Accumulator>,
    quantity: TotalQuantity,
    time: f64,
    rate: f64,
) -> f64 {
    let acc = per_entity
        .entry(quantity)
        .and_modify(|acc| acc.advance(time, rate))
        .or_insert_with(|| Accumulator::start(time, rate));
    acc.total()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyword::{Direction, Stream};
    use crate::rates::Phase;

    fn oil_total(history: bool) -> TotalQuantity {
        TotalQuantity {
            direction: Direction::Production,
            stream: Stream::Phase(Phase::Oil),
            history,
        }
    }

    #[test]
    fn first_observation_has_zero_total() {
        let acc = Accumulator::start(3.0, 100.0);
        assert_eq!(acc.total(), 0.0);
        assert_eq!(acc.last_time(), 3.0);
        assert_eq!(acc.last_rate(), 100.0);
    }

    #[test]
    fn integrates_previous_rate() {
        let mut acc = Accumulator::start(0.0, 10.0);
        acc.advance(1.0, 50.0);
        assert_eq!(acc.total(), 10.0);
        acc.advance(3.0, 0.0);
        assert_eq!(acc.total(), 110.0);
        acc.advance(10.0, 0.0);
        assert_eq!(acc.total(), 110.0);
    }

    #[test]
    fn zero_interval_adds_nothing() {
        let mut acc = Accumulator::start(2.0, 7.0);
        acc.advance(2.0, 9.0);
        assert_eq!(acc.total(), 0.0);
        acc.advance(3.0, 9.0);
        assert_eq!(acc.total(), 9.0);
    }

    #[test]
    fn ministeps_all_contribute() {
        // report step 1 at day 2 and day 5, step 2 at day 10
        let mut acc = Accumulator::start(2.0, 4.0);
        acc.advance(5.0, 4.0);
        assert_eq!(acc.total(), 12.0);
        acc.advance(10.0, 4.0);
        assert_eq!(acc.total(), 32.0);
    }

    #[test]
    fn state_keeps_history_and_simulated_apart() {
        let mut state = AccumulatorState::new();
        assert_eq!(state.observe("W_1", oil_total(false), 0.0, 10.0), 0.0);
        assert_eq!(state.observe("W_1", oil_total(true), 0.0, 0.0), 0.0);
        assert_eq!(state.observe("W_1", oil_total(false), 1.0, 10.0), 10.0);
        assert_eq!(state.observe("W_1", oil_total(true), 1.0, 30.0), 0.0);
        assert_eq!(state.observe("W_1", oil_total(true), 2.0, 30.0), 30.0);
        assert_eq!(state.total("W_1", oil_total(false)), 10.0);
        assert_eq!(state.total("W_2", oil_total(false)), 0.0);
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn state_counts_pairs_across_entities() {
        let mut state = AccumulatorState::new();
        assert!(state.is_empty());
        for well in ["W_1", "W_2", "W_3"] {
            state.observe(well, oil_total(false), 0.0, 1.0);
            state.observe(well, oil_total(true), 0.0, 2.0);
        }
        state.observe("W_2", oil_total(false), 4.0, 1.0);
        assert_eq!(state.len(), 6);
        assert_eq!(state.total("W_2", oil_total(false)), 4.0);
        assert_eq!(state.total("W_1", oil_total(false)), 0.0);
        assert!(state.get("W_4", oil_total(false)).is_none());
        assert_eq!(state.get("W_3", oil_total(true)).map(|a| a.last_rate()), Some(2.0));
    }
}

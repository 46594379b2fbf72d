//! Static model the engine reads from: wells, groups, history, requested keywords.

use crate::rates::{Phase, RateVector};
use ws_core::units::{as_seconds, days};
use ws_deck::{RatesDef, SummaryDeck};

/// A requested keyword. Empty `entities` means every well or group.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordRequest {
    pub keyword: String,
    pub entities: Vec<String>,
}

/// Read-only view of the case being summarised.
pub trait EntityModel {
    fn well_names(&self) -> Vec<String>;

    fn group_names(&self) -> Vec<String>;

    /// Wells directly owned by `group`.
    fn group_members(&self, group: &str) -> Vec<String>;

    /// Observed rates (SI, signed) for `well` at `report_step`, if any.
    fn historical_rates(&self, well: &str, report_step: usize) -> Option<RateVector>;

    fn requested_keywords(&self) -> Vec<KeywordRequest>;

    fn has_well(&self, well: &str) -> bool {
        self.well_names().iter().any(|w| w == well)
    }
}

impl<M: EntityModel + ?Sized> EntityModel for &M {
    fn well_names(&self) -> Vec<String> {
        (**self).well_names()
    }

    fn group_names(&self) -> Vec<String> {
        (**self).group_names()
    }

    fn group_members(&self, group: &str) -> Vec<String> {
        (**self).group_members(group)
    }

    fn historical_rates(&self, well: &str, report_step: usize) -> Option<RateVector> {
        (**self).historical_rates(well, report_step)
    }

    fn requested_keywords(&self) -> Vec<KeywordRequest> {
        (**self).requested_keywords()
    }

    fn has_well(&self, well: &str) -> bool {
        (**self).has_well(well)
    }
}

/// `EntityModel` backed by a deck. Deck rates are per day.
#[derive(Debug, Clone)]
pub struct DeckModel {
    deck: SummaryDeck,
    seconds_per_day: f64,
}

impl DeckModel {
    pub fn new(deck: SummaryDeck) -> Self {
        Self {
            deck,
            seconds_per_day: as_seconds(days(1.0)),
        }
    }

    pub fn deck(&self) -> &SummaryDeck {
        &self.deck
    }

    fn to_si(&self, rates: &RatesDef) -> RateVector {
        let mut out = RateVector::new();
        for (phase, value) in [
            (Phase::Water, rates.water),
            (Phase::Oil, rates.oil),
            (Phase::Gas, rates.gas),
        ] {
            if let Some(v) = value {
                out.set(phase, v / self.seconds_per_day);
            }
        }
        out
    }
}

impl From<SummaryDeck> for DeckModel {
    fn from(deck: SummaryDeck) -> Self {
        Self::new(deck)
    }
}

impl EntityModel for DeckModel {
    fn well_names(&self) -> Vec<String> {
        self.deck.wells.iter().map(|w| w.name.clone()).collect()
    }

    fn group_names(&self) -> Vec<String> {
        self.deck.groups.iter().map(|g| g.name.clone()).collect()
    }

    fn group_members(&self, group: &str) -> Vec<String> {
        self.deck
            .group_members(group)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    fn historical_rates(&self, well: &str, report_step: usize) -> Option<RateVector> {
        let entry = self.deck.well(well)?.history_at(report_step)?;
        Some(self.to_si(&entry.rates))
    }

    fn requested_keywords(&self) -> Vec<KeywordRequest> {
        self.deck
            .summary
            .iter()
            .map(|r| KeywordRequest {
                keyword: r.keyword.clone(),
                entities: r.entities.clone(),
            })
            .collect()
    }

    fn has_well(&self, well: &str) -> bool {
        self.deck.well(well).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ws_deck::schema::*;

    fn deck() -> SummaryDeck {
        SummaryDeck {
            version: 1,
            name: "m".to_string(),
            groups: vec![GroupDef {
                name: "G_1".to_string(),
            }],
            wells: vec![WellDef {
                name: "W_1".to_string(),
                group: Some("G_1".to_string()),
                history: vec![HistoryDef {
                    from_step: 2,
                    rates: RatesDef {
                        oil: Some(-86.4),
                        ..Default::default()
                    },
                }],
            }],
            summary: vec![SummaryRequestDef {
                keyword: "WOPRH".to_string(),
                entities: vec![],
            }],
        }
    }

    #[test]
    fn history_converted_to_si() {
        let model = DeckModel::new(deck());
        assert!(model.historical_rates("W_1", 1).is_none());
        let rates = model.historical_rates("W_1", 2).unwrap();
        assert!((rates.get(Phase::Oil) + 0.001).abs() < 1e-15);
        assert!(!rates.has(Phase::Water));
        assert!(model.historical_rates("W_9", 2).is_none());
    }

    #[test]
    fn structure_queries() {
        let model = DeckModel::from(deck());
        assert_eq!(model.well_names(), vec!["W_1"]);
        assert_eq!(model.group_names(), vec!["G_1"]);
        assert_eq!(model.group_members("G_1"), vec!["W_1"]);
        assert!(model.has_well("W_1"));
        assert!(!model.has_well("W_2"));
        assert_eq!(model.requested_keywords()[0].keyword, "WOPRH");
    }

    #[test]
    fn reference_forwards() {
        fn names<M: EntityModel>(model: M) -> Vec<String> {
            model.well_names()
        }
        let model = DeckModel::new(deck());
        assert_eq!(names(&model), vec!["W_1"]);
    }
}

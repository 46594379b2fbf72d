//! Deck schema definitions.

use serde::{Deserialize, Serialize};

/// Name of the implicit top-level group holding every well.
pub const FIELD: &str = "FIELD";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummaryDeck {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub groups: Vec<GroupDef>,
    #[serde(default)]
    pub wells: Vec<WellDef>,
    #[serde(default)]
    pub summary: Vec<SummaryRequestDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GroupDef {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WellDef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Observed rates, each entry holding from its report step until the next.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub history: Vec<HistoryDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryDef {
    pub from_step: usize,
    #[serde(default)]
    pub rates: RatesDef,
}

/// Signed surface rates in volume per day: negative produces, positive injects.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct RatesDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oil: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas: Option<f64>,
}

/// A requested summary keyword.
///
/// An empty entity list means every well (for `W` keywords) or every group
/// (for `G` keywords). Field keywords take no entities.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummaryRequestDef {
    pub keyword: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entities: Vec<String>,
}

impl SummaryDeck {
    pub fn well(&self, name: &str) -> Option<&WellDef> {
        self.wells.iter().find(|w| w.name == name)
    }

    pub fn group(&self, name: &str) -> Option<&GroupDef> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Wells whose `group` is `group_name`, in deck order.
    pub fn group_members(&self, group_name: &str) -> Vec<&str> {
        self.wells
            .iter()
            .filter(|w| w.group.as_deref() == Some(group_name))
            .map(|w| w.name.as_str())
            .collect()
    }
}

impl WellDef {
    /// History entry in force at `report_step`.
    pub fn history_at(&self, report_step: usize) -> Option<&HistoryDef> {
        self.history
            .iter()
            .filter(|h| h.from_step <= report_step)
            .max_by_key(|h| h.from_step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn well_with_history() -> WellDef {
        WellDef {
            name: "W_3".to_string(),
            group: Some("G_2".to_string()),
            history: vec![
                HistoryDef {
                    from_step: 1,
                    rates: RatesDef {
                        water: Some(30.0),
                        ..Default::default()
                    },
                },
                HistoryDef {
                    from_step: 4,
                    rates: RatesDef::default(),
                },
            ],
        }
    }

    #[test]
    fn history_before_first_entry_is_none() {
        assert!(well_with_history().history_at(0).is_none());
    }

    #[test]
    fn history_holds_until_next_entry() {
        let well = well_with_history();
        assert_eq!(well.history_at(1).unwrap().rates.water, Some(30.0));
        assert_eq!(well.history_at(3).unwrap().rates.water, Some(30.0));
        assert_eq!(well.history_at(4).unwrap().rates.water, None);
        assert_eq!(well.history_at(100).unwrap().from_step, 4);
    }

    #[test]
    fn group_members_in_deck_order() {
        let deck = SummaryDeck {
            version: 1,
            name: "d".to_string(),
            groups: vec![GroupDef {
                name: "G_1".to_string(),
            }],
            wells: vec![
                WellDef {
                    name: "B".to_string(),
                    group: Some("G_1".to_string()),
                    history: vec![],
                },
                WellDef {
                    name: "A".to_string(),
                    group: None,
                    history: vec![],
                },
                WellDef {
                    name: "C".to_string(),
                    group: Some("G_1".to_string()),
                    history: vec![],
                },
            ],
            summary: vec![],
        };
        assert_eq!(deck.group_members("G_1"), vec!["B", "C"]);
        assert!(deck.group_members("G_2").is_empty());
    }
}

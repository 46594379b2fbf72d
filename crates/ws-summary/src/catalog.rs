//! Resolution of requested keywords into concrete (keyword, entity) series.

use crate::error::{SummaryError, SummaryResult};
use crate::keyword::{EntityKind, Keyword, TotalQuantity};
use crate::model::EntityModel;
use std::collections::{BTreeSet, HashSet};
use ws_results::SummaryKey;
use ws_results::query::FIELD_ENTITY;

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub keyword: Keyword,
    pub entity: String,
}

impl CatalogEntry {
    pub fn key(&self) -> SummaryKey {
        SummaryKey::new(self.keyword.to_string(), self.entity.clone())
    }
}

/// Ordered, duplicate-free list of reported series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeywordCatalog {
    entries: Vec<CatalogEntry>,
    seen: HashSet<(Keyword, String)>,
}

impl KeywordCatalog {
    pub fn from_model<M: EntityModel>(model: &M) -> SummaryResult<Self> {
        let wells = model.well_names();
        let groups = model.group_names();
        let mut catalog = Self::default();

        for request in model.requested_keywords() {
            let keyword = Keyword::parse(&request.keyword)?;
            let entities: Vec<String> = match keyword.entity {
                EntityKind::Field => {
                    if !request.entities.is_empty() {
                        return Err(SummaryError::InvalidArg {
                            what: "field keywords take no entities",
                        });
                    }
                    vec![FIELD_ENTITY.to_string()]
                }
                EntityKind::Well if request.entities.is_empty() => wells.clone(),
                EntityKind::Group if request.entities.is_empty() => groups.clone(),
                _ => request.entities.clone(),
            };
            for entity in entities {
                catalog.push(keyword, entity);
            }
        }

        Ok(catalog)
    }

    /// Append unless the same series is already present.
    pub fn push(&mut self, keyword: Keyword, entity: impl Into<String>) {
        let entity = entity.into();
        if self.seen.insert((keyword, entity.clone())) {
            self.entries.push(CatalogEntry { keyword, entity });
        }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> Vec<SummaryKey> {
        self.entries.iter().map(CatalogEntry::key).collect()
    }

    /// Every accumulated quantity some requested total depends on.
    pub fn total_quantities(&self) -> BTreeSet<TotalQuantity> {
        self.entries
            .iter()
            .filter_map(|e| e.keyword.total())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DeckModel;
    use ws_deck::schema::*;

    fn deck(summary: Vec<(&str, Vec<&str>)>) -> DeckModel {
        DeckModel::new(SummaryDeck {
            version: 1,
            name: "c".to_string(),
            groups: vec![
                GroupDef {
                    name: "G_1".to_string(),
                },
                GroupDef {
                    name: "G_2".to_string(),
                },
            ],
            wells: vec![
                WellDef {
                    name: "W_1".to_string(),
                    group: Some("G_1".to_string()),
                    history: vec![],
                },
                WellDef {
                    name: "W_2".to_string(),
                    group: Some("G_2".to_string()),
                    history: vec![],
                },
            ],
            summary: summary
                .into_iter()
                .map(|(k, e)| SummaryRequestDef {
                    keyword: k.to_string(),
                    entities: e.into_iter().map(str::to_string).collect(),
                })
                .collect(),
        })
    }

    #[test]
    fn expands_empty_entity_lists() {
        let catalog = KeywordCatalog::from_model(&deck(vec![
            ("WOPR", vec![]),
            ("GWPT", vec![]),
            ("FGIR", vec![]),
        ]))
        .unwrap();
        let keys: Vec<(String, String)> = catalog
            .keys()
            .into_iter()
            .map(|k| (k.keyword, k.entity))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("WOPR".to_string(), "W_1".to_string()),
                ("WOPR".to_string(), "W_2".to_string()),
                ("GWPT".to_string(), "G_1".to_string()),
                ("GWPT".to_string(), "G_2".to_string()),
                ("FGIR".to_string(), "FIELD".to_string()),
            ]
        );
    }

    #[test]
    fn explicit_entities_and_duplicates() {
        let catalog =
            KeywordCatalog::from_model(&deck(vec![("WOPR", vec!["W_2"]), ("WOPR", vec![])]))
                .unwrap();
        let entities: Vec<String> = catalog.entries().iter().map(|e| e.entity.clone()).collect();
        assert_eq!(entities, vec!["W_2", "W_1"]);
    }

    #[test]
    fn push_keeps_first_occurrence_order() {
        let wopr = Keyword::parse("WOPR").unwrap();
        let wopt = Keyword::parse("WOPT").unwrap();
        let mut catalog = KeywordCatalog::default();
        for i in 0..500 {
            catalog.push(wopr, format!("W_{}", i % 50));
            catalog.push(wopt, format!("W_{}", i % 50));
        }
        assert_eq!(catalog.len(), 100);
        assert_eq!(catalog.entries()[0].entity, "W_0");
        assert_eq!(catalog.entries()[1].keyword, wopt);
        assert_eq!(catalog.entries()[99].entity, "W_49");
    }

    #[test]
    fn collects_total_quantities() {
        let catalog = KeywordCatalog::from_model(&deck(vec![
            ("WOPT", vec![]),
            ("GOPT", vec![]),
            ("WOPTH", vec![]),
            ("WWCT", vec![]),
        ]))
        .unwrap();
        assert_eq!(catalog.total_quantities().len(), 2);
    }

    #[test]
    fn bad_keyword_fails() {
        let err = KeywordCatalog::from_model(&deck(vec![("WLIR", vec![])])).unwrap_err();
        assert!(matches!(err, SummaryError::UnsupportedKeyword { .. }));
    }
}

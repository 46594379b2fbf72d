use ws_deck::schema::*;
use ws_deck::{load, load_json, load_yaml, save_json, save_yaml, validate_deck};

fn sample_deck() -> SummaryDeck {
    SummaryDeck {
        version: 1,
        name: "Roundtrip".to_string(),
        groups: vec![GroupDef {
            name: "G_1".to_string(),
        }],
        wells: vec![
            WellDef {
                name: "P1".to_string(),
                group: Some("G_1".to_string()),
                history: vec![HistoryDef {
                    from_step: 0,
                    rates: RatesDef {
                        water: Some(-1.5),
                        oil: Some(-20.0),
                        gas: None,
                    },
                }],
            },
            WellDef {
                name: "I1".to_string(),
                group: None,
                history: vec![],
            },
        ],
        summary: vec![
            SummaryRequestDef {
                keyword: "WOPR".to_string(),
                entities: vec!["P1".to_string()],
            },
            SummaryRequestDef {
                keyword: "GOPT".to_string(),
                entities: vec![],
            },
            SummaryRequestDef {
                keyword: "FWIR".to_string(),
                entities: vec![],
            },
        ],
    }
}

#[test]
fn roundtrip_yaml_empty_deck() {
    let deck = SummaryDeck {
        version: 1,
        name: "Empty".to_string(),
        groups: vec![],
        wells: vec![],
        summary: vec![],
    };

    validate_deck(&deck).unwrap();

    let path = std::env::temp_dir().join("ws_deck_roundtrip_empty.yaml");
    save_yaml(&path, &deck).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(deck, loaded);
}

#[test]
fn roundtrip_yaml_sample_deck() {
    let deck = sample_deck();
    let path = std::env::temp_dir().join("ws_deck_roundtrip_sample.yaml");
    save_yaml(&path, &deck).unwrap();
    let loaded = load(&path).unwrap();
    assert_eq!(deck, loaded);
}

#[test]
fn roundtrip_json_sample_deck() {
    let deck = sample_deck();
    let path = std::env::temp_dir().join("ws_deck_roundtrip_sample.json");
    save_json(&path, &deck).unwrap();
    let loaded = load_json(&path).unwrap();
    assert_eq!(deck, loaded);

    let by_extension = load(&path).unwrap();
    assert_eq!(deck, by_extension);
}

#[test]
fn save_rejects_invalid_deck() {
    let mut deck = sample_deck();
    deck.version = 99;
    let path = std::env::temp_dir().join("ws_deck_roundtrip_invalid.yaml");
    assert!(save_yaml(&path, &deck).is_err());
}

//! Deck validation logic.

use crate::schema::{FIELD, RatesDef, SummaryDeck, SummaryRequestDef, WellDef};
use std::collections::HashSet;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate name: {name} in {context}")]
    DuplicateName { name: String, context: String },

    #[error("Missing reference: {name} in {context}")]
    MissingReference { name: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_deck(deck: &SummaryDeck) -> Result<(), ValidationError> {
    if deck.version == 0 || deck.version > crate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: deck.version,
        });
    }

    let mut group_names = HashSet::new();
    for group in &deck.groups {
        if group.name.trim().is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "group name".to_string(),
                value: group.name.clone(),
                reason: "must not be empty".to_string(),
            });
        }
        if group.name == FIELD {
            return Err(ValidationError::InvalidValue {
                field: "group name".to_string(),
                value: group.name.clone(),
                reason: "FIELD is the implicit top-level group".to_string(),
            });
        }
        if !group_names.insert(group.name.as_str()) {
            return Err(ValidationError::DuplicateName {
                name: group.name.clone(),
                context: "groups".to_string(),
            });
        }
    }

    let mut well_names = HashSet::new();
    for well in &deck.wells {
        if !well_names.insert(well.name.as_str()) {
            return Err(ValidationError::DuplicateName {
                name: well.name.clone(),
                context: "wells".to_string(),
            });
        }
        validate_well(well, &group_names)?;
    }

    for request in &deck.summary {
        validate_request(request, &well_names, &group_names)?;
    }

    Ok(())
}

fn validate_well(well: &WellDef, group_names: &HashSet<&str>) -> Result<(), ValidationError> {
    if well.name.trim().is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "well name".to_string(),
            value: well.name.clone(),
            reason: "must not be empty".to_string(),
        });
    }

    if let Some(group) = &well.group {
        if !group_names.contains(group.as_str()) {
            return Err(ValidationError::MissingReference {
                name: group.clone(),
                context: format!("well '{}' group", well.name),
            });
        }
    }

    let mut previous_step = None;
    for entry in &well.history {
        if let Some(prev) = previous_step {
            if entry.from_step <= prev {
                return Err(ValidationError::InvalidValue {
                    field: format!("well '{}' history from_step", well.name),
                    value: entry.from_step.to_string(),
                    reason: "history entries must have strictly increasing from_step"
                        .to_string(),
                });
            }
        }
        previous_step = Some(entry.from_step);
        validate_rates(&entry.rates, &well.name)?;
    }

    Ok(())
}

fn validate_rates(rates: &RatesDef, well_name: &str) -> Result<(), ValidationError> {
    for (phase, value) in [
        ("water", rates.water),
        ("oil", rates.oil),
        ("gas", rates.gas),
    ] {
        if let Some(v) = value {
            if !v.is_finite() {
                return Err(ValidationError::InvalidValue {
                    field: format!("well '{}' history {} rate", well_name, phase),
                    value: v.to_string(),
                    reason: "must be finite".to_string(),
                });
            }
        }
    }
    Ok(())
}

fn validate_request(
    request: &SummaryRequestDef,
    well_names: &HashSet<&str>,
    group_names: &HashSet<&str>,
) -> Result<(), ValidationError> {
    let keyword = request.keyword.as_str();
    if keyword.len() < 2 || !keyword.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(ValidationError::InvalidValue {
            field: "summary keyword".to_string(),
            value: keyword.to_string(),
            reason: "must be at least two upper-case ASCII letters".to_string(),
        });
    }

    let (known, context): (&HashSet<&str>, &str) = match keyword.as_bytes()[0] {
        b'W' => (well_names, "well"),
        b'G' => (group_names, "group"),
        b'F' => {
            if !request.entities.is_empty() {
                return Err(ValidationError::InvalidValue {
                    field: format!("summary keyword '{}' entities", keyword),
                    value: request.entities.join(","),
                    reason: "field keywords take no entities".to_string(),
                });
            }
            return Ok(());
        }
        _ => {
            return Err(ValidationError::InvalidValue {
                field: "summary keyword".to_string(),
                value: keyword.to_string(),
                reason: "must start with W, G or F".to_string(),
            });
        }
    };

    for entity in &request.entities {
        if !known.contains(entity.as_str()) {
            return Err(ValidationError::MissingReference {
                name: entity.clone(),
                context: format!("summary keyword '{}' {}", keyword, context),
            });
        }
    }

    Ok(())
}

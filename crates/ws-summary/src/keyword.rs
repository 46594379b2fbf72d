//! Summary keyword names.
//!
//! A keyword is `<entity><quantity>[H]`: entity prefix `W`, `G` or `F`,
//! a quantity mnemonic, and an optional `H` for the history variant.

use crate::error::{SummaryError, SummaryResult};
use crate::rates::Phase;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    Well,
    Group,
    Field,
}

impl EntityKind {
    fn prefix(self) -> char {
        match self {
            EntityKind::Well => 'W',
            EntityKind::Group => 'G',
            EntityKind::Field => 'F',
        }
    }
}

/// What a rate or total keyword measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stream {
    Phase(Phase),
    /// Water + oil. Production only.
    Liquid,
}

impl Stream {
    fn mnemonic(self) -> char {
        match self {
            Stream::Phase(Phase::Water) => 'W',
            Stream::Phase(Phase::Oil) => 'O',
            Stream::Phase(Phase::Gas) => 'G',
            Stream::Liquid => 'L',
        }
    }

    fn from_mnemonic(c: char) -> Option<Self> {
        match c {
            'W' => Some(Stream::Phase(Phase::Water)),
            'O' => Some(Stream::Phase(Phase::Oil)),
            'G' => Some(Stream::Phase(Phase::Gas)),
            'L' => Some(Stream::Liquid),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Production,
    Injection,
}

/// Identity of one cumulative total, shared by well, group and field keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TotalQuantity {
    pub direction: Direction,
    pub stream: Stream,
    pub history: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    Rate { direction: Direction, stream: Stream },
    Total { direction: Direction, stream: Stream },
    WaterCut,
    GasOilRatio,
    GasLiquidRatio,
    BottomHolePressure,
    TubingHeadPressure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Keyword {
    pub entity: EntityKind,
    pub quantity: Quantity,
    pub history: bool,
}

impl Keyword {
    pub fn parse(name: &str) -> SummaryResult<Self> {
        let unknown = || SummaryError::UnknownKeyword {
            keyword: name.to_string(),
        };
        let unsupported = |reason: &'static str| SummaryError::UnsupportedKeyword {
            keyword: name.to_string(),
            reason,
        };

        let mut chars = name.chars();
        let entity = match chars.next() {
            Some('W') => EntityKind::Well,
            Some('G') => EntityKind::Group,
            Some('F') => EntityKind::Field,
            _ => return Err(unknown()),
        };
        let body = chars.as_str();

        // Only rate/total/ratio bodies are three letters long before the history suffix.
        let (body, history) = match body.strip_suffix('H') {
            Some(stem) if stem.len() == 3 => (stem, true),
            _ => (body, false),
        };

        let quantity = match body {
            "WCT" => Quantity::WaterCut,
            "GOR" => Quantity::GasOilRatio,
            "GLR" => Quantity::GasLiquidRatio,
            "BHP" | "THP" => {
                if history {
                    return Err(unsupported("pressures have no history variant"));
                }
                if entity != EntityKind::Well {
                    return Err(unsupported("pressures are reported for wells only"));
                }
                if body == "BHP" {
                    Quantity::BottomHolePressure
                } else {
                    Quantity::TubingHeadPressure
                }
            }
            _ => {
                let b: Vec<char> = body.chars().collect();
                if b.len() != 3 {
                    return Err(unknown());
                }
                let stream = Stream::from_mnemonic(b[0]).ok_or_else(unknown)?;
                let direction = match b[1] {
                    'P' => Direction::Production,
                    'I' => Direction::Injection,
                    _ => return Err(unknown()),
                };
                if stream == Stream::Liquid && direction == Direction::Injection {
                    return Err(unsupported("liquid injection is not defined"));
                }
                match b[2] {
                    'R' => Quantity::Rate { direction, stream },
                    'T' => Quantity::Total { direction, stream },
                    _ => return Err(unknown()),
                }
            }
        };

        Ok(Self {
            entity,
            quantity,
            history,
        })
    }

    /// The accumulated quantity behind a total keyword.
    pub fn total(&self) -> Option<TotalQuantity> {
        match self.quantity {
            Quantity::Total { direction, stream } => Some(TotalQuantity {
                direction,
                stream,
                history: self.history,
            }),
            _ => None,
        }
    }
}

impl FromStr for Keyword {
    type Err = SummaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Keyword::parse(s)
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.entity.prefix())?;
        match self.quantity {
            Quantity::Rate { direction, stream } | Quantity::Total { direction, stream } => {
                let d = match direction {
                    Direction::Production => 'P',
                    Direction::Injection => 'I',
                };
                let k = if matches!(self.quantity, Quantity::Rate { .. }) {
                    'R'
                } else {
                    'T'
                };
                write!(f, "{}{}{}", stream.mnemonic(), d, k)?;
            }
            Quantity::WaterCut => f.write_str("WCT")?,
            Quantity::GasOilRatio => f.write_str("GOR")?,
            Quantity::GasLiquidRatio => f.write_str("GLR")?,
            Quantity::BottomHolePressure => f.write_str("BHP")?,
            Quantity::TubingHeadPressure => f.write_str("THP")?,
        }
        if self.history {
            f.write_str("H")?;
        }
        Ok(())
    }
}

//! Trading signal types and aggregation.
//!
//! A [`Pattern`] determines its [`SignalKind`] exhaustively: no pattern
//! appears under both buy and sell.

use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalKind {
    Buy,
    Sell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    GoldenCross,
    DeathCross,
    Hammer,
    ShootingStar,
    Doji,
    BullishEngulfing,
    BearishEngulfing,
    MorningStar,
    EveningStar,
}

impl Pattern {
    /// Signal direction implied by the pattern. Doji is labeled buy even
    /// though it is direction-neutral in textbook technical analysis;
    /// this mirrors the established rule set and is deliberate.
    pub fn kind(&self) -> SignalKind {
        match self {
            Pattern::GoldenCross
            | Pattern::Hammer
            | Pattern::Doji
            | Pattern::BullishEngulfing
            | Pattern::MorningStar => SignalKind::Buy,
            Pattern::DeathCross
            | Pattern::ShootingStar
            | Pattern::BearishEngulfing
            | Pattern::EveningStar => SignalKind::Sell,
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Pattern::GoldenCross => "Golden Cross",
            Pattern::DeathCross => "Death Cross",
            Pattern::Hammer => "Hammer",
            Pattern::ShootingStar => "Shooting Star",
            Pattern::Doji => "Doji",
            Pattern::BullishEngulfing => "Bullish Engulfing",
            Pattern::BearishEngulfing => "Bearish Engulfing",
            Pattern::MorningStar => "Morning Star",
            Pattern::EveningStar => "Evening Star",
        };
        write!(f, "{}", name)
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Signal {
    pub date: NaiveDate,
    pub price: f64,
    #[serde(rename = "type")]
    pub kind: SignalKind,
    pub pattern: Pattern,
}

impl Signal {
    pub fn new(date: NaiveDate, price: f64, pattern: Pattern) -> Self {
        Signal {
            date,
            price,
            kind: pattern.kind(),
            pattern,
        }
    }
}

/// Merge crossover and candlestick signals into one chronological list.
///
/// Concatenation order matters: the sort is stable, so same-date crossover
/// signals stay ahead of candlestick signals. No deduplication.
pub fn merge_signals(crossovers: Vec<Signal>, candlesticks: Vec<Signal>) -> Vec<Signal> {
    let mut merged = crossovers;
    merged.extend(candlesticks);
    merged.sort_by_key(|s| s.date);
    merged
}

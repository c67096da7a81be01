//! OHLCV bar representation and series validation.

use crate::domain::error::ChartscanError;
use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct OhlcvBar {
    pub code: String,
    pub exchange: String,
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: i64,
}

impl OhlcvBar {
    /// |close - open|
    pub fn body(&self) -> f64 {
        (self.close - self.open).abs()
    }

    /// high - max(open, close)
    pub fn upper_wick(&self) -> f64 {
        self.high - self.open.max(self.close)
    }

    /// min(open, close) - low
    pub fn lower_wick(&self) -> f64 {
        self.open.min(self.close) - self.low
    }

    /// high - low
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    /// close > open
    pub fn is_green(&self) -> bool {
        self.close > self.open
    }

    /// close < open
    pub fn is_red(&self) -> bool {
        self.close < self.open
    }
}

/// Check a series is analyzable: finite OHLC, high >= low, non-negative
/// volume, dates strictly ascending. The analysis core assumes this has
/// passed and has no error path of its own.
pub fn validate_bars(bars: &[OhlcvBar]) -> Result<(), ChartscanError> {
    for (i, bar) in bars.iter().enumerate() {
        for (field, value) in [
            ("open", bar.open),
            ("high", bar.high),
            ("low", bar.low),
            ("close", bar.close),
        ] {
            if !value.is_finite() {
                return Err(ChartscanError::InvalidBar {
                    date: bar.date,
                    reason: format!("{field} is not finite"),
                });
            }
        }
        if bar.high < bar.low {
            return Err(ChartscanError::InvalidBar {
                date: bar.date,
                reason: format!("high {} below low {}", bar.high, bar.low),
            });
        }
        if bar.volume < 0 {
            return Err(ChartscanError::InvalidBar {
                date: bar.date,
                reason: format!("negative volume {}", bar.volume),
            });
        }
        if i > 0 && bar.date <= bars[i - 1].date {
            return Err(ChartscanError::InvalidBar {
                date: bar.date,
                reason: "dates not strictly ascending".into(),
            });
        }
    }
    Ok(())
}

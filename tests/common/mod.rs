#![allow(dead_code)]

use chartscan::domain::error::ChartscanError;
pub use chartscan::domain::ohlcv::OhlcvBar;
use chartscan::ports::data_port::DataPort;
use chrono::NaiveDate;
use std::collections::HashMap;

pub struct MockDataPort {
    pub data: HashMap<String, Vec<OhlcvBar>>,
    pub errors: HashMap<String, String>,
}

impl MockDataPort {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    pub fn with_bars(mut self, code: &str, bars: Vec<OhlcvBar>) -> Self {
        self.data.insert(code.to_string(), bars);
        self
    }

    pub fn with_error(mut self, code: &str, reason: &str) -> Self {
        self.errors.insert(code.to_string(), reason.to_string());
        self
    }
}

impl DataPort for MockDataPort {
    fn fetch_ohlcv(
        &self,
        code: &str,
        _exchange: &str,
        _start_date: NaiveDate,
        _end_date: NaiveDate,
    ) -> Result<Vec<OhlcvBar>, ChartscanError> {
        if let Some(reason) = self.errors.get(code) {
            return Err(ChartscanError::Data {
                reason: reason.clone(),
            });
        }
        Ok(self.data.get(code).cloned().unwrap_or_default())
    }

    fn list_symbols(&self, _exchange: &str) -> Result<Vec<String>, ChartscanError> {
        Ok(self.data.keys().cloned().collect())
    }

    fn get_data_range(
        &self,
        code: &str,
        _exchange: &str,
    ) -> Result<Option<(NaiveDate, NaiveDate, usize)>, ChartscanError> {
        if let Some(reason) = self.errors.get(code) {
            return Err(ChartscanError::Data {
                reason: reason.clone(),
            });
        }
        match self.data.get(code) {
            Some(bars) if !bars.is_empty() => {
                let min = bars.iter().map(|b| b.date).min().unwrap();
                let max = bars.iter().map(|b| b.date).max().unwrap();
                Ok(Some((min, max, bars.len())))
            }
            _ => Ok(None),
        }
    }
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn make_bar(code: &str, date_str: &str, close: f64) -> OhlcvBar {
    OhlcvBar {
        code: code.to_string(),
        exchange: "ASX".to_string(),
        date: date(date_str),
        open: close,
        high: close + 1.0,
        low: close - 1.0,
        close,
        volume: 10_000,
    }
}

pub fn make_ohlc_bar(date_str: &str, open: f64, high: f64, low: f64, close: f64) -> OhlcvBar {
    OhlcvBar {
        code: "TEST".to_string(),
        exchange: "ASX".to_string(),
        date: date(date_str),
        open,
        high,
        low,
        close,
        volume: 10_000,
    }
}

/// Consecutive calendar-day bars starting at `start`, one per close.
pub fn generate_bars(code: &str, start: &str, closes: &[f64]) -> Vec<OhlcvBar> {
    let start = date(start);
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| OhlcvBar {
            code: code.to_string(),
            exchange: "ASX".to_string(),
            date: start + chrono::Days::new(i as u64),
            open: close,
            high: close + 1.0,
            low: close - 1.0,
            close,
            volume: 10_000,
        })
        .collect()
}

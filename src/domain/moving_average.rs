//! Simple moving average over closing price.
//!
//! O(n) rolling-sum implementation. The first (window - 1) points are
//! undefined and carry `None` rather than a sentinel value, so no caller
//! can accidentally compare against a warmup point.

use crate::domain::ohlcv::OhlcvBar;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct MaPoint {
    pub date: NaiveDate,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MaSeries {
    pub window: usize,
    pub points: Vec<MaPoint>,
}

impl MaSeries {
    /// Value at a bar index, `None` during warmup or out of range.
    pub fn value_at(&self, index: usize) -> Option<f64> {
        self.points.get(index).and_then(|p| p.value)
    }
}

/// Trailing SMA over close, aligned index-for-index with the input bars.
/// Point i is defined iff i >= window - 1. A zero window yields an
/// all-undefined series.
pub fn sma(bars: &[OhlcvBar], window: usize) -> MaSeries {
    let mut points = Vec::with_capacity(bars.len());
    let mut window_sum = 0.0;

    for (i, bar) in bars.iter().enumerate() {
        window_sum += bar.close;
        if i >= window {
            window_sum -= bars[i - window].close;
        }

        let value = if window > 0 && i >= window - 1 {
            Some(window_sum / window as f64)
        } else {
            None
        };

        points.push(MaPoint {
            date: bar.date,
            value,
        });
    }

    MaSeries { window, points }
}

//! Moving average crossover detection.
//!
//! Golden Cross: short MA crosses strictly above long MA (buy).
//! Death Cross: short MA crosses strictly below long MA (sell).
//! Equality counts as not-yet-crossed, so a touch followed by a strict
//! cross on the next bar fires exactly once.

use crate::domain::moving_average::MaSeries;
use crate::domain::ohlcv::OhlcvBar;
use crate::domain::signal::{Pattern, Signal};

/// Scan two MA series aligned to `bars` for sign-change crossings.
/// An index participates only when both series are defined at it and at
/// the preceding index.
pub fn detect_crossovers(bars: &[OhlcvBar], short: &MaSeries, long: &MaSeries) -> Vec<Signal> {
    let mut signals = Vec::new();

    for i in 1..bars.len() {
        let (Some(s_curr), Some(l_curr), Some(s_prev), Some(l_prev)) = (
            short.value_at(i),
            long.value_at(i),
            short.value_at(i - 1),
            long.value_at(i - 1),
        ) else {
            continue;
        };

        if s_curr > l_curr && s_prev <= l_prev {
            signals.push(Signal::new(bars[i].date, bars[i].close, Pattern::GoldenCross));
        } else if s_curr < l_curr && s_prev >= l_prev {
            signals.push(Signal::new(bars[i].date, bars[i].close, Pattern::DeathCross));
        }
    }

    signals
}

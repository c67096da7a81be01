//! Candlestick pattern detection.
//!
//! Seven independent pattern rules evaluated per bar over raw OHLC. The scan
//! starts at index 2 because the three-bar rules need two preceding bars;
//! single-bar and two-bar rules share the same scan and are therefore never
//! evaluated on the first two bars of a series. That suppression is part of
//! the established behavior and is kept as-is.
//!
//! A bar may satisfy several rules at once and then emits one signal per
//! rule, in the fixed order below.

use crate::domain::ohlcv::OhlcvBar;
use crate::domain::signal::{Pattern, Signal};

/// Scan `bars` for candlestick patterns. Bars with zero high-low range are
/// degenerate and emit nothing.
pub fn detect_patterns(bars: &[OhlcvBar]) -> Vec<Signal> {
    let mut signals = Vec::new();

    for i in 2..bars.len() {
        let bar = &bars[i];
        let range = bar.range();
        if range == 0.0 {
            continue;
        }

        let body = bar.body();
        let upper = bar.upper_wick();
        let lower = bar.lower_wick();

        let prev = &bars[i - 1];
        let prev_body = prev.body();
        let prev_range = prev.range();

        let mut emit = |pattern: Pattern| {
            signals.push(Signal::new(bar.date, bar.close, pattern));
        };

        // Hammer: long lower wick (>= 2x body), small upper wick
        if body > 0.0 && lower >= 2.0 * body && upper <= 0.5 * body {
            emit(Pattern::Hammer);
        }

        // Shooting Star: long upper wick (>= 2x body), small lower wick
        if body > 0.0 && upper >= 2.0 * body && lower <= 0.5 * body {
            emit(Pattern::ShootingStar);
        }

        // Doji: body tiny relative to range
        if body <= 0.1 * range {
            emit(Pattern::Doji);
        }

        // Bullish Engulfing: prev red, current green body engulfs prev body
        if prev.is_red()
            && bar.is_green()
            && bar.open <= prev.close
            && bar.close >= prev.open
            && prev_body > 0.0
        {
            emit(Pattern::BullishEngulfing);
        }

        // Bearish Engulfing: prev green, current red body engulfs prev body
        if prev.is_green()
            && bar.is_red()
            && bar.open >= prev.close
            && bar.close <= prev.open
            && prev_body > 0.0
        {
            emit(Pattern::BearishEngulfing);
        }

        // Three-bar stars: strong bar two back, small middle bar, strong
        // current bar closing past the midpoint of the first
        let first = &bars[i - 2];
        let first_range = first.range();
        let middle_small = prev_range > 0.0 && prev_body <= 0.3 * prev_range;
        let midpoint = (first.open + first.close) / 2.0;

        if first_range > 0.0
            && first.is_red()
            && middle_small
            && bar.is_green()
            && bar.close > midpoint
        {
            emit(Pattern::MorningStar);
        }

        if first_range > 0.0
            && first.is_green()
            && middle_small
            && bar.is_red()
            && bar.close < midpoint
        {
            emit(Pattern::EveningStar);
        }
    }

    signals
}

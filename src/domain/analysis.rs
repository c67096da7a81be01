//! Analysis orchestration: raw series in, enriched result out.
//!
//! Runs the moving average, crossover, and candlestick stages over a
//! validated series and derives the trade setup from the merged signal
//! list. Pure and synchronous; the input bars are only ever borrowed.

use crate::domain::candlestick::detect_patterns;
use crate::domain::crossover::detect_crossovers;
use crate::domain::moving_average::{sma, MaSeries};
use crate::domain::ohlcv::OhlcvBar;
use crate::domain::signal::{merge_signals, Signal};
use crate::domain::trade_setup::{compute_trade_setup, TradeSetup};
use serde::Serialize;

pub const MA_SHORT_WINDOW: usize = 50;
pub const MA_LONG_WINDOW: usize = 200;

#[derive(Debug, Clone)]
pub struct Analysis {
    pub ma_short: MaSeries,
    pub ma_long: MaSeries,
    pub signals: Vec<Signal>,
    pub trade_setup: Option<TradeSetup>,
}

/// Last close versus the previous close. A single-bar series reports zero
/// change rather than failing.
#[derive(Debug, Clone, Serialize)]
pub struct QuoteSummary {
    pub current_price: f64,
    pub change_dollar: f64,
    pub change_pct: f64,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Full analysis pass over a validated series. Too-short input degrades to
/// all-undefined averages, zero signals, and no trade setup.
pub fn analyze(bars: &[OhlcvBar]) -> Analysis {
    let ma_short = sma(bars, MA_SHORT_WINDOW);
    let ma_long = sma(bars, MA_LONG_WINDOW);

    let crossovers = detect_crossovers(bars, &ma_short, &ma_long);
    let candlesticks = detect_patterns(bars);
    let signals = merge_signals(crossovers, candlesticks);

    let trade_setup = compute_trade_setup(bars, &signals);

    Analysis {
        ma_short,
        ma_long,
        signals,
        trade_setup,
    }
}

/// Quote summary from the tail of the series. `None` for an empty series.
pub fn quote_summary(bars: &[OhlcvBar]) -> Option<QuoteSummary> {
    let last = bars.last()?;
    let current_price = last.close;
    let prev_close = if bars.len() > 1 {
        bars[bars.len() - 2].close
    } else {
        current_price
    };

    let change_dollar = round2(current_price - prev_close);
    let change_pct = round2(change_dollar / prev_close * 100.0);

    Some(QuoteSummary {
        current_price: round2(current_price),
        change_dollar,
        change_pct,
    })
}

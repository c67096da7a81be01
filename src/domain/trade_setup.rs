//! Trade setup derivation from the most recent buy signal.
//!
//! Stop-loss goes under the swing low of the 20 bars preceding the signal;
//! if no prior low undercuts the entry, a flat 5% stop applies. Target is
//! fixed at twice the risk (1:2).

use crate::domain::ohlcv::OhlcvBar;
use crate::domain::signal::{Pattern, Signal, SignalKind};
use chrono::NaiveDate;
use serde::Serialize;

pub const SWING_LOW_LOOKBACK: usize = 20;
pub const FALLBACK_STOP_PCT: f64 = 0.95;
pub const RISK_REWARD: &str = "1:2";

#[derive(Debug, Clone, Serialize)]
pub struct TradeSetup {
    pub buy_price: f64,
    pub stop_loss: f64,
    pub take_profit: f64,
    pub risk_reward: &'static str,
    pub signal_type: Pattern,
    pub signal_date: NaiveDate,
}

/// Round half away from zero to 2 decimals. Prices are positive so this
/// behaves as plain commercial rounding.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Lowest low strictly below `buy_price` among up to `SWING_LOW_LOOKBACK`
/// bars strictly before `buy_date`. `None` when no prior low qualifies.
fn find_swing_low(bars: &[OhlcvBar], buy_price: f64, buy_date: NaiveDate) -> Option<f64> {
    let buy_idx = bars.iter().position(|b| b.date == buy_date)?;
    let start = buy_idx.saturating_sub(SWING_LOW_LOOKBACK);

    bars[start..buy_idx]
        .iter()
        .map(|b| b.low)
        .filter(|&low| low < buy_price)
        .min_by(|a, b| a.total_cmp(b))
}

/// Derive entry/stop/target from the chronologically last buy signal.
/// No buy signal is a valid absence, not an error.
pub fn compute_trade_setup(bars: &[OhlcvBar], signals: &[Signal]) -> Option<TradeSetup> {
    let latest_buy = signals.iter().rev().find(|s| s.kind == SignalKind::Buy)?;

    let buy_price = latest_buy.price;
    let stop_loss = find_swing_low(bars, buy_price, latest_buy.date)
        .unwrap_or(buy_price * FALLBACK_STOP_PCT);

    let risk = buy_price - stop_loss;
    let take_profit = buy_price + 2.0 * risk;

    Some(TradeSetup {
        buy_price: round2(buy_price),
        stop_loss: round2(stop_loss),
        take_profit: round2(take_profit),
        risk_reward: RISK_REWARD,
        signal_type: latest_buy.pattern,
        signal_date: latest_buy.date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, day).unwrap()
    }

    fn bar(day: u32, low: f64, close: f64) -> OhlcvBar {
        OhlcvBar {
            code: "TEST".into(),
            exchange: "TEST".into(),
            date: date(day),
            open: close,
            high: close + 1.0,
            low,
            close,
            volume: 1000,
        }
    }

    fn flat_bars(days: u32, low: f64, close: f64) -> Vec<OhlcvBar> {
        (1..=days).map(|d| bar(d, low, close)).collect()
    }

    #[test]
    fn no_signals_no_setup() {
        let bars = flat_bars(5, 49.0, 50.0);
        assert!(compute_trade_setup(&bars, &[]).is_none());
    }

    #[test]
    fn only_sell_signals_no_setup() {
        let bars = flat_bars(5, 49.0, 50.0);
        let signals = vec![Signal::new(date(3), 50.0, Pattern::DeathCross)];
        assert!(compute_trade_setup(&bars, &signals).is_none());
    }

    #[test]
    fn swing_low_becomes_stop() {
        // 16 flat bars, with a dip to 45 on day 2, buy on day 17 at 50.
        let mut bars = flat_bars(17, 48.0, 50.0);
        bars[1].low = 45.0;
        let signals = vec![Signal::new(date(17), 50.0, Pattern::GoldenCross)];

        let setup = compute_trade_setup(&bars, &signals).unwrap();
        assert_relative_eq!(setup.buy_price, 50.0);
        assert_relative_eq!(setup.stop_loss, 45.0);
        assert_relative_eq!(setup.take_profit, 60.0);
        assert_eq!(setup.risk_reward, "1:2");
        assert_eq!(setup.signal_type, Pattern::GoldenCross);
        assert_eq!(setup.signal_date, date(17));
    }

    #[test]
    fn lookback_excludes_signal_bar() {
        // only the signal bar itself dips below the entry
        let mut bars = flat_bars(10, 50.0, 50.0);
        bars[9].low = 40.0;
        let signals = vec![Signal::new(date(10), 50.0, Pattern::Hammer)];

        let setup = compute_trade_setup(&bars, &signals).unwrap();
        assert_relative_eq!(setup.stop_loss, 47.5); // 50 * 0.95 fallback
    }

    #[test]
    fn lookback_capped_at_twenty_bars() {
        // deep low 21 bars before the signal is out of the window
        let mut bars = flat_bars(25, 48.0, 50.0);
        bars[3].low = 30.0; // index 3, signal at index 24, distance 21
        let signals = vec![Signal::new(date(25), 50.0, Pattern::GoldenCross)];

        let setup = compute_trade_setup(&bars, &signals).unwrap();
        assert_relative_eq!(setup.stop_loss, 48.0);
    }

    #[test]
    fn fallback_when_no_low_undercuts_entry() {
        let bars = flat_bars(10, 50.0, 50.0);
        let signals = vec![Signal::new(date(10), 50.0, Pattern::GoldenCross)];

        let setup = compute_trade_setup(&bars, &signals).unwrap();
        assert_relative_eq!(setup.stop_loss, 47.5);
        assert_relative_eq!(setup.take_profit, 55.0);
    }

    #[test]
    fn near_series_start_uses_short_window() {
        let mut bars = flat_bars(3, 49.0, 50.0);
        bars[0].low = 44.0;
        let signals = vec![Signal::new(date(3), 50.0, Pattern::Doji)];

        let setup = compute_trade_setup(&bars, &signals).unwrap();
        assert_relative_eq!(setup.stop_loss, 44.0);
    }

    #[test]
    fn latest_buy_wins() {
        let mut bars = flat_bars(10, 50.0, 50.0);
        bars[4].low = 46.0;
        let signals = vec![
            Signal::new(date(3), 48.0, Pattern::Hammer),
            Signal::new(date(6), 50.0, Pattern::DeathCross),
            Signal::new(date(8), 50.0, Pattern::BullishEngulfing),
        ];

        let setup = compute_trade_setup(&bars, &signals).unwrap();
        assert_eq!(setup.signal_type, Pattern::BullishEngulfing);
        assert_eq!(setup.signal_date, date(8));
        assert_relative_eq!(setup.stop_loss, 46.0);
    }

    #[test]
    fn prices_rounded_to_cents() {
        let bars = flat_bars(5, 33.333, 33.333);
        let signals = vec![Signal::new(date(5), 33.333, Pattern::GoldenCross)];

        let setup = compute_trade_setup(&bars, &signals).unwrap();
        assert_relative_eq!(setup.buy_price, 33.33);
        assert_relative_eq!(setup.stop_loss, 31.67); // 33.333 * 0.95 = 31.66635
        assert_relative_eq!(setup.take_profit, 36.67);
    }

    #[test]
    fn setup_serializes_contract_fields() {
        let bars = flat_bars(5, 50.0, 50.0);
        let signals = vec![Signal::new(date(5), 50.0, Pattern::MorningStar)];

        let setup = compute_trade_setup(&bars, &signals).unwrap();
        let json = serde_json::to_value(&setup).unwrap();
        assert_eq!(json["risk_reward"], "1:2");
        assert_eq!(json["signal_type"], "Morning Star");
        assert_eq!(json["signal_date"], "2024-02-05");
    }
}

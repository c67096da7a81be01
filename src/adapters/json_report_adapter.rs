//! JSON report adapter.
//!
//! Emits the analysis output contract: the bar series enriched with both
//! moving averages (null before warmup), the ordered signal list, the
//! optional trade setup, and the quote summary.

use crate::domain::analysis::{Analysis, QuoteSummary};
use crate::domain::error::ChartscanError;
use crate::domain::ohlcv::OhlcvBar;
use crate::domain::signal::Signal;
use crate::domain::trade_setup::TradeSetup;
use crate::ports::report_port::ReportPort;
use chrono::NaiveDate;
use serde::Serialize;
use std::io::Write;

pub struct JsonReportAdapter {
    pretty: bool,
}

#[derive(Serialize)]
struct EnrichedBar {
    date: NaiveDate,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: i64,
    ma_50: Option<f64>,
    ma_200: Option<f64>,
}

#[derive(Serialize)]
struct Report<'a> {
    code: Option<&'a str>,
    exchange: Option<&'a str>,
    bars: Vec<EnrichedBar>,
    signals: &'a [Signal],
    trade_setup: Option<&'a TradeSetup>,
    quote: Option<&'a QuoteSummary>,
}

impl JsonReportAdapter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl ReportPort for JsonReportAdapter {
    fn write(
        &self,
        out: &mut dyn Write,
        bars: &[OhlcvBar],
        analysis: &Analysis,
        quote: Option<&QuoteSummary>,
    ) -> Result<(), ChartscanError> {
        let enriched = bars
            .iter()
            .enumerate()
            .map(|(i, bar)| EnrichedBar {
                date: bar.date,
                open: bar.open,
                high: bar.high,
                low: bar.low,
                close: bar.close,
                volume: bar.volume,
                ma_50: analysis.ma_short.value_at(i),
                ma_200: analysis.ma_long.value_at(i),
            })
            .collect();

        let report = Report {
            code: bars.first().map(|b| b.code.as_str()),
            exchange: bars.first().map(|b| b.exchange.as_str()),
            bars: enriched,
            signals: &analysis.signals,
            trade_setup: analysis.trade_setup.as_ref(),
            quote,
        };

        let rendered = if self.pretty {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        }
        .map_err(|e| ChartscanError::Data {
            reason: format!("report serialization failed: {e}"),
        })?;

        out.write_all(rendered.as_bytes())?;
        out.write_all(b"\n")?;
        Ok(())
    }
}

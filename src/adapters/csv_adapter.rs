//! CSV file data adapter.
//!
//! One file per symbol, named `CODE_EXCHANGE.csv`, with a header row and
//! `date,open,high,low,close,volume` columns. Rows outside the requested
//! date range are skipped; output is sorted ascending by date.

use crate::domain::error::ChartscanError;
use crate::domain::ohlcv::OhlcvBar;
use crate::ports::data_port::DataPort;
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

pub struct CsvAdapter {
    base_path: PathBuf,
}

impl CsvAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn csv_path(&self, code: &str, exchange: &str) -> PathBuf {
        self.base_path.join(format!("{}_{}.csv", code, exchange))
    }
}

fn field<T: FromStr>(
    record: &csv::StringRecord,
    index: usize,
    name: &str,
) -> Result<T, ChartscanError>
where
    T::Err: std::fmt::Display,
{
    let raw = record.get(index).ok_or_else(|| ChartscanError::Data {
        reason: format!("missing {name} column"),
    })?;
    raw.parse().map_err(|e| ChartscanError::Data {
        reason: format!("invalid {name} value: {e}"),
    })
}

impl DataPort for CsvAdapter {
    fn fetch_ohlcv(
        &self,
        code: &str,
        exchange: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<OhlcvBar>, ChartscanError> {
        let path = self.csv_path(code, exchange);
        let content = fs::read_to_string(&path).map_err(|e| ChartscanError::Data {
            reason: format!("failed to read {}: {}", path.display(), e),
        })?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut bars = Vec::new();

        for result in rdr.records() {
            let record = result.map_err(|e| ChartscanError::Data {
                reason: format!("CSV parse error: {}", e),
            })?;

            let date_str: String = field(&record, 0, "date")?;
            let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|e| {
                ChartscanError::Data {
                    reason: format!("invalid date format: {}", e),
                }
            })?;

            if date < start_date || date > end_date {
                continue;
            }

            bars.push(OhlcvBar {
                code: code.to_string(),
                exchange: exchange.to_string(),
                date,
                open: field(&record, 1, "open")?,
                high: field(&record, 2, "high")?,
                low: field(&record, 3, "low")?,
                close: field(&record, 4, "close")?,
                volume: field(&record, 5, "volume")?,
            });
        }

        bars.sort_by_key(|b| b.date);
        Ok(bars)
    }

    fn list_symbols(&self, exchange: &str) -> Result<Vec<String>, ChartscanError> {
        let entries = fs::read_dir(&self.base_path).map_err(|e| ChartscanError::Data {
            reason: format!(
                "failed to read directory {}: {}",
                self.base_path.display(),
                e
            ),
        })?;

        let suffix = format!("_{}.csv", exchange);
        let mut symbols = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|e| ChartscanError::Data {
                reason: format!("directory entry error: {}", e),
            })?;

            let name = entry.file_name();
            let name_str = name.to_string_lossy();

            if name_str.ends_with(&suffix) {
                let code = &name_str[..name_str.len() - suffix.len()];
                symbols.push(code.to_string());
            }
        }

        symbols.sort();
        Ok(symbols)
    }

    fn get_data_range(
        &self,
        code: &str,
        exchange: &str,
    ) -> Result<Option<(NaiveDate, NaiveDate, usize)>, ChartscanError> {
        let bars = self.fetch_ohlcv(code, exchange, NaiveDate::MIN, NaiveDate::MAX)?;
        Ok(match (bars.first(), bars.last()) {
            (Some(first), Some(last)) => Some((first.date, last.date, bars.len())),
            _ => None,
        })
    }
}

//! Data access port trait.
//!
//! Implementations owe the domain an ordered, deduplicated daily series
//! with no gaps other than non-trading days and no missing fields.

use crate::domain::error::ChartscanError;
use crate::domain::ohlcv::OhlcvBar;
use chrono::NaiveDate;

pub trait DataPort {
    fn fetch_ohlcv(
        &self,
        code: &str,
        exchange: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<OhlcvBar>, ChartscanError>;

    fn list_symbols(&self, exchange: &str) -> Result<Vec<String>, ChartscanError>;

    fn get_data_range(
        &self,
        code: &str,
        exchange: &str,
    ) -> Result<Option<(NaiveDate, NaiveDate, usize)>, ChartscanError>;
}

//! Report emission port trait.

use crate::domain::analysis::{Analysis, QuoteSummary};
use crate::domain::error::ChartscanError;
use crate::domain::ohlcv::OhlcvBar;
use std::io::Write;

/// Port for writing an analysis report to a sink chosen by the caller.
pub trait ReportPort {
    fn write(
        &self,
        out: &mut dyn Write,
        bars: &[OhlcvBar],
        analysis: &Analysis,
        quote: Option<&QuoteSummary>,
    ) -> Result<(), ChartscanError>;
}

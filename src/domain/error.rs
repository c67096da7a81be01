//! Domain error types.

use chrono::NaiveDate;

/// Top-level error type for chartscan.
#[derive(Debug, thiserror::Error)]
pub enum ChartscanError {
    #[error("data error: {reason}")]
    Data { reason: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("invalid bar on {date}: {reason}")]
    InvalidBar { date: NaiveDate, reason: String },

    #[error("no data for {code} on {exchange}")]
    NoData { code: String, exchange: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&ChartscanError> for std::process::ExitCode {
    fn from(err: &ChartscanError) -> Self {
        let code: u8 = match err {
            ChartscanError::Io(_) => 1,
            ChartscanError::ConfigParse { .. }
            | ChartscanError::ConfigMissing { .. }
            | ChartscanError::ConfigInvalid { .. } => 2,
            ChartscanError::Data { .. } => 3,
            ChartscanError::InvalidBar { .. } => 4,
            ChartscanError::NoData { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}

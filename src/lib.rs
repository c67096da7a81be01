//! chartscan — daily OHLCV technical analysis: trailing moving averages,
//! crossover and candlestick signals, and a derived trade setup.
//!
//! Hexagonal architecture: domain logic in [`domain`], port traits in [`ports`],
//! concrete implementations in [`adapters`].

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod cli;

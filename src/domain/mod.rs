//! Core domain types and logic.

pub mod ohlcv;
pub mod moving_average;
pub mod crossover;
pub mod candlestick;
pub mod signal;
pub mod trade_setup;
pub mod analysis;
pub mod error;

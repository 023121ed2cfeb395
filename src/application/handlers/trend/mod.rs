//! Trend query handlers.

mod get_round_trend;

pub use get_round_trend::{GetRoundTrendHandler, GetRoundTrendQuery, RoundTrendView};

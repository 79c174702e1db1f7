use std::future::Future;

use crate::error::Error;

/// Source of the current rub/usd rate.
pub trait RateProvider: Send + Sync {
    fn get_usd_rate(&self) -> impl Future<Output = Result<f64, Error>> + Send;
}

/// Above this magnitude an f64 has no fractional digits left.
const NO_FRACTION_ABOVE: f64 = 1e15;

/// Rounds to 4 decimal places, ties to even.
pub fn round4(value: f64) -> f64 {
    if !value.is_finite() || value.abs() >= NO_FRACTION_ABOVE {
        return value;
    }
    (value * 10_000.0).round_ties_even() / 10_000.0
}

pub fn convert(usd: f64, rate: f64) -> f64 {
    round4(usd * rate)
}

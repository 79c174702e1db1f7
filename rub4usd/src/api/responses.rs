use serde::Serialize;
use serde_json::Number;

use crate::service::rate;

const CURRENCY_USD: &str = "usd";

#[derive(Serialize, Debug)]
pub struct Conversion {
    pub currency: &'static str,
    pub usd: Number,
    #[serde(rename = "rub/usd")]
    pub rate: f64,
    pub rub: f64,
}

impl Conversion {
    /// `usd` is echoed back as it was sent, `amount` is its numeric value.
    pub fn new(usd: Number, amount: f64, rate: f64) -> Self {
        Self {
            currency: CURRENCY_USD,
            usd,
            rate,
            rub: rate::convert(amount, rate),
        }
    }
}

#[derive(Serialize, Debug)]
pub struct Error {
    pub error: &'static str,
}

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;

use crate::error::Error;
use crate::service::rate::RateProvider;

const RATE_PATTERN: &str = r#"<div class="col-md-2 col-xs-9 _right mono-num">([0-9,]*)"#;

/// The usd rate is the second value in the page's rates table.
pub const RATE_MATCH_INDEX: usize = 1;

static RATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(RATE_PATTERN).expect("unable to compile rate pattern")
});

/// Scrapes the usd rate from the cbr.ru main page on every call.
pub struct Provider {
    client: reqwest::Client,
    url: String,
}

impl Provider {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(crate::APP_NAME)
            .build()?;

        Ok(Self { client, url: url.into() })
    }
}

impl RateProvider for Provider {
    async fn get_usd_rate(&self) -> Result<f64, Error> {
        let page = self.client.get(&self.url)
            .header("cache-control", "no-cache")
            .header("pragma", "no-cache")
            .send().await?
            .error_for_status()?
            .text().await?;

        parse_usd_rate(&page)
    }
}

pub fn parse_usd_rate(page: &str) -> Result<f64, Error> {
    let raw = RATE_REGEX.captures_iter(page)
        .nth(RATE_MATCH_INDEX)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| Error::RateNotFound {
            expected: RATE_MATCH_INDEX + 1,
            found: RATE_REGEX.find_iter(page).count(),
        })?;

    raw.replace(',', ".")
        .parse::<f64>()
        .map_err(|_| Error::InvalidRate(raw.to_string()))
}

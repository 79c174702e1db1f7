use serde::Deserialize;

const ENV_PREFIX: &str = "RUB4USD_";

/// Server settings, read from `RUB4USD_*` env variables and overridden by cli flags.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_rate_source_url")]
    pub rate_source_url: String,
    #[serde(default = "default_rate_timeout_secs")]
    pub rate_timeout_secs: u64,
}

fn default_address() -> String {
    "127.0.0.1".into()
}

fn default_port() -> u16 {
    8000
}

fn default_rate_source_url() -> String {
    "https://www.cbr.ru/".into()
}

fn default_rate_timeout_secs() -> u64 {
    10
}

impl Config {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::prefixed(ENV_PREFIX).from_env::<Config>()
    }

    #[cfg(test)]
    fn from_iter<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed(ENV_PREFIX).from_iter(vars)
    }

    pub fn with_overrides(mut self, address: Option<String>, port: Option<u16>) -> Self {
        if let Some(address) = address {
            self.address = address;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: default_address(),
            port: default_port(),
            rate_source_url: default_rate_source_url(),
            rate_timeout_secs: default_rate_timeout_secs(),
        }
    }
}

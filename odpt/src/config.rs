use std::env;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use odpt_api::client::{DATA_CENTER_BASE_URL, TOKYO_CHALLENGE_BASE_URL, TOKYO_METRO_V2_BASE_URL};
use odpt_api::{ApiVersion, Configuration};

use crate::colors::ColorMode;
use crate::error::{Error, Result};

/// Which public ODPT deployment to talk to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endpoint {
    /// `api.odpt.org` (v4)
    #[default]
    DataCenter,
    /// `api-tokyochallenge.odpt.org` (v4)
    Challenge,
    /// `api.tokyometroapp.jp` (v2 datapoints)
    V2,
}

impl Endpoint {
    pub fn base_url(self) -> &'static str {
        match self {
            Endpoint::DataCenter => DATA_CENTER_BASE_URL,
            Endpoint::Challenge => TOKYO_CHALLENGE_BASE_URL,
            Endpoint::V2 => TOKYO_METRO_V2_BASE_URL,
        }
    }

    pub fn api_version(self) -> ApiVersion {
        match self {
            Endpoint::V2 => ApiVersion::V2,
            Endpoint::DataCenter | Endpoint::Challenge => ApiVersion::V4,
        }
    }
}

impl FromStr for Endpoint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "datacenter" | "data-center" => Ok(Endpoint::DataCenter),
            "challenge" | "tokyochallenge" => Ok(Endpoint::Challenge),
            "v2" | "tokyometro" => Ok(Endpoint::V2),
            _ => Err(Error::config(format!(
                "unknown endpoint '{}'. Valid options: datacenter, challenge, v2",
                s
            ))),
        }
    }
}

/// Configuration for the high-level ODPT client
#[derive(Clone)]
pub struct OdptConfig {
    pub endpoint: Endpoint,
    /// Overrides the endpoint's base URL (self-hosted mirrors, tests)
    pub base_url: Option<String>,
    pub consumer_key: Option<String>,
    pub user_agent: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    pub color_mode: ColorMode,
}

impl fmt::Debug for OdptConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OdptConfig")
            .field("endpoint", &self.endpoint)
            .field("base_url", &self.base_url)
            .field("consumer_key", &self.consumer_key.as_ref().map(|_| "<redacted>"))
            .field("user_agent", &self.user_agent)
            .field("timeout_secs", &self.timeout_secs)
            .field("color_mode", &self.color_mode)
            .finish()
    }
}

impl Default for OdptConfig {
    fn default() -> Self {
        Self {
            endpoint: Endpoint::default(),
            base_url: None,
            consumer_key: None,
            user_agent: concat!("odpt-rs/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: 30,
            color_mode: ColorMode::Auto,
        }
    }
}

impl OdptConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `ODPT_CONSUMER_KEY`, `ODPT_ENDPOINT`, `ODPT_BASE_URL` and
    /// `ODPT_USER_AGENT` from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Like [`OdptConfig::from_env`] with a custom variable source.
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(endpoint) = var("ODPT_ENDPOINT") {
            config = config.with_endpoint(endpoint.parse()?);
        }
        if let Some(base_url) = var("ODPT_BASE_URL") {
            config = config.with_base_url(base_url);
        }
        if let Some(key) = var("ODPT_CONSUMER_KEY") {
            config = config.with_consumer_key(key);
        }
        if let Some(user_agent) = var("ODPT_USER_AGENT") {
            config = config.with_user_agent(user_agent);
        }
        Ok(config)
    }

    pub fn with_consumer_key<S: Into<String>>(mut self, key: S) -> Self {
        self.consumer_key = Some(key.into());
        self
    }

    pub fn with_endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = endpoint;
        self
    }

    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs.max(1);
        self
    }

    pub fn with_color_mode(mut self, color_mode: ColorMode) -> Self {
        self.color_mode = color_mode;
        self
    }

    pub fn base_path(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.endpoint.base_url())
    }

    /// Build the low-level client configuration.
    ///
    /// The public deployments reject requests without a consumer key, so a
    /// missing key is only accepted together with a custom base URL.
    pub fn api_configuration(&self) -> Result<Arc<Configuration>> {
        if self.consumer_key.is_none() && self.base_url.is_none() {
            return Err(Error::MissingConsumerKey);
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(self.timeout_secs))
            .user_agent(&self.user_agent)
            .build()?;

        Ok(Arc::new(Configuration {
            base_path: self.base_path().to_string(),
            api_version: self.endpoint.api_version(),
            consumer_key: self.consumer_key.clone(),
            user_agent: Some(self.user_agent.clone()),
            client,
        }))
    }
}

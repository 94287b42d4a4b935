//! Public client surface + builder.

use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::core::BriefError;

/// Default desktop UA to avoid trivial bot blocking.
const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// Quote snapshot API base (symbol is appended).
const DEFAULT_BASE_QUOTE: &str = "https://query1.finance.yahoo.com/v7/finance/quote/";

/// Statements API endpoint (parameterized by `function`, `symbol`, `apikey`).
const DEFAULT_BASE_STATEMENTS: &str = "https://www.alphavantage.co/query";

/// Chart API base for monthly closes (symbol is appended).
const DEFAULT_BASE_CHART: &str = "https://query1.finance.yahoo.com/v8/finance/chart/";

/// Target of the one-shot connectivity probe.
const DEFAULT_PROBE_URL: &str = "https://query1.finance.yahoo.com/";

/// Fixed timeout for the connectivity probe.
pub(crate) const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Overall request timeout applied when the builder sets none.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable consulted for the statements API key when the
/// builder does not set one explicitly.
pub const API_KEY_ENV: &str = "COMPANY_BRIEF_API_KEY";

/// HTTP client plus provider endpoint configuration, shared by all adapters.
///
/// One invocation of the pipeline owns its client; nothing is cached or
/// persisted across invocations.
#[derive(Debug, Clone)]
pub struct BriefClient {
    http: Client,
    base_quote: Url,
    base_statements: Url,
    base_chart: Url,
    probe_url: Url,
    api_key: Option<String>,
    preflight: bool,
}

impl Default for BriefClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl BriefClient {
    /// Create a new builder.
    pub fn builder() -> BriefClientBuilder {
        BriefClientBuilder::default()
    }

    /* -------- internal getters used by the adapter modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_quote(&self) -> &Url {
        &self.base_quote
    }
    pub(crate) fn base_statements(&self) -> &Url {
        &self.base_statements
    }
    pub(crate) fn base_chart(&self) -> &Url {
        &self.base_chart
    }
    pub(crate) fn probe_url(&self) -> &Url {
        &self.probe_url
    }
    pub(crate) fn preflight_enabled(&self) -> bool {
        self.preflight
    }

    pub(crate) fn api_key(&self) -> Result<&str, BriefError> {
        self.api_key
            .as_deref()
            .ok_or_else(|| BriefError::Data("statements API key is not configured".into()))
    }
}

/* ----------------------- Builder ----------------------- */

/// Builder for [`BriefClient`].
#[derive(Debug, Default)]
pub struct BriefClientBuilder {
    user_agent: Option<String>,
    base_quote: Option<Url>,
    base_statements: Option<Url>,
    base_chart: Option<Url>,
    probe_url: Option<Url>,
    api_key: Option<String>,
    no_preflight: bool,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl BriefClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the quote snapshot base (symbol is appended).
    pub fn base_quote(mut self, url: Url) -> Self {
        self.base_quote = Some(url);
        self
    }

    /// Override the statements endpoint (queried with `function`, `symbol`, `apikey`).
    pub fn base_statements(mut self, url: Url) -> Self {
        self.base_statements = Some(url);
        self
    }

    /// Override the chart base for monthly price history (symbol is appended).
    pub fn base_chart(mut self, url: Url) -> Self {
        self.base_chart = Some(url);
        self
    }

    /// Override the connectivity probe target.
    pub fn probe_url(mut self, url: Url) -> Self {
        self.probe_url = Some(url);
        self
    }

    /// Set the statements API key. Falls back to the `COMPANY_BRIEF_API_KEY`
    /// environment variable when not set.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Skip the one-shot connectivity probe (offline tests).
    pub fn no_preflight(mut self) -> Self {
        self.no_preflight = true;
        self
    }

    /// Set a global request timeout (overall). Default: 30 seconds.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns `BriefError` if a default URL fails to parse or the underlying
    /// HTTP client cannot be constructed.
    pub fn build(self) -> Result<BriefClient, BriefError> {
        let base_quote = match self.base_quote {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_QUOTE)?,
        };
        let base_statements = match self.base_statements {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_STATEMENTS)?,
        };
        let base_chart = match self.base_chart {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_CHART)?,
        };
        let probe_url = match self.probe_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_PROBE_URL)?,
        };

        let api_key = self.api_key.or_else(|| std::env::var(API_KEY_ENV).ok());

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT));
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }
        let http = httpb.build()?;

        Ok(BriefClient {
            http,
            base_quote,
            base_statements,
            base_chart,
            probe_url,
            api_key,
            preflight: !self.no_preflight,
        })
    }
}

use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum BriefError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The connectivity probe failed before any provider call was made.
    #[error("network unavailable: {0}")]
    NetworkUnavailable(String),

    /// The symbol did not resolve to a parseable quote response.
    #[error("\"{symbol}\" does not seem to be a valid ticker")]
    InvalidTicker {
        /// The symbol that was requested.
        symbol: String,
    },

    /// The quote resolved, but not to a common stock.
    #[error("{symbol} does not seem to be a company stock ticker (quote type: {quote_type})")]
    NotEquity {
        /// The symbol that was requested.
        symbol: String,
        /// The quote type the provider reported instead of `EQUITY`.
        quote_type: String,
    },

    /// The quote carried no currency. The resolved symbol is part of the
    /// message so a caller can look for alternate listings of the company.
    #[error(
        "could not retrieve a currency for \"{symbol}\"; are there other ticker symbols that represent this company?"
    )]
    MissingCurrency {
        /// The symbol the provider resolved the request to.
        symbol: String,
    },

    /// The statements provider answered with its own diagnostic instead of
    /// data. The message is the provider's text, verbatim.
    #[error("statements provider error: {0}")]
    Provider(String),

    /// A growth computation was asked for more periods than the series holds.
    #[error("not enough historical data: {have} periods available, {need} required")]
    InsufficientHistory {
        /// Number of periods the series actually holds.
        have: usize,
        /// Number of periods the computation asked for.
        need: usize,
    },

    /// The data received was in an unexpected format or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),
}

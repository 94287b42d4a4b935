use serde::Deserialize;

/* ---------------- Serde mapping (only what we need) ---------------- */

/// Raw quote snapshot. Everything the report depends on unconditionally is a
/// required field here, so a malformed payload fails the single parse step
/// instead of being re-checked downstream.
#[derive(Deserialize)]
pub(crate) struct QuoteNode {
    #[serde(rename = "shortName")]
    pub(crate) short_name: String,
    pub(crate) symbol: String,
    #[serde(rename = "longBusinessSummary")]
    pub(crate) long_business_summary: String,
    #[serde(rename = "quoteType")]
    pub(crate) quote_type: String,
    /// Absent on some listings; validated separately so the caller gets a
    /// `MissingCurrency` rather than a parse failure.
    pub(crate) currency: Option<String>,
    #[serde(rename = "marketCap")]
    pub(crate) market_cap: f64,
    #[serde(rename = "totalRevenue")]
    pub(crate) total_revenue: f64,
    #[serde(rename = "ebitdaMargins")]
    pub(crate) ebitda_margins: f64,
    #[serde(rename = "trailingPE")]
    pub(crate) trailing_pe: Option<f64>,
    #[serde(rename = "trailingAnnualDividendYield")]
    pub(crate) trailing_annual_dividend_yield: Option<f64>,
}

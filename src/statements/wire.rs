use serde::Deserialize;

/* ---------------- Serde mapping (only what we need) ---------------- */

/// Success and error shapes share one envelope: the provider answers
/// HTTP 200 either way, and signals trouble by replacing `annualReports`
/// with a message under one of several keys.
#[derive(Deserialize)]
pub(crate) struct StatementsEnvelope {
    #[serde(rename = "annualReports")]
    pub(crate) annual_reports: Option<Vec<AnnualReportNode>>,

    #[serde(rename = "Information")]
    pub(crate) information: Option<String>,
    #[serde(rename = "Note")]
    pub(crate) note: Option<String>,
    #[serde(rename = "Error Message")]
    pub(crate) error_message: Option<String>,
}

impl StatementsEnvelope {
    /// The provider-side diagnostic, whichever key it arrived under.
    pub(crate) fn provider_message(&self) -> Option<&str> {
        self.information
            .as_deref()
            .or(self.note.as_deref())
            .or(self.error_message.as_deref())
    }
}

#[derive(Deserialize)]
pub(crate) struct AnnualReportNode {
    #[serde(rename = "fiscalDateEnding")]
    pub(crate) fiscal_date_ending: String,
    #[serde(rename = "totalRevenue")]
    pub(crate) total_revenue: Option<String>,
    #[serde(rename = "netIncome")]
    pub(crate) net_income: Option<String>,
    #[serde(rename = "operatingCashflow")]
    pub(crate) operating_cashflow: Option<String>,
    /// Cash-flow statements report depreciation under this key.
    #[serde(rename = "depreciationDepletionAndAmortization")]
    pub(crate) depreciation_depletion_and_amortization: Option<String>,
    /// Income statements report it under this shorter one.
    #[serde(rename = "depreciationAndAmortization")]
    pub(crate) depreciation_and_amortization: Option<String>,
}

/// Numeric fields arrive as strings, sometimes the literal `"None"`.
/// Anything unparseable reads as 0.
pub(crate) fn num(field: Option<&String>) -> f64 {
    field.and_then(|s| s.parse::<f64>().ok()).unwrap_or(0.0)
}

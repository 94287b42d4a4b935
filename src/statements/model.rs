use chrono::NaiveDate;

/// One fiscal year of reported figures, plus derived fields.
///
/// Figures the provider omits for a given statement type read as `0.0`; the
/// derived fields are computed once, at the adapter boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct StatementPeriod {
    /// Fiscal period end date.
    pub period_end: NaiveDate,
    /// Total revenue for the period.
    pub total_revenue: f64,
    /// Net income for the period.
    pub net_income: f64,
    /// Cash flow from operating activities.
    pub operating_cashflow: f64,
    /// Depreciation and amortization; 0 when the provider omits it.
    pub depreciation_and_amortization: f64,
    /// Derived: `net_income / total_revenue` (0 when revenue is 0).
    pub net_income_margin: f64,
    /// Derived: `operating_cashflow - depreciation_and_amortization`.
    pub free_cash_flow_estimate: f64,
}

//! Growth-rate computation and display formatting.
//!
//! Everything here is pure: the inputs are statement series and snapshot
//! figures that the adapters already validated.

use crate::core::BriefError;
use crate::statements::StatementPeriod;

/// A formatted value plus a one-line description; purely presentational.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricBox {
    /// The formatted figure, e.g. `"$2.5 M."` or `"12.34 %"`.
    pub value: String,
    /// One-line caption for the box.
    pub description: String,
}

impl MetricBox {
    pub(crate) fn new(value: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            description: description.into(),
        }
    }
}

/// Selects which reported or derived figure a growth computation reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementField {
    /// Total revenue.
    TotalRevenue,
    /// Net income.
    NetIncome,
    /// Derived net income margin.
    NetIncomeMargin,
    /// Operating cash flow.
    OperatingCashflow,
    /// Derived free-cash-flow estimate.
    FreeCashFlowEstimate,
}

impl StatementField {
    fn get(self, period: &StatementPeriod) -> f64 {
        match self {
            Self::TotalRevenue => period.total_revenue,
            Self::NetIncome => period.net_income,
            Self::NetIncomeMargin => period.net_income_margin,
            Self::OperatingCashflow => period.operating_cashflow,
            Self::FreeCashFlowEstimate => period.free_cash_flow_estimate,
        }
    }
}

/// Compound annual growth rate over the `num_years` most recent periods.
///
/// `ending` is the latest period (index 0) and `beginning` the period
/// `num_years - 1` back. The magnitude is computed on the absolute value of
/// the ratio and the sign of the overall change is reapplied afterwards, so
/// series that cross or stay below zero (net income, typically) never feed a
/// negative base into fractional exponentiation. Read the result as
/// "direction of overall change, rate of typical-case growth".
///
/// # Errors
///
/// Returns `InsufficientHistory` when the series holds fewer than
/// `num_years` periods (or `num_years` is 0), and `Data` when the beginning
/// period reads as zero, since no growth rate exists relative to a zero base.
pub fn cagr(
    periods: &[StatementPeriod],
    num_years: usize,
    field: StatementField,
) -> Result<f64, BriefError> {
    if num_years == 0 || periods.len() < num_years {
        return Err(BriefError::InsufficientHistory {
            have: periods.len(),
            need: num_years,
        });
    }

    let ending = field.get(&periods[0]);
    let beginning = field.get(&periods[num_years - 1]);
    // A zero base would feed inf (or NaN) through the formatter into a
    // delivered figure. Unreported figures read as 0, so this is reachable.
    if beginning == 0.0 {
        return Err(BriefError::Data(format!(
            "cannot compute a growth rate from a zero base {num_years} periods back"
        )));
    }
    let sign = if ending >= beginning { 1.0 } else { -1.0 };

    #[allow(clippy::cast_precision_loss)]
    let years = num_years as f64;
    Ok(sign * ((ending / beginning).abs().powf(1.0 / years) - 1.0).abs())
}

/// Render a ratio as a percentage: `0.1234` becomes `"12.34 %"`.
pub fn format_percentage(x: f64) -> String {
    format!("{} %", trim_round(x * 100.0))
}

/// Render a currency amount scaled down a magnitude ladder.
///
/// The value is divided by 1000 until it drops below 1000 or the ladder runs
/// out; the final tier (`T.`) saturates. Rounding happens only after the
/// final scaling step, so a value just under a threshold can legitimately
/// render as e.g. `"$1000.0 K."`.
pub fn format_amount(x: f64, currency_symbol: &str) -> String {
    const MAGNITUDES: [&str; 5] = ["", "K.", "M.", "B.", "T."];

    let mut value = x;
    let mut tier = 0;
    while value >= 1000.0 && tier < MAGNITUDES.len() - 1 {
        value /= 1000.0;
        tier += 1;
    }

    format!("{currency_symbol}{} {}", trim_round(value), MAGNITUDES[tier])
}

/// Round to two decimals, then drop a trailing zero while keeping at least
/// one decimal place: `999` -> `"999.0"`, `1.5` -> `"1.5"`, `12.34` stays.
pub(crate) fn trim_round(x: f64) -> String {
    let mut s = format!("{x:.2}");
    if s.ends_with('0') {
        s.truncate(s.len() - 1);
    }
    s
}

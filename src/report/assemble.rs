use crate::core::BriefError;
use crate::metrics::{
    MetricBox, StatementField, cagr, format_amount, format_percentage, trim_round,
};
use crate::profile::CompanyProfile;
use crate::series::TickerSeries;
use crate::statements::StatementPeriod;

use super::model::{BarChartData, ReportData};

/// How many fiscal years feed each bar chart.
const BAR_CHART_PERIODS: usize = 10;

/// The long growth horizon; shortened to the available history when a
/// company has fewer than 10 reported years.
const LONG_HORIZON_YEARS: usize = 10;

/// Compose the complete report data set. Pure: every input was already
/// fetched and validated, and the first metric that cannot be derived aborts
/// the whole report. Partial reports are not a supported outcome.
///
/// # Errors
///
/// Propagates `InsufficientHistory` from the growth computations.
pub fn assemble(
    profile: CompanyProfile,
    income: &[StatementPeriod],
    cashflow: &[StatementPeriod],
    comparison: Vec<TickerSeries>,
) -> Result<ReportData, BriefError> {
    let intro_boxes = intro_boxes(&profile);
    let growth_boxes = growth_boxes(income)?;
    let cash_flow_boxes = cash_flow_boxes(cashflow)?;
    let revenue_earnings_bars = bar_data(income, |p| p.total_revenue, |p| p.net_income);
    let cash_flow_bars = bar_data(cashflow, |p| p.operating_cashflow, |p| {
        p.free_cash_flow_estimate
    });

    Ok(ReportData {
        profile,
        intro_boxes,
        growth_boxes,
        cash_flow_boxes,
        revenue_earnings_bars,
        cash_flow_bars,
        comparison,
    })
}

fn intro_boxes(profile: &CompanyProfile) -> Vec<MetricBox> {
    let sym = &profile.currency_symbol;
    vec![
        MetricBox::new(
            format_amount(profile.market_cap, sym),
            "Market Capitalization.",
        ),
        MetricBox::new(
            format_amount(profile.total_revenue, sym),
            "Total Annual Revenue.",
        ),
        MetricBox::new(
            format_percentage(profile.ebitda_margins),
            "EBITDA / Total Revenue.",
        ),
        MetricBox::new(
            profile
                .trailing_pe
                .map_or_else(|| "N/A".to_string(), trim_round),
            "Trailing Price / Earnings.",
        ),
        MetricBox::new(
            // A company that pays no dividend reports no yield; that is a
            // zero, not a failure.
            format_percentage(profile.trailing_annual_dividend_yield.unwrap_or(0.0)),
            "Trailing Dividend Yield.",
        ),
    ]
}

fn growth_boxes(income: &[StatementPeriod]) -> Result<Vec<MetricBox>, BriefError> {
    let horizon = income.len().min(LONG_HORIZON_YEARS);
    Ok(vec![
        MetricBox::new(
            format_percentage(cagr(income, 3, StatementField::TotalRevenue)?),
            "3 year total revenue CAGR.",
        ),
        MetricBox::new(
            format_percentage(cagr(income, 3, StatementField::NetIncome)?),
            "3 year net income CAGR.",
        ),
        MetricBox::new(
            format_percentage(cagr(income, horizon, StatementField::TotalRevenue)?),
            "10 year total revenue CAGR.",
        ),
        MetricBox::new(
            format_percentage(cagr(income, horizon, StatementField::NetIncome)?),
            "10 year net income CAGR.",
        ),
        MetricBox::new(
            format_percentage(cagr(income, horizon, StatementField::NetIncomeMargin)?),
            "10 year income margin CAGR.",
        ),
    ])
}

fn cash_flow_boxes(cashflow: &[StatementPeriod]) -> Result<Vec<MetricBox>, BriefError> {
    let horizon = cashflow.len().min(LONG_HORIZON_YEARS);
    Ok(vec![
        MetricBox::new(
            format_percentage(cagr(cashflow, 3, StatementField::OperatingCashflow)?),
            "3 year OCF CAGR.",
        ),
        MetricBox::new(
            format_percentage(cagr(cashflow, 3, StatementField::FreeCashFlowEstimate)?),
            "3 year FCF CAGR.",
        ),
        MetricBox::new(
            format_percentage(cagr(cashflow, horizon, StatementField::OperatingCashflow)?),
            "10 year OCF CAGR.",
        ),
        MetricBox::new(
            format_percentage(cagr(
                cashflow,
                horizon,
                StatementField::FreeCashFlowEstimate,
            )?),
            "10 year FCF CAGR.",
        ),
    ])
}

fn bar_data(
    periods: &[StatementPeriod],
    primary: impl Fn(&StatementPeriod) -> f64,
    secondary: impl Fn(&StatementPeriod) -> f64,
) -> BarChartData {
    let mut years = Vec::new();
    let mut primary_vals = Vec::new();
    let mut secondary_vals = Vec::new();

    // Series arrive most recent first; charts read oldest to newest.
    for p in periods.iter().take(BAR_CHART_PERIODS).rev() {
        years.push(p.period_end.format("%Y").to_string());
        primary_vals.push(primary(p) / 1_000_000.0);
        secondary_vals.push(secondary(p) / 1_000_000.0);
    }

    BarChartData {
        years,
        primary: primary_vals,
        secondary: secondary_vals,
    }
}

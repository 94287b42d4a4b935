use chrono::NaiveDate;

use crate::core::{BriefClient, BriefError, net};

use super::model::StatementPeriod;
use super::wire::{AnnualReportNode, StatementsEnvelope, num};

#[derive(Debug, Clone, Copy)]
pub(super) enum StatementFunction {
    IncomeStatement,
    CashFlow,
}

impl StatementFunction {
    fn as_str(self) -> &'static str {
        match self {
            Self::IncomeStatement => "INCOME_STATEMENT",
            Self::CashFlow => "CASH_FLOW",
        }
    }
}

pub(super) async fn fetch_statements(
    client: &BriefClient,
    symbol: &str,
    function: StatementFunction,
) -> Result<Vec<StatementPeriod>, BriefError> {
    let mut url = client.base_statements().clone();
    url.query_pairs_mut()
        .append_pair("function", function.as_str())
        .append_pair("symbol", symbol)
        .append_pair("apikey", client.api_key()?);

    let resp = net::send(client.http().get(url.clone()), &url).await?;
    let body = net::get_text(resp).await?;
    let envelope: StatementsEnvelope = serde_json::from_str(&body)
        .map_err(|e| BriefError::Data(format!("statements json parse: {e}")))?;

    let Some(reports) = envelope.annual_reports else {
        // "No data" with a message is the provider talking (rate limits,
        // unknown symbols); no message at all is a schema mismatch.
        return Err(match envelope.provider_message() {
            Some(msg) => BriefError::Provider(msg.to_string()),
            None => BriefError::Data("statements response missing annualReports".into()),
        });
    };

    reports.into_iter().map(to_period).collect()
}

fn to_period(node: AnnualReportNode) -> Result<StatementPeriod, BriefError> {
    let period_end = NaiveDate::parse_from_str(&node.fiscal_date_ending, "%Y-%m-%d")
        .map_err(|e| {
            BriefError::Data(format!(
                "bad fiscalDateEnding {:?}: {e}",
                node.fiscal_date_ending
            ))
        })?;

    let total_revenue = num(node.total_revenue.as_ref());
    let net_income = num(node.net_income.as_ref());
    let operating_cashflow = num(node.operating_cashflow.as_ref());
    let depreciation_and_amortization = num(node
        .depreciation_depletion_and_amortization
        .as_ref()
        .or(node.depreciation_and_amortization.as_ref()));

    let net_income_margin = if total_revenue == 0.0 {
        0.0
    } else {
        net_income / total_revenue
    };

    Ok(StatementPeriod {
        period_end,
        total_revenue,
        net_income,
        operating_cashflow,
        depreciation_and_amortization,
        net_income_margin,
        free_cash_flow_estimate: operating_cashflow - depreciation_and_amortization,
    })
}

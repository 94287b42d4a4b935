//! Annual statement series: fetch, validate, and derive per-period fields.
//!
//! Income and cash-flow statements come from the same endpoint, selected by
//! the `function` query parameter. Series are ordered most recent first
//! (index 0 = latest fiscal year); every growth computation relies on that
//! ordering, and the adapter never reorders what the provider returns.

mod api;
mod model;
mod wire;

pub use model::StatementPeriod;

use crate::core::{BriefClient, BriefError};

use api::StatementFunction;

/// Fetches the annual income statement series for a symbol, most recent
/// period first, with `net_income_margin` derived on every period.
///
/// # Errors
///
/// Returns `Provider` with the provider's own diagnostic text when the
/// response lacks the `annualReports` collection, and `Data` when the
/// payload matches neither the success nor the error shape.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn income_statements(
    client: &BriefClient,
    symbol: &str,
) -> Result<Vec<StatementPeriod>, BriefError> {
    api::fetch_statements(client, symbol, StatementFunction::IncomeStatement).await
}

/// Fetches the annual cash-flow statement series for a symbol, most recent
/// period first, with `free_cash_flow_estimate` derived on every period.
///
/// # Errors
///
/// Same failure modes as [`income_statements`].
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn cash_flow_statements(
    client: &BriefClient,
    symbol: &str,
) -> Result<Vec<StatementPeriod>, BriefError> {
    api::fetch_statements(client, symbol, StatementFunction::CashFlow).await
}

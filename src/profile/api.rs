use crate::core::{BriefClient, BriefError, currency, net};

use super::model::CompanyProfile;
use super::wire::QuoteNode;

/// The only quote type that identifies a company stock.
const EQUITY: &str = "EQUITY";

pub(super) async fn fetch_profile(
    client: &BriefClient,
    symbol: &str,
) -> Result<CompanyProfile, BriefError> {
    let url = client.base_quote().join(symbol)?;

    // Transport failures, bad statuses, and unparseable payloads all mean the
    // same thing to the caller: this symbol does not resolve to a usable quote.
    let invalid = || BriefError::InvalidTicker {
        symbol: symbol.to_string(),
    };

    let resp = net::send(client.http().get(url.clone()), &url)
        .await
        .map_err(|_| invalid())?;
    let body = net::get_text(resp).await.map_err(|_| invalid())?;
    let node: QuoteNode = serde_json::from_str(&body).map_err(|_| invalid())?;

    if node.quote_type != EQUITY {
        return Err(BriefError::NotEquity {
            symbol: symbol.to_string(),
            quote_type: node.quote_type,
        });
    }

    let Some(code) = node.currency else {
        // Surface the symbol the provider resolved to, not the one requested;
        // it tells the caller which listing to look for alternates of.
        return Err(BriefError::MissingCurrency {
            symbol: node.symbol,
        });
    };
    let currency_symbol = currency::symbol_for(&code).to_string();

    Ok(CompanyProfile {
        symbol: node.symbol,
        name: node.short_name,
        currency: code,
        currency_symbol,
        summary: node.long_business_summary,
        quote_type: node.quote_type,
        market_cap: node.market_cap,
        total_revenue: node.total_revenue,
        ebitda_margins: node.ebitda_margins,
        trailing_pe: node.trailing_pe,
        trailing_annual_dividend_yield: node.trailing_annual_dividend_yield,
    })
}

use chrono::{DateTime, Utc};

use crate::core::{BriefClient, BriefError, net};

use super::wire::ChartEnvelope;

/// Fetch monthly `(timestamp, close)` pairs for a symbol over `[start, end]`.
/// Null closes are dropped here, before any rebasing happens.
pub(super) async fn fetch_monthly_closes(
    client: &BriefClient,
    symbol: &str,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<Vec<(i64, f64)>, BriefError> {
    let mut url = client.base_chart().join(symbol)?;
    url.query_pairs_mut()
        .append_pair("period1", &start.timestamp().to_string())
        .append_pair("period2", &end.timestamp().to_string())
        .append_pair("interval", "1mo");

    let resp = net::send(client.http().get(url.clone()), &url).await?;
    let body = net::get_text(resp).await?;
    let envelope: ChartEnvelope = serde_json::from_str(&body)
        .map_err(|e| BriefError::Data(format!("chart json parse: {e}")))?;

    let chart = envelope
        .chart
        .ok_or_else(|| BriefError::Data("chart node missing".into()))?;
    if let Some(err) = chart.error {
        return Err(BriefError::Provider(format!(
            "{}: {}",
            err.code, err.description
        )));
    }

    let result = chart
        .result
        .and_then(|v| v.into_iter().next())
        .ok_or_else(|| BriefError::Data(format!("no chart data for {symbol}")))?;

    let timestamps = result.timestamp.unwrap_or_default();
    let closes = result
        .indicators
        .quote
        .into_iter()
        .next()
        .map(|q| q.close)
        .unwrap_or_default();

    Ok(timestamps
        .into_iter()
        .zip(closes)
        .filter_map(|(ts, close)| close.map(|c| (ts, c)))
        .collect())
}

//! Monthly price series rebased onto a common percent-return scale.
//!
//! Every ticker in a comparison set is fetched over the same window: the
//! start date (explicit, or 10 years back by default) applies to the subject
//! and to every comparison ticker alike, so all series share one origin date
//! and the chart compares like with like. Each series is then rebased on its
//! own first available close within that window:
//! `value = close * (100 / first_close) - 100`, which pins the first point
//! of every series to exactly 0.

mod api;
mod model;
mod wire;

pub use model::{SeriesPoint, TickerSeries, TickerSpec};

use chrono::{DateTime, Duration, Utc};

use crate::core::{BriefClient, BriefError};

/// Lookback applied when no start date is given.
const DEFAULT_LOOKBACK_DAYS: i64 = 10 * 365;

/// Builds the rebased comparison set for one subject ticker.
///
/// The subject is always the first element of the output, regardless of how
/// many comparison tickers were added, so a renderer can give it a
/// distinguished style.
#[derive(Debug, Clone)]
pub struct ComparisonBuilder {
    subject: TickerSpec,
    comparisons: Vec<TickerSpec>,
    start: Option<DateTime<Utc>>,
}

impl ComparisonBuilder {
    /// Start a comparison set around a subject ticker.
    pub fn new(subject: TickerSpec) -> Self {
        Self {
            subject,
            comparisons: Vec::new(),
            start: None,
        }
    }

    /// Add a ticker whose rebased history is drawn alongside the subject's.
    pub fn compare(mut self, spec: TickerSpec) -> Self {
        self.comparisons.push(spec);
        self
    }

    /// Override the common window start (default: 10 years before now).
    pub fn start(mut self, start: DateTime<Utc>) -> Self {
        self.start = Some(start);
        self
    }

    /// Fetch and rebase every series, subject first.
    ///
    /// # Errors
    ///
    /// Propagates the first fetch or parse failure; a ticker with no price
    /// history in the window fails with `Data`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self, client), err, fields(symbol = %self.subject.symbol))
    )]
    pub async fn fetch(self, client: &BriefClient) -> Result<Vec<TickerSeries>, BriefError> {
        let end = Utc::now();
        let start = self
            .start
            .unwrap_or_else(|| end - Duration::days(DEFAULT_LOOKBACK_DAYS));

        let mut out = Vec::with_capacity(1 + self.comparisons.len());
        for spec in std::iter::once(self.subject).chain(self.comparisons) {
            let closes = api::fetch_monthly_closes(client, &spec.symbol, start, end).await?;
            out.push(rebase(spec, &closes)?);
        }
        Ok(out)
    }
}

fn rebase(spec: TickerSpec, closes: &[(i64, f64)]) -> Result<TickerSeries, BriefError> {
    let first = closes
        .first()
        .map(|&(_, c)| c)
        .ok_or_else(|| BriefError::Data(format!("no price history for {}", spec.symbol)))?;
    let factor = 100.0 / first;

    let points = closes
        .iter()
        .map(|&(ts, close)| SeriesPoint {
            label: month_label(ts),
            value: close * factor - 100.0,
        })
        .collect();

    Ok(TickerSeries {
        symbol: spec.symbol,
        name: spec.name,
        color: spec.color,
        points,
    })
}

fn month_label(ts: i64) -> String {
    DateTime::<Utc>::from_timestamp(ts, 0)
        .map(|dt| dt.format("%Y-%m").to_string())
        .unwrap_or_default()
}

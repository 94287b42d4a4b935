//! Report data assembly: the seam the rendering layer consumes.
//!
//! Internals are split into:
//! - `assemble`: pure composition of the fetched pieces
//! - `model`:    the output value objects
//!
//! [`ReportBuilder`] drives the whole pipeline for one company: connectivity
//! probe, profile, both statement series, comparison series, then assembly.
//! The first failure at any stage aborts the run and the partial state is
//! discarded; there are no retries and no partially populated reports.

mod assemble;
mod model;

pub use assemble::assemble;
pub use model::{BarChartData, ReportData};

use chrono::{DateTime, Utc};

use crate::core::{BriefClient, BriefError, net};
use crate::profile;
use crate::series::{ComparisonBuilder, TickerSpec};
use crate::statements;

/// Distinguished line color for the subject ticker.
const SUBJECT_COLOR: &str = "#FF0000";

/// Builder for one complete report data set.
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    symbol: String,
    comparisons: Vec<TickerSpec>,
    start: Option<DateTime<Utc>>,
}

impl ReportBuilder {
    /// Start a report for a subject ticker symbol.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            comparisons: Vec::new(),
            start: None,
        }
    }

    /// Add a ticker whose rebased history is charted alongside the subject's.
    pub fn compare(mut self, spec: TickerSpec) -> Self {
        self.comparisons.push(spec);
        self
    }

    /// Override the comparison window start (default: 10 years before now).
    pub fn start(mut self, start: DateTime<Utc>) -> Self {
        self.start = Some(start);
        self
    }

    /// Run the pipeline and assemble the report data.
    ///
    /// # Errors
    ///
    /// Returns the first failure from any stage: `NetworkUnavailable` from
    /// the probe, the profile and statements adapter errors, series fetch
    /// failures, or `InsufficientHistory` from the growth metrics.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self, client), err, fields(symbol = %self.symbol))
    )]
    pub async fn fetch(self, client: &BriefClient) -> Result<ReportData, BriefError> {
        net::preflight(client).await?;

        let profile = profile::load_profile(client, &self.symbol).await?;
        let income = statements::income_statements(client, &self.symbol).await?;
        let cashflow = statements::cash_flow_statements(client, &self.symbol).await?;

        // The comparison chart labels the subject with the resolved symbol
        // and display name, not with whatever the caller typed.
        let subject = TickerSpec::new(profile.symbol.clone(), profile.name.clone(), SUBJECT_COLOR);
        let mut series = ComparisonBuilder::new(subject);
        for spec in self.comparisons {
            series = series.compare(spec);
        }
        if let Some(start) = self.start {
            series = series.start(start);
        }
        let comparison = series.fetch(client).await?;

        assemble(profile, &income, &cashflow, comparison)
    }
}

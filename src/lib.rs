//! company-brief: data engine for single-company equity briefs.
//!
//! Fetches a validated company profile, annual statement series, and monthly
//! price history, derives growth metrics and formatted figures, and assembles
//! the value objects a rendering layer lays out. Only the data acquisition
//! and derivation live here; argument parsing, printing, and page layout are
//! the caller's concern.

pub mod core;
pub mod metrics;
pub mod profile;
pub mod report;
pub mod series;
pub mod statements;

pub use crate::core::{BriefClient, BriefClientBuilder, BriefError};
pub use metrics::{MetricBox, StatementField, cagr, format_amount, format_percentage};
pub use profile::{CompanyProfile, load_profile};
pub use report::{BarChartData, ReportBuilder, ReportData, assemble};
pub use series::{ComparisonBuilder, SeriesPoint, TickerSeries, TickerSpec};
pub use statements::{StatementPeriod, cash_flow_statements, income_statements};

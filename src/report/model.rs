use crate::metrics::MetricBox;
use crate::profile::CompanyProfile;
use crate::series::TickerSeries;

/// Everything the rendering layer consumes for one company, fully derived.
///
/// This is the complete and only seam toward the document layer; nothing in
/// it knows about pages, fonts, or file formats.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportData {
    /// The validated profile the report is about.
    pub profile: CompanyProfile,
    /// Market cap, revenue, EBITDA margin, trailing P/E, dividend yield.
    pub intro_boxes: Vec<MetricBox>,
    /// Revenue / net income / margin growth rates.
    pub growth_boxes: Vec<MetricBox>,
    /// Operating and free cash flow growth rates.
    pub cash_flow_boxes: Vec<MetricBox>,
    /// Per-year revenue (primary) and net income (secondary), in millions.
    pub revenue_earnings_bars: BarChartData,
    /// Per-year operating cash flow (primary) and FCF estimate (secondary), in millions.
    pub cash_flow_bars: BarChartData,
    /// The rebased comparison series, subject first, unchanged.
    pub comparison: Vec<TickerSeries>,
}

/// Two aligned bar series over per-year categories, most recent year last.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChartData {
    /// Category labels, one fiscal year each.
    pub years: Vec<String>,
    /// First bar series, in millions.
    pub primary: Vec<f64>,
    /// Second bar series, in millions.
    pub secondary: Vec<f64>,
}

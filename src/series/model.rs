/// A ticker to include in the comparison chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickerSpec {
    /// Ticker symbol to fetch.
    pub symbol: String,
    /// Display name for the chart legend.
    pub name: String,
    /// Display color (hex string) for the chart line.
    pub color: String,
}

impl TickerSpec {
    /// Convenience constructor.
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            color: color.into(),
        }
    }
}

/// One rebased observation: a year-month label and the percent return since
/// the series' first close.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    /// `%Y-%m` label of the observation.
    pub label: String,
    /// Percent return relative to the first close; 0 for the first point.
    pub value: f64,
}

/// A ticker's monthly price history, rebased for visual comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct TickerSeries {
    /// Ticker symbol the series belongs to.
    pub symbol: String,
    /// Display name for the chart legend.
    pub name: String,
    /// Display color for the chart line.
    pub color: String,
    /// Rebased observations, oldest first.
    pub points: Vec<SeriesPoint>,
}

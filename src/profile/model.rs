/// A validated company profile plus the snapshot metrics the report needs.
///
/// Constructed only by the quote adapter, so holders can rely on the quote
/// type being `EQUITY` and a currency always being present.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyProfile {
    /// Ticker symbol as resolved by the provider.
    pub symbol: String,
    /// Short display name.
    pub name: String,
    /// Currency code from the quote.
    pub currency: String,
    /// Display glyph for the currency (the code itself when none is mapped).
    pub currency_symbol: String,
    /// Long business summary text.
    pub summary: String,
    /// Quote type tag, always `"EQUITY"`.
    pub quote_type: String,
    /// Market capitalization, in the quote currency.
    pub market_cap: f64,
    /// Trailing total annual revenue, in the quote currency.
    pub total_revenue: f64,
    /// EBITDA divided by total revenue, as a ratio.
    pub ebitda_margins: f64,
    /// Trailing price/earnings ratio, when the provider reports one.
    pub trailing_pe: Option<f64>,
    /// Trailing annual dividend yield as a ratio, when reported.
    pub trailing_annual_dividend_yield: Option<f64>,
}

//! Fixed mapping of currency codes to display glyphs.
//!
//! Codes outside the table pass through unchanged, so amounts stay readable
//! for currencies without a dedicated symbol.

/// Display glyphs for the currencies the report layer special-cases.
pub const CURRENCY_SYMBOLS: &[(&str, &str)] = &[("USD", "$"), ("EUR", "€"), ("YEN", "¥")];

/// Resolve a currency code to its display symbol, or echo the code back.
pub fn symbol_for(code: &str) -> &str {
    CURRENCY_SYMBOLS
        .iter()
        .find(|(c, _)| *c == code)
        .map_or(code, |(_, s)| *s)
}

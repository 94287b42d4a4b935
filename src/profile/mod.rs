//! Company profile loading: one quote snapshot, validated into a typed profile.
//!
//! Internals are split into:
//! - `api`:   fetch + business-rule validation
//! - `model`: the public [`CompanyProfile`] type
//! - `wire`:  serde mapping for the provider payload

mod api;
mod model;
mod wire;

pub use model::CompanyProfile;

use crate::core::{BriefClient, BriefError};

/// Loads and validates the profile for a ticker symbol.
///
/// # Errors
///
/// Returns `InvalidTicker` when the provider call fails or the response
/// cannot be parsed, `NotEquity` when the quote type is not `EQUITY`, and
/// `MissingCurrency` when the quote carries no currency field.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn load_profile(client: &BriefClient, symbol: &str) -> Result<CompanyProfile, BriefError> {
    api::fetch_profile(client, symbol).await
}

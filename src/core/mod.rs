//! Core components of the `company-brief` engine.
//!
//! This module contains the foundational building blocks of the crate:
//! - The main [`BriefClient`] and its builder.
//! - The primary [`BriefError`] type.
//! - The currency symbol table.
//! - Internal networking helpers shared by the adapters.

/// The main client (`BriefClient`), builder, and configuration.
pub mod client;
/// Read-only mapping of currency codes to display glyphs.
pub mod currency;
/// The primary error type (`BriefError`) for the crate.
pub mod error;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::BriefClient`
pub use client::{BriefClient, BriefClientBuilder};
pub use error::BriefError;

//! Core components of the `cryptonews` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`NewsClient`] and its builder.
//! - The primary [`NewsError`] type.
//! - Crypto input normalization ([`Symbol`]).
//! - Internal networking helpers.

/// The main client (`NewsClient`), builder, and configuration.
pub mod client;
/// The primary error type (`NewsError`) for the crate.
pub mod error;
/// Validated crypto identifiers.
pub mod symbol;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::NewsClient`
pub use client::{CacheStats, NewsClient, NewsClientBuilder};
pub use error::NewsError;
pub use symbol::Symbol;

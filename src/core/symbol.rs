use std::fmt;

use serde::Serialize;

use crate::core::NewsError;

const MAX_LEN: usize = 32;

/// A crypto identifier typed by a user: a ticker (`BTC`) or a name (`bitcoin`).
///
/// Construction trims whitespace and rejects anything that could not be a
/// coin name, so every `Symbol` is safe to put into a query string and a
/// cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Parses raw user input.
    ///
    /// # Errors
    ///
    /// Returns [`NewsError::InvalidSymbol`] when the trimmed input is empty, longer
    /// than 32 characters, or contains characters other than ASCII letters,
    /// digits, spaces, `-`, `_` and `.`.
    pub fn parse(input: &str) -> Result<Self, NewsError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(NewsError::InvalidSymbol("input is empty".into()));
        }
        if trimmed.chars().count() > MAX_LEN {
            return Err(NewsError::InvalidSymbol(format!(
                "longer than {MAX_LEN} characters"
            )));
        }
        if let Some(bad) = trimmed
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ' ')))
        {
            return Err(NewsError::InvalidSymbol(format!(
                "unexpected character {bad:?}"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The trimmed input as typed.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Upper-cased form sent to providers as a ticker.
    pub fn ticker(&self) -> String {
        self.0.to_uppercase()
    }

    /// Lower-cased form used for cache keys and search statistics.
    pub fn key(&self) -> String {
        self.0.to_lowercase()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Symbol {
    type Err = NewsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

//! Primitive types for the Bird SDK.
//!
//! Provides type-safe wrappers for bid identifiers and bid amounts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SdkError;

/// Opaque identifier of a bid/game.
///
/// The server assigns these; the client never inspects or validates them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BidId(String);

impl BidId {
    /// Creates a new identifier.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BidId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BidId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for BidId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for BidId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A bid amount in game points.
///
/// Amounts are forwarded as-is; the server decides whether a bid is legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BidAmount(i64);

impl BidAmount {
    /// Creates a new amount.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for BidAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for BidAmount {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<BidAmount> for i64 {
    fn from(amount: BidAmount) -> Self {
        amount.0
    }
}

impl FromStr for BidAmount {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|e| SdkError::InvalidAmount(format!("{s:?}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bid_id_display() {
        let id = BidId::new("AB12CD34");
        assert_eq!(id.to_string(), "AB12CD34");
        assert_eq!(id.as_str(), "AB12CD34");
    }

    #[test]
    fn test_bid_id_serializes_as_string() {
        let id = BidId::from("42");
        assert_eq!(serde_json::to_string(&id).ok(), Some("\"42\"".to_string()));
    }

    #[test]
    fn test_bid_amount_new() {
        let amount = BidAmount::new(120);
        assert_eq!(amount.value(), 120);
        assert_eq!(i64::from(amount), 120);
    }

    #[test]
    fn test_bid_amount_serializes_as_number() {
        let amount = BidAmount::new(85);
        assert_eq!(serde_json::to_string(&amount).ok(), Some("85".to_string()));
    }

    #[test]
    fn test_bid_amount_parse() {
        assert_eq!(" 100 ".parse::<BidAmount>(), Ok(BidAmount::new(100)));
        assert_eq!("-5".parse::<BidAmount>(), Ok(BidAmount::new(-5)));
    }

    #[test]
    fn test_bid_amount_parse_invalid() {
        let err = "ten".parse::<BidAmount>();
        assert!(matches!(err, Err(SdkError::InvalidAmount(_))));
    }
}

//! Bid types for the Bird SDK.
//!
//! Provides the active bid context, the bid request body, and the outcome
//! returned by bidding calls.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::primitives::{BidAmount, BidId};

/// The bid/game the user is currently bidding on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BidContext {
    /// Opaque bid/game identifier.
    pub id: BidId,
}

impl BidContext {
    /// Creates a new context for the given identifier.
    #[must_use]
    pub fn new(id: impl Into<BidId>) -> Self {
        Self { id: id.into() }
    }
}

/// Body of a bid submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BidSubmission {
    /// Amount being bid.
    pub amount: BidAmount,
}

impl BidSubmission {
    /// Creates a new submission.
    #[must_use]
    pub const fn new(amount: BidAmount) -> Self {
        Self { amount }
    }
}

/// Outcome of a request/response call: success flag and raw status code.
///
/// A status of `0` means no request was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestOutcome {
    /// Whether the server reported success (2xx).
    pub ok: bool,
    /// Raw HTTP status code, or `0` when inactive.
    pub status: u16,
}

impl RequestOutcome {
    /// Outcome returned when there is no active bid.
    #[must_use]
    pub const fn inactive() -> Self {
        Self {
            ok: false,
            status: 0,
        }
    }

    /// Builds an outcome from a response status.
    #[must_use]
    pub fn from_status(status: reqwest::StatusCode) -> Self {
        Self {
            ok: status.is_success(),
            status: status.as_u16(),
        }
    }

    /// Returns true if no request was made.
    #[must_use]
    pub const fn is_inactive(&self) -> bool {
        self.status == 0
    }
}

impl From<RequestOutcome> for (bool, u16) {
    fn from(outcome: RequestOutcome) -> Self {
        (outcome.ok, outcome.status)
    }
}

impl fmt::Display for RequestOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_inactive() {
            write!(f, "inactive")
        } else if self.ok {
            write!(f, "ok ({})", self.status)
        } else {
            write!(f, "rejected ({})", self.status)
        }
    }
}

//! Core types for the Bird SDK.
//!
//! This module provides the values exchanged with the Bird bidding API.

pub mod bid;
pub mod game;
pub mod primitives;

pub use bid::{BidContext, BidSubmission, RequestOutcome};
pub use game::{Card, Color, GameState, VisibleGameState};
pub use primitives::{BidAmount, BidId};

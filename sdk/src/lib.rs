//! Bird SDK - Rust client library for the Bird bidding API.
//!
//! This crate provides the client side of the bidding view: a session that
//! submits bids, pulls game state into shared state, and opens the live
//! update stream for the active bid.
//!
//! # Modules
//!
//! - [`types`] — Bid identifiers, amounts, outcomes, and game state
//! - [`store`] — Shared observable state ([`BidStore`], [`GameStore`])
//! - [`client`] — HTTP transport ([`client::BiddingClient`])
//! - [`stream`] — Server-sent event stream ([`stream::UpdateStream`])
//! - [`session`] — The bidding operations over shared state
//!
//! # Example
//!
//! ```rust,no_run
//! use bird_sdk::client::BiddingClient;
//! use bird_sdk::{BidAmount, BidContext, BidStore, BiddingSession, GameStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let bids = BidStore::empty();
//!     let games = GameStore::empty();
//!     let client = BiddingClient::with_base_url("http://localhost:3000")?;
//!     let session = BiddingSession::new(client, bids.clone(), games.clone());
//!
//!     bids.set(BidContext::new("AB12CD34"));
//!     let outcome = session.submit_bid(BidAmount::new(80)).await?;
//!     if outcome.ok {
//!         session.fetch_game_state().await?;
//!         println!("{:?}", games.get());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod session;
pub mod store;
pub mod stream;
pub mod types;

pub use error::SdkError;
pub use session::BiddingSession;
pub use store::{BidStore, GameStore, Store, StoreSubscriber};
pub use types::{
    BidAmount, BidContext, BidId, BidSubmission, Card, Color, GameState, RequestOutcome,
    VisibleGameState,
};

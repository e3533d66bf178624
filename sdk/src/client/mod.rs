//! HTTP client for the Bird bidding API.
//!
//! # Example
//!
//! ```rust,no_run
//! use bird_sdk::client::{BiddingClient, ClientConfig};
//! use bird_sdk::{BidAmount, BidId};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = BiddingClient::with_base_url("http://localhost:3000")?;
//!     let id = BidId::new("AB12CD34");
//!
//!     let outcome = client.submit_bid(&id, BidAmount::new(80)).await?;
//!     println!("bid {}", outcome);
//!
//!     let (outcome, state) = client.fetch_game(&id).await?;
//!     println!("game {} {:?}", outcome, state);
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod endpoints;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use endpoints::Endpoints;
pub use error::ClientError;
pub use http::BiddingClient;

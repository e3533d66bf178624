//! Live bidding updates over server-sent events.
//!
//! # Example
//!
//! ```rust,no_run
//! use bird_sdk::client::BiddingClient;
//! use bird_sdk::BidId;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = BiddingClient::with_base_url("http://localhost:3000")?;
//!     let mut stream = client.update_stream(&BidId::new("AB12CD34"));
//!
//!     while let Some(event) = stream.next_event().await {
//!         println!("{:?}", event?);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod decoder;
pub mod error;
pub mod event;

pub use client::{ReadyState, UpdateStream};
pub use decoder::SseDecoder;
pub use error::StreamError;
pub use event::SseEvent;

//! HTTP client implementation.
//!
//! Provides the transport layer for the bidding API. Calls here take an
//! explicit bid identifier; reading the active bid from shared state is the
//! job of [`crate::session::BiddingSession`].

use tracing::debug;

use super::config::ClientConfig;
use super::endpoints::Endpoints;
use super::error::ClientError;
use crate::stream::UpdateStream;
use crate::types::{BidAmount, BidId, BidSubmission, GameState, RequestOutcome};

/// HTTP client for the bidding API.
#[derive(Debug, Clone)]
pub struct BiddingClient {
    config: ClientConfig,
    endpoints: Endpoints,
    http: reqwest::Client,
}

impl BiddingClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;
        let endpoints = Endpoints::new(&config.base_url)?;

        // No overall timeout on the client: update streams stay open
        // indefinitely. Request/response calls set one per request.
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .cookie_store(config.cookie_store)
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self {
            config,
            endpoints,
            http,
        })
    }

    /// Creates a new client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, ClientError> {
        Self::new(ClientConfig::default())
    }

    /// Creates a new client with the given base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::new(ClientConfig::new(base_url))
    }

    /// Returns the client configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the endpoint resolver.
    #[must_use]
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Submits a bid for `id`.
    ///
    /// A response with a non-success status is reported through the
    /// returned outcome, not as an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the request could not be completed.
    pub async fn submit_bid(
        &self,
        id: &BidId,
        amount: BidAmount,
    ) -> Result<RequestOutcome, ClientError> {
        let url = self.endpoints.bid(id);
        debug!(%url, %amount, "submitting bid");

        let response = self
            .http
            .post(url)
            .timeout(self.config.timeout)
            .json(&BidSubmission::new(amount))
            .send()
            .await?;

        let outcome = RequestOutcome::from_status(response.status());
        debug!(bid = %id, %outcome, "bid response");
        Ok(outcome)
    }

    /// Fetches the game state for `id`.
    ///
    /// The body is parsed only when the server reports success; otherwise
    /// the state is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request could not be completed or a success
    /// body is not valid JSON.
    pub async fn fetch_game(
        &self,
        id: &BidId,
    ) -> Result<(RequestOutcome, Option<GameState>), ClientError> {
        let url = self.endpoints.game(id);
        debug!(%url, "fetching game state");

        let response = self
            .http
            .get(url)
            .timeout(self.config.timeout)
            .send()
            .await?;

        let outcome = RequestOutcome::from_status(response.status());
        debug!(game = %id, %outcome, "game response");
        if !outcome.ok {
            return Ok((outcome, None));
        }

        let body = response.bytes().await?;
        let state = serde_json::from_slice::<GameState>(&body)
            .map_err(|e| ClientError::Deserialization(e.to_string()))?;
        Ok((outcome, Some(state)))
    }

    /// Creates an update stream for `id`. No connection is made until the
    /// stream is first read.
    #[must_use]
    pub fn update_stream(&self, id: &BidId) -> UpdateStream {
        UpdateStream::new(self.http.clone(), self.endpoints.subscribe(id))
    }
}

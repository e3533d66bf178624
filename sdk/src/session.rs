//! Bidding session.
//!
//! A [`BiddingSession`] binds a [`BiddingClient`] to the shared bid and game
//! stores. It holds no state of its own: every call reads the active bid
//! from the bid store at call time.
//!
//! When no bid is active every operation is a silent no-op: no request is
//! made and the "inactive" result is returned. Non-success responses are
//! reported through [`RequestOutcome`]. Transport faults are returned as
//! errors and leave the stores untouched.

use tracing::debug;

use crate::client::{BiddingClient, ClientError};
use crate::store::{BidStore, GameStore};
use crate::stream::UpdateStream;
use crate::types::{BidAmount, BidContext, RequestOutcome};

/// The three bidding operations over shared state.
#[derive(Debug, Clone)]
pub struct BiddingSession {
    client: BiddingClient,
    bid: BidStore,
    game: GameStore,
}

impl BiddingSession {
    /// Creates a session over the given client and stores.
    #[must_use]
    pub fn new(client: BiddingClient, bid: BidStore, game: GameStore) -> Self {
        Self { client, bid, game }
    }

    /// Returns the underlying client.
    #[must_use]
    pub fn client(&self) -> &BiddingClient {
        &self.client
    }

    /// Returns the bid store handle.
    #[must_use]
    pub fn bid_store(&self) -> &BidStore {
        &self.bid
    }

    /// Returns the game store handle.
    #[must_use]
    pub fn game_store(&self) -> &GameStore {
        &self.game
    }

    /// Opens the live update stream for the active bid.
    ///
    /// Returns `None` without creating anything when no bid is active. The
    /// caller owns the returned stream and is responsible for reading and
    /// closing it.
    #[must_use]
    pub fn open_update_stream(&self) -> Option<UpdateStream> {
        let Some(BidContext { id }) = self.bid.get() else {
            debug!("no active bid, not opening update stream");
            return None;
        };
        Some(self.client.update_stream(&id))
    }

    /// Submits `amount` for the active bid.
    ///
    /// Returns [`RequestOutcome::inactive`] without a request when no bid is
    /// active. Local state is never modified.
    ///
    /// # Errors
    ///
    /// Returns an error if the request could not be completed.
    pub async fn submit_bid(&self, amount: BidAmount) -> Result<RequestOutcome, ClientError> {
        let Some(BidContext { id }) = self.bid.get() else {
            debug!("no active bid, not submitting");
            return Ok(RequestOutcome::inactive());
        };
        self.client.submit_bid(&id, amount).await
    }

    /// Fetches the game state for the active bid into the game store.
    ///
    /// Returns [`RequestOutcome::inactive`] without a request when no bid is
    /// active. The store is written only on success.
    ///
    /// # Errors
    ///
    /// Returns an error if the request could not be completed or the body
    /// is not valid JSON. The store is left unchanged.
    pub async fn fetch_game_state(&self) -> Result<RequestOutcome, ClientError> {
        let Some(BidContext { id }) = self.bid.get() else {
            debug!("no active bid, not fetching game state");
            return Ok(RequestOutcome::inactive());
        };

        let (outcome, state) = self.client.fetch_game(&id).await?;
        if let Some(state) = state {
            self.game.set(state);
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GameState;
    use serde_json::json;
    use wiremock::matchers::{any, body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn session(base_url: &str, active: Option<&str>) -> BiddingSession {
        let client = BiddingClient::with_base_url(base_url).expect("client");
        let bid = match active {
            Some(id) => BidStore::with_value(BidContext::new(id)),
            None => BidStore::empty(),
        };
        BiddingSession::new(client, bid, GameStore::empty())
    }

    async fn silent_server() -> MockServer {
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn test_no_context_makes_no_requests() {
        let server = silent_server().await;
        let session = session(&server.uri(), None);

        assert!(session.open_update_stream().is_none());

        let bid = session.submit_bid(BidAmount::new(80)).await.expect("bid");
        assert_eq!(<(bool, u16)>::from(bid), (false, 0));

        let game = session.fetch_game_state().await.expect("game");
        assert_eq!(<(bool, u16)>::from(game), (false, 0));
        assert!(!session.game_store().is_set());
    }

    #[tokio::test]
    async fn test_no_context_needs_no_server() {
        let session = session("http://127.0.0.1:1", None);
        let bid = session.submit_bid(BidAmount::new(80)).await;
        assert!(matches!(bid, Ok(outcome) if outcome.is_inactive()));
        let game = session.fetch_game_state().await;
        assert!(matches!(game, Ok(outcome) if outcome.is_inactive()));
    }

    #[tokio::test]
    async fn test_submit_bid_accepted() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/bidding/42"))
            .and(body_json(json!({ "amount": 100 })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let session = session(&server.uri(), Some("42"));
        let outcome = session.submit_bid(BidAmount::new(100)).await.expect("bid");
        assert_eq!(<(bool, u16)>::from(outcome), (true, 200));
        assert!(!session.game_store().is_set());
    }

    #[tokio::test]
    async fn test_submit_bid_conflict() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/bidding/42"))
            .respond_with(ResponseTemplate::new(409))
            .mount(&server)
            .await;

        let session = session(&server.uri(), Some("42"));
        let outcome = session.submit_bid(BidAmount::new(100)).await.expect("bid");
        assert_eq!(<(bool, u16)>::from(outcome), (false, 409));
    }

    #[tokio::test]
    async fn test_submit_bid_does_not_touch_game_store() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "round": 9 })))
            .mount(&server)
            .await;

        let session = session(&server.uri(), Some("42"));
        session.game_store().set(GameState::new(json!({ "round": 1 })));
        session.submit_bid(BidAmount::new(100)).await.expect("bid");
        assert_eq!(
            session.game_store().get(),
            Some(GameState::new(json!({ "round": 1 })))
        );
    }

    #[tokio::test]
    async fn test_fetch_game_state_stores_document() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/games/7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "round": 3 })))
            .mount(&server)
            .await;

        let session = session(&server.uri(), Some("7"));
        let outcome = session.fetch_game_state().await.expect("game");
        assert_eq!(<(bool, u16)>::from(outcome), (true, 200));
        assert_eq!(
            session.game_store().get(),
            Some(GameState::new(json!({ "round": 3 })))
        );
    }

    #[tokio::test]
    async fn test_fetch_game_state_failure_leaves_store() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/games/7"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let session = session(&server.uri(), Some("7"));
        session.game_store().set(GameState::new(json!({ "round": 2 })));

        let outcome = session.fetch_game_state().await.expect("game");
        assert_eq!(<(bool, u16)>::from(outcome), (false, 500));
        assert_eq!(
            session.game_store().get(),
            Some(GameState::new(json!({ "round": 2 })))
        );
    }

    #[tokio::test]
    async fn test_fetch_game_state_is_idempotent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/games/7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "round": 3 })))
            .expect(2)
            .mount(&server)
            .await;

        let session = session(&server.uri(), Some("7"));
        session.fetch_game_state().await.expect("first");
        let first = session.game_store().get();
        session.fetch_game_state().await.expect("second");
        assert_eq!(session.game_store().get(), first);
        assert_eq!(first, Some(GameState::new(json!({ "round": 3 }))));
    }

    #[tokio::test]
    async fn test_transport_fault_propagates_and_leaves_store() {
        let session = session("http://127.0.0.1:1", Some("7"));
        session.game_store().set(GameState::new(json!({ "round": 2 })));

        assert!(session.fetch_game_state().await.is_err());
        assert!(session.submit_bid(BidAmount::new(1)).await.is_err());
        assert_eq!(
            session.game_store().get(),
            Some(GameState::new(json!({ "round": 2 })))
        );
    }

    #[tokio::test]
    async fn test_malformed_game_body_leaves_store() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let session = session(&server.uri(), Some("7"));
        let result = session.fetch_game_state().await;
        assert!(matches!(result, Err(ClientError::Deserialization(_))));
        assert!(!session.game_store().is_set());
    }

    #[test]
    fn test_open_update_stream_targets_active_bid() {
        let session = session("http://localhost:3000", Some("5"));
        let stream = session.open_update_stream().expect("stream");
        assert_eq!(stream.url().path(), "/api/bidding/5/subscribe");
    }

    #[tokio::test]
    async fn test_session_follows_context_changes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/games/second"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "round": 1 })))
            .expect(1)
            .mount(&server)
            .await;

        let session = session(&server.uri(), Some("first"));
        session.bid_store().set(BidContext::new("second"));
        let outcome = session.fetch_game_state().await.expect("game");
        assert!(outcome.ok);

        session.bid_store().clear();
        assert!(session.open_update_stream().is_none());
    }
}

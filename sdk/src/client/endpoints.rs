//! Endpoint URLs of the bidding API.
//!
//! All paths hang off the application base URL, which may itself carry a
//! path prefix. Identifiers are percent-encoded as a single path segment.

use reqwest::Url;

use super::error::ClientError;
use crate::types::BidId;

/// Resolves endpoint URLs against a base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: Url,
}

impl Endpoints {
    /// Parses the base URL.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidUrl` if the base URL cannot be parsed or
    /// cannot carry a path.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base = Url::parse(base_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(format!(
                "{base_url} cannot be used as a base url"
            )));
        }
        Ok(Self { base })
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base(&self) -> &Url {
        &self.base
    }

    /// `GET /api/bidding/{id}/subscribe` (event stream).
    #[must_use]
    pub fn subscribe(&self, id: &BidId) -> Url {
        self.join(&["api", "bidding", id.as_str(), "subscribe"])
    }

    /// `POST /api/bidding/{id}`.
    #[must_use]
    pub fn bid(&self, id: &BidId) -> Url {
        self.join(&["api", "bidding", id.as_str()])
    }

    /// `GET /api/games/{id}`.
    #[must_use]
    pub fn game(&self, id: &BidId) -> Url {
        self.join(&["api", "games", id.as_str()])
    }

    fn join(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        url.set_query(None);
        url.set_fragment(None);
        // `new` rejects cannot-be-a-base URLs, so this always succeeds.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoints(base: &str) -> Endpoints {
        Endpoints::new(base).expect("endpoints")
    }

    #[test]
    fn test_subscribe_path() {
        let url = endpoints("http://localhost:3000").subscribe(&BidId::new("5"));
        assert_eq!(url.as_str(), "http://localhost:3000/api/bidding/5/subscribe");
    }

    #[test]
    fn test_bid_path() {
        let url = endpoints("http://localhost:3000").bid(&BidId::new("42"));
        assert_eq!(url.path(), "/api/bidding/42");
    }

    #[test]
    fn test_game_path() {
        let url = endpoints("http://localhost:3000").game(&BidId::new("7"));
        assert_eq!(url.path(), "/api/games/7");
    }

    #[test]
    fn test_base_path_prefix() {
        let with_slash = endpoints("https://bird.example.com/app/");
        let without_slash = endpoints("https://bird.example.com/app");
        let id = BidId::new("7");

        assert_eq!(
            with_slash.game(&id).as_str(),
            "https://bird.example.com/app/api/games/7"
        );
        assert_eq!(
            without_slash.game(&id).as_str(),
            "https://bird.example.com/app/api/games/7"
        );
    }

    #[test]
    fn test_id_is_a_single_segment() {
        let url = endpoints("http://localhost:3000").bid(&BidId::new("a/b c"));
        assert_eq!(url.path(), "/api/bidding/a%2Fb%20c");
    }

    #[test]
    fn test_invalid_base() {
        assert!(Endpoints::new("not a url").is_err());
        assert!(Endpoints::new("mailto:bird@example.com").is_err());
    }
}

//! Update stream error types.

/// Update stream errors.
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    /// Could not connect to the subscription endpoint.
    #[error("connection failed: {0}")]
    Connection(#[source] reqwest::Error),

    /// The server answered with something other than `200 OK`.
    #[error("unexpected status {0}")]
    Status(u16),

    /// The server answered with a body that is not an event stream.
    #[error("unexpected content type {0:?}")]
    ContentType(String),

    /// The connection dropped while reading events.
    #[error("stream interrupted: {0}")]
    Interrupted(#[source] reqwest::Error),

    /// The server sent a line longer than the decoder accepts.
    #[error("line exceeds {0} bytes")]
    LineTooLong(usize),
}

impl StreamError {
    /// Returns the HTTP status if the server rejected the subscription.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status(code) => Some(*code),
            _ => None,
        }
    }
}

//! Update stream handle.
//!
//! An [`UpdateStream`] is created disconnected and opens its HTTP connection
//! on the first call to [`UpdateStream::next_event`]. It never reconnects on
//! its own; callers that want to resume call [`UpdateStream::reconnect`],
//! which sends the last seen event id back to the server.

use std::collections::VecDeque;
use std::time::Duration;

use futures_util::Stream;
use reqwest::header::{ACCEPT, CACHE_CONTROL, CONTENT_TYPE};
use reqwest::{StatusCode, Url};
use tracing::debug;

use super::decoder::SseDecoder;
use super::error::StreamError;
use super::event::SseEvent;

/// Media type of an event stream.
pub const EVENT_STREAM_MIME: &str = "text/event-stream";

/// Header carrying the last seen event id on reconnection.
pub const LAST_EVENT_ID_HEADER: &str = "Last-Event-ID";

/// Connection state of an [`UpdateStream`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReadyState {
    /// Not connected yet; the next read opens the connection.
    Connecting,
    /// Connected and reading events.
    Open,
    /// Closed by the caller, by the server, or after an error.
    Closed,
}

/// Handle onto a live bidding update stream.
#[derive(Debug)]
pub struct UpdateStream {
    http: reqwest::Client,
    url: Url,
    state: ReadyState,
    response: Option<reqwest::Response>,
    decoder: SseDecoder,
    pending: VecDeque<SseEvent>,
}

impl UpdateStream {
    /// Creates a disconnected stream targeting `url`.
    #[must_use]
    pub fn new(http: reqwest::Client, url: Url) -> Self {
        Self {
            http,
            url,
            state: ReadyState::Connecting,
            response: None,
            decoder: SseDecoder::new(),
            pending: VecDeque::new(),
        }
    }

    /// Sets the maximum length of a single event-stream line, in bytes.
    ///
    /// A longer line closes the stream with `StreamError::LineTooLong`.
    #[must_use]
    pub fn with_max_line_len(mut self, max_line_len: usize) -> Self {
        self.decoder = SseDecoder::new().with_max_line_len(max_line_len);
        self
    }

    /// Returns the subscription URL.
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Returns the connection state.
    #[must_use]
    pub const fn ready_state(&self) -> ReadyState {
        self.state
    }

    /// Returns the last event id received, if any.
    #[must_use]
    pub fn last_event_id(&self) -> Option<&str> {
        self.decoder.last_event_id()
    }

    /// Returns the reconnection delay the server asked for, if any.
    #[must_use]
    pub fn retry_hint(&self) -> Option<Duration> {
        self.decoder.retry()
    }

    /// Returns the next event.
    ///
    /// Connects first if needed. Returns `None` once the stream has ended or
    /// been closed. After an error the stream is closed.
    pub async fn next_event(&mut self) -> Option<Result<SseEvent, StreamError>> {
        loop {
            if let Some(event) = self.pending.pop_front() {
                return Some(Ok(event));
            }

            match self.state {
                ReadyState::Closed => return None,
                ReadyState::Connecting => {
                    if let Err(err) = self.connect().await {
                        self.shutdown();
                        return Some(Err(err));
                    }
                }
                ReadyState::Open => {
                    let Some(response) = self.response.as_mut() else {
                        self.shutdown();
                        return None;
                    };
                    let chunk = response.chunk().await;
                    match chunk {
                        Ok(Some(chunk)) => match self.decoder.feed(&chunk) {
                            Ok(events) => self.pending.extend(events),
                            Err(err) => {
                                debug!(url = %self.url, "update stream line too long");
                                self.shutdown();
                                return Some(Err(err));
                            }
                        },
                        Ok(None) => {
                            debug!(url = %self.url, "update stream ended by server");
                            self.shutdown();
                        }
                        Err(err) => {
                            self.shutdown();
                            return Some(Err(StreamError::Interrupted(err)));
                        }
                    }
                }
            }
        }
    }

    /// Closes the stream. Buffered events are discarded.
    pub fn close(&mut self) {
        if self.state != ReadyState::Closed {
            debug!(url = %self.url, "update stream closed");
        }
        self.shutdown();
        self.pending.clear();
    }

    /// Drops the current connection and reconnects on the next read.
    ///
    /// The last event id is sent with the new request so the server can
    /// resume where the previous connection stopped.
    pub fn reconnect(&mut self) {
        self.response = None;
        self.pending.clear();
        self.decoder.reset_partial();
        self.state = ReadyState::Connecting;
    }

    /// Converts the handle into a [`Stream`] of events.
    pub fn into_events(self) -> impl Stream<Item = Result<SseEvent, StreamError>> + Send {
        futures_util::stream::unfold(self, |mut stream| async move {
            stream.next_event().await.map(|item| (item, stream))
        })
    }

    async fn connect(&mut self) -> Result<(), StreamError> {
        let mut request = self
            .http
            .get(self.url.clone())
            .header(ACCEPT, EVENT_STREAM_MIME)
            .header(CACHE_CONTROL, "no-cache");
        if let Some(id) = self.decoder.last_event_id() {
            request = request.header(LAST_EVENT_ID_HEADER, id);
        }

        debug!(url = %self.url, "opening update stream");
        let response = request.send().await.map_err(StreamError::Connection)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(StreamError::Status(status.as_u16()));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        if !is_event_stream(content_type) {
            return Err(StreamError::ContentType(content_type.to_string()));
        }

        self.response = Some(response);
        self.state = ReadyState::Open;
        Ok(())
    }

    fn shutdown(&mut self) {
        self.response = None;
        self.state = ReadyState::Closed;
    }
}

fn is_event_stream(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case(EVENT_STREAM_MIME))
}

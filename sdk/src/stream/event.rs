//! Server-sent event type.

use serde::de::DeserializeOwned;

use crate::error::SdkError;

/// Event type used when the server does not name one.
pub const DEFAULT_EVENT_TYPE: &str = "message";

/// A single dispatched server-sent event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SseEvent {
    /// Event type (`message` unless the server set `event:`).
    pub event: String,
    /// Event payload; multiple `data:` lines are joined with `\n`.
    pub data: String,
    /// Last event id seen on the stream when this event was dispatched.
    pub id: Option<String>,
}

impl SseEvent {
    /// Creates a default-typed event with the given payload.
    #[must_use]
    pub fn message(data: impl Into<String>) -> Self {
        Self {
            event: DEFAULT_EVENT_TYPE.to_string(),
            data: data.into(),
            id: None,
        }
    }

    /// Returns true if the event has the default type.
    #[must_use]
    pub fn is_message(&self) -> bool {
        self.event == DEFAULT_EVENT_TYPE
    }

    /// Parses the payload as JSON.
    ///
    /// # Errors
    ///
    /// Returns `SdkError::Deserialization` if the payload is not valid JSON
    /// for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, SdkError> {
        serde_json::from_str(&self.data).map_err(|e| SdkError::Deserialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_event() {
        let event = SseEvent::message("hello");
        assert!(event.is_message());
        assert_eq!(event.data, "hello");
        assert!(event.id.is_none());
    }

    #[test]
    fn test_event_json() {
        let event = SseEvent::message(r#"{"amount":90,"player":"ana"}"#);
        let value: serde_json::Value = event.json().expect("json");
        assert_eq!(value["amount"], 90);
    }

    #[test]
    fn test_event_json_invalid() {
        let event = SseEvent::message("not json");
        let result: Result<serde_json::Value, _> = event.json();
        assert!(matches!(result, Err(SdkError::Deserialization(_))));
    }
}

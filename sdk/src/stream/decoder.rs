//! Incremental `text/event-stream` decoder.
//!
//! Bytes are fed in arbitrary chunks; complete events come out. Lines end
//! with `\n`, `\r\n` or `\r`, and a `\r\n` pair may be split across chunks.
//! A line longer than the configured maximum is an error.

use std::time::Duration;

use super::error::StreamError;
use super::event::{SseEvent, DEFAULT_EVENT_TYPE};

const BOM: &[u8] = b"\xEF\xBB\xBF";

/// Default maximum length of a single line, in bytes.
pub const DEFAULT_MAX_LINE_LEN: usize = 64 * 1024;

/// Decoder state for one event stream.
#[derive(Debug)]
pub struct SseDecoder {
    max_line_len: usize,
    line: Vec<u8>,
    skip_lf: bool,
    seen_first_line: bool,
    event_type: String,
    data: String,
    last_event_id: String,
    retry: Option<Duration>,
}

impl Default for SseDecoder {
    fn default() -> Self {
        Self {
            max_line_len: DEFAULT_MAX_LINE_LEN,
            line: Vec::new(),
            skip_lf: false,
            seen_first_line: false,
            event_type: String::new(),
            data: String::new(),
            last_event_id: String::new(),
            retry: None,
        }
    }
}

impl SseDecoder {
    /// Creates a decoder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum length of a single line, in bytes.
    #[must_use]
    pub fn with_max_line_len(mut self, max_line_len: usize) -> Self {
        self.max_line_len = max_line_len;
        self
    }

    /// Feeds a chunk of bytes and returns the events it completed.
    ///
    /// # Errors
    ///
    /// Returns `StreamError::LineTooLong` once the current line exceeds the
    /// maximum length. The partial line is dropped and events completed
    /// earlier in the same chunk are discarded.
    pub fn feed(&mut self, chunk: &[u8]) -> Result<Vec<SseEvent>, StreamError> {
        let mut events = Vec::new();
        for &byte in chunk {
            if self.skip_lf {
                self.skip_lf = false;
                if byte == b'\n' {
                    continue;
                }
            }
            match byte {
                b'\n' => self.end_line(&mut events),
                b'\r' => {
                    self.end_line(&mut events);
                    self.skip_lf = true;
                }
                _ => {
                    if self.line.len() >= self.max_line_len {
                        self.line = Vec::new();
                        return Err(StreamError::LineTooLong(self.max_line_len));
                    }
                    self.line.push(byte);
                }
            }
        }
        Ok(events)
    }

    /// Last event id set by the server, if any.
    #[must_use]
    pub fn last_event_id(&self) -> Option<&str> {
        if self.last_event_id.is_empty() {
            None
        } else {
            Some(&self.last_event_id)
        }
    }

    /// Reconnection delay requested by the server, if any.
    #[must_use]
    pub fn retry(&self) -> Option<Duration> {
        self.retry
    }

    /// Drops any partially received line or event.
    ///
    /// The last event id and retry hint survive, so a new connection can
    /// resume from where the previous one stopped.
    pub fn reset_partial(&mut self) {
        self.line.clear();
        self.skip_lf = false;
        self.seen_first_line = false;
        self.event_type.clear();
        self.data.clear();
    }

    fn end_line(&mut self, events: &mut Vec<SseEvent>) {
        let raw = std::mem::take(&mut self.line);
        let mut bytes = raw.as_slice();
        if !self.seen_first_line {
            self.seen_first_line = true;
            bytes = bytes.strip_prefix(BOM).unwrap_or(bytes);
        }
        let line = String::from_utf8_lossy(bytes);
        self.process_line(&line, events);
    }

    fn process_line(&mut self, line: &str, events: &mut Vec<SseEvent>) {
        if line.is_empty() {
            self.dispatch(events);
            return;
        }
        if line.starts_with(':') {
            return;
        }

        let (field, value) = match line.split_once(':') {
            Some((field, value)) => (field, value.strip_prefix(' ').unwrap_or(value)),
            None => (line, ""),
        };

        match field {
            "event" => self.event_type = value.to_string(),
            "data" => {
                self.data.push_str(value);
                self.data.push('\n');
            }
            "id" => {
                if !value.contains('\0') {
                    self.last_event_id = value.to_string();
                }
            }
            "retry" => {
                if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
                    if let Ok(ms) = value.parse::<u64>() {
                        self.retry = Some(Duration::from_millis(ms));
                    }
                }
            }
            _ => {}
        }
    }

    fn dispatch(&mut self, events: &mut Vec<SseEvent>) {
        let event_type = std::mem::take(&mut self.event_type);
        if self.data.is_empty() {
            return;
        }
        let mut data = std::mem::take(&mut self.data);
        if data.ends_with('\n') {
            data.pop();
        }
        events.push(SseEvent {
            event: if event_type.is_empty() {
                DEFAULT_EVENT_TYPE.to_string()
            } else {
                event_type
            },
            data,
            id: self.last_event_id().map(str::to_string),
        });
    }
}

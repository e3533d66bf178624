//! Game state types for the Bird SDK.
//!
//! [`GameState`] is the document the session relays verbatim. The typed
//! views ([`VisibleGameState`], [`Card`], [`Color`]) describe what the Bird
//! server currently publishes and are only used when a caller asks for them.

use std::fmt;

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};

use crate::error::SdkError;

/// Opaque game state document, exactly as returned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameState(serde_json::Value);

impl GameState {
    /// Wraps a raw JSON document.
    #[must_use]
    pub const fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    /// Builds a document from any serializable value.
    ///
    /// # Errors
    ///
    /// Returns `SdkError::Serialization` if the value cannot be represented
    /// as JSON.
    pub fn encode<T: Serialize>(value: &T) -> Result<Self, SdkError> {
        serde_json::to_value(value)
            .map(Self)
            .map_err(|e| SdkError::Serialization(e.to_string()))
    }

    /// Decodes the document into a typed view.
    ///
    /// # Errors
    ///
    /// Returns `SdkError::Deserialization` if the document does not match `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, SdkError> {
        T::deserialize(&self.0).map_err(|e| SdkError::Deserialization(e.to_string()))
    }

    /// Decodes the document as the player-visible game state.
    ///
    /// # Errors
    ///
    /// Returns `SdkError::Deserialization` if the document has another shape.
    pub fn visible(&self) -> Result<VisibleGameState, SdkError> {
        self.decode()
    }

    /// Returns the raw JSON document.
    #[must_use]
    pub const fn as_json(&self) -> &serde_json::Value {
        &self.0
    }

    /// Consumes the state and returns the raw JSON document.
    #[must_use]
    pub fn into_json(self) -> serde_json::Value {
        self.0
    }
}

impl From<serde_json::Value> for GameState {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Card suit. `None` is used for the Bird card and for an unset trump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Color {
    /// No suit.
    #[default]
    None,
    /// Red suit.
    Red,
    /// Yellow suit.
    Yellow,
    /// Green suit.
    Green,
    /// Black suit.
    Black,
}

impl TryFrom<u8> for Color {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::None),
            1 => Ok(Self::Red),
            2 => Ok(Self::Yellow),
            3 => Ok(Self::Green),
            4 => Ok(Self::Black),
            other => Err(format!("unknown color code {other}")),
        }
    }
}

impl From<Color> for u8 {
    fn from(color: Color) -> Self {
        match color {
            Color::None => 0,
            Color::Red => 1,
            Color::Yellow => 2,
            Color::Green => 3,
            Color::Black => 4,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Red => write!(f, "red"),
            Self::Yellow => write!(f, "yellow"),
            Self::Green => write!(f, "green"),
            Self::Black => write!(f, "black"),
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Card {
    /// Suit.
    pub color: Color,
    /// Face value.
    pub value: u8,
}

impl Card {
    /// The Bird card.
    pub const BIRD: Self = Self {
        color: Color::None,
        value: 0,
    };

    /// Returns true if this is the Bird card.
    #[must_use]
    pub fn is_bird(&self) -> bool {
        *self == Self::BIRD
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_bird() {
            write!(f, "bird")
        } else {
            write!(f, "{} {}", self.color, self.value)
        }
    }
}

/// Game state as visible to a single player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibleGameState {
    /// The player's hand.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub hand: Vec<Card>,
    /// Cards currently on the table.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub table: Vec<Card>,
    /// Seat index of the player to act.
    pub current_player: u8,
    /// Trump suit, `Color::None` until chosen.
    pub trump: Color,
    /// Winning bid so far.
    pub bid: i64,
    /// Seat index of the bid winner.
    pub bid_winner: u8,
}

/// Reads a card list the server may send as `null` before any card is dealt.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Card>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Card>>::deserialize(deserializer)?.unwrap_or_default())
}

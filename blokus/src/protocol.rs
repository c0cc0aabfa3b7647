use serde::{Deserialize, Serialize};

use crate::InvalidPlayerNumber;

/// Request for a bot to do something.
///
/// Each request is sent as a single line of JSON.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    /// Request to reset the bot's state for a new game.
    ///
    /// The response should be an [`Okay`].
    NewGame { player: PlayerId },
    /// Request to play the next turn.
    ///
    /// The response should be a [`Move`](crate::Move), serialized as its token.
    /// Responding with the pass token ends the session.
    PlayTurn {
        /// The board in its wire format, see [`Grid::parse()`](crate::Grid::parse).
        board: String,
    },
    /// The bot should shut down.
    Bye,
}

/// Dummy struct for use in bot communication.
///
/// Used to signal an acknowledgement without data.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Okay();

/// The player number assigned by the server, fixed for the whole session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub const BOTH: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    /// 1 or 2.
    pub fn number(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }

    /// 0 or 1, for indexing per-player arrays.
    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = InvalidPlayerNumber;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        match number {
            1 => Ok(PlayerId::One),
            2 => Ok(PlayerId::Two),
            _ => Err(InvalidPlayerNumber(number)),
        }
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> u8 {
        player.number()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "player {}", self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_use_a_type_tag() {
        let req: Request = serde_json::from_str(r#"{"type":"NewGame","player":2}"#).unwrap();
        assert_eq!(
            req,
            Request::NewGame {
                player: PlayerId::Two
            }
        );
        let req: Request =
            serde_json::from_str(r#"{"type":"PlayTurn","board":"..\n.1"}"#).unwrap();
        assert_eq!(
            req,
            Request::PlayTurn {
                board: String::from("..\n.1")
            }
        );
        assert_eq!(serde_json::to_string(&Request::Bye).unwrap(), r#"{"type":"Bye"}"#);
    }

    #[test]
    fn player_numbers_are_validated() {
        assert!(serde_json::from_str::<PlayerId>("3").is_err());
        assert_eq!(serde_json::to_string(&PlayerId::One).unwrap(), "1");
        assert_eq!(PlayerId::One.opponent(), PlayerId::Two);
    }
}

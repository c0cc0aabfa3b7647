use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{MalformedMoveToken, Orientation, Piece, Placement, Position, ShapeKind};

/// The token sent when there is no legal placement. It also ends the session.
pub const PASS_TOKEN: &str = "X000";

/// The outcome of one decision: a placement, or passing the turn.
///
/// On the wire, a move is a 4-character token
/// `<shape letter><orientation 0-7><x><y>`, where the coordinates are
/// single base-36 digits (`0-9`, then `A-Z`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Move {
    Place(Placement),
    Pass,
}

impl Move {
    /// Returns the token for this move.
    ///
    /// Coordinates outside of `0..36` have no digit and are written as `?`,
    /// which no grid of a supported size produces.
    pub fn encode(&self) -> String {
        match self {
            Move::Pass => String::from(PASS_TOKEN),
            Move::Place(Placement { piece, anchor }) => [
                piece.kind().letter(),
                char::from(b'0' + piece.orientation().index()),
                coordinate_digit(anchor.x),
                coordinate_digit(anchor.y),
            ]
            .into_iter()
            .collect(),
        }
    }

    /// Parses a token, the inverse of [`Self::encode()`].
    pub fn decode(token: &str) -> Result<Self, MalformedMoveToken> {
        let chars: Vec<char> = token.chars().collect();
        let &[letter, orientation, x, y] = chars.as_slice() else {
            return Err(MalformedMoveToken::WrongLength {
                token: String::from(token),
            });
        };
        let kind =
            ShapeKind::from_letter(letter).ok_or(MalformedMoveToken::UnknownShape { letter })?;
        if kind == ShapeKind::Pass {
            return if token == PASS_TOKEN {
                Ok(Move::Pass)
            } else {
                Err(MalformedMoveToken::InvalidPass {
                    token: String::from(token),
                })
            };
        }
        let orientation = orientation
            .to_digit(10)
            .and_then(|d| Orientation::new(d as u8).ok())
            .ok_or(MalformedMoveToken::InvalidOrientation { digit: orientation })?;
        let anchor = Position::new(parse_coordinate(x)?, parse_coordinate(y)?);
        Ok(Move::Place(Placement::new(
            Piece::new_unchecked(kind, orientation),
            anchor,
        )))
    }

    pub fn placement(&self) -> Option<&Placement> {
        match self {
            Move::Place(placement) => Some(placement),
            Move::Pass => None,
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Move::Pass)
    }
}

fn coordinate_digit(value: i8) -> char {
    u32::try_from(value)
        .ok()
        .and_then(|v| char::from_digit(v, 36))
        .map_or('?', |c| c.to_ascii_uppercase())
}

fn parse_coordinate(digit: char) -> Result<i8, MalformedMoveToken> {
    // to_digit(36) would also accept lowercase letters
    if !(digit.is_ascii_digit() || digit.is_ascii_uppercase()) {
        return Err(MalformedMoveToken::InvalidCoordinate { digit });
    }
    digit
        .to_digit(36)
        .map(|d| d as i8)
        .ok_or(MalformedMoveToken::InvalidCoordinate { digit })
}

impl From<Placement> for Move {
    fn from(placement: Placement) -> Self {
        Move::Place(placement)
    }
}

impl From<Move> for String {
    fn from(mv: Move) -> String {
        mv.encode()
    }
}

impl TryFrom<String> for Move {
    type Error = MalformedMoveToken;

    fn try_from(token: String) -> Result<Self, Self::Error> {
        Move::decode(&token)
    }
}

impl FromStr for Move {
    type Err = MalformedMoveToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::decode(s)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.encode())
    }
}

/// Shorthand for creating moves from a token.
///
/// This macro is just calling the [`FromStr`] instance of [`Move`].
/// ```
/// # use blokus::{mv, Move, ShapeKind};
/// let placement = *mv!("U034").placement().unwrap();
/// assert_eq!(placement.piece.kind(), ShapeKind::X5);
/// assert_eq!((placement.anchor.x, placement.anchor.y), (3, 4));
/// assert_eq!(mv!("X000"), Move::Pass);
/// ```
#[macro_export]
macro_rules! mv {
    ($token:literal) => {
        <$crate::Move as std::str::FromStr>::from_str($token)
            .expect("Invalid move token given to mv! macro")
    };
}
// The import is for using the macro in other modules
#[allow(unused_imports)]
pub(crate) use mv;

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;

    quickcheck! {
        fn decode_inverts_encode(piece: Piece, x: u8, y: u8) -> bool {
            let anchor = Position::new((x % 36) as i8, (y % 36) as i8);
            let mv = Move::Place(Placement::new(piece, anchor));
            Move::decode(&mv.encode()) == Ok(mv)
        }
    }

    #[test]
    fn tokens_use_uppercase_base36_digits() {
        let placement = Placement::new(
            Piece::from_index(ShapeKind::F5, 6).unwrap(),
            Position::new(10, 14),
        );
        assert_eq!(Move::Place(placement).encode(), "T6AE");
        assert_eq!(mv!("T6AE"), Move::Place(placement));
        assert_eq!(Move::Pass.to_string(), PASS_TOKEN);
    }

    #[test]
    fn malformed_tokens_are_rejected() {
        assert_eq!(
            Move::decode("A00"),
            Err(MalformedMoveToken::WrongLength {
                token: String::from("A00")
            })
        );
        assert_eq!(
            Move::decode("V011"),
            Err(MalformedMoveToken::UnknownShape { letter: 'V' })
        );
        assert_eq!(
            Move::decode("A811"),
            Err(MalformedMoveToken::InvalidOrientation { digit: '8' })
        );
        assert_eq!(
            Move::decode("A0a1"),
            Err(MalformedMoveToken::InvalidCoordinate { digit: 'a' })
        );
        assert_eq!(
            Move::decode("X001"),
            Err(MalformedMoveToken::InvalidPass {
                token: String::from("X001")
            })
        );
        assert!("A0€1".parse::<Move>().is_err());
    }

    #[test]
    fn moves_serialize_as_tokens() {
        assert_eq!(serde_json::to_string(&Move::Pass).unwrap(), r#""X000""#);
        let mv: Move = serde_json::from_str(r#""B155""#).unwrap();
        assert_eq!(mv.to_string(), "B155");
        assert!(serde_json::from_str::<Move>(r#""B9""#).is_err());
    }
}

use std::{fmt, str::FromStr};

use itertools::Itertools;
use thiserror::Error;

use crate::Face;

/// An inner slice, turning in the direction of the face it follows.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Slice {
    /// Between L and R, follows L
    M,
    /// Between U and D, follows D
    E,
    /// Between F and B, follows F
    S,
}

/// A whole-cube rotation axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Follows R
    X,
    /// Follows U
    Y,
    /// Follows F
    Z,
}

impl Slice {
    pub const ALL: [Self; 3] = [Slice::M, Slice::E, Slice::S];
}

impl Axis {
    pub const ALL: [Self; 3] = [Axis::X, Axis::Y, Axis::Z];
}

/// What a move turns.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MoveTarget {
    Face(Face),
    Wide(Face),
    Slice(Slice),
    Rotation(Axis),
}

impl MoveTarget {
    pub const COUNT: usize = 18;

    pub fn all() -> impl Iterator<Item = MoveTarget> {
        Face::ALL
            .into_iter()
            .map(MoveTarget::Face)
            .chain(Face::ALL.into_iter().map(MoveTarget::Wide))
            .chain(Slice::ALL.into_iter().map(MoveTarget::Slice))
            .chain(Axis::ALL.into_iter().map(MoveTarget::Rotation))
    }

    /// Dense index in `0..18`, in the order of [`MoveTarget::all`].
    pub fn index(self) -> usize {
        match self {
            MoveTarget::Face(face) => face as usize,
            MoveTarget::Wide(face) => 6 + face as usize,
            MoveTarget::Slice(slice) => 12 + slice as usize,
            MoveTarget::Rotation(axis) => 15 + axis as usize,
        }
    }

    /// The face whose clockwise sense the target turns in, and which layers
    /// counted inwards from that face take part.
    pub fn layers(self) -> (Face, [bool; 3]) {
        match self {
            MoveTarget::Face(face) => (face, [true, false, false]),
            MoveTarget::Wide(face) => (face, [true, true, false]),
            MoveTarget::Slice(Slice::M) => (Face::L, [false, true, false]),
            MoveTarget::Slice(Slice::E) => (Face::D, [false, true, false]),
            MoveTarget::Slice(Slice::S) => (Face::F, [false, true, false]),
            // x carries Up to Front, so it turns with L
            MoveTarget::Rotation(Axis::X) => (Face::L, [true; 3]),
            MoveTarget::Rotation(Axis::Y) => (Face::U, [true; 3]),
            MoveTarget::Rotation(Axis::Z) => (Face::F, [true; 3]),
        }
    }

    /// 1 for a single layer, 2 for a wide turn, 3 for a rotation.
    pub fn width(self) -> u8 {
        match self {
            MoveTarget::Face(_) | MoveTarget::Slice(_) => 1,
            MoveTarget::Wide(_) => 2,
            MoveTarget::Rotation(_) => 3,
        }
    }
}

impl fmt::Display for MoveTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveTarget::Face(face) => write!(f, "{face}"),
            MoveTarget::Wide(face) => write!(f, "{face}w"),
            MoveTarget::Slice(slice) => write!(f, "{slice:?}"),
            MoveTarget::Rotation(Axis::X) => f.write_str("x"),
            MoveTarget::Rotation(Axis::Y) => f.write_str("y"),
            MoveTarget::Rotation(Axis::Z) => f.write_str("z"),
        }
    }
}

/// Number of clockwise quarter turns.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Amount {
    Quarter = 1,
    Half = 2,
    Inverse = 3,
}

impl Amount {
    pub const ALL: [Self; 3] = [Amount::Quarter, Amount::Half, Amount::Inverse];

    pub fn quarter_turns(self) -> usize {
        self as usize
    }

    pub fn inverse(self) -> Amount {
        match self {
            Amount::Quarter => Amount::Inverse,
            Amount::Half => Amount::Half,
            Amount::Inverse => Amount::Quarter,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            Amount::Quarter => "",
            Amount::Half => "2",
            Amount::Inverse => "'",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("Expected a move but found nothing")]
    Empty,
    #[error("Malformed move token `{token}`")]
    MalformedToken { token: String },
}

/// A single move token such as `R`, `Uw'`, `M2` or `x`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    pub target: MoveTarget,
    pub amount: Amount,
}

impl Move {
    pub fn new(target: MoveTarget, amount: Amount) -> Move {
        Move { target, amount }
    }

    pub fn width(self) -> u8 {
        self.target.width()
    }

    pub fn inverse(self) -> Move {
        Move::new(self.target, self.amount.inverse())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.target, self.amount.suffix())
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        if token.is_empty() {
            return Err(MoveParseError::Empty);
        }

        let malformed = || MoveParseError::MalformedToken {
            token: token.to_owned(),
        };

        let mut rest = token;
        let amount = if let Some(stripped) = rest.strip_suffix('\'') {
            rest = stripped;
            Amount::Inverse
        } else if let Some(stripped) = rest.strip_suffix('2') {
            rest = stripped;
            Amount::Half
        } else {
            Amount::Quarter
        };

        let wide = if let Some(stripped) = rest.strip_suffix('w') {
            rest = stripped;
            true
        } else {
            false
        };

        let target = match rest {
            "M" => MoveTarget::Slice(Slice::M),
            "E" => MoveTarget::Slice(Slice::E),
            "S" => MoveTarget::Slice(Slice::S),
            "x" => MoveTarget::Rotation(Axis::X),
            "y" => MoveTarget::Rotation(Axis::Y),
            "z" => MoveTarget::Rotation(Axis::Z),
            face => {
                let face = face.parse::<Face>().map_err(|()| malformed())?;
                if wide {
                    MoveTarget::Wide(face)
                } else {
                    MoveTarget::Face(face)
                }
            }
        };

        if wide && !matches!(target, MoveTarget::Wide(_)) {
            return Err(malformed());
        }

        Ok(Move::new(target, amount))
    }
}

/// An ordered sequence of moves, written as whitespace separated tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Algorithm {
    moves: Vec<Move>,
}

impl Algorithm {
    pub fn new(moves: Vec<Move>) -> Algorithm {
        Algorithm { moves }
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn push(&mut self, move_: Move) {
        self.moves.push(move_);
    }

    /// Undoes `self`: reversed order with every move inverted.
    pub fn inverse(&self) -> Algorithm {
        self.moves.iter().rev().map(|move_| move_.inverse()).collect()
    }
}

impl From<Vec<Move>> for Algorithm {
    fn from(moves: Vec<Move>) -> Self {
        Algorithm::new(moves)
    }
}

impl FromIterator<Move> for Algorithm {
    fn from_iter<T: IntoIterator<Item = Move>>(iter: T) -> Self {
        Algorithm::new(iter.into_iter().collect())
    }
}

impl Extend<Move> for Algorithm {
    fn extend<T: IntoIterator<Item = Move>>(&mut self, iter: T) {
        self.moves.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Algorithm {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.moves.iter().join(" "))
    }
}

impl FromStr for Algorithm {
    type Err = MoveParseError;

    /// Fails on the first malformed token. An empty or blank string is the
    /// empty algorithm.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace().map(str::parse).collect()
    }
}
